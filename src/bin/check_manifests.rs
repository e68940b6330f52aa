//! Manifest validator CLI entrypoint.
//!
//! Loads the registry schema, discovers (or is pointed at) manifests, runs
//! the validation pass over each, and prints per-manifest results. Exits
//! zero only when at least one manifest was checked and all passed.

use clap::Parser;
use modreg::cli::CheckArgs;
use modreg::discovery::find_manifests;
use modreg::error::{RegistryError, Result};
use modreg::report::{ManifestReport, RunSummary};
use modreg::schema::ManifestSchema;
use modreg::validator::validate_manifest;
use std::io::Write;

fn main() {
    let args = CheckArgs::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let exit_code = exit_code_for_run(run(&args, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(args: &CheckArgs, out: &mut dyn Write) -> Result<RunSummary> {
    let schema = ManifestSchema::load(&args.schema)?;

    let manifests = match &args.manifest {
        Some(path) => vec![path.clone()],
        None => find_manifests(&args.modules_dir),
    };
    if manifests.is_empty() {
        return Err(RegistryError::NoManifestsFound);
    }

    let mut summary = RunSummary::default();
    for path in manifests {
        let findings = validate_manifest(&path, &schema);
        let report = ManifestReport::new(path, findings);
        writeln!(out, "{}", report.render())?;
        summary.absorb(&report);
    }

    Ok(summary)
}

fn exit_code_for_run(result: Result<RunSummary>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(summary) if summary.all_passed() => 0,
        Ok(_) => 1,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort diagnostics; ignore write failures.
    }
}
