//! Registry index updater CLI entrypoint.
//!
//! Loads the registry index, records the supplied release, and writes the
//! index back atomically. The index must already exist; any load or write
//! failure is fatal and leaves the file untouched.

use clap::Parser;
use modreg::cli::UpdateArgs;
use modreg::error::Result;
use modreg::index::Release;
use modreg::index_store::{load_index, save_index};
use std::io::Write;

fn main() {
    let args = UpdateArgs::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    if let Err(err) = run(&args, &mut stdout) {
        if writeln!(stderr, "{err}").is_err() {
            // Best-effort diagnostics; ignore write failures.
        }
        std::process::exit(1);
    }
}

fn run(args: &UpdateArgs, out: &mut dyn Write) -> Result<()> {
    let mut index = load_index(&args.index_path)?;

    let release = Release {
        module_id: args.module_id.clone(),
        version: args.version.clone(),
        module_type: args.module_type,
        artifact_file: args.artifact_name.clone(),
        artifact_sha256: args.artifact_hash.clone(),
    };
    index.record(&release);

    save_index(&args.index_path, &index)?;
    writeln!(out, "Updated index: {} v{}", release.module_id, release.version)?;
    Ok(())
}
