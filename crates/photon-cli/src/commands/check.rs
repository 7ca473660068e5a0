use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::Style;
use photon_core::security::{check_file_size, validate_path};

#[derive(Args)]
pub struct CheckArgs {
    /// Path to run the validation gates against
    pub path: PathBuf,
}

/// Run the same gates the viewer applies before a load, in the same
/// order, and report each verdict.
pub fn run(args: &CheckArgs) -> Result<()> {
    let ok = Style::new().green().bold();
    let rejected = Style::new().red().bold();

    if let Err(err) = validate_path(&args.path) {
        println!("{} {err}", rejected.apply_to("rejected:"));
        bail!("path validation failed");
    }
    println!("{} path accepted", ok.apply_to("ok:"));

    let meta = match fs::metadata(&args.path) {
        Ok(meta) => meta,
        Err(err) => {
            println!("{} cannot stat: {err}", rejected.apply_to("rejected:"));
            bail!("stat failed");
        }
    };

    if let Err(err) = check_file_size(meta.len() as i64) {
        println!(
            "{} {err} ({} bytes)",
            rejected.apply_to("rejected:"),
            meta.len()
        );
        bail!("size check failed");
    }
    println!(
        "{} size within bounds ({} bytes)",
        ok.apply_to("ok:"),
        meta.len()
    );

    Ok(())
}
