use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use clap::Args;
use photon_core::metadata::{extract_metadata, format_file_size};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let Some(meta) = extract_metadata(&args.file) else {
        bail!("path failed validation: {}", args.file.display());
    };

    println!("File:        {}", meta.filename);
    println!("Path:        {}", meta.filepath);
    println!("Format:      {}", meta.format);
    println!("Dimensions:  {}x{}", meta.width, meta.height);
    println!("Size:        {}", format_file_size(meta.file_size));
    println!("Color depth: {} bpp", meta.bits_per_pixel);
    println!("Created:     {}", format_time(meta.created));
    println!("Modified:    {}", format_time(meta.modified));

    Ok(())
}

fn format_time(time: Option<DateTime<Local>>) -> String {
    match time {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".into(),
    }
}
