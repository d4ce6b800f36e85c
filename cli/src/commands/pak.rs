use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum PakCommands {
    /// Unpack a .PAK archive's directory into a destination directory
    Unpack {
        /// Input .PAK file
        src: PathBuf,
        /// Output directory
        dst: PathBuf,
    },
}

pub fn handle(cmd: PakCommands) -> Result<()> {
    match cmd {
        PakCommands::Unpack { src, dst } => pak_unpack(&src, &dst),
    }
}

fn pak_unpack(src: &std::path::Path, dst_dir: &std::path::Path) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let entries = pak::parse_directory(&data)?;
    let records = pak::extract(&data, &entries);

    fs::create_dir_all(dst_dir)?;
    for record in &records {
        fs::write(dst_dir.join(&record.name), &record.data)?;
    }

    println!("Unpacked PAK to {dst_dir:?} ({} entries)", records.len());
    Ok(())
}
