use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum EmcTextCommands {
    /// Extract an EMC2 file's TEXT string table to JSON
    ToJson {
        /// Input EMC2 file
        src: PathBuf,
        /// Output JSON file
        dst: PathBuf,
    },
}

pub fn handle(cmd: EmcTextCommands) -> Result<()> {
    match cmd {
        EmcTextCommands::ToJson { src, dst } => emc_text_to_json(&src, &dst),
    }
}

fn emc_text_to_json(src: &std::path::Path, dst: &std::path::Path) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let source_name = src
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extracted = emctext::extract(&data, &source_name)?;
    imageio::write_json(dst, &extracted)?;

    println!(
        "Extracted {} strings from {:?} to {dst:?}",
        extracted.strings.len(),
        src
    );
    Ok(())
}
