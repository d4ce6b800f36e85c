use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum EmcCommands {
    /// Statically trace an EMC2 program and emit discovered draw/drop calls as JSON
    ToJson {
        /// Input EMC2 file
        src: PathBuf,
        /// Output JSON file
        dst: PathBuf,
    },
}

pub fn handle(cmd: EmcCommands) -> Result<()> {
    match cmd {
        EmcCommands::ToJson { src, dst } => emc_to_json(&src, &dst),
    }
}

fn emc_to_json(src: &std::path::Path, dst: &std::path::Path) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let program = emc::load_program(&data)?;
    let result = emc::trace(&program, emc::DEFAULT_STEP_LIMIT);

    imageio::write_json(dst, &result)?;
    println!(
        "Traced EMC2 to {dst:?} ({} scene shapes, {} scene anim shapes, {} item shapes)",
        result.scene_shapes.len(),
        result.scene_anim_shapes.len(),
        result.item_shapes.len()
    );
    Ok(())
}
