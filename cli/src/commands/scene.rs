use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum SceneCommands {
    /// Read a scene .DAT's draw-layer table, sprite defs and anim scripts to JSON
    ToJson {
        /// Input scene .DAT file
        src: PathBuf,
        /// Output JSON file
        dst: PathBuf,
    },
}

pub fn handle(cmd: SceneCommands) -> Result<()> {
    match cmd {
        SceneCommands::ToJson { src, dst } => scene_to_json(&src, &dst),
    }
}

fn scene_to_json(src: &std::path::Path, dst: &std::path::Path) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let scene_name = src
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let meta = scenemeta::parse(&data, &scene_name)?;
    imageio::write_json(dst, &meta)?;

    println!(
        "Read scene metadata to {dst:?} ({} sprite defs, {} anims)",
        meta.sprite_defs.len(),
        meta.anims.len()
    );
    Ok(())
}
