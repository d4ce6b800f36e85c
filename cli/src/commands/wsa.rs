use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum WsaCommands {
    /// Decode a WSA animation to a sequence of PNG frames
    ToPng {
        /// Input WSA file
        src: PathBuf,
        /// Output directory for numbered frame PNGs
        dst: PathBuf,
        /// External COL palette (raw RGB triplets)
        #[arg(long)]
        palette: Option<PathBuf>,
        /// Palette index rendered fully transparent
        #[arg(long)]
        transparent_index: Option<u8>,
    },
}

pub fn handle(cmd: WsaCommands) -> Result<()> {
    match cmd {
        WsaCommands::ToPng {
            src,
            dst,
            palette,
            transparent_index,
        } => wsa_to_png(&src, &dst, palette.as_deref(), transparent_index),
    }
}

fn wsa_to_png(
    src: &std::path::Path,
    dst_dir: &std::path::Path,
    palette_path: Option<&std::path::Path>,
    transparent_index: Option<u8>,
) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let container = wsa::parse(&data)?;

    let palette_bytes = palette_path
        .map(fs::read)
        .transpose()
        .with_context(|| "reading external palette")?
        .map(|raw| palette::pad_to_768(&palette::decode(&raw)));

    fs::create_dir_all(dst_dir)?;
    let frames = wsa::decode_frames(&container);
    for (i, frame) in frames.iter().enumerate() {
        let path = dst_dir.join(format!("frame_{i:04}.png"));
        imageio::write_indexed_png(
            &path,
            container.width as u32,
            container.height as u32,
            frame,
            palette_bytes.as_deref(),
            transparent_index,
        )?;
    }

    println!("Decoded WSA to {dst_dir:?} ({} frames)", frames.len());
    Ok(())
}
