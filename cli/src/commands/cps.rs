use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CpsCommands {
    /// Decode a CPS image to PNG
    ToPng {
        /// Input CPS file
        src: PathBuf,
        /// Output PNG file
        dst: PathBuf,
        /// Explicit width, for assets with no canonical 320x200 geometry
        #[arg(long)]
        width: Option<u32>,
        /// Explicit height, for assets with no canonical 320x200 geometry
        #[arg(long)]
        height: Option<u32>,
        /// External COL palette (raw RGB triplets), overrides any embedded palette
        #[arg(long)]
        palette: Option<PathBuf>,
    },
}

pub fn handle(cmd: CpsCommands) -> Result<()> {
    match cmd {
        CpsCommands::ToPng {
            src,
            dst,
            width,
            height,
            palette,
        } => cps_to_png(&src, &dst, width, height, palette.as_deref()),
    }
}

fn cps_to_png(
    src: &std::path::Path,
    dst: &std::path::Path,
    width: Option<u32>,
    height: Option<u32>,
    palette_path: Option<&std::path::Path>,
) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let external_palette = palette_path
        .map(fs::read)
        .transpose()
        .with_context(|| "reading external palette")?;

    let image = cps::decode(
        &data,
        width,
        height,
        width.is_some() || height.is_some(),
        external_palette.as_deref(),
    )?;

    let palette_bytes = image.palette.as_ref().map(|p| palette::pad_to_768(p));
    imageio::write_indexed_png(
        dst,
        image.width,
        image.height,
        &image.pixels,
        palette_bytes.as_deref(),
        None,
    )?;

    println!("Decoded CPS to {dst:?} ({}x{})", image.width, image.height);
    Ok(())
}
