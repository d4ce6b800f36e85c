use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum MscCommands {
    /// Decode an MSC image to PNG (a CPS with 320-wide canonical geometry)
    ToPng {
        /// Input MSC file
        src: PathBuf,
        /// Output PNG file
        dst: PathBuf,
        /// External COL palette (raw RGB triplets), overrides any embedded palette
        #[arg(long)]
        palette: Option<PathBuf>,
    },
}

pub fn handle(cmd: MscCommands) -> Result<()> {
    match cmd {
        MscCommands::ToPng {
            src,
            dst,
            palette,
        } => msc_to_png(&src, &dst, palette.as_deref()),
    }
}

fn msc_to_png(
    src: &std::path::Path,
    dst: &std::path::Path,
    palette_path: Option<&std::path::Path>,
) -> Result<()> {
    let data = fs::read(src).with_context(|| format!("reading {src:?}"))?;
    let external_palette = palette_path
        .map(fs::read)
        .transpose()
        .with_context(|| "reading external palette")?;

    let image = cps::decode_msc(&data, external_palette.as_deref())?;

    let palette_bytes = image.palette.as_ref().map(|p| palette::pad_to_768(p));
    imageio::write_indexed_png(
        dst,
        image.width,
        image.height,
        &image.pixels,
        palette_bytes.as_deref(),
        None,
    )?;

    println!("Decoded MSC to {dst:?} ({}x{})", image.width, image.height);
    Ok(())
}
