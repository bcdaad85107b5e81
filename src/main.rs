use std::path::PathBuf;

use anyhow::{Context, Result};

use rusty_heatmap::color::Colormap;
use rusty_heatmap::data::loader::load_matrix;
use rusty_heatmap::render::heatmap;

/// Load a delimited matrix, render it as a heat map, write the image.
///
/// Usage: `rusty-heatmap [INPUT] [OUTPUT]`
/// Defaults: `skyCoeffs.csv`, and the input path with a `.png` extension.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let input: PathBuf = args
        .next()
        .map(Into::into)
        .unwrap_or_else(|| PathBuf::from("skyCoeffs.csv"));
    let output: PathBuf = args
        .next()
        .map(Into::into)
        .unwrap_or_else(|| input.with_extension("png"));

    let matrix =
        load_matrix(&input).with_context(|| format!("loading {}", input.display()))?;
    log::info!(
        "Loaded {}x{} matrix from {}",
        matrix.rows(),
        matrix.cols(),
        input.display()
    );

    let image = heatmap::render(&matrix, &Colormap::default());
    heatmap::save(&image, &output)
        .with_context(|| format!("writing {}", output.display()))?;
    log::info!(
        "Wrote {}x{} heat map to {}",
        image.width(),
        image.height(),
        output.display()
    );

    Ok(())
}
