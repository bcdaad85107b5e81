use std::path::PathBuf;

use anyhow::{Context, Result};

use rusty_heatmap::data::writer::write_matrix;
use rusty_heatmap::sky::model::{HdrSky, SimpleSky, Sky};
use rusty_heatmap::sky::project::{coefficient_matrix, project};

/// Spherical-harmonic bands; the output grid is BANDS x BANDS.
const BANDS: usize = 10;
const SAMPLES: usize = 100;
/// Fixed sampler seed so reruns write identical coefficients.
const SEED: u64 = 42;

/// Project a sky model onto the SH basis and write the coefficient grid
/// as delimited text.
///
/// Usage: `generate_sky [OUTPUT] [HDR_ENV]`
/// Defaults: `skyCoeffs.csv`, sampling the built-in vertical-gradient
/// sky unless an equirectangular HDR environment map is given.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let output: PathBuf = args
        .next()
        .map(Into::into)
        .unwrap_or_else(|| PathBuf::from("skyCoeffs.csv"));

    let sky: Box<dyn Sky> = match args.next() {
        Some(env_path) => {
            let env_path = PathBuf::from(env_path);
            let hdr = HdrSky::open(&env_path)
                .with_context(|| format!("opening environment map {}", env_path.display()))?;
            log::info!("Sampling environment map {}", env_path.display());
            Box::new(hdr)
        }
        None => Box::new(SimpleSky),
    };

    let coeffs = project(sky.as_ref(), BANDS, SAMPLES, SEED);
    let matrix = coefficient_matrix(&coeffs, BANDS)?;
    write_matrix(&matrix, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "Wrote {}x{} coefficient grid ({} sphere samples) to {}",
        matrix.rows(),
        matrix.cols(),
        SAMPLES,
        output.display()
    );

    Ok(())
}
