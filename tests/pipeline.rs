//! End-to-end pipeline tests: delimited text in, raster image out.

use std::fs;
use std::path::Path;

use rusty_heatmap::color::Colormap;
use rusty_heatmap::data::loader::load_matrix;
use rusty_heatmap::data::writer::write_matrix;
use rusty_heatmap::render::heatmap;
use rusty_heatmap::sky::model::SimpleSky;
use rusty_heatmap::sky::project::{coefficient_matrix, project};

fn run_pipeline(input: &Path, output: &Path) {
    let matrix = load_matrix(input).unwrap();
    let image = heatmap::render(&matrix, &Colormap::default());
    heatmap::save(&image, output).unwrap();
}

#[test]
fn two_by_two_input_renders_a_two_by_two_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("skyCoeffs.csv");
    let output = dir.path().join("skyCoeffs.png");
    fs::write(&input, "1, 2\n3, 4\n").unwrap();

    let matrix = load_matrix(&input).unwrap();
    assert_eq!((matrix.rows(), matrix.cols()), (2, 2));
    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(matrix.get(1, 1), 4.0);

    let image = heatmap::render(&matrix, &Colormap::default());
    assert_eq!((image.width(), image.height()), (2, 2));

    heatmap::save(&image, &output).unwrap();
    let decoded = image::open(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (2, 2));
}

#[test]
fn repeated_runs_write_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("grid.csv");
    fs::write(&input, "0.5, 1.5, -2\n7, 0, 3.25\n").unwrap();

    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");
    run_pipeline(&input, &first);
    run_pipeline(&input, &second);

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn save_overwrites_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("grid.csv");
    let output = dir.path().join("out.png");
    fs::write(&input, "1, 2\n3, 4\n").unwrap();
    fs::write(&output, b"stale contents").unwrap();

    run_pipeline(&input, &output);

    let decoded = image::open(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (2, 2));
}

#[test]
fn generated_coefficients_feed_the_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("skyCoeffs.csv");
    let png = dir.path().join("skyCoeffs.png");

    let coeffs = project(&SimpleSky, 10, 100, 42);
    let matrix = coefficient_matrix(&coeffs, 10).unwrap();
    write_matrix(&matrix, &csv).unwrap();

    let reloaded = load_matrix(&csv).unwrap();
    assert_eq!(reloaded, matrix);

    let image = heatmap::render(&reloaded, &Colormap::default());
    heatmap::save(&image, &png).unwrap();

    let decoded = image::open(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (10, 10));
}
