use std::path::Path;

use image::{Rgb, RgbImage};

use crate::color::Colormap;
use crate::data::model::Matrix;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Heat-map rasterization
// ---------------------------------------------------------------------------

/// Rasterize a matrix into an image, one pixel per cell.
///
/// Cell values are normalized between the matrix minimum and maximum
/// before the colormap lookup. When the range is degenerate (all cells
/// equal) every cell normalizes to 0.0.
///
/// Pure transformation: the returned buffer is owned by the caller and
/// no state survives the call, so repeated renders are independent.
pub fn render(matrix: &Matrix, colormap: &Colormap) -> RgbImage {
    let (min, max) = matrix.value_range();
    let range = max - min;

    RgbImage::from_fn(matrix.cols() as u32, matrix.rows() as u32, |x, y| {
        let v = matrix.get(y as usize, x as usize);
        let t = if range.abs() < f64::EPSILON {
            0.0
        } else {
            ((v - min) / range) as f32
        };
        let c = colormap.sample(t);
        Rgb([c.red, c.green, c.blue])
    })
}

/// Encode the image and write it to disk, overwriting any existing file.
/// The raster format is picked from the output path's extension.
pub fn save(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn image_dimensions_match_the_matrix() {
        let m = matrix(vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        let img = render(&m, &Colormap::viridis());
        assert_eq!((img.width(), img.height()), (3, 2));
    }

    #[test]
    fn min_and_max_cells_get_the_gradient_ends() {
        let cmap = Colormap::viridis();
        let m = matrix(vec![vec![-5.0, 10.0]]);
        let img = render(&m, &cmap);

        let lo = cmap.sample(0.0);
        let hi = cmap.sample(1.0);
        assert_eq!(img.get_pixel(0, 0).0, [lo.red, lo.green, lo.blue]);
        assert_eq!(img.get_pixel(1, 0).0, [hi.red, hi.green, hi.blue]);
    }

    #[test]
    fn constant_matrix_renders_uniformly_at_the_gradient_start() {
        let cmap = Colormap::viridis();
        let m = matrix(vec![vec![7.0, 7.0], vec![7.0, 7.0]]);
        let img = render(&m, &cmap);

        let lo = cmap.sample(0.0);
        for pixel in img.pixels() {
            assert_eq!(pixel.0, [lo.red, lo.green, lo.blue]);
        }
    }

    #[test]
    fn rendering_twice_is_identical() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let cmap = Colormap::viridis();
        assert_eq!(
            render(&m, &cmap).into_raw(),
            render(&m, &cmap).into_raw()
        );
    }

    #[test]
    fn save_writes_a_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let img = render(&m, &Colormap::viridis());
        save(&img, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
    }
}
