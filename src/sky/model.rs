use std::f32::consts::{PI, TAU};
use std::path::Path;

use image::Rgb32FImage;
use palette::{LinSrgb, Mix};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Directions on the unit sphere
// ---------------------------------------------------------------------------

/// A unit direction vector, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dir3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Dir3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Dir3 { x, y, z }
    }

    /// Direction from spherical coordinates: theta is the polar angle
    /// from +y, phi the azimuth around it.
    pub fn from_spherical(theta: f32, phi: f32) -> Self {
        Dir3 {
            x: phi.cos() * theta.sin(),
            y: theta.cos(),
            z: phi.sin() * theta.sin(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sky radiance models
// ---------------------------------------------------------------------------

/// A sky: linear RGB radiance arriving from a direction.
pub trait Sky {
    fn radiance(&self, dir: Dir3) -> LinSrgb<f32>;
}

/// Constant radiance over the whole sphere.
#[derive(Debug, Clone, Copy)]
pub struct UniformSky {
    pub color: LinSrgb<f32>,
}

impl Sky for UniformSky {
    fn radiance(&self, _dir: Dir3) -> LinSrgb<f32> {
        self.color
    }
}

/// Vertical gradient from white at the nadir to light blue at the zenith.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSky;

impl Sky for SimpleSky {
    fn radiance(&self, dir: Dir3) -> LinSrgb<f32> {
        let t = (dir.y + 1.0) * 0.5;
        let white = LinSrgb::new(1.0, 1.0, 1.0);
        let blue = LinSrgb::new(0.5, 0.7, 1.0);
        white.mix(blue, t)
    }
}

/// Maps the direction vector itself onto RGB. Useful for checking the
/// orientation of the sampling and projection stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionSky;

impl Sky for DirectionSky {
    fn radiance(&self, dir: Dir3) -> LinSrgb<f32> {
        LinSrgb::new(
            (dir.x + 1.0) * 0.5,
            (dir.y + 1.0) * 0.5,
            (dir.z + 1.0) * 0.5,
        )
    }
}

// ---------------------------------------------------------------------------
// HDR environment map
// ---------------------------------------------------------------------------

/// An equirectangular HDR environment map with optional azimuthal and
/// polar offsets.
pub struct HdrSky {
    pixels: Rgb32FImage,
    offset_x: f32,
    offset_y: f32,
}

impl HdrSky {
    /// Decode an environment map from disk (Radiance `.hdr` and any
    /// other format the image crate was built with).
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_offsets(path, 0.0, 0.0)
    }

    pub fn with_offsets(path: &Path, offset_x: f32, offset_y: f32) -> Result<Self> {
        let pixels = image::open(path)?.to_rgb32f();
        Ok(HdrSky {
            pixels,
            offset_x,
            offset_y,
        })
    }
}

impl Sky for HdrSky {
    fn radiance(&self, dir: Dir3) -> LinSrgb<f32> {
        let mut phi = dir.z.atan2(dir.x);
        if phi < 0.0 {
            phi += TAU;
        }
        phi += self.offset_x;
        if phi > TAU {
            phi -= TAU;
        }

        let mut theta = dir.y.clamp(-1.0, 1.0).acos();
        theta += self.offset_y;
        if theta > PI {
            theta -= PI;
        }

        let (width, height) = self.pixels.dimensions();
        // Clamp so u = 1.0 / v = 1.0 land on the last texel.
        let px = ((phi / TAU * width as f32) as u32).min(width - 1);
        let py = ((theta / PI * height as f32) as u32).min(height - 1);

        let p = self.pixels.get_pixel(px, py);
        LinSrgb::new(p.0[0], p.0[1], p.0[2])
    }
}
