use std::f64::consts::{PI, TAU};

use super::harmonics::real_sh;
use super::model::{Dir3, Sky};
use crate::data::model::Matrix;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Deterministic sphere sampling
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**).
struct SphereRng {
    state: [u64; 4],
}

impl SphereRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SphereRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniformly distributed point on the unit sphere, as (theta, phi).
    fn next_spherical(&mut self) -> (f64, f64) {
        let u = self.next_f64();
        let v = self.next_f64();
        let theta = 2.0 * (1.0 - u).sqrt().acos();
        let phi = TAU * v;
        (theta, phi)
    }
}

// ---------------------------------------------------------------------------
// Monte-Carlo SH projection
// ---------------------------------------------------------------------------

/// Project a sky onto the first `bands²` real SH basis functions.
///
/// Returns one RGB coefficient per basis function, ordered by (l, m)
/// with m running from -l to l inside each band. The estimator weights
/// every sample by `4π / samples`, the uniform-sphere measure. Equal
/// seeds give bit-identical results.
pub fn project(sky: &dyn Sky, bands: usize, samples: usize, seed: u64) -> Vec<[f64; 3]> {
    let coeff_count = bands * bands;
    let mut acc = vec![[0.0f64; 3]; coeff_count];
    let mut basis = vec![0.0f64; coeff_count];
    let mut rng = SphereRng::new(seed);

    for _ in 0..samples {
        let (theta, phi) = rng.next_spherical();
        let radiance = sky.radiance(Dir3::from_spherical(theta as f32, phi as f32));

        let mut idx = 0;
        for l in 0..bands as u32 {
            for m in -(l as i32)..=(l as i32) {
                basis[idx] = real_sh(l, m, theta, phi);
                idx += 1;
            }
        }

        for (a, &y) in acc.iter_mut().zip(basis.iter()) {
            a[0] += radiance.red as f64 * y;
            a[1] += radiance.green as f64 * y;
            a[2] += radiance.blue as f64 * y;
        }
    }

    let weight = 4.0 * PI / samples as f64;
    for a in &mut acc {
        a[0] *= weight;
        a[1] *= weight;
        a[2] *= weight;
    }
    acc
}

/// Collapse RGB coefficients to their channel mean and lay them out as a
/// `bands × bands` grid, row-major over the flattened (l, m) index.
pub fn coefficient_matrix(coeffs: &[[f64; 3]], bands: usize) -> Result<Matrix> {
    let values = coeffs
        .iter()
        .map(|c| (c[0] + c[1] + c[2]) / 3.0)
        .collect();
    Matrix::from_vec(bands, bands, values)
}
