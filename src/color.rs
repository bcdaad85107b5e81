use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Gradient stop tables
// ---------------------------------------------------------------------------

/// Viridis control points, sampled at nine evenly spaced positions.
const VIRIDIS: [[f32; 3]; 9] = [
    [0.2667, 0.0039, 0.3294],
    [0.2784, 0.1765, 0.4824],
    [0.2314, 0.3216, 0.5451],
    [0.1725, 0.4471, 0.5569],
    [0.1294, 0.5686, 0.5490],
    [0.1569, 0.6824, 0.5020],
    [0.3686, 0.7882, 0.3843],
    [0.6784, 0.8627, 0.1882],
    [0.9922, 0.9059, 0.1451],
];

const GRAYSCALE: [[f32; 3]; 2] = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

// ---------------------------------------------------------------------------
// Colormap: scalar in [0, 1] → color
// ---------------------------------------------------------------------------

/// A sequential color gradient sampled over the closed interval [0, 1].
///
/// Stops are stored as sRGB and interpolated piecewise-linearly in
/// linear RGB.
#[derive(Debug, Clone)]
pub struct Colormap {
    name: &'static str,
    stops: Vec<Srgb<f32>>,
}

impl Colormap {
    fn from_stops(name: &'static str, table: &[[f32; 3]]) -> Self {
        let stops = table
            .iter()
            .map(|&[r, g, b]| Srgb::new(r, g, b))
            .collect();
        Colormap { name, stops }
    }

    /// The default gradient, dark purple through green to yellow.
    pub fn viridis() -> Self {
        Self::from_stops("viridis", &VIRIDIS)
    }

    /// Black to white.
    pub fn grayscale() -> Self {
        Self::from_stops("grayscale", &GRAYSCALE)
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Look up the color for a normalized value.
    ///
    /// Out-of-range input clamps to the gradient ends; non-finite input
    /// maps to the start.
    pub fn sample(&self, t: f32) -> Srgb<u8> {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        let last = self.stops.len() - 1;
        let scaled = t * last as f32;
        let idx = (scaled.floor() as usize).min(last - 1);
        let frac = scaled - idx as f32;

        let a: LinSrgb<f32> = self.stops[idx].into_linear();
        let b: LinSrgb<f32> = self.stops[idx + 1].into_linear();
        Srgb::<f32>::from_linear(a.mix(b, frac)).into_format()
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::viridis()
    }
}
