/// Sky-coefficient generation: project a sky radiance model onto a real
/// spherical-harmonic basis.
///
/// Architecture:
/// ```text
///       ┌──────────┐
///       │  model    │  Sky trait: direction → radiance
///       └──────────┘
///            │
///            ▼
///       ┌──────────┐
///       │ harmonics │  real SH basis functions Y(l, m)
///       └──────────┘
///            │
///            ▼
///       ┌──────────┐
///       │  project  │  Monte-Carlo projection → coefficient Matrix
///       └──────────┘
/// ```

pub mod harmonics;
pub mod model;
pub mod project;
