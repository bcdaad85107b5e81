/// Rendering layer: rasterize a matrix through a colormap and encode it.

pub mod heatmap;
