pub mod error;
pub mod palette;
pub mod plot;

#[cfg(test)]
mod tests;

pub use error::RenderError;
pub use palette::{CATEGORY10, CENTROID_COLOR, DEFAULT_POINT_COLOR, cluster_color};
pub use plot::{Circle, Plot, PlotSize, ShapeKind, render};
