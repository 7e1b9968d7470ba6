// plot.rs - view state to shapes to SVG
use super::error::RenderError;
use super::palette::{CENTROID_COLOR, cluster_color};
use crate::view::ViewState;
use plotters::prelude::{Circle as Marker, Color, IntoDrawingArea, RGBColor, SVGBackend};
use std::path::Path;

pub const POINT_RADIUS: f64 = 5.0;
pub const CENTROID_RADIUS: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    DataPoint,
    Centroid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub kind: ShapeKind,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: RGBColor,
}

/// A fully drawn frame. Shapes are in paint order: points, then centroids.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub size: PlotSize,
    pub shapes: Vec<Circle>,
}

/// Draw the whole view from scratch.
///
/// Assignments are matched to points by position; a point with no assignment,
/// or one that does not name an existing centroid, is drawn in the default
/// color.
pub fn render(state: &ViewState, size: PlotSize) -> Plot {
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let centroids = state.centroids();
    let clusters = state.clusters();

    let points = state.dataset().iter().enumerate().map(|(i, p)| Circle {
        kind: ShapeKind::DataPoint,
        cx: p.x * w,
        cy: p.y * h,
        r: POINT_RADIUS,
        fill: cluster_color(clusters.get(i).copied(), centroids.len()),
    });

    let markers = centroids.iter().map(|c| Circle {
        kind: ShapeKind::Centroid,
        cx: c.x * w,
        cy: c.y * h,
        r: CENTROID_RADIUS,
        fill: CENTROID_COLOR,
    });

    Plot {
        size,
        shapes: points.chain(markers).collect(),
    }
}

impl Plot {
    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind == kind).count()
    }

    /// Serialize to a standalone SVG document, one filled circle per shape at
    /// its pixel position (rounded to whole pixels).
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, (self.size.width, self.size.height))
                .into_drawing_area();
            for shape in &self.shapes {
                root.draw(&Marker::new(
                    (shape.cx.round() as i32, shape.cy.round() as i32),
                    shape.r.round() as i32,
                    shape.fill.filled(),
                ))?;
            }
            root.present()?;
        }
        Ok(buf)
    }

    pub fn write_svg(&self, path: &Path) -> Result<(), RenderError> {
        std::fs::write(path, self.to_svg()?)?;
        Ok(())
    }
}
