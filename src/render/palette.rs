// palette.rs - d3 Category10 plus the fixed marker colors
use plotters::style::RGBColor;

pub const CATEGORY10: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

pub const DEFAULT_POINT_COLOR: RGBColor = RGBColor(0, 0, 0);
pub const CENTROID_COLOR: RGBColor = RGBColor(0xff, 0, 0);

/// Fill for a point assigned to `cluster` when `centroid_count` centroids
/// exist. Anything that is not a valid centroid index with a palette entry
/// gets the default color.
pub fn cluster_color(cluster: Option<i64>, centroid_count: usize) -> RGBColor {
    cluster
        .and_then(|c| usize::try_from(c).ok())
        .filter(|&c| c < centroid_count)
        .and_then(|c| CATEGORY10.get(c).copied())
        .unwrap_or(DEFAULT_POINT_COLOR)
}
