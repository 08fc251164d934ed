use crate::application::Geometry;

/// Application pixels per Monitor grid unit, horizontally.
pub const UNIT_WIDTH: u32 = 33;
/// Application pixels per Monitor grid unit, vertically.
pub const UNIT_HEIGHT: u32 = 14;

/// Scales a Monitor grid rectangle into application pixel space.
///
/// Pixel values are widened to `u64`, so every `u32` grid value scales exactly.
pub fn to_app_geometry(x: u32, y: u32, width: u32, height: u32) -> Geometry {
    Geometry {
        x: scale(x, UNIT_WIDTH),
        y: scale(y, UNIT_HEIGHT),
        z: 0,
        width: scale(width, UNIT_WIDTH),
        height: scale(height, UNIT_HEIGHT),
    }
}

fn scale(grid: u32, unit: u32) -> u64 {
    u64::from(grid) * u64::from(unit)
}
