//! Trigger-zone geometry
//!
//! Pure functions that classify a pointer position against the configured
//! edge zones and the panels' on-screen bounds. Coordinates are logical
//! pixels with the origin at the viewport's top-left corner.

use crate::panel::PanelSide;

/// A pointer position in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are real numbers (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x
            && pt.x < self.x + self.width
            && pt.y >= self.y
            && pt.y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Size of the application viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Pointer is inside the left edge band
pub fn is_in_left_zone(pointer_x: f64, left_trigger_distance: f64) -> bool {
    pointer_x < left_trigger_distance
}

/// Pointer is inside the right edge band
pub fn is_in_right_zone(pointer_x: f64, window_width: f64, right_trigger_distance: f64) -> bool {
    pointer_x > window_width - right_trigger_distance
}

/// Pointer is inside the trigger band for `side`
pub fn is_in_zone(side: PanelSide, pointer_x: f64, window_width: f64, trigger_distance: f64) -> bool {
    match side {
        PanelSide::Left => is_in_left_zone(pointer_x, trigger_distance),
        PanelSide::Right => is_in_right_zone(pointer_x, window_width, trigger_distance),
    }
}

/// Pointer is over the panel's container
///
/// A collapsed panel reports empty or absent bounds and never contains the
/// pointer.
pub fn is_within_panel(pointer: Point, panel_bounds: Option<Rect>) -> bool {
    match panel_bounds {
        Some(bounds) if !bounds.is_empty() => bounds.contains(pointer),
        _ => false,
    }
}
