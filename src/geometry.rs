//! Pointer math and dial layout.
//!
//! Everything in here is pure. The screen frame is y-down with the origin at
//! the dial's center. Angles are radians in `[0, 2π)`, zero at 12 o'clock,
//! increasing clockwise.

use std::f32::consts::TAU;

/// Stroke width of the background ring. The one measurement that is not
/// proportional to the dial's size.
const RING_WIDTH: f32 = 20.0;

/// A 2D offset from the dial's center, in the y-down screen frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Convert a pointer offset into a dial angle.
///
/// The vertical axis is flipped first so the math happens in a y-up frame,
/// and the `atan2` arguments are swapped relative to the usual `(y, x)` order
/// to move the zero reference from 3 o'clock up to 12 o'clock.
pub fn pointer_angle(offset: Point) -> f32 {
    let vector = Point::new(offset.x, -offset.y);
    let angle = vector.x.atan2(vector.y);

    // atan2 returns values in (-π, π], wrap the negative half around
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Where the knob's center sits relative to the dial's center for a given
/// rotation angle.
pub fn knob_offset(radius: f32, angle: f32) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

/// Sample the progress arc as a polyline. The arc starts at 12 o'clock and
/// sweeps clockwise over `fill_fraction` of a full turn. Fractions above 1
/// keep wrapping past the top, and fractions at or below 0 produce no points
/// at all.
pub fn arc_points(radius: f32, fill_fraction: f32, segments: usize) -> Vec<Point> {
    if fill_fraction <= 0.0 || segments == 0 {
        return Vec::new();
    }

    let sweep = fill_fraction * TAU;
    (0..=segments)
        .map(|segment| {
            let angle = sweep * (segment as f32 / segments as f32);
            knob_offset(radius, angle)
        })
        .collect()
}

/// The dial's measurements, derived from the size of the area it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialLayout {
    /// Radius of the dial's track, knob center included.
    pub radius: f32,
    /// Stroke width of the background ring.
    pub ring_width: f32,
    /// Stroke width of the progress arc. Also the knob's diameter.
    pub track_width: f32,
    /// Radius of the draggable knob.
    pub knob_radius: f32,
    /// How far the knob's shadow extends past the knob itself.
    pub knob_shadow_width: f32,
    /// Font size of the centered value label.
    pub label_size: f32,
}

impl DialLayout {
    /// Derive the measurements from the available area. The dial is round, so
    /// only the smaller dimension counts.
    pub fn from_size(width: f32, height: f32) -> Self {
        let radius = 0.45 * width.min(height);
        let track_width = 0.1 * radius;

        Self {
            radius,
            ring_width: RING_WIDTH,
            track_width,
            knob_radius: track_width / 2.0,
            knob_shadow_width: track_width * 0.3,
            label_size: 0.6 * radius,
        }
    }
}
