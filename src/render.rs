//! Backend-agnostic descriptions of what a dial looks like.

use crate::geometry::Point;

/// A single layer of a rendered dial. Positions and radii are relative to the
/// dial's center, in the same y-down frame as [`crate::geometry`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// The full background circle sitting under everything else.
    Ring { radius: f32, stroke_width: f32 },
    /// The filled part of the track. Starts at 12 o'clock and sweeps
    /// clockwise over `fill_fraction` of a full turn; fractions outside of
    /// `[0, 1]` are passed through untouched.
    ProgressArc {
        radius: f32,
        stroke_width: f32,
        fill_fraction: f32,
    },
    /// The draggable handle.
    Knob {
        center: Point,
        radius: f32,
        shadow_width: f32,
    },
    /// The formatted value, centered on the dial.
    Label { text: String, font_size: f32 },
}

/// Everything needed to draw a dial, bottom layer first.
///
/// Produced by [`RadialValueControl::render()`][crate::RadialValueControl::render]
/// as a pure function of the control's state. The egui crate turns this into
/// paint calls; tests can inspect it without a GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSpec {
    pub commands: Vec<DrawCommand>,
}
