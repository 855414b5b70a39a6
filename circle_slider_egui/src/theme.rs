//! The dial's fixed colors.
//!
//! Kept in HSV so the relationship between the track shades stays visible.
//! These are constants on purpose; theming is not configurable.

use egui::epaint::Hsva;
use egui::Color32;

/// The unfilled track under the progress arc.
pub fn ring() -> Color32 {
    Hsva::new(0.0, 0.0, 0.9, 1.0).into()
}

/// The filled part of the track.
pub fn progress_arc() -> Color32 {
    Hsva::new(0.0, 0.5, 0.9, 1.0).into()
}

/// The filled part of the track while it is being dragged.
pub fn progress_arc_dragged() -> Color32 {
    add_hsv(progress_arc(), 0.0, -0.1, 0.1)
}

/// The draggable knob.
pub fn knob() -> Color32 {
    Color32::WHITE
}

/// The soft shadow behind the knob.
pub fn knob_shadow() -> Color32 {
    Color32::from_black_alpha(64)
}

/// The centered value label.
pub fn label() -> Color32 {
    Color32::from_gray(60)
}

/// The window background behind the dials.
pub fn background() -> Color32 {
    Hsva::new(0.58, 0.06, 1.0, 1.0).into()
}

/// Additively modify the hue, saturation, and lightness [0, 1] values of a
/// color.
fn add_hsv(color: Color32, h: f32, s: f32, v: f32) -> Color32 {
    let mut hsv = Hsva::from(color);
    hsv.h += h;
    hsv.s += s;
    hsv.v += v;
    hsv.into()
}
