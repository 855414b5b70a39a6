//! Custom egui widgets for displaying and editing dial values.

mod radial_slider;

pub use radial_slider::RadialSlider;
