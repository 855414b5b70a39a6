//! A circular slider control, split into a drawing-backend-agnostic core and
//! (elsewhere in this workspace) an egui widget that paints it.
//!
//! [`RadialValueControl`] owns the angle<->value conversion driven by pointer
//! drags. The value itself lives in a [`ValueBinding`] shared with the host,
//! and what the control looks like at any moment comes out of
//! [`RadialValueControl::render()`] as a plain list of draw commands, so the
//! interesting logic can be exercised without opening a window.

pub mod binding;
pub mod control;
pub mod formatters;
pub mod geometry;
pub mod range;
pub mod render;

pub use binding::ValueBinding;
pub use control::RadialValueControl;
pub use range::{RangeError, ValueRange};
pub use render::{DrawCommand, RenderSpec};
