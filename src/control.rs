//! The radial slider control itself.

use std::f32::consts::TAU;
use std::sync::Arc;

use crate::binding::ValueBinding;
use crate::formatters;
use crate::geometry::{self, DialLayout, Point};
use crate::range::ValueRange;
use crate::render::{DrawCommand, RenderSpec};

/// A circular slider: maps drag gestures on a dial to a value inside an
/// inclusive range, and keeps a rotation angle for the knob in sync with that
/// value.
///
/// The value lives in a [`ValueBinding`] owned jointly with the host, and the
/// control trusts the host: values set from outside the range are not
/// clamped, they just render as an arc that overflows the track.
pub struct RadialValueControl {
    binding: ValueBinding,
    range: ValueRange,
    /// The knob's rotation in radians, clockwise from 12 o'clock. Derived
    /// from the value everywhere except during a drag, where the angle leads
    /// and the value follows.
    rotation_angle: f32,
    value_to_string: Arc<dyn Fn(f32) -> String + Send + Sync>,
}

impl RadialValueControl {
    /// Create a control over `binding`, spanning `range`. The knob starts at
    /// the angle matching the binding's current value.
    pub fn new(binding: ValueBinding, range: ValueRange) -> Self {
        let mut control = Self {
            binding,
            range,
            rotation_angle: 0.0,
            value_to_string: formatters::f32_rounded(2),
        };
        control.sync_to_value();

        control
    }

    /// Use a custom formatter for the centered value label. Defaults to two
    /// decimal places.
    pub fn with_value_to_string(
        mut self,
        value_to_string: Arc<dyn Fn(f32) -> String + Send + Sync>,
    ) -> Self {
        self.value_to_string = value_to_string;
        self
    }

    /// How far along the range the current value is, nominally in `[0, 1]`.
    /// An out-of-range value produces a fraction outside of that interval.
    pub fn progress_fraction(&self) -> f32 {
        self.range.normalize(self.binding.get())
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.binding.get()
    }

    /// Write a new value through the binding. The binding's change listener
    /// fires, but the knob keeps its angle until the next drag or the next
    /// [`sync_to_value()`][Self::sync_to_value].
    pub fn set_value(&self, value: f32) {
        self.binding.set(value);
    }

    /// The control's value range.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// The knob's cached rotation in radians, clockwise from 12 o'clock. In
    /// `[0, 2π)` as long as the value is inside the range.
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Handle a drag-move event. `pointer` is the pointer's position relative
    /// to the dial's center, in the y-down screen frame.
    ///
    /// The angle leads here: the pointer offset becomes an angle in
    /// `[0, 2π)`, the angle becomes the new value, and the knob follows the
    /// pointer exactly.
    pub fn drag_to(&mut self, pointer: Point) {
        let angle = geometry::pointer_angle(pointer);
        let value = self.range.unnormalize(angle / TAU);

        self.binding.set(value);
        self.rotation_angle = angle;
    }

    /// Recompute the knob angle from the current value. Call this when the
    /// control (re)appears on screen: a value changed by the host while the
    /// control stays visible keeps the knob at its old angle until the next
    /// drag or the next call to this method.
    pub fn sync_to_value(&mut self) {
        self.rotation_angle = self.progress_fraction() * TAU;
        log::trace!(
            "synced knob to value {} ({} rad)",
            self.binding.get(),
            self.rotation_angle
        );
    }

    /// Describe the control's current look as an ordered list of draw
    /// commands, bottom layer first: background ring, progress arc, knob,
    /// value label.
    pub fn render(&self, layout: &DialLayout) -> RenderSpec {
        RenderSpec {
            commands: vec![
                DrawCommand::Ring {
                    radius: layout.radius,
                    stroke_width: layout.ring_width,
                },
                DrawCommand::ProgressArc {
                    radius: layout.radius,
                    stroke_width: layout.track_width,
                    fill_fraction: self.progress_fraction(),
                },
                DrawCommand::Knob {
                    center: geometry::knob_offset(layout.radius, self.rotation_angle),
                    radius: layout.knob_radius,
                    shadow_width: layout.knob_shadow_width,
                },
                DrawCommand::Label {
                    text: (self.value_to_string)(self.binding.get()),
                    font_size: layout.label_size,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn make_control(initial: f32, min: f32, max: f32) -> RadialValueControl {
        RadialValueControl::new(
            ValueBinding::new(initial),
            ValueRange::new(min, max).unwrap(),
        )
    }

    #[test]
    fn initial_angle_matches_the_value() {
        let control = make_control(5.5, 1.0, 10.0);
        assert_eq!(control.progress_fraction(), 0.5);
        assert_eq!(control.rotation_angle(), PI);
    }

    #[test]
    fn fraction_stays_in_the_unit_interval_for_in_range_values() {
        let control = make_control(1.0, 1.0, 10.0);
        for i in 0..=10 {
            let value = 1.0 + 9.0 * (i as f32 / 10.0);
            control.set_value(value);

            let fraction = control.progress_fraction();
            assert!(
                (0.0..=1.0).contains(&fraction),
                "fraction {fraction} for value {value} left [0, 1]"
            );
        }
    }

    #[test]
    fn dragging_to_the_top_snaps_to_the_minimum() {
        let mut control = make_control(5.5, 1.0, 10.0);
        control.drag_to(Point::new(0.0, -40.0));

        assert_eq!(control.value(), 1.0);
        assert_eq!(control.rotation_angle(), 0.0);
    }

    #[test]
    fn dragging_right_lands_a_quarter_into_the_range() {
        let mut control = make_control(5.5, 1.0, 10.0);
        control.drag_to(Point::new(40.0, 0.0));

        assert_eq!(control.value(), 3.25);
    }

    #[test]
    fn drag_angle_survives_a_round_trip_through_the_value() {
        let mut control = make_control(0.0, 0.0, 1.0);
        for i in 0..16 {
            let angle = TAU * (i as f32 / 16.0);
            control.drag_to(Point::new(40.0 * angle.sin(), -40.0 * angle.cos()));
            let dragged_angle = control.rotation_angle();

            control.sync_to_value();
            approx::assert_relative_eq!(
                control.rotation_angle(),
                dragged_angle,
                epsilon = 1e-5,
                max_relative = 1e-5
            );
        }
    }

    #[test]
    fn out_of_range_values_overflow_instead_of_clamping() {
        let control = make_control(37.5, 1.0, 10.0);
        assert!(control.progress_fraction() > 1.0);

        let layout = DialLayout::from_size(250.0, 250.0);
        match &control.render(&layout).commands[1] {
            DrawCommand::ProgressArc { fill_fraction, .. } => {
                assert_eq!(*fill_fraction, control.progress_fraction());
            }
            other => panic!("expected the progress arc, got {other:?}"),
        }
    }

    #[test]
    fn host_writes_leave_the_knob_alone_until_resynced() {
        let mut control = make_control(0.0, 0.0, 1.0);

        control.set_value(0.75);
        assert_eq!(control.value(), 0.75);
        assert_eq!(control.rotation_angle(), 0.0);

        control.sync_to_value();
        assert_eq!(control.rotation_angle(), 0.75 * TAU);
    }

    #[test]
    fn render_layers_bottom_up() {
        let control = make_control(0.75, 0.0, 1.0);
        let layout = DialLayout::from_size(250.0, 250.0);

        let spec = control.render(&layout);
        assert_eq!(spec.commands.len(), 4);

        assert!(matches!(spec.commands[0], DrawCommand::Ring { .. }));
        match &spec.commands[1] {
            DrawCommand::ProgressArc { fill_fraction, .. } => assert_eq!(*fill_fraction, 0.75),
            other => panic!("expected the progress arc, got {other:?}"),
        }
        match &spec.commands[2] {
            DrawCommand::Knob { center, .. } => {
                assert_eq!(*center, geometry::knob_offset(layout.radius, 0.75 * TAU));
            }
            other => panic!("expected the knob, got {other:?}"),
        }
        match &spec.commands[3] {
            DrawCommand::Label { text, .. } => assert_eq!(text, "0.75"),
            other => panic!("expected the label, got {other:?}"),
        }
    }
}
