use circle_slider::geometry::{self, DialLayout, Point};
use circle_slider::render::DrawCommand;
use circle_slider::RadialValueControl;
use egui::epaint::PathShape;
use egui::{pos2, vec2, Align2, FontId, Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::theme;

/// How many straight segments a full-turn progress arc gets built from.
const ARC_SEGMENTS_PER_TURN: usize = 64;

/// A round slider widget that edits a [`RadialValueControl`] by dragging
/// around the dial's center.
///
/// The widget claims a square area, the largest that fits the available space
/// unless [`with_diameter()`][Self::with_diameter] asks for a specific size.
/// Dragging anywhere in that square works; only the angle of the pointer
/// relative to the center matters, so the gesture does not need to stay on
/// the knob.
pub struct RadialSlider<'a> {
    control: &'a mut RadialValueControl,
    diameter: Option<f32>,
}

impl<'a> RadialSlider<'a> {
    /// Create a slider for a control. Use the other methods to modify the
    /// slider before passing it to [`Ui::add()`].
    pub fn for_control(control: &'a mut RadialValueControl) -> Self {
        Self {
            control,
            diameter: None,
        }
    }

    /// Ask for a specific edge length instead of the largest square that fits
    /// the available space.
    pub fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = Some(diameter);
        self
    }
}

impl Widget for RadialSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let diameter = self
            .diameter
            .unwrap_or_else(|| ui.available_size().min_elem());
        let mut response = ui.allocate_response(Vec2::splat(diameter), Sense::click_and_drag());
        let center = response.rect.center();

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            self.control.drag_to(Point::new(
                pointer_pos.x - center.x,
                pointer_pos.y - center.y,
            ));
            response.mark_changed();
        }

        if ui.is_rect_visible(response.rect) {
            let layout = DialLayout::from_size(response.rect.width(), response.rect.height());
            let arc_color = if response.dragged() {
                theme::progress_arc_dragged()
            } else {
                theme::progress_arc()
            };

            for command in self.control.render(&layout).commands {
                match command {
                    DrawCommand::Ring {
                        radius,
                        stroke_width,
                    } => {
                        ui.painter()
                            .circle_stroke(center, radius, Stroke::new(stroke_width, theme::ring()));
                    }
                    DrawCommand::ProgressArc {
                        radius,
                        stroke_width,
                        fill_fraction,
                    } => {
                        let points = arc_path(center, radius, fill_fraction);
                        if points.len() >= 2 {
                            ui.painter()
                                .add(PathShape::line(points, Stroke::new(stroke_width, arc_color)));
                        }
                    }
                    DrawCommand::Knob {
                        center: knob_offset,
                        radius,
                        shadow_width,
                    } => {
                        let knob_center = center + vec2(knob_offset.x, knob_offset.y);
                        ui.painter().circle_filled(
                            knob_center,
                            radius + shadow_width,
                            theme::knob_shadow(),
                        );
                        ui.painter().circle_filled(knob_center, radius, theme::knob());
                    }
                    DrawCommand::Label { text, font_size } => {
                        ui.painter().text(
                            center,
                            Align2::CENTER_CENTER,
                            text,
                            FontId::proportional(font_size),
                            theme::label(),
                        );
                    }
                }
            }
        }

        response
    }
}

/// Turn an arc description into the absolute points of a [`PathShape`]. More
/// of the arc means more segments, so overflowing arcs stay smooth.
fn arc_path(center: Pos2, radius: f32, fill_fraction: f32) -> Vec<Pos2> {
    let segments = (ARC_SEGMENTS_PER_TURN as f32 * fill_fraction).ceil().max(2.0) as usize;

    geometry::arc_points(radius, fill_fraction, segments)
        .into_iter()
        .map(|point| pos2(center.x + point.x, center.y + point.y))
        .collect()
}
