//! Three circular sliders over different ranges in one window: a big dial
//! over the unit range, plus two smaller ones over `[1, 10]` and `[0, 100]`.
//!
//! The `[1, 10]` dial starts at 37.5 on purpose. Host-set values outside the
//! range are not clamped, and this is what that looks like: the arc wraps
//! around the track until the next drag pulls the value back inside.

use circle_slider::{RadialValueControl, ValueBinding, ValueRange};
use circle_slider_egui::egui::{self, CentralPanel, Frame};
use circle_slider_egui::{run_window, theme, RadialSlider};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const WINDOW_WIDTH: u32 = 360;
const WINDOW_HEIGHT: u32 = 520;

const MAIN_DIAL_DIAMETER: f32 = 250.0;
const SMALL_DIAL_DIAMETER: f32 = 150.0;

struct DemoApp {
    main_dial: RadialValueControl,
    left_dial: RadialValueControl,
    right_dial: RadialValueControl,
}

impl DemoApp {
    fn new() -> anyhow::Result<Self> {
        Ok(Self {
            main_dial: RadialValueControl::new(
                ValueBinding::new(0.75)
                    .with_on_change(|value| log::debug!("main dial changed to {value:.2}")),
                ValueRange::default(),
            ),
            left_dial: RadialValueControl::new(
                ValueBinding::new(37.5)
                    .with_on_change(|value| log::debug!("left dial changed to {value:.2}")),
                ValueRange::new(1.0, 10.0)?,
            ),
            right_dial: RadialValueControl::new(
                ValueBinding::new(7.5)
                    .with_on_change(|value| log::debug!("right dial changed to {value:.2}")),
                ValueRange::new(0.0, 100.0)?,
            ),
        })
    }

    /// The appear hook. Knobs only catch up with host-set values when the
    /// dials (re)appear, so this runs right after the window opens.
    fn sync_dials(&mut self) {
        self.main_dial.sync_to_value();
        self.left_dial.sync_to_value();
        self.right_dial.sync_to_value();
    }
}

fn main() -> anyhow::Result<()> {
    TermLogger::init(
        if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let app = DemoApp::new()?;
    log::info!("opening a {WINDOW_WIDTH}x{WINDOW_HEIGHT} window with three dials");

    run_window(
        "Circle slider demo",
        (WINDOW_WIDTH, WINDOW_HEIGHT),
        app,
        |ctx, _queue, app| {
            ctx.set_visuals(egui::Visuals::light());
            app.sync_dials();
        },
        |ctx, queue, app| {
            // Always redraw so drags feel continuous even when egui decides
            // nothing else changed
            queue.request_repaint();

            CentralPanel::default()
                .frame(Frame::none().fill(theme::background()).inner_margin(16.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add(
                            RadialSlider::for_control(&mut app.main_dial)
                                .with_diameter(MAIN_DIAL_DIAMETER),
                        );

                        ui.horizontal(|ui| {
                            ui.add(
                                RadialSlider::for_control(&mut app.left_dial)
                                    .with_diameter(SMALL_DIAL_DIAMETER),
                            );
                            ui.add(
                                RadialSlider::for_control(&mut app.right_dial)
                                    .with_diameter(SMALL_DIAL_DIAMETER),
                            );
                        });
                    });
                });
        },
    );

    log::info!("window closed, exiting");
    Ok(())
}
