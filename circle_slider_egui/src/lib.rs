//! [egui](https://github.com/emilk/egui) support for the `circle_slider`
//! control: a widget that drives the control from pointer events and paints
//! its draw commands, the fixed color theme, and a small blocking window
//! runner for standalone demos.

use baseview::gl::GlConfig;
use baseview::{Size, WindowOpenOptions, WindowScalePolicy};
use egui::Context;
use egui_baseview::{EguiWindow, Queue};

pub mod theme;
pub mod widgets;

/// Re-export for convenience.
pub use egui;

pub use widgets::RadialSlider;

/// Open a window and run an egui UI in it until the window is closed.
///
/// `build` runs once right after the window opens. That is the place to
/// resynchronize controls whose values may have changed since they were
/// constructed, and to adjust the [`Context`] before the first frame.
/// `update` runs every frame.
pub fn run_window<T, B, U>(title: &str, (width, height): (u32, u32), state: T, build: B, update: U)
where
    T: 'static + Send,
    B: FnMut(&Context, &mut Queue, &mut T) + 'static + Send,
    U: FnMut(&Context, &mut Queue, &mut T) + 'static + Send,
{
    EguiWindow::open_blocking(
        WindowOpenOptions {
            title: String::from(title),
            size: Size::new(width as f64, height as f64),
            scale: WindowScalePolicy::SystemScaleFactor,
            gl_config: Some(GlConfig {
                version: (3, 2),
                red_bits: 8,
                blue_bits: 8,
                green_bits: 8,
                alpha_bits: 8,
                depth_bits: 24,
                stencil_bits: 8,
                samples: None,
                srgb: true,
                double_buffer: true,
                vsync: true,
                ..Default::default()
            }),
        },
        state,
        build,
        update,
    );
}
