//! Convenience functions for formatting slider values.

use std::sync::Arc;

/// Round an `f32` value to always have a specific number of decimal digits.
/// With two digits this matches the dial's default label format.
pub fn f32_rounded(digits: usize) -> Arc<dyn Fn(f32) -> String + Send + Sync> {
    Arc::new(move |value| format!("{value:.digits$}"))
}

/// Format a `[0, 1]` number as a percentage. Does not include the percent
/// sign.
pub fn f32_percentage(digits: usize) -> Arc<dyn Fn(f32) -> String + Send + Sync> {
    Arc::new(move |value| format!("{:.digits$}", value * 100.0))
}
