//! Shared ownership of a slider's value.

use atomic_float::AtomicF32;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// A callback invoked with the new value whenever a [`ValueBinding`] is
/// written to.
pub type ChangeListener = Arc<dyn Fn(f32) + Send + Sync>;

/// A shared, mutable slot holding a slider's value.
///
/// The host and the control write to the same slot: drags store the value the
/// pointer angle maps to, and the host can overwrite it at any time. Cloning
/// the binding clones the handle, not the value. The atomic only provides
/// shared mutability, everything happens on the UI thread and all accesses
/// are relaxed.
#[derive(Clone)]
pub struct ValueBinding {
    value: Arc<AtomicF32>,
    on_change: Option<ChangeListener>,
}

impl ValueBinding {
    /// Create a binding holding `initial`.
    pub fn new(initial: f32) -> Self {
        Self {
            value: Arc::new(AtomicF32::new(initial)),
            on_change: None,
        }
    }

    /// Register a listener that gets called with the new value on every
    /// [`set()`][Self::set], whether the write came from the host or from a
    /// control. Clones made after this call share the listener.
    pub fn with_on_change(mut self, listener: impl Fn(f32) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(listener));
        self
    }

    /// The current value.
    pub fn get(&self) -> f32 {
        self.value.load(Ordering::Relaxed)
    }

    /// Replace the current value and notify the change listener, if there is
    /// one.
    pub fn set(&self, value: f32) {
        self.value.store(value, Ordering::Relaxed);
        if let Some(on_change) = &self.on_change {
            on_change(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let binding = ValueBinding::new(0.25);
        assert_eq!(binding.get(), 0.25);

        binding.set(0.5);
        assert_eq!(binding.get(), 0.5);
    }

    #[test]
    fn clones_share_the_slot() {
        let binding = ValueBinding::new(0.0);
        let clone = binding.clone();

        clone.set(0.62);
        assert_eq!(binding.get(), 0.62);
    }

    #[test]
    fn set_notifies_the_listener() {
        let seen = Arc::new(AtomicF32::new(f32::NAN));
        let binding = ValueBinding::new(0.0).with_on_change({
            let seen = seen.clone();
            move |value| seen.store(value, Ordering::Relaxed)
        });

        binding.set(0.62);
        assert_eq!(seen.load(Ordering::Relaxed), 0.62);
    }

    #[test]
    fn listener_survives_cloning() {
        let seen = Arc::new(AtomicF32::new(f32::NAN));
        let binding = ValueBinding::new(0.0).with_on_change({
            let seen = seen.clone();
            move |value| seen.store(value, Ordering::Relaxed)
        });

        binding.clone().set(0.31);
        assert_eq!(seen.load(Ordering::Relaxed), 0.31);
    }
}
