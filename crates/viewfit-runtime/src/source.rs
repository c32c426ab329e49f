#![forbid(unsafe_code)]

//! Injected viewport and measurement access.
//!
//! The fit loop never reads ambient globals. Platform glue implements (or
//! writes into) these sources, and everything downstream of the seam is
//! deterministic and testable without a real display surface.

use std::sync::{Arc, Mutex};

use viewfit_core::geometry::Size;

/// Read-only query of the live viewport dimensions.
pub trait ViewportSource {
    /// Current viewport size.
    fn size(&self) -> Size;
}

/// Read-only query of a content container's natural (unscaled) height.
pub trait ContentMeasure {
    /// Measured natural height, or `None` when the container is not yet
    /// mounted in the rendered tree.
    fn natural_height(&self) -> Option<f64>;
}

/// A shared, writable viewport usable as the write side for platform glue
/// and as a test fake.
///
/// Clones share the same underlying size.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport {
    inner: Arc<Mutex<Size>>,
}

impl SharedViewport {
    /// Create a shared viewport with an initial size.
    #[must_use]
    pub fn new(initial: Size) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Replace the current size.
    pub fn set_size(&self, size: Size) {
        *self.inner.lock().unwrap() = size;
    }
}

impl ViewportSource for SharedViewport {
    fn size(&self) -> Size {
        *self.inner.lock().unwrap()
    }
}

/// A shared, writable content measurement.
///
/// Starts unmounted (`None`); platform glue sets the measured height once
/// layout has produced one, and clears it when the content unmounts or
/// changes identity.
#[derive(Debug, Clone, Default)]
pub struct SharedMeasure {
    inner: Arc<Mutex<Option<f64>>>,
}

impl SharedMeasure {
    /// Create an unmounted measurement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured natural height.
    pub fn set_height(&self, height: f64) {
        *self.inner.lock().unwrap() = Some(height);
    }

    /// Mark the content as unmounted or stale.
    pub fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}

impl ContentMeasure for SharedMeasure {
    fn natural_height(&self) -> Option<f64> {
        *self.inner.lock().unwrap()
    }
}
