#![forbid(unsafe_code)]

//! viewfit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use viewfit::prelude::*;
//! use web_time::Instant;
//!
//! fn place() -> viewfit::Result<FitResult> {
//!     let config = FitConfig::new(
//!         SurfaceSpec::Authored(Size::new(1512.0, 982.0)),
//!         FitPolicy::ShrinkToFitBoth,
//!     )
//!     .insets(Insets::new(73.0, 0.0, 0.0, 293.0));
//!
//!     let mut controller = FitController::new(config)?;
//!     controller.handle(
//!         ViewportEvent::Resize { width: 1280.0, height: 720.0 },
//!         Instant::now(),
//!     );
//!     Ok(controller.flush().unwrap_or(controller.result()))
//! }
//!
//! assert!(place().unwrap().scale < 1.0);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use viewfit_core::coalescer::{DEFAULT_QUIET_PERIOD, ResizeCoalescer};
pub use viewfit_core::event::ViewportEvent;
pub use viewfit_core::geometry::{Insets, Point, Rect, Size, Viewport};

// --- Layout re-exports -----------------------------------------------------

pub use viewfit_layout::fit::{Anchor, FitPolicy, FitResult, Surface, compute_fit};
pub use viewfit_layout::strategy::{ContentFitScaler, FixedCanvasPositioner, FrameFitScaler};

// --- Runtime re-exports ----------------------------------------------------

pub use viewfit_runtime::controller::{FitConfig, FitConfigError, FitController, SurfaceSpec};
pub use viewfit_runtime::source::{ContentMeasure, SharedMeasure, SharedViewport, ViewportSource};
pub use viewfit_runtime::subscription::{
    MockSubscription, StopSignal, SubId, Subscription, SubscriptionManager, WatchResize,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for viewfit apps.
#[derive(Debug)]
pub enum Error {
    /// Rejected fit configuration.
    Config(FitConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<FitConfigError> for Error {
    fn from(err: FitConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for viewfit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ---------------------------------------------------------------

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        Anchor, ContentFitScaler, ContentMeasure, FitConfig, FitController, FitPolicy, FitResult,
        FixedCanvasPositioner, FrameFitScaler, Insets, Point, Size, Surface, SurfaceSpec,
        Viewport, ViewportEvent, compute_fit,
    };
}
