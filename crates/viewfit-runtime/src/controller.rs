#![forbid(unsafe_code)]

//! The fit recomputation loop.
//!
//! [`FitController`] folds [`ViewportEvent`]s into the single cached
//! [`FitResult`] a page consumes for styling. Recomputation is synchronous
//! and side-effect free; under event floods the most recent trigger always
//! wins, and resize storms are bounded by the core coalescer.
//!
//! # Invariants
//!
//! 1. The controller holds exactly one `FitResult`: the latest computed
//!    placement, or the unscaled identity before the first trigger.
//! 2. A recomputation that cannot run (viewport not yet known, content not
//!    yet measured) is skipped, never failed: the previous result stays.
//! 3. Configuration is validated at construction; no non-finite value
//!    reaches the fit solver through the config path.
//!
//! # Failure Modes
//!
//! - Non-finite or negative configuration: [`FitConfigError`] at
//!   construction.
//! - Non-finite runtime measurement: dropped with a warning, previous
//!   placement retained.

use std::fmt;

use viewfit_core::coalescer::{DEFAULT_QUIET_PERIOD, ResizeCoalescer};
use viewfit_core::event::ViewportEvent;
use viewfit_core::geometry::{Insets, Size, Viewport};
use viewfit_layout::fit::{FitPolicy, FitResult, Surface, compute_fit};
use web_time::{Duration, Instant};

use crate::source::ContentMeasure;

/// Where the fitted surface's dimensions come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceSpec {
    /// A fixed frame authored at a known size.
    Authored(Size),
    /// Flow content measured after layout; the height arrives through
    /// [`ViewportEvent::ContentMeasured`] or a [`ContentMeasure`] hook.
    Measured,
}

/// Configuration for a [`FitController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    surface: SurfaceSpec,
    insets: Insets,
    policy: FitPolicy,
    quiet_period: Duration,
}

impl FitConfig {
    /// Create a config for a surface spec and fit policy.
    ///
    /// Defaults: no insets, the default resize quiet period.
    #[must_use]
    pub const fn new(surface: SurfaceSpec, policy: FitPolicy) -> Self {
        Self {
            surface,
            insets: Insets::NONE,
            policy,
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }

    /// Set the reserved chrome insets.
    #[must_use]
    pub const fn insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the resize quiet period. `Duration::ZERO` disables coalescing
    /// and restores per-event recomputation.
    #[must_use]
    pub const fn quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    fn validate(&self) -> Result<(), FitConfigError> {
        if let SurfaceSpec::Authored(size) = self.surface
            && (!size.is_finite() || size.width < 0.0 || size.height < 0.0)
        {
            return Err(FitConfigError::InvalidSurface {
                width: size.width,
                height: size.height,
            });
        }
        if !self.insets.is_finite() || self.insets.is_negative() {
            return Err(FitConfigError::InvalidInsets(self.insets));
        }
        Ok(())
    }
}

/// Rejected [`FitConfig`] values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitConfigError {
    /// Authored surface dimensions must be finite and non-negative.
    InvalidSurface { width: f64, height: f64 },
    /// Insets must be finite and non-negative on every side.
    InvalidInsets(Insets),
}

impl fmt::Display for FitConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSurface { width, height } => {
                write!(f, "invalid authored surface: {width}x{height}")
            }
            Self::InvalidInsets(insets) => write!(
                f,
                "invalid insets: top={} right={} bottom={} left={}",
                insets.top, insets.right, insets.bottom, insets.left
            ),
        }
    }
}

impl std::error::Error for FitConfigError {}

/// Owns the current fit placement for one page.
///
/// Feed triggers through [`handle`](Self::handle), poll the coalescer
/// through [`poll`](Self::poll), and read the latest placement from
/// [`result`](Self::result).
#[derive(Debug, Clone)]
pub struct FitController {
    config: FitConfig,
    coalescer: ResizeCoalescer,
    viewport: Viewport,
    measured: Option<f64>,
    result: FitResult,
}

impl FitController {
    /// Create a controller from a validated config.
    ///
    /// The placement starts as the unscaled identity and stays there until
    /// the first computable trigger fires.
    pub fn new(config: FitConfig) -> Result<Self, FitConfigError> {
        config.validate()?;
        Ok(Self {
            coalescer: ResizeCoalescer::new(config.quiet_period),
            viewport: Viewport::default(),
            measured: None,
            result: FitResult::identity(config.policy.anchor()),
            config,
        })
    }

    /// The latest computed placement.
    #[must_use]
    pub const fn result(&self) -> FitResult {
        self.result
    }

    /// The last known viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Feed a trigger into the controller.
    ///
    /// Resize events may be absorbed by the coalescer (in which case the
    /// settled size arrives through a later [`poll`](Self::poll)); all
    /// other triggers apply immediately. Returns the new placement when a
    /// recomputation ran, `None` when it was absorbed or skipped.
    pub fn handle(&mut self, event: ViewportEvent, now: Instant) -> Option<FitResult> {
        let event = self.coalescer.push(event, now)?;
        self.apply(event)
    }

    /// Release and apply a debounced resize whose quiet period elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<FitResult> {
        let event = self.coalescer.poll(now)?;
        self.apply(event)
    }

    /// Apply any pending resize immediately, ignoring the quiet period.
    pub fn flush(&mut self) -> Option<FitResult> {
        let event = self.coalescer.flush()?;
        self.apply(event)
    }

    /// Measure content through the injected hook and recompute.
    ///
    /// A `None` measurement (container not mounted) is a no-op: the
    /// previous placement stays until the next trigger.
    pub fn measure_with(&mut self, measure: &dyn ContentMeasure) -> Option<FitResult> {
        match measure.natural_height() {
            Some(height) => self.apply(ViewportEvent::ContentMeasured { height }),
            None => {
                tracing::trace!("content not mounted; measurement skipped");
                None
            }
        }
    }

    fn apply(&mut self, event: ViewportEvent) -> Option<FitResult> {
        match event {
            ViewportEvent::Resize { width, height } => {
                self.viewport = Viewport::new(Size::new(width, height));
                self.recompute()
            }
            ViewportEvent::Mounted => self.recompute(),
            ViewportEvent::ContentChanged => {
                self.measured = None;
                self.recompute()
            }
            ViewportEvent::ContentMeasured { height } => {
                if height.is_finite() && height >= 0.0 {
                    self.measured = Some(height);
                    self.recompute()
                } else {
                    tracing::warn!(height, "ignoring non-finite content measurement");
                    None
                }
            }
        }
    }

    /// Recompute the placement if every input is available.
    fn recompute(&mut self) -> Option<FitResult> {
        if self.viewport.size.is_empty() {
            tracing::trace!("viewport not yet known; recompute skipped");
            return None;
        }
        let surface = self.effective_surface()?;
        let result = compute_fit(self.viewport, self.config.insets, surface, self.config.policy);
        tracing::trace!(scale = result.scale, "fit recomputed");
        self.result = result;
        Some(result)
    }

    fn effective_surface(&self) -> Option<Surface> {
        match self.config.surface {
            SurfaceSpec::Authored(size) => Some(Surface::Authored(size)),
            SurfaceSpec::Measured => self.measured.map(Surface::MeasuredHeight),
        }
    }
}
