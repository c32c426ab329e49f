#![forbid(unsafe_code)]

//! Page-level fitting strategies.
//!
//! The three behaviors observed in the presentation layer, each expressed
//! as a thin parameterization of [`compute_fit`]. They share one algorithm
//! and differ only in policy, insets, and what they treat as the surface.
//!
//! # Usage
//!
//! ```
//! use viewfit_layout::{FrameFitScaler, Size, Viewport};
//!
//! // A 1512x982 design frame beside a 293px sidebar under a 68px header
//! // with a 5px gap.
//! let scaler = FrameFitScaler::new(Size::new(1512.0, 982.0), 293.0, 68.0, 5.0);
//! let fit = scaler.fit(Viewport::new(Size::new(1280.0, 720.0)));
//! assert!(fit.scale < 1.0);
//! ```

use serde::{Deserialize, Serialize};
use viewfit_core::geometry::{Insets, Size, Viewport};

use crate::fit::{FitPolicy, FitResult, Surface, compute_fit};

/// Pins a fixed-size design surface centered in the viewport, vertically
/// offset for a header bar, with no scaling.
///
/// Overflow beyond the viewport is clipped by an ancestor's overflow
/// policy; content below the fold is inaccessible. Because nothing is
/// recomputed, this strategy needs no resize subscription.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCanvasPositioner {
    /// Authored surface size.
    pub surface: Size,
    /// Vertical offset reserved above the surface (header height plus
    /// fixed padding).
    pub top_inset: f64,
}

impl FixedCanvasPositioner {
    /// Create a positioner for an authored surface and top reservation.
    #[must_use]
    pub const fn new(surface: Size, top_inset: f64) -> Self {
        Self { surface, top_inset }
    }

    /// Absolute placement of the surface in the given viewport.
    #[must_use]
    pub fn place(&self, viewport: Viewport) -> FitResult {
        compute_fit(
            viewport,
            Insets::header(self.top_inset),
            Surface::Authored(self.surface),
            FitPolicy::CenteredNoScale,
        )
    }
}

/// Shrinks measured flow content so its height fits the viewport height
/// minus a fixed chrome allowance.
///
/// The content's natural height is only measurable after layout; until the
/// container is mounted there is nothing to measure, and [`fit`](Self::fit)
/// returns `None` so the caller keeps its previous (or default, unscaled)
/// placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentFitScaler {
    /// Viewport height consumed by fixed chrome above the content.
    pub chrome_allowance: f64,
}

impl ContentFitScaler {
    /// Create a scaler with the given chrome allowance.
    #[must_use]
    pub const fn new(chrome_allowance: f64) -> Self {
        Self { chrome_allowance }
    }

    /// Fit the measured content into the viewport.
    ///
    /// `measured_height` is `None` when the content container is not yet
    /// mounted; the recomputation is skipped, not failed.
    #[must_use]
    pub fn fit(&self, viewport: Viewport, measured_height: Option<f64>) -> Option<FitResult> {
        let height = measured_height?;
        Some(compute_fit(
            viewport,
            Insets::header(self.chrome_allowance),
            Surface::MeasuredHeight(height),
            FitPolicy::ShrinkToFitHeight,
        ))
    }
}

/// Fits a fixed authored frame into the viewport area remaining after a
/// sidebar and header, preserving aspect ratio and never upscaling.
///
/// Anchored to the top-left of the available region rather than centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameFitScaler {
    /// Authored frame size.
    pub frame: Size,
    /// Fixed sidebar width on the left edge.
    pub sidebar_width: f64,
    /// Fixed header height.
    pub header_height: f64,
    /// Gap between the header and the frame.
    pub gap: f64,
}

impl FrameFitScaler {
    /// Create a scaler for an authored frame and its surrounding chrome.
    #[must_use]
    pub const fn new(frame: Size, sidebar_width: f64, header_height: f64, gap: f64) -> Self {
        Self {
            frame,
            sidebar_width,
            header_height,
            gap,
        }
    }

    /// The chrome insets this strategy reserves.
    #[must_use]
    pub fn insets(&self) -> Insets {
        Insets::new(self.header_height + self.gap, 0.0, 0.0, self.sidebar_width)
    }

    /// Fit the frame into the given viewport.
    #[must_use]
    pub fn fit(&self, viewport: Viewport) -> FitResult {
        compute_fit(
            viewport,
            self.insets(),
            Surface::Authored(self.frame),
            FitPolicy::ShrinkToFitBoth,
        )
    }
}
