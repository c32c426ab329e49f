#![forbid(unsafe_code)]

//! The unified fit algorithm.
//!
//! One operation, [`compute_fit`], expresses every observed fitting
//! behavior as a parameterization by [`FitPolicy`]:
//!
//! - `CenteredNoScale`: pin the surface centered at authored size; overflow
//!   is the caller's clipping concern.
//! - `ShrinkToFitHeight`: shrink uniformly until the content height fits
//!   the available height, never past 1.0.
//! - `ShrinkToFitBoth`: shrink uniformly until both axes fit, never past
//!   1.0; the binding axis determines the factor.
//!
//! # Invariants
//!
//! 1. The returned scale is uniform: one factor for both axes, so aspect
//!    ratio is preserved exactly.
//! 2. Under the scaling policies, the scaled surface never exceeds the
//!    available region on any axis, and the scale never exceeds 1.0.
//! 3. `compute_fit` is a pure function: identical inputs yield identical
//!    results, and nothing is cached or mutated.
//!
//! # Failure Modes
//!
//! None surfaced to the caller. Degenerate inputs (zero-area surface, an
//! available region fully consumed by insets, non-finite measurements)
//! degrade to scale 1.0, an unscaled presentation that may clip, rather
//! than an error state.

use serde::{Deserialize, Serialize};
use viewfit_core::geometry::{Insets, Point, Rect, Size, Viewport};

/// The rule governing whether and how a surface is scaled to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitPolicy {
    /// No scaling. The surface is placed at authored size, horizontally
    /// centered, vertically offset by the top inset. Content past the
    /// viewport edge is clipped by the caller's overflow policy.
    ///
    /// This policy deliberately does not adopt the cap-at-1 shrink of the
    /// other two: it is a positioner, not a scaler.
    CenteredNoScale,

    /// Shrink uniformly so the content height fits the available height.
    /// The scale is capped at 1.0; content is never magnified.
    ShrinkToFitHeight,

    /// Shrink uniformly so the surface fits the available region on both
    /// axes. The binding axis (the smaller of the two ratios) determines
    /// the factor, capped at 1.0.
    ShrinkToFitBoth,
}

impl FitPolicy {
    /// The anchor each policy places its surface from.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        match self {
            Self::CenteredNoScale | Self::ShrinkToFitHeight => Anchor::TopCenter,
            Self::ShrinkToFitBoth => Anchor::TopLeft,
        }
    }
}

/// The reference point from which a scaled surface is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// Horizontally centered in the viewport, top edge at the top inset.
    TopCenter,
    /// Top-left corner of the available region.
    TopLeft,
    /// Centered in the available region on both axes.
    Center,
}

impl Anchor {
    /// Compute the top-left position of a surface of `scaled` size placed
    /// by this anchor, in viewport coordinates.
    #[must_use]
    pub fn position(&self, viewport: Viewport, insets: Insets, scaled: Size) -> Point {
        let avail = viewport.available(insets);
        match self {
            // Centered against the full viewport width: the top inset is a
            // header bar spanning the viewport, not a left-hand reservation.
            Self::TopCenter => Point::new(
                (viewport.width() - scaled.width) / 2.0,
                insets.top,
            ),
            Self::TopLeft => Point::new(avail.x, avail.y),
            Self::Center => Point::new(
                avail.x + (avail.width - scaled.width) / 2.0,
                avail.y + (avail.height - scaled.height) / 2.0,
            ),
        }
    }
}

/// The thing being fitted: a fixed authored frame, or flow content whose
/// natural height was measured after layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// A fixed design frame authored at a known width and height.
    Authored(Size),
    /// Flow content with a measured natural height; width follows the
    /// available region.
    MeasuredHeight(f64),
}

impl Surface {
    /// Create an authored surface from raw dimensions.
    #[must_use]
    pub const fn authored(width: f64, height: f64) -> Self {
        Self::Authored(Size::new(width, height))
    }

    /// The surface's natural height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        match self {
            Self::Authored(size) => size.height,
            Self::MeasuredHeight(height) => *height,
        }
    }

    /// The surface's authored width, if it has one.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        match self {
            Self::Authored(size) => Some(size.width),
            Self::MeasuredHeight(_) => None,
        }
    }
}

/// A computed fit placement: pure derived value, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Uniform scale factor. Exactly 1.0 for `CenteredNoScale`; in
    /// `(0, 1]` for the scaling policies.
    pub scale: f64,
    /// The anchor the offset was computed from.
    pub anchor: Anchor,
    /// Top-left position of the scaled surface in viewport coordinates.
    /// May be negative under `CenteredNoScale` when the surface overflows.
    pub offset: Point,
    /// Rendered (post-scale) surface size.
    pub size: Size,
}

impl FitResult {
    /// The placement before any trigger has fired: unscaled, unpositioned.
    #[must_use]
    pub const fn identity(anchor: Anchor) -> Self {
        Self {
            scale: 1.0,
            anchor,
            offset: Point::ZERO,
            size: Size::ZERO,
        }
    }

    /// Wrapper width inflation, in percent, for the height-fit strategy.
    ///
    /// Horizontal layout is computed at `100 / scale` percent of the
    /// available width and then visually scaled down by `scale`, so inner
    /// content never appears horizontally compressed relative to its own
    /// layout flow. At scale 1.0 this is exactly 100.
    #[must_use]
    pub fn width_compensation_percent(&self) -> f64 {
        100.0 / self.scale
    }

    /// The rendered surface footprint as a rectangle in viewport
    /// coordinates.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(self.offset.x, self.offset.y, self.size.width, self.size.height)
    }
}

/// Compute the fit of `surface` into `viewport` less `insets` under
/// `policy`.
///
/// This is the single consolidation point for the three page strategies;
/// see [`crate::strategy`] for the parameterizations. The computation is
/// synchronous and allocation-free; callers re-invoke it on every trigger
/// (mount, resize, content change) and keep only the latest result.
#[must_use]
pub fn compute_fit(
    viewport: Viewport,
    insets: Insets,
    surface: Surface,
    policy: FitPolicy,
) -> FitResult {
    let avail = viewport.available(insets);
    let scale = match policy {
        FitPolicy::CenteredNoScale => 1.0,
        FitPolicy::ShrinkToFitHeight => height_scale(&avail, surface.height()),
        FitPolicy::ShrinkToFitBoth => both_axes_scale(&avail, surface),
    };

    let size = scaled_surface(&avail, surface, scale);
    let anchor = policy.anchor();
    let offset = anchor.position(viewport, insets, size);

    FitResult {
        scale,
        anchor,
        offset,
        size,
    }
}

/// `min(1, avail_h / content_h)`, degrading to 1.0 on degenerate inputs.
fn height_scale(avail: &Rect, content_height: f64) -> f64 {
    if avail.height > 0.0 && content_height > 0.0 {
        (avail.height / content_height).min(1.0)
    } else {
        1.0
    }
}

/// `min(avail_w / w, avail_h / h, 1)`. An axis without a positive surface
/// or available dimension places no constraint on the factor.
fn both_axes_scale(avail: &Rect, surface: Surface) -> f64 {
    let scale_y = match surface.height() {
        h if h > 0.0 && avail.height > 0.0 => avail.height / h,
        _ => f64::INFINITY,
    };
    let scale_x = match surface.width() {
        Some(w) if w > 0.0 && avail.width > 0.0 => avail.width / w,
        _ => f64::INFINITY,
    };
    scale_x.min(scale_y).min(1.0)
}

/// Rendered (post-scale) size. Measured flow content spans the available
/// width regardless of scale: its pre-scale layout width is inflated by the
/// compensation trick, so the visual width stays at the available width.
fn scaled_surface(avail: &Rect, surface: Surface, scale: f64) -> Size {
    match surface {
        Surface::Authored(size) => size.scaled(scale),
        Surface::MeasuredHeight(height) => Size::new(avail.width, height * scale),
    }
}
