#![forbid(unsafe_code)]

//! Fit solvers: scale-and-anchor placement of authored surfaces.
//!
//! # Role in viewfit
//! `viewfit-layout` answers one question: given a live viewport, reserved
//! chrome insets, and a design surface (fixed frame or measured content
//! height), at what uniform scale and position does the surface fit? The
//! answer is a pure derived value with no state and no I/O.
//!
//! # Primary surface
//! - [`compute_fit`]: the unified fit operation, parameterized by
//!   [`FitPolicy`].
//! - [`strategy`]: the three page-level strategies expressed as thin
//!   parameterizations of `compute_fit`.

pub use viewfit_core::geometry::{Insets, Point, Rect, Size, Viewport};

pub mod fit;
pub mod strategy;

pub use fit::{Anchor, FitPolicy, FitResult, Surface, compute_fit};
pub use strategy::{ContentFitScaler, FixedCanvasPositioner, FrameFitScaler};
