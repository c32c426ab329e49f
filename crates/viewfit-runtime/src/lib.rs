#![forbid(unsafe_code)]

//! viewfit runtime
//!
//! This crate ties the vocabulary (`viewfit-core`) and the fit solver
//! (`viewfit-layout`) into a live recomputation loop.
//!
//! # Key Components
//!
//! - [`ViewportSource`] / [`ContentMeasure`] - injected read-only access to
//!   the live viewport and the content measurement, replacing ambient
//!   window/document globals
//! - [`Subscription`] - trait for continuous viewport event producers
//! - [`SubscriptionManager`] - scoped listener acquisition with guaranteed
//!   release on teardown
//! - [`WatchResize`] - built-in resize watcher over a `ViewportSource`
//! - [`FitController`] - owns the current fit placement and recomputes it
//!   synchronously on mount, resize, and content-change triggers
//!
//! # How it fits in the system
//! Platform glue pushes viewport state into a source; subscriptions turn
//! state changes into [`viewfit_core::event::ViewportEvent`]s; the
//! controller folds events into the single cached
//! [`viewfit_layout::FitResult`] the page consumes for styling.

pub mod controller;
pub mod source;
pub mod subscription;

pub use controller::{FitConfig, FitConfigError, FitController, SurfaceSpec};
pub use source::{ContentMeasure, SharedMeasure, SharedViewport, ViewportSource};
pub use subscription::{
    MockSubscription, StopSignal, SubId, Subscription, SubscriptionManager, WatchResize,
};
