#![forbid(unsafe_code)]

//! Core: geometry, viewport events, and resize coalescing.
//!
//! # Role in viewfit
//! `viewfit-core` is the vocabulary layer. It owns the geometric primitives
//! everything else computes with, the canonical [`event::ViewportEvent`]
//! triggers the runtime consumes, and the [`coalescer::ResizeCoalescer`]
//! that bounds recomputation frequency under resize storms.
//!
//! # How it fits in the system
//! The fit solver (`viewfit-layout`) consumes `viewfit-core` geometry and
//! produces placement results. The runtime (`viewfit-runtime`) consumes
//! `viewfit-core` events and drives recomputation. Neither direction flows
//! back into this crate, so it stays dependency-free and deterministic.

pub mod coalescer;
pub mod event;
pub mod geometry;

#[cfg(feature = "tracing")]
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
