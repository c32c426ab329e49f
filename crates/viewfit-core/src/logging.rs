#![forbid(unsafe_code)]

//! Macro forwarding for structured logging.
//!
//! Downstream crates use `viewfit_core::debug!` and friends so the tracing
//! dependency stays behind this crate's `tracing` feature.

pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
