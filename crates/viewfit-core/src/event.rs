#![forbid(unsafe_code)]

//! Canonical viewport trigger events.
//!
//! The runtime recomputes fit placement in response to exactly these
//! triggers: layout mount, viewport resize, content identity change, and a
//! completed content measurement. Events carry plain values so they can be
//! produced by platform glue, subscriptions, or tests alike.

use crate::geometry::Size;

/// A trigger that may invalidate the current fit placement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportEvent {
    /// The viewport was resized.
    Resize {
        /// New viewport width in logical pixels.
        width: f64,
        /// New viewport height in logical pixels.
        height: f64,
    },

    /// The page layout completed its first paint.
    ///
    /// Fires once per page load; fit placement becomes meaningful only
    /// after this point.
    Mounted,

    /// The measured content changed identity.
    ///
    /// For example, navigating between pages that reuse the same layout
    /// shell. Any previously measured content height is stale.
    ContentChanged,

    /// The content container's natural (unscaled) height was measured.
    ContentMeasured {
        /// Natural content height in logical pixels.
        height: f64,
    },
}

impl ViewportEvent {
    /// Create a resize event from a size.
    #[must_use]
    pub const fn resize(size: Size) -> Self {
        Self::Resize {
            width: size.width,
            height: size.height,
        }
    }

    /// Check if this is a resize event.
    #[inline]
    #[must_use]
    pub const fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }

    /// The carried viewport size, for resize events.
    #[must_use]
    pub const fn resize_size(&self) -> Option<Size> {
        match self {
            Self::Resize { width, height } => Some(Size::new(*width, *height)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewportEvent;
    use crate::geometry::Size;

    #[test]
    fn resize_round_trips_size() {
        let event = ViewportEvent::resize(Size::new(1280.0, 720.0));
        assert!(event.is_resize());
        assert_eq!(event.resize_size(), Some(Size::new(1280.0, 720.0)));
    }

    #[test]
    fn non_resize_events_carry_no_size() {
        assert!(!ViewportEvent::Mounted.is_resize());
        assert_eq!(ViewportEvent::ContentChanged.resize_size(), None);
        assert_eq!(
            ViewportEvent::ContentMeasured { height: 900.0 }.resize_size(),
            None
        );
    }
}
