//! Property-style invariants for resize coalescing.
//!
//! Random event streams are pushed through the public coalescer API and the
//! suite asserts the two observable guarantees: the released resize is
//! always the most recently pushed one, and non-resize events are never
//! absorbed or reordered past the pending slot.

use proptest::prelude::*;
use viewfit_core::coalescer::ResizeCoalescer;
use viewfit_core::event::ViewportEvent;
use web_time::{Duration, Instant};

fn arb_event() -> impl Strategy<Value = ViewportEvent> {
    prop_oneof![
        4 => (100.0f64..4000.0, 100.0f64..4000.0)
            .prop_map(|(width, height)| ViewportEvent::Resize { width, height }),
        1 => Just(ViewportEvent::Mounted),
        1 => Just(ViewportEvent::ContentChanged),
        1 => (10.0f64..5000.0).prop_map(|height| ViewportEvent::ContentMeasured { height }),
    ]
}

proptest! {
    #[test]
    fn flush_releases_exactly_the_latest_resize(events in prop::collection::vec(arb_event(), 1..64)) {
        let mut coalescer = ResizeCoalescer::new(Duration::from_millis(50));
        let t0 = Instant::now();

        let mut last_resize = None;
        for (i, event) in events.iter().enumerate() {
            let now = t0 + Duration::from_millis(i as u64);
            let out = coalescer.push(*event, now);
            if event.is_resize() {
                prop_assert!(out.is_none(), "resize must be absorbed");
                last_resize = Some(*event);
            } else {
                prop_assert_eq!(out, Some(*event), "non-resize must pass through");
            }
        }

        prop_assert_eq!(coalescer.flush(), last_resize);
        prop_assert!(!coalescer.has_pending());
    }

    #[test]
    fn poll_before_deadline_never_releases(
        sizes in prop::collection::vec((100.0f64..4000.0, 100.0f64..4000.0), 1..32),
        gap_ms in 0u64..49,
    ) {
        let mut coalescer = ResizeCoalescer::new(Duration::from_millis(50));
        let t0 = Instant::now();

        let mut now = t0;
        for &(width, height) in &sizes {
            coalescer.push(ViewportEvent::Resize { width, height }, now);
            // Always strictly inside the quiet period of the latest push.
            prop_assert!(coalescer.poll(now + Duration::from_millis(gap_ms)).is_none());
            now += Duration::from_millis(1);
        }

        // Past the final deadline the latest size is released.
        let (width, height) = *sizes.last().unwrap();
        let settled = coalescer.poll(now + Duration::from_millis(50));
        prop_assert_eq!(settled, Some(ViewportEvent::Resize { width, height }));
    }

    #[test]
    fn disabled_coalescer_is_transparent(events in prop::collection::vec(arb_event(), 0..32)) {
        let mut coalescer = ResizeCoalescer::disabled();
        let t0 = Instant::now();

        for event in &events {
            prop_assert_eq!(coalescer.push(*event, t0), Some(*event));
        }
        prop_assert!(coalescer.flush().is_none());
    }
}
