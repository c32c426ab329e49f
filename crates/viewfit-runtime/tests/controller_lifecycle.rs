//! End-to-end lifecycle: source -> subscription -> controller.
//!
//! Wires a shared viewport source through a resize watcher into a fit
//! controller, the way a page component would, and checks the two
//! lifecycle guarantees: viewport changes reach the placement, and a torn
//! down watcher never fires again.

use std::sync::Arc;
use std::thread;

use viewfit_core::geometry::{Insets, Size};
use viewfit_layout::fit::FitPolicy;
use viewfit_runtime::{
    FitConfig, FitController, SubscriptionManager, SurfaceSpec, WatchResize,
};
use web_time::{Duration, Instant};

const FRAME: Size = Size::new(1512.0, 982.0);
const CHROME: Insets = Insets::new(73.0, 0.0, 0.0, 293.0);

fn pump(mgr: &SubscriptionManager, controller: &mut FitController) {
    for event in mgr.drain_events() {
        controller.handle(event, Instant::now());
    }
    controller.flush();
}

#[test]
fn resize_flows_from_source_to_placement() {
    let source = viewfit_runtime::SharedViewport::new(Size::new(1280.0, 720.0));
    let mut mgr = SubscriptionManager::new();
    mgr.reconcile(vec![Box::new(WatchResize::new(
        1,
        Duration::from_millis(5),
        Arc::new(source.clone()),
    ))]);

    let config = FitConfig::new(SurfaceSpec::Authored(FRAME), FitPolicy::ShrinkToFitBoth)
        .insets(CHROME);
    let mut controller = FitController::new(config).unwrap();

    // Initial observation delivers the starting viewport.
    thread::sleep(std::time::Duration::from_millis(40));
    pump(&mgr, &mut controller);
    assert_eq!(controller.result().scale, 987.0 / 1512.0);

    // Grow the viewport past the frame: the placement settles at 1.0.
    source.set_size(Size::new(1920.0, 1080.0));
    thread::sleep(std::time::Duration::from_millis(40));
    pump(&mgr, &mut controller);
    assert_eq!(controller.result().scale, 1.0);
}

#[test]
fn unmounted_watcher_never_updates_placement() {
    let source = viewfit_runtime::SharedViewport::new(Size::new(1280.0, 720.0));
    let mut mgr = SubscriptionManager::new();
    mgr.reconcile(vec![Box::new(WatchResize::new(
        1,
        Duration::from_millis(5),
        Arc::new(source.clone()),
    ))]);

    let config = FitConfig::new(SurfaceSpec::Authored(FRAME), FitPolicy::ShrinkToFitBoth)
        .insets(CHROME);
    let mut controller = FitController::new(config).unwrap();

    thread::sleep(std::time::Duration::from_millis(40));
    pump(&mgr, &mut controller);
    let mounted = controller.result();

    // Tear down the page's listener, then resize: the stale watcher must
    // not fire, so the placement is frozen at its last value.
    mgr.reconcile(vec![]);
    let _ = mgr.drain_events();

    source.set_size(Size::new(640.0, 480.0));
    thread::sleep(std::time::Duration::from_millis(40));
    pump(&mgr, &mut controller);
    assert_eq!(controller.result(), mounted);
}

#[test]
fn manager_drop_releases_listeners() {
    let source = viewfit_runtime::SharedViewport::new(Size::new(1280.0, 720.0));
    let mgr = {
        let mut mgr = SubscriptionManager::new();
        mgr.reconcile(vec![Box::new(WatchResize::new(
            1,
            Duration::from_millis(5),
            Arc::new(source.clone()),
        ))]);
        thread::sleep(std::time::Duration::from_millis(40));
        mgr.stop_all();
        mgr
    };
    assert_eq!(mgr.active_count(), 0);
    drop(mgr);

    // Nothing left running to observe this.
    source.set_size(Size::new(640.0, 480.0));
}
