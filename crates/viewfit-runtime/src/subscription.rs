#![forbid(unsafe_code)]

//! Viewport event subscriptions with scoped listener lifecycle.
//!
//! Each fitting instance that reacts to resize signals installs a listener;
//! the only resource-leak risk in this subsystem is a listener that outlives
//! its component. Subscriptions make the acquisition scoped: the manager
//! owns every running listener and releases all of them on reconcile,
//! explicit stop, or drop.
//!
//! # How it works
//!
//! 1. The page declares the set of subscriptions it wants active
//! 2. [`SubscriptionManager::reconcile`] compares declared vs. running by id
//! 3. New subscriptions are started, removed ones are stopped and joined
//! 4. Produced [`ViewportEvent`]s are drained into the fit controller

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

use viewfit_core::event::ViewportEvent;
use viewfit_core::geometry::Size;
use web_time::Duration;

use crate::source::ViewportSource;

/// A unique identifier for a subscription.
///
/// Subscriptions with the same id are considered identical; the manager
/// uses this to keep unchanged listeners running across reconciles.
pub type SubId = u64;

/// A continuous producer of viewport events.
///
/// Implementations run on a background thread and send events through the
/// provided channel until the channel disconnects or the stop signal fires.
pub trait Subscription: Send {
    /// Unique identifier for deduplication.
    fn id(&self) -> SubId;

    /// Produce events until stopped.
    fn run(&self, sender: mpsc::Sender<ViewportEvent>, stop: StopSignal);
}

/// Signal a running subscription polls to learn it should exit.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        (
            Self {
                inner: inner.clone(),
            },
            StopTrigger { inner },
        )
    }

    /// Check if the stop signal has been triggered.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.inner.0.lock().unwrap()
    }

    /// Block until the signal fires or the timeout elapses.
    ///
    /// Returns `true` if stopped, `false` on timeout. Subscriptions use
    /// this as their poll cadence so teardown interrupts the wait instead
    /// of racing it.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let stopped = lock.lock().unwrap();
        if *stopped {
            return true;
        }
        let (stopped, _timeout) = cvar.wait_timeout(stopped, duration).unwrap();
        *stopped
    }
}

/// Runtime-side handle that fires a [`StopSignal`].
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap() = true;
        cvar.notify_all();
    }
}

/// A started subscription: its id, its stop trigger, and its thread.
struct RunningSubscription {
    id: SubId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningSubscription {
    /// Stop the listener and join its thread.
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RunningSubscription {
    fn drop(&mut self) {
        // Fire the signal; joining in drop could block the UI thread.
        self.trigger.stop();
    }
}

/// Owns every running listener for one fitting instance.
///
/// Dropping the manager stops all of them: scoped acquisition with
/// guaranteed release on unmount.
pub struct SubscriptionManager {
    active: Vec<RunningSubscription>,
    sender: mpsc::Sender<ViewportEvent>,
    receiver: mpsc::Receiver<ViewportEvent>,
}

impl SubscriptionManager {
    /// Create a manager with no running subscriptions.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            active: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Update the set of running subscriptions to match `declared`.
    ///
    /// Subscriptions whose id is no longer declared are stopped and
    /// joined; newly declared ids are started; unchanged ids keep their
    /// running listener. Duplicate ids within `declared` start once.
    pub fn reconcile(&mut self, declared: Vec<Box<dyn Subscription>>) {
        let declared_ids: HashSet<SubId> = declared.iter().map(|s| s.id()).collect();

        let mut kept = Vec::new();
        for running in self.active.drain(..) {
            if declared_ids.contains(&running.id) {
                kept.push(running);
            } else {
                tracing::debug!(sub_id = running.id, "stopping viewport subscription");
                running.stop();
            }
        }
        self.active = kept;

        let mut running_ids: HashSet<SubId> = self.active.iter().map(|r| r.id).collect();
        for sub in declared {
            let id = sub.id();
            if !running_ids.insert(id) {
                continue;
            }

            tracing::debug!(sub_id = id, "starting viewport subscription");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();
            let thread = thread::spawn(move || sub.run(sender, signal));

            self.active.push(RunningSubscription {
                id,
                trigger,
                thread: Some(thread),
            });
        }
    }

    /// Drain pending events from all running subscriptions.
    #[must_use]
    pub fn drain_events(&self) -> Vec<ViewportEvent> {
        self.receiver.try_iter().collect()
    }

    /// Number of running subscriptions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Stop and join every running subscription.
    pub fn stop_all(&mut self) {
        for running in self.active.drain(..) {
            running.stop();
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SubscriptionManager {
    fn drop(&mut self) {
        self.stop_all();
    }
}

// --- Built-in subscriptions ---

/// Watches a [`ViewportSource`] and emits a resize event whenever the
/// observed size changes.
///
/// Polling the injected source (rather than hooking a platform resize
/// callback) keeps the runtime free of ambient globals; platform glue
/// writes into the source on its own schedule. The first observation
/// always emits, delivering the initial size.
pub struct WatchResize {
    id: SubId,
    interval: Duration,
    source: Arc<dyn ViewportSource + Send + Sync>,
}

impl WatchResize {
    /// Watch `source` at the given poll interval.
    #[must_use]
    pub fn new(
        id: SubId,
        interval: Duration,
        source: Arc<dyn ViewportSource + Send + Sync>,
    ) -> Self {
        Self {
            id,
            interval,
            source,
        }
    }
}

impl Subscription for WatchResize {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<ViewportEvent>, stop: StopSignal) {
        let mut last: Option<Size> = None;
        loop {
            if stop.wait_timeout(self.interval) {
                break;
            }
            let size = self.source.size();
            if last != Some(size) {
                last = Some(size);
                if sender.send(ViewportEvent::resize(size)).is_err() {
                    break;
                }
            }
        }
    }
}

/// A test double that sends a fixed event sequence and exits.
pub struct MockSubscription {
    id: SubId,
    events: Vec<ViewportEvent>,
}

impl MockSubscription {
    /// Create a mock that sends the given events once started.
    #[must_use]
    pub fn new(id: SubId, events: Vec<ViewportEvent>) -> Self {
        Self { id, events }
    }
}

impl Subscription for MockSubscription {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<ViewportEvent>, _stop: StopSignal) {
        for event in &self.events {
            if sender.send(*event).is_err() {
                break;
            }
        }
    }
}
