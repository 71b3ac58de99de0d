use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::tier::{Breakpoints, ViewportTier};

/// Name of the notification emitted once per tier transition.
pub const VIEWPORT_CHANGED: &str = "viewport_changed";

/// Payload of a `viewport_changed` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierChanged {
    pub tier: ViewportTier,
    pub previous: ViewportTier,
}

/// Opaque handle returned by [`ViewportMonitor::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

type Handler = Rc<RefCell<dyn FnMut(&TierChanged)>>;

struct Subscriber {
    handle: SubscriptionHandle,
    handler: Handler,
}

struct MonitorState {
    breakpoints: Breakpoints,
    width: f32,
    tier: ViewportTier,
    next_handle: u64,
    subscribers: Vec<Subscriber>,
}

/// Tracks the current viewport tier and broadcasts tier transitions.
///
/// The monitor is a cheap clonable handle over shared single-threaded
/// state. Subscribers run synchronously, in registration order, inside
/// [`ViewportMonitor::on_resize`]; the tier is updated before the first
/// subscriber runs.
#[derive(Clone)]
pub struct ViewportMonitor {
    inner: Rc<RefCell<MonitorState>>,
}

impl ViewportMonitor {
    pub fn new(breakpoints: Breakpoints, width: f32) -> Self {
        let tier = breakpoints.classify(width);
        log::debug!("viewport monitor started at {width}px ({tier})");

        Self {
            inner: Rc::new(RefCell::new(MonitorState {
                breakpoints,
                width,
                tier,
                next_handle: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Return the tier computed from the last observed width.
    pub fn tier(&self) -> ViewportTier {
        self.inner.borrow().tier
    }

    /// Return the last observed width.
    pub fn width(&self) -> f32 {
        self.inner.borrow().width
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.inner.borrow().breakpoints
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register a handler for tier transitions.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&TierChanged) + 'static,
    {
        let mut state = self.inner.borrow_mut();
        let handle = SubscriptionHandle(state.next_handle);
        state.next_handle += 1;
        state.subscribers.push(Subscriber {
            handle,
            handler: Rc::new(RefCell::new(handler)),
        });
        handle
    }

    /// Remove a handler. Returns `false` when the handle was not registered.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut state = self.inner.borrow_mut();
        let before = state.subscribers.len();
        state.subscribers.retain(|entry| entry.handle != handle);
        before != state.subscribers.len()
    }

    /// Record a new viewport width.
    ///
    /// When the width crosses into another tier every subscriber is notified
    /// once and the transition is returned; otherwise nothing is emitted.
    pub fn on_resize(&self, width: f32) -> Option<TierChanged> {
        let change = {
            let mut state = self.inner.borrow_mut();
            state.width = width;
            let tier = state.breakpoints.classify(width);
            if tier == state.tier {
                return None;
            }
            let previous = state.tier;
            state.tier = tier;
            TierChanged { tier, previous }
        };

        log::debug!(
            "{VIEWPORT_CHANGED}: {} -> {} at {width}px",
            change.previous,
            change.tier
        );
        self.dispatch(&change);
        Some(change)
    }

    fn dispatch(&self, change: &TierChanged) {
        let handles: Vec<SubscriptionHandle> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|entry| entry.handle)
            .collect();

        for handle in handles {
            // Re-resolve every handle so a subscriber removed by an earlier
            // handler in this same dispatch is never called.
            let handler = {
                let state = self.inner.borrow();
                state
                    .subscribers
                    .iter()
                    .find(|entry| entry.handle == handle)
                    .map(|entry| Rc::clone(&entry.handler))
            };
            let Some(handler) = handler else {
                continue;
            };

            match handler.try_borrow_mut() {
                Ok(mut callback) => (*callback)(change),
                Err(_) => log::warn!(
                    "skipping re-entrant {VIEWPORT_CHANGED} subscriber {handle:?}"
                ),
            }
        }
    }
}

impl fmt::Debug for ViewportMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("ViewportMonitor")
            .field("width", &state.width)
            .field("tier", &state.tier)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}
