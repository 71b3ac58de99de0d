use std::cell::RefCell;
use std::rc::Rc;

use crate::monitor::{SubscriptionHandle, TierChanged, ViewportMonitor};
use crate::tier::ViewportTier;

/// Tier snapshot and monitor subscription owned by a tier-aware component.
#[derive(Debug)]
pub struct TierBinding {
    monitor: ViewportMonitor,
    tier: ViewportTier,
    handle: Option<SubscriptionHandle>,
}

impl TierBinding {
    /// Snapshot the monitor's current tier. The binding is not subscribed
    /// until [`bind`] runs for the owning component.
    pub fn new(monitor: &ViewportMonitor) -> Self {
        Self {
            monitor: monitor.clone(),
            tier: monitor.tier(),
            handle: None,
        }
    }

    pub fn tier(&self) -> ViewportTier {
        self.tier
    }

    pub fn record(&mut self, tier: ViewportTier) {
        self.tier = tier;
    }

    pub fn monitor(&self) -> &ViewportMonitor {
        &self.monitor
    }

    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop receiving tier notifications. Safe to call more than once.
    pub fn release(&mut self) {
        match self.handle.take() {
            Some(handle) => {
                self.monitor.unsubscribe(handle);
            },
            None => log::debug!("tier binding already released"),
        }
    }
}

impl Drop for TierBinding {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.monitor.unsubscribe(handle);
        }
    }
}

/// Component that reacts to viewport tier transitions.
pub trait TierAware {
    fn binding(&self) -> &TierBinding;

    fn binding_mut(&mut self) -> &mut TierBinding;

    /// Component specific reaction. The binding already holds `change.tier`
    /// when this runs.
    fn on_tier_changed(&mut self, change: &TierChanged);

    fn tier(&self) -> ViewportTier {
        self.binding().tier()
    }
}

/// Deliver a tier transition: record the new tier, then let the component
/// reconcile.
pub fn viewport_changed<T>(target: &mut T, change: &TierChanged)
where
    T: TierAware + ?Sized,
{
    target.binding_mut().record(change.tier);
    target.on_tier_changed(change);
}

/// Subscribe a shared component to its binding's monitor.
///
/// The monitor only keeps a weak reference; a dropped component is skipped.
pub fn bind<T>(target: &Rc<RefCell<T>>)
where
    T: TierAware + 'static,
{
    let weak = Rc::downgrade(target);
    let monitor = target.borrow().binding().monitor().clone();

    let handle = monitor.subscribe(move |change| {
        let Some(component) = weak.upgrade() else {
            log::debug!("tier-aware component dropped before release");
            return;
        };
        match component.try_borrow_mut() {
            Ok(mut component) => viewport_changed(&mut *component, change),
            Err(_) => log::warn!(
                "tier-aware component busy, dropping {} notification",
                change.tier
            ),
        }
    });

    let previous = target.borrow_mut().binding_mut().handle.replace(handle);
    if let Some(previous) = previous {
        monitor.unsubscribe(previous);
    }
}
