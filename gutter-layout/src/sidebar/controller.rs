use std::cell::RefCell;
use std::rc::Rc;

use super::event::SidebarEvent;
use super::model::{SidebarState, encode_lock, parse_lock};
use super::view::SidebarView;
use crate::menu::MenuHandle;
use crate::monitor::{TierChanged, ViewportMonitor};
use crate::storage::SharedStore;
use crate::tier::ViewportTier;
use crate::tier_aware::{self, TierAware, TierBinding};

/// Collapsible, lockable sidebar.
///
/// Reconciles tier changes, toggle clicks and the persisted lock into one
/// [`SidebarState`], mirrors it onto the [`SidebarView`] and forwards the
/// collapse mode to the attached dependent menu.
pub struct SidebarController {
    binding: TierBinding,
    view: Box<dyn SidebarView>,
    store: SharedStore,
    key: String,
    state: SidebarState,
    toggle_bound: bool,
    lock_bound: bool,
    menu: Option<MenuHandle>,
}

impl SidebarController {
    /// Build the controller from the persisted lock and apply it at once.
    pub fn new(
        monitor: &ViewportMonitor,
        view: Box<dyn SidebarView>,
        store: SharedStore,
        key: impl Into<String>,
        menu: Option<MenuHandle>,
    ) -> Self {
        let binding = TierBinding::new(monitor);
        let key = key.into();
        let raw = store.borrow().read(&key);
        let lock = parse_lock(raw.as_deref());
        let state = SidebarState::initial(binding.tier(), lock);

        let mut controller = Self {
            binding,
            view,
            store,
            key,
            state,
            toggle_bound: lock.is_none(),
            lock_bound: true,
            menu,
        };
        controller.view.set_lock_active(lock.is_some());
        controller.view.set_toggle_enabled(controller.toggle_bound);
        controller.apply_state();

        log::debug!(
            "sidebar initialized at {} (collapsed: {}, lock: {:?})",
            controller.tier(),
            controller.state.collapsed(),
            lock
        );
        controller
    }

    /// Construct a shared controller subscribed to tier changes.
    pub fn initialize(
        monitor: &ViewportMonitor,
        view: Box<dyn SidebarView>,
        store: SharedStore,
        key: impl Into<String>,
        menu: Option<MenuHandle>,
    ) -> Rc<RefCell<Self>> {
        let controller = Rc::new(RefCell::new(Self::new(
            monitor, view, store, key, menu,
        )));
        tier_aware::bind(&controller);
        controller
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn collapsed(&self) -> bool {
        self.state.collapsed()
    }

    pub fn lock(&self) -> Option<bool> {
        self.state.lock()
    }

    /// The sidebar is hidden while the viewport is mobile.
    pub fn is_visible(&self) -> bool {
        !self.tier().is_mobile()
    }

    pub fn toggle_bound(&self) -> bool {
        self.toggle_bound
    }

    pub fn lock_bound(&self) -> bool {
        self.lock_bound
    }

    pub fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    /// Route a click to its control. Clicks on a detached control are
    /// dropped.
    pub fn reduce(&mut self, event: SidebarEvent) {
        match event {
            SidebarEvent::ToggleClicked => {
                if self.toggle_bound {
                    self.toggle_collapsed();
                } else {
                    log::debug!("sidebar toggle ignored while unbound");
                }
            },
            SidebarEvent::LockClicked => {
                if self.lock_bound {
                    self.toggle_lock();
                } else {
                    log::debug!("sidebar lock ignored while unbound");
                }
            },
        }
    }

    /// Flip between collapsed and expanded.
    pub fn toggle_collapsed(&mut self) {
        if self.tier() == ViewportTier::Mobile {
            log::debug!("sidebar toggle ignored on mobile");
            return;
        }
        self.state.toggle();
        self.apply_state();
    }

    /// Persist the current collapse value as a lock, or clear the lock.
    ///
    /// Locking detaches the toggle click binding; unlocking restores it.
    /// Neither changes `collapsed`. A failed store write is logged and the
    /// in-memory lock still flips, so the next click undoes it.
    pub fn toggle_lock(&mut self) {
        if self.state.is_locked() {
            if let Err(err) = self.store.borrow_mut().remove(&self.key) {
                log::warn!("failed to clear sidebar lock: {err}");
            }
            self.state.set_lock(None);
            self.toggle_bound = true;
            self.view.set_lock_active(false);
            self.view.set_toggle_enabled(true);
            log::debug!("sidebar unlocked");
        } else {
            let locked = self.state.resting_collapsed();
            if let Err(err) = self
                .store
                .borrow_mut()
                .write(&self.key, encode_lock(locked))
            {
                log::warn!("failed to persist sidebar lock: {err}");
            }
            self.state.set_lock(Some(locked));
            self.toggle_bound = false;
            self.view.set_lock_active(true);
            self.view.set_toggle_enabled(false);
            log::debug!("sidebar locked (collapsed: {locked})");
        }
    }

    /// Attach a dependent menu and bring it in line with the current mode.
    pub fn attach_menu(&mut self, menu: MenuHandle) {
        self.menu = Some(menu);
        self.apply_state();
    }

    pub fn detach_menu(&mut self) {
        self.menu = None;
    }

    /// Push the current state to the view and the dependent menu.
    ///
    /// The menu is told to collapse or expand on every call; it decides
    /// whether that is a transition.
    pub fn apply_state(&mut self) {
        let visible = self.is_visible();
        self.view.set_visible(visible);
        self.view.set_mode(self.state.mode());
        self.view.set_toggle_icon(self.state.icon());

        let menu = match &self.menu {
            Some(handle) => handle.upgrade(),
            None => return,
        };
        let Some(menu) = menu else {
            log::debug!("dependent menu dropped, detaching");
            self.menu = None;
            return;
        };

        match menu.try_borrow_mut() {
            Ok(mut menu) => {
                if self.state.collapsed() {
                    menu.collapse();
                } else {
                    menu.expand();
                }
            },
            Err(_) => log::warn!("dependent menu busy, skipping sync"),
        };
    }

    /// Unsubscribe from tier changes and detach both click bindings.
    pub fn release(&mut self) {
        self.binding.release();
        self.toggle_bound = false;
        self.lock_bound = false;
        self.menu = None;
    }
}

impl TierAware for SidebarController {
    fn binding(&self) -> &TierBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut TierBinding {
        &mut self.binding
    }

    fn on_tier_changed(&mut self, change: &TierChanged) {
        self.state.reconcile(change.tier, change.previous);
        log::debug!(
            "sidebar reconciled for {} (collapsed: {})",
            change.tier,
            self.state.collapsed()
        );
        self.apply_state();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::SidebarController;
    use crate::errors::StoreError;
    use crate::menu::{CollapsibleMenu, menu_handle};
    use crate::monitor::ViewportMonitor;
    use crate::sidebar::{SidebarEvent, SidebarMode, SidebarView, ToggleIcon};
    use crate::storage::{MemoryStore, PreferenceStore, SharedStore};
    use crate::tier::Breakpoints;

    #[derive(Default)]
    struct Surface {
        visible: Option<bool>,
        mode: Option<SidebarMode>,
        icon: Option<ToggleIcon>,
        lock_active: Option<bool>,
        toggle_enabled: Option<bool>,
    }

    struct RecordingView(Rc<RefCell<Surface>>);

    impl SidebarView for RecordingView {
        fn set_visible(&mut self, visible: bool) {
            self.0.borrow_mut().visible = Some(visible);
        }

        fn set_mode(&mut self, mode: SidebarMode) {
            self.0.borrow_mut().mode = Some(mode);
        }

        fn set_toggle_icon(&mut self, icon: ToggleIcon) {
            self.0.borrow_mut().icon = Some(icon);
        }

        fn set_lock_active(&mut self, active: bool) {
            self.0.borrow_mut().lock_active = Some(active);
        }

        fn set_toggle_enabled(&mut self, enabled: bool) {
            self.0.borrow_mut().toggle_enabled = Some(enabled);
        }
    }

    #[derive(Default)]
    struct CountingMenu {
        collapses: usize,
        expands: usize,
    }

    impl CollapsibleMenu for CountingMenu {
        fn collapse(&mut self) {
            self.collapses += 1;
        }

        fn expand(&mut self) {
            self.expands += 1;
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)
                .into())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied)
                .into())
        }
    }

    struct Fixture {
        monitor: ViewportMonitor,
        surface: Rc<RefCell<Surface>>,
        store: Rc<RefCell<MemoryStore>>,
        sidebar: Rc<RefCell<SidebarController>>,
    }

    fn fixture(width: f32, store: MemoryStore) -> Fixture {
        let monitor = ViewportMonitor::new(Breakpoints::default(), width);
        let surface = Rc::new(RefCell::new(Surface::default()));
        let store = Rc::new(RefCell::new(store));
        let shared: SharedStore = store.clone();
        let sidebar = SidebarController::initialize(
            &monitor,
            Box::new(RecordingView(Rc::clone(&surface))),
            shared,
            "sidebar",
            None,
        );

        Fixture {
            monitor,
            surface,
            store,
            sidebar,
        }
    }

    #[test]
    fn given_large_tier_without_lock_when_constructed_then_expanded() {
        let fx = fixture(1400.0, MemoryStore::new());

        assert!(!fx.sidebar.borrow().collapsed());
        let surface = fx.surface.borrow();
        assert_eq!(surface.mode, Some(SidebarMode::Expanded));
        assert_eq!(surface.icon, Some(ToggleIcon::Left));
        assert_eq!(surface.visible, Some(true));
        assert_eq!(surface.lock_active, Some(false));
    }

    #[test]
    fn given_mobile_tier_when_constructed_then_hidden_and_expanded() {
        let fx = fixture(400.0, MemoryStore::new().with("sidebar", "true"));

        assert!(!fx.sidebar.borrow().collapsed());
        assert_eq!(fx.sidebar.borrow().lock(), Some(true));
        assert_eq!(fx.surface.borrow().visible, Some(false));
    }

    #[test]
    fn given_malformed_lock_when_constructed_then_treated_as_unlocked() {
        let fx = fixture(800.0, MemoryStore::new().with("sidebar", "maybe"));

        assert_eq!(fx.sidebar.borrow().lock(), None);
        assert!(fx.sidebar.borrow().collapsed());
        assert!(fx.sidebar.borrow().toggle_bound());
    }

    #[test]
    fn given_unlocked_sidebar_when_toggle_clicked_twice_then_state_returns() {
        let fx = fixture(1400.0, MemoryStore::new());

        fx.sidebar.borrow_mut().reduce(SidebarEvent::ToggleClicked);
        assert!(fx.sidebar.borrow().collapsed());
        assert_eq!(fx.surface.borrow().mode, Some(SidebarMode::Collapsed));
        assert_eq!(fx.surface.borrow().icon, Some(ToggleIcon::Right));

        fx.sidebar.borrow_mut().reduce(SidebarEvent::ToggleClicked);
        assert!(!fx.sidebar.borrow().collapsed());
        assert_eq!(fx.surface.borrow().mode, Some(SidebarMode::Expanded));
    }

    #[test]
    fn given_expanded_sidebar_when_locked_then_current_value_is_persisted() {
        let fx = fixture(1400.0, MemoryStore::new());

        fx.sidebar.borrow_mut().reduce(SidebarEvent::LockClicked);

        assert_eq!(
            fx.store.borrow().read("sidebar").as_deref(),
            Some("false")
        );
        assert_eq!(fx.sidebar.borrow().lock(), Some(false));
        assert!(!fx.sidebar.borrow().toggle_bound());
        assert_eq!(fx.surface.borrow().lock_active, Some(true));
        assert_eq!(fx.surface.borrow().toggle_enabled, Some(false));

        fx.sidebar.borrow_mut().reduce(SidebarEvent::ToggleClicked);
        assert!(!fx.sidebar.borrow().collapsed());
    }

    #[test]
    fn given_locked_sidebar_when_unlocked_then_preference_cleared_and_state_kept()
     {
        let fx = fixture(1400.0, MemoryStore::new().with("sidebar", "true"));
        assert!(fx.sidebar.borrow().collapsed());

        fx.sidebar.borrow_mut().toggle_lock();

        assert_eq!(fx.store.borrow().read("sidebar"), None);
        assert_eq!(fx.sidebar.borrow().lock(), None);
        assert!(fx.sidebar.borrow().collapsed());
        assert!(fx.sidebar.borrow().toggle_bound());
        assert_eq!(fx.surface.borrow().lock_active, Some(false));
    }

    #[test]
    fn given_mobile_round_trip_when_locked_then_lock_resumes() {
        let fx = fixture(800.0, MemoryStore::new().with("sidebar", "false"));
        assert!(!fx.sidebar.borrow().collapsed());

        fx.monitor.on_resize(400.0);
        assert!(!fx.sidebar.borrow().collapsed());
        assert!(!fx.sidebar.borrow().is_visible());

        fx.monitor.on_resize(800.0);
        assert!(!fx.sidebar.borrow().collapsed());
        assert_eq!(fx.sidebar.borrow().lock(), Some(false));
        assert_eq!(fx.surface.borrow().visible, Some(true));
    }

    #[test]
    fn given_mobile_tier_when_toggled_then_collapsed_stays_false() {
        let fx = fixture(400.0, MemoryStore::new());

        fx.sidebar.borrow_mut().toggle_collapsed();

        assert!(!fx.sidebar.borrow().collapsed());
    }

    #[test]
    fn given_mobile_tier_when_locked_then_pre_mobile_value_is_persisted() {
        let fx = fixture(800.0, MemoryStore::new());
        fx.monitor.on_resize(400.0);

        fx.sidebar.borrow_mut().toggle_lock();

        assert_eq!(
            fx.store.borrow().read("sidebar").as_deref(),
            Some("true")
        );
        fx.monitor.on_resize(1400.0);
        assert!(fx.sidebar.borrow().collapsed());
    }

    #[test]
    fn given_attached_menu_when_state_applies_then_menu_follows_mode() {
        let fx = fixture(1400.0, MemoryStore::new());
        let menu = Rc::new(RefCell::new(CountingMenu::default()));

        fx.sidebar.borrow_mut().attach_menu(menu_handle(&menu));
        assert_eq!(menu.borrow().expands, 1);

        fx.sidebar.borrow_mut().toggle_collapsed();
        assert_eq!(menu.borrow().collapses, 1);

        drop(menu);
        fx.sidebar.borrow_mut().toggle_collapsed();
        assert!(!fx.sidebar.borrow().has_menu());
    }

    #[test]
    fn given_released_sidebar_when_events_arrive_then_nothing_changes() {
        let fx = fixture(1400.0, MemoryStore::new());

        fx.sidebar.borrow_mut().release();
        fx.sidebar.borrow_mut().reduce(SidebarEvent::ToggleClicked);
        fx.sidebar.borrow_mut().reduce(SidebarEvent::LockClicked);
        fx.monitor.on_resize(800.0);

        assert!(!fx.sidebar.borrow().collapsed());
        assert_eq!(fx.store.borrow().read("sidebar"), None);
        assert_eq!(fx.monitor.subscriber_count(), 0);
    }

    #[test]
    fn given_read_only_store_when_lock_clicked_twice_then_sidebar_unlocks() {
        let monitor = ViewportMonitor::new(Breakpoints::default(), 1400.0);
        let surface = Rc::new(RefCell::new(Surface::default()));
        let store: SharedStore = Rc::new(RefCell::new(ReadOnlyStore));
        let sidebar = SidebarController::initialize(
            &monitor,
            Box::new(RecordingView(Rc::clone(&surface))),
            store,
            "sidebar",
            None,
        );

        sidebar.borrow_mut().reduce(SidebarEvent::LockClicked);
        assert_eq!(sidebar.borrow().lock(), Some(false));
        assert_eq!(surface.borrow().lock_active, Some(true));

        sidebar.borrow_mut().reduce(SidebarEvent::LockClicked);
        assert_eq!(sidebar.borrow().lock(), None);
        assert!(sidebar.borrow().toggle_bound());
        assert_eq!(surface.borrow().lock_active, Some(false));
        assert_eq!(surface.borrow().toggle_enabled, Some(true));

        sidebar.borrow_mut().reduce(SidebarEvent::ToggleClicked);
        assert!(sidebar.borrow().collapsed());
    }
}
