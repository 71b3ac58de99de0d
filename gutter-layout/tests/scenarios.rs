use std::cell::RefCell;
use std::rc::Rc;

use gutter_layout::{
    ArrowDirection, LayoutConfig, MemoryStore, MenuController, MenuMode,
    MenuPlacement, MenuView, PreferenceStore, SectionDisplay, SharedStore,
    SidebarController, SidebarEvent, SidebarMode, SidebarView, ToggleIcon,
    ViewportMonitor, ViewportTier, menu_handle,
};

// Widths landing on each tier with the default breakpoints.
const MOBILE: f32 = 400.0;
const SMALL: f32 = 800.0;
const MEDIUM: f32 = 1100.0;
const LARGE: f32 = 1400.0;

#[derive(Default)]
struct SidebarMarkup {
    visible: bool,
    class: &'static str,
    icon: &'static str,
    lock_active: bool,
}

struct SidebarSurface(Rc<RefCell<SidebarMarkup>>);

impl SidebarView for SidebarSurface {
    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    fn set_mode(&mut self, mode: SidebarMode) {
        self.0.borrow_mut().class = mode.class();
    }

    fn set_toggle_icon(&mut self, icon: ToggleIcon) {
        self.0.borrow_mut().icon = icon.class();
    }

    fn set_lock_active(&mut self, active: bool) {
        self.0.borrow_mut().lock_active = active;
    }

    fn set_toggle_enabled(&mut self, _enabled: bool) {}
}

#[derive(Default)]
struct MenuMarkup {
    transitions: Vec<MenuMode>,
}

struct MenuSurface(Rc<RefCell<MenuMarkup>>);

impl MenuView for MenuSurface {
    fn section_count(&self) -> usize {
        2
    }

    fn set_placement(&mut self, _placement: MenuPlacement) {}

    fn set_mode(&mut self, mode: MenuMode) {
        self.0.borrow_mut().transitions.push(mode);
    }

    fn set_section_display(&mut self, _index: usize, _display: SectionDisplay) {
    }

    fn set_section_arrow(&mut self, _index: usize, _arrow: ArrowDirection) {}
}

struct Page {
    monitor: ViewportMonitor,
    store: Rc<RefCell<MemoryStore>>,
    markup: Rc<RefCell<SidebarMarkup>>,
    sidebar: Rc<RefCell<SidebarController>>,
}

impl Page {
    fn load(width: f32, store: MemoryStore) -> Self {
        let config = LayoutConfig::default();
        let monitor = ViewportMonitor::new(config.breakpoints, width);
        let store = Rc::new(RefCell::new(store));
        let shared: SharedStore = store.clone();
        let markup = Rc::new(RefCell::new(SidebarMarkup::default()));
        let sidebar = SidebarController::initialize(
            &monitor,
            Box::new(SidebarSurface(Rc::clone(&markup))),
            shared,
            config.keys.sidebar,
            None,
        );

        Self {
            monitor,
            store,
            markup,
            sidebar,
        }
    }

    fn collapsed(&self) -> bool {
        self.sidebar.borrow().collapsed()
    }

    fn click(&self, event: SidebarEvent) {
        self.sidebar.borrow_mut().reduce(event);
    }
}

#[test]
fn large_tier_without_preference_starts_expanded() {
    let page = Page::load(LARGE, MemoryStore::new());

    assert!(!page.collapsed());
    assert_eq!(page.markup.borrow().class, "expanded");
    assert_eq!(page.markup.borrow().icon, "bi bi-arrow-left-circle");
}

#[test]
fn small_tier_without_preference_starts_collapsed() {
    let page = Page::load(SMALL, MemoryStore::new());

    assert!(page.collapsed());
    assert_eq!(page.markup.borrow().class, "collapsed");
    assert_eq!(page.markup.borrow().icon, "bi bi-arrow-right-circle");
}

#[test]
fn persisted_lock_pins_state_and_disables_toggle_until_unlocked() {
    let page = Page::load(MEDIUM, MemoryStore::new().with("sidebar", "true"));
    assert_eq!(page.monitor.tier(), ViewportTier::Medium);

    assert!(page.collapsed());
    assert!(page.markup.borrow().lock_active);

    page.click(SidebarEvent::ToggleClicked);
    assert!(page.collapsed());

    page.click(SidebarEvent::LockClicked);
    assert!(!page.markup.borrow().lock_active);
    assert_eq!(page.store.borrow().read("sidebar"), None);

    page.click(SidebarEvent::ToggleClicked);
    assert!(!page.collapsed());
}

#[test]
fn mobile_round_trip_hides_and_restores_sidebar() {
    let page = Page::load(LARGE, MemoryStore::new());

    page.monitor.on_resize(MOBILE);
    assert!(!page.collapsed());
    assert!(!page.markup.borrow().visible);

    page.monitor.on_resize(LARGE);
    assert!(!page.collapsed());
    assert!(page.markup.borrow().visible);
}

#[test]
fn lock_overrides_every_non_mobile_tier() {
    let page = Page::load(LARGE, MemoryStore::new());
    page.click(SidebarEvent::ToggleClicked);
    page.click(SidebarEvent::LockClicked);
    assert_eq!(
        page.store.borrow().read("sidebar").as_deref(),
        Some("true")
    );

    for width in [SMALL, MEDIUM, LARGE] {
        page.monitor.on_resize(width);
        assert!(page.collapsed(), "collapsed should hold at {width}px");
    }

    page.monitor.on_resize(MOBILE);
    assert!(!page.collapsed());

    page.monitor.on_resize(LARGE);
    assert!(page.collapsed());
    assert_eq!(page.sidebar.borrow().lock(), Some(true));
}

#[test]
fn unlocking_keeps_collapse_and_mobile_round_trip_keeps_configuration() {
    let page = Page::load(MEDIUM, MemoryStore::new());
    assert!(page.collapsed());

    page.click(SidebarEvent::LockClicked);
    page.click(SidebarEvent::LockClicked);
    assert!(page.collapsed());
    assert_eq!(page.sidebar.borrow().lock(), None);

    page.monitor.on_resize(MOBILE);
    page.monitor.on_resize(MEDIUM);
    assert!(page.collapsed());
    assert_eq!(page.sidebar.borrow().lock(), None);
}

#[test]
fn resizing_within_a_tier_does_not_touch_manual_state() {
    let page = Page::load(LARGE, MemoryStore::new());
    page.click(SidebarEvent::ToggleClicked);

    for width in [1300.0, 1900.0, 1201.0] {
        assert!(page.monitor.on_resize(width).is_none());
    }

    assert!(page.collapsed());
}

#[test]
fn dependent_menu_transitions_once_per_sidebar_change() {
    let config = LayoutConfig::default();
    let monitor = ViewportMonitor::new(config.breakpoints, LARGE);
    let store: SharedStore = Rc::new(RefCell::new(MemoryStore::new()));
    let menu_markup = Rc::new(RefCell::new(MenuMarkup::default()));
    let menu = MenuController::initialize(
        &monitor,
        Box::new(MenuSurface(Rc::clone(&menu_markup))),
        Rc::clone(&store),
        config.keys.menus.clone(),
    );
    let sidebar_markup = Rc::new(RefCell::new(SidebarMarkup::default()));
    let sidebar = SidebarController::initialize(
        &monitor,
        Box::new(SidebarSurface(sidebar_markup)),
        store,
        config.keys.sidebar.clone(),
        Some(menu_handle(&menu)),
    );
    menu_markup.borrow_mut().transitions.clear();

    sidebar.borrow_mut().toggle_collapsed();
    assert_eq!(menu_markup.borrow().transitions, vec![MenuMode::Collapsed]);

    sidebar.borrow_mut().toggle_collapsed();
    assert_eq!(
        menu_markup.borrow().transitions,
        vec![MenuMode::Collapsed, MenuMode::Expanded]
    );

    sidebar.borrow_mut().apply_state();
    monitor.on_resize(1900.0);
    sidebar.borrow_mut().toggle_lock();
    assert_eq!(menu_markup.borrow().transitions.len(), 2);
    assert_eq!(menu.borrow().mode(), Some(MenuMode::Expanded));
}
