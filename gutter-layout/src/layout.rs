use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{LayoutConfig, PreferenceKeys};
use crate::menu::{MenuController, MenuEvent, MenuView, menu_handle};
use crate::monitor::{TierChanged, ViewportMonitor};
use crate::sidebar::{SidebarController, SidebarEvent, SidebarView};
use crate::storage::SharedStore;
use crate::tier::ViewportTier;

/// Markup a [`Layout`] binds to.
///
/// A `None` view means the element is absent and the matching component is
/// not constructed.
pub trait Page {
    fn sidebar_view(&self) -> Option<Box<dyn SidebarView>>;

    fn menu_view(&self) -> Option<Box<dyn MenuView>>;
}

/// Owns the monitor and the live layout components of one document.
pub struct Layout {
    monitor: ViewportMonitor,
    store: SharedStore,
    keys: PreferenceKeys,
    sidebar: Option<Rc<RefCell<SidebarController>>>,
    menu: Option<Rc<RefCell<MenuController>>>,
}

impl Layout {
    pub fn new(config: &LayoutConfig, width: f32, store: SharedStore) -> Self {
        Self {
            monitor: ViewportMonitor::new(config.breakpoints, width),
            store,
            keys: config.keys.clone(),
            sidebar: None,
            menu: None,
        }
    }

    pub fn monitor(&self) -> &ViewportMonitor {
        &self.monitor
    }

    pub fn tier(&self) -> ViewportTier {
        self.monitor.tier()
    }

    pub fn sidebar(&self) -> Option<&Rc<RefCell<SidebarController>>> {
        self.sidebar.as_ref()
    }

    pub fn menu(&self) -> Option<&Rc<RefCell<MenuController>>> {
        self.menu.as_ref()
    }

    /// Initialize every component whose markup `page` provides.
    ///
    /// The menu is built first so the sidebar can drive it from its first
    /// state application. Components already bound are released before
    /// their replacement is built.
    pub fn bind(&mut self, page: &dyn Page) {
        let menu_rebound = self.bind_menu(page);
        let sidebar_rebound = self.bind_sidebar(page);

        if menu_rebound && !sidebar_rebound {
            if let (Some(sidebar), Some(menu)) = (&self.sidebar, &self.menu) {
                sidebar.borrow_mut().attach_menu(menu_handle(menu));
            }
        }
    }

    fn bind_menu(&mut self, page: &dyn Page) -> bool {
        let Some(view) = page.menu_view() else {
            return false;
        };
        if let Some(previous) = self.menu.take() {
            previous.borrow_mut().release();
        }

        self.menu = Some(MenuController::initialize(
            &self.monitor,
            view,
            Rc::clone(&self.store),
            self.keys.menus.clone(),
        ));
        true
    }

    fn bind_sidebar(&mut self, page: &dyn Page) -> bool {
        let Some(view) = page.sidebar_view() else {
            return false;
        };
        if let Some(previous) = self.sidebar.take() {
            previous.borrow_mut().release();
        }

        let menu = self.menu.as_ref().map(menu_handle);
        self.sidebar = Some(SidebarController::initialize(
            &self.monitor,
            view,
            Rc::clone(&self.store),
            self.keys.sidebar.clone(),
            menu,
        ));
        true
    }

    /// Feed a new viewport width to the monitor.
    pub fn resize(&self, width: f32) -> Option<TierChanged> {
        self.monitor.on_resize(width)
    }

    pub fn dispatch_sidebar(&self, event: SidebarEvent) {
        if let Some(sidebar) = &self.sidebar {
            sidebar.borrow_mut().reduce(event);
        }
    }

    pub fn dispatch_menu(&self, event: MenuEvent) {
        if let Some(menu) = &self.menu {
            menu.borrow_mut().reduce(event);
        }
    }

    /// Release every component. The monitor keeps running.
    pub fn unload(&mut self) {
        if let Some(sidebar) = self.sidebar.take() {
            sidebar.borrow_mut().release();
        }
        if let Some(menu) = self.menu.take() {
            menu.borrow_mut().release();
        }
    }
}
