use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::event::MenuEvent;
use super::model::{
    MenuMode, MenuPlacement, SectionDisplay, encode_displays, parse_displays,
};
use super::view::MenuView;
use crate::monitor::{TierChanged, ViewportMonitor};
use crate::storage::SharedStore;
use crate::tier_aware::{self, TierAware, TierBinding};

/// Collapse contract a sidebar drives on its dependent menu.
///
/// Both operations are idempotent: repeating a call without an intervening
/// change produces no further visible transition.
pub trait CollapsibleMenu {
    fn collapse(&mut self);

    fn expand(&mut self);
}

/// Weak reference a sidebar keeps to its dependent menu.
pub type MenuHandle = Weak<RefCell<dyn CollapsibleMenu>>;

/// Build a [`MenuHandle`] for a shared menu.
pub fn menu_handle<M>(menu: &Rc<RefCell<M>>) -> MenuHandle
where
    M: CollapsibleMenu + 'static,
{
    let menu: Rc<RefCell<dyn CollapsibleMenu>> = menu.clone();
    Rc::downgrade(&menu)
}

/// Secondary menu hosted inside the sidebar.
///
/// Its collapsed/expanded mode is driven by the sidebar; the per-section
/// displays are its own state, persisted under a separate key.
pub struct MenuController {
    binding: TierBinding,
    view: Box<dyn MenuView>,
    store: SharedStore,
    key: String,
    displays: Vec<SectionDisplay>,
    mode: Option<MenuMode>,
    placement: MenuPlacement,
    arrows_bound: bool,
}

impl MenuController {
    pub fn new(
        monitor: &ViewportMonitor,
        mut view: Box<dyn MenuView>,
        store: SharedStore,
        key: impl Into<String>,
    ) -> Self {
        let binding = TierBinding::new(monitor);
        let key = key.into();
        let raw = store.borrow().read(&key);
        let displays = parse_displays(raw.as_deref(), view.section_count());
        let placement = MenuPlacement::for_tier(binding.tier());
        view.set_placement(placement);

        Self {
            binding,
            view,
            store,
            key,
            displays,
            mode: None,
            placement,
            arrows_bound: false,
        }
    }

    /// Construct a shared controller subscribed to tier changes.
    pub fn initialize(
        monitor: &ViewportMonitor,
        view: Box<dyn MenuView>,
        store: SharedStore,
        key: impl Into<String>,
    ) -> Rc<RefCell<Self>> {
        let controller =
            Rc::new(RefCell::new(Self::new(monitor, view, store, key)));
        tier_aware::bind(&controller);
        controller
    }

    pub fn displays(&self) -> &[SectionDisplay] {
        &self.displays
    }

    /// Mode applied by the last collapse/expand, `None` before the first.
    pub fn mode(&self) -> Option<MenuMode> {
        self.mode
    }

    pub fn placement(&self) -> MenuPlacement {
        self.placement
    }

    pub fn arrows_bound(&self) -> bool {
        self.arrows_bound
    }

    pub fn reduce(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::ArrowClicked(index) => {
                if self.arrows_bound {
                    self.toggle_section(index);
                } else {
                    log::debug!("menu arrow {index} ignored while unbound");
                }
            },
        }
    }

    /// Flip the display of one section and persist every display.
    pub fn toggle_section(&mut self, index: usize) {
        let Some(display) = self.displays.get_mut(index) else {
            log::warn!("menu section {index} does not exist");
            return;
        };
        *display = display.toggled();
        let display = *display;

        self.view.set_section_display(index, display);
        self.view.set_section_arrow(index, display.arrow());
        self.persist();
    }

    /// Stop reacting to tier changes and clicks.
    pub fn release(&mut self) {
        self.binding.release();
        self.arrows_bound = false;
    }

    fn persist(&self) {
        let encoded = encode_displays(&self.displays);
        if let Err(err) = self.store.borrow_mut().write(&self.key, &encoded)
        {
            log::warn!("failed to persist menu sections: {err}");
        }
    }
}

impl CollapsibleMenu for MenuController {
    fn collapse(&mut self) {
        if self.mode == Some(MenuMode::Collapsed) {
            return;
        }
        self.mode = Some(MenuMode::Collapsed);
        self.arrows_bound = false;

        self.view.set_mode(MenuMode::Collapsed);
        for index in 0..self.displays.len() {
            self.view.set_section_display(index, SectionDisplay::Hidden);
        }
    }

    fn expand(&mut self) {
        if self.mode == Some(MenuMode::Expanded) {
            return;
        }
        self.mode = Some(MenuMode::Expanded);
        self.arrows_bound = true;

        self.view.set_mode(MenuMode::Expanded);
        for (index, display) in self.displays.iter().enumerate() {
            self.view.set_section_display(index, *display);
            self.view.set_section_arrow(index, display.arrow());
        }
    }
}

impl TierAware for MenuController {
    fn binding(&self) -> &TierBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut TierBinding {
        &mut self.binding
    }

    fn on_tier_changed(&mut self, change: &TierChanged) {
        let placement = MenuPlacement::for_tier(change.tier);
        if placement != self.placement {
            self.placement = placement;
            self.view.set_placement(placement);
        }
    }
}
