use std::cell::RefCell;
use std::rc::Rc;

use gutter_layout::{
    ArrowDirection, MenuMode, MenuPlacement, MenuView, Page, SectionDisplay,
    SidebarMode, SidebarView, ToggleIcon,
};

/// Sections of the secondary menu: a title and its entries.
const MENU_SECTIONS: &[(&str, &[&str])] = &[
    ("Workspace", &["Overview", "Files", "Search"]),
    ("Content", &["Documents", "Images", "Archive"]),
    ("Settings", &["Profile", "Appearance"]),
];

/// Rendered state of the sidebar markup.
#[derive(Debug, Clone)]
pub(crate) struct SidebarMarkup {
    pub(crate) visible: bool,
    pub(crate) mode: SidebarMode,
    pub(crate) icon: ToggleIcon,
    pub(crate) lock_active: bool,
    pub(crate) toggle_enabled: bool,
}

impl Default for SidebarMarkup {
    fn default() -> Self {
        Self {
            visible: true,
            mode: SidebarMode::Expanded,
            icon: ToggleIcon::Left,
            lock_active: false,
            toggle_enabled: true,
        }
    }
}

/// One rendered menu section.
#[derive(Debug, Clone)]
pub(crate) struct MenuSection {
    pub(crate) title: &'static str,
    pub(crate) entries: &'static [&'static str],
    pub(crate) display: SectionDisplay,
    pub(crate) arrow: ArrowDirection,
}

/// Rendered state of the secondary menu markup.
#[derive(Debug, Clone)]
pub(crate) struct MenuMarkup {
    pub(crate) placement: MenuPlacement,
    pub(crate) mode: MenuMode,
    pub(crate) sections: Vec<MenuSection>,
}

impl Default for MenuMarkup {
    fn default() -> Self {
        let sections = MENU_SECTIONS
            .iter()
            .map(|&(title, entries)| MenuSection {
                title,
                entries,
                display: SectionDisplay::Hidden,
                arrow: ArrowDirection::Down,
            })
            .collect();

        Self {
            placement: MenuPlacement::Sidebar,
            mode: MenuMode::Expanded,
            sections,
        }
    }
}

struct SidebarSurface(Rc<RefCell<SidebarMarkup>>);

impl SidebarView for SidebarSurface {
    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    fn set_mode(&mut self, mode: SidebarMode) {
        self.0.borrow_mut().mode = mode;
    }

    fn set_toggle_icon(&mut self, icon: ToggleIcon) {
        self.0.borrow_mut().icon = icon;
    }

    fn set_lock_active(&mut self, active: bool) {
        self.0.borrow_mut().lock_active = active;
    }

    fn set_toggle_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().toggle_enabled = enabled;
    }
}

struct MenuSurface(Rc<RefCell<MenuMarkup>>);

impl MenuView for MenuSurface {
    fn section_count(&self) -> usize {
        self.0.borrow().sections.len()
    }

    fn set_placement(&mut self, placement: MenuPlacement) {
        self.0.borrow_mut().placement = placement;
    }

    fn set_mode(&mut self, mode: MenuMode) {
        self.0.borrow_mut().mode = mode;
    }

    fn set_section_display(&mut self, index: usize, display: SectionDisplay) {
        if let Some(section) = self.0.borrow_mut().sections.get_mut(index) {
            section.display = display;
        }
    }

    fn set_section_arrow(&mut self, index: usize, arrow: ArrowDirection) {
        if let Some(section) = self.0.borrow_mut().sections.get_mut(index) {
            section.arrow = arrow;
        }
    }
}

/// Window markup handed to the layout controllers.
#[derive(Debug, Default)]
pub(crate) struct Markup {
    sidebar: Rc<RefCell<SidebarMarkup>>,
    menu: Rc<RefCell<MenuMarkup>>,
}

impl Markup {
    /// Snapshot of the sidebar markup for rendering.
    pub(crate) fn sidebar(&self) -> SidebarMarkup {
        self.sidebar.borrow().clone()
    }

    /// Snapshot of the menu markup for rendering.
    pub(crate) fn menu(&self) -> MenuMarkup {
        self.menu.borrow().clone()
    }
}

impl Page for Markup {
    fn sidebar_view(&self) -> Option<Box<dyn SidebarView>> {
        Some(Box::new(SidebarSurface(Rc::clone(&self.sidebar))))
    }

    fn menu_view(&self) -> Option<Box<dyn MenuView>> {
        Some(Box::new(MenuSurface(Rc::clone(&self.menu))))
    }
}
