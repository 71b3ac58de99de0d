//! Viewport tiers and collapsible sidebar state for responsive layouts.
//!
//! The crate is UI-agnostic: markup is reached through the [`SidebarView`]
//! and [`MenuView`] traits and preferences through [`PreferenceStore`].
//!
//! - [`ViewportMonitor`] classifies the viewport width into a
//!   [`ViewportTier`] and broadcasts [`TierChanged`] only when the tier
//!   actually changes;
//! - [`TierAware`] components hold a [`TierBinding`] that snapshots the tier
//!   and subscribes them to the monitor;
//! - [`SidebarController`] reconciles tier changes, clicks and the persisted
//!   lock into one collapse state and drives a dependent [`MenuController`].
//!
//! # Quick Example
//!
//! ```
//! use gutter_layout::{
//!     LayoutConfig, MemoryStore, SidebarController, SidebarMode,
//!     SidebarView, ToggleIcon, ViewportMonitor, shared,
//! };
//!
//! struct Markup;
//!
//! impl SidebarView for Markup {
//!     fn set_visible(&mut self, _visible: bool) {}
//!     fn set_mode(&mut self, mode: SidebarMode) {
//!         println!("sidebar is {}", mode.class());
//!     }
//!     fn set_toggle_icon(&mut self, _icon: ToggleIcon) {}
//!     fn set_lock_active(&mut self, _active: bool) {}
//!     fn set_toggle_enabled(&mut self, _enabled: bool) {}
//! }
//!
//! let config = LayoutConfig::default();
//! let monitor = ViewportMonitor::new(config.breakpoints, 1400.0);
//! let sidebar = SidebarController::initialize(
//!     &monitor,
//!     Box::new(Markup),
//!     shared(MemoryStore::new()),
//!     config.keys.sidebar.clone(),
//!     None,
//! );
//!
//! monitor.on_resize(800.0);
//! assert!(sidebar.borrow().collapsed());
//! ```

mod config;
mod errors;
mod layout;
mod menu;
mod monitor;
mod sidebar;
mod storage;
mod tier;
mod tier_aware;

pub use config::{
    ConfigLoad, ConfigLoadStatus, LayoutConfig, PreferenceKeys, config_path,
    load_config, load_config_from_path,
};
pub use errors::{ConfigError, StoreError};
pub use layout::{Layout, Page};
pub use menu::{
    ArrowDirection, CollapsibleMenu, MenuController, MenuEvent, MenuHandle,
    MenuMode, MenuPlacement, MenuView, SectionDisplay, encode_displays,
    menu_handle, parse_displays,
};
pub use monitor::{
    SubscriptionHandle, TierChanged, VIEWPORT_CHANGED, ViewportMonitor,
};
pub use sidebar::{
    SidebarController, SidebarEvent, SidebarMode, SidebarState, SidebarView,
    ToggleIcon, encode_lock, parse_lock,
};
pub use storage::{
    CookieJar, FileStore, MemoryStore, PreferenceStore, SharedStore,
    expire_cookie, set_cookie, shared,
};
pub use tier::{Breakpoints, ViewportTier, classify};
pub use tier_aware::{TierAware, TierBinding, bind, viewport_changed};
