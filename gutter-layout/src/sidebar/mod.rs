mod controller;
mod event;
mod model;
mod view;

pub use controller::SidebarController;
pub use event::SidebarEvent;
pub use model::{
    SidebarMode, SidebarState, ToggleIcon, encode_lock, parse_lock,
};
pub use view::SidebarView;
