mod controller;
mod event;
mod model;
mod view;

pub use controller::{CollapsibleMenu, MenuController, MenuHandle, menu_handle};
pub use event::MenuEvent;
pub use model::{
    ArrowDirection, MenuMode, MenuPlacement, SectionDisplay, encode_displays,
    parse_displays,
};
pub use view::MenuView;
