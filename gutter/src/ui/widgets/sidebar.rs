use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

use gutter_layout::{SidebarMode, ToggleIcon};

use crate::surface::{MenuMarkup, SidebarMarkup};
use crate::ui::widgets::section_menu::{
    self, SectionMenuEvent, SectionMenuProps,
};

const EXPANDED_WIDTH: f32 = 220.0;
const COLLAPSED_WIDTH: f32 = 64.0;
const CONTROL_SPACING: f32 = 4.0;
const SIDEBAR_PADDING: f32 = 8.0;

/// UI events emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    ToggleClicked,
    LockClicked,
    Menu(SectionMenuEvent),
}

/// Props for rendering the sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) markup: &'a SidebarMarkup,
    /// Menu rendered inside the sidebar, if it is placed there.
    pub(crate) menu: Option<&'a MenuMarkup>,
}

/// Render the sidebar controls and the embedded section menu.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> Element<'a, SidebarEvent> {
    let markup = props.markup;

    let toggle = button(text(toggle_glyph(markup.icon)))
        .style(button::secondary)
        .on_press_maybe(
            markup
                .toggle_enabled
                .then_some(SidebarEvent::ToggleClicked),
        );

    let lock_style = if markup.lock_active {
        button::primary
    } else {
        button::secondary
    };
    let lock = button(text("lock"))
        .style(lock_style)
        .on_press(SidebarEvent::LockClicked);

    let controls = row![toggle, lock].spacing(CONTROL_SPACING);

    let mut content = column![controls].spacing(CONTROL_SPACING * 2.0);
    if let Some(menu) = props.menu {
        content = content.push(
            section_menu::view(SectionMenuProps { markup: menu })
                .map(SidebarEvent::Menu),
        );
    }

    let width = match markup.mode {
        SidebarMode::Expanded => EXPANDED_WIDTH,
        SidebarMode::Collapsed => COLLAPSED_WIDTH,
    };

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding(SIDEBAR_PADDING)
        .style(container::rounded_box)
        .into()
}

fn toggle_glyph(icon: ToggleIcon) -> &'static str {
    match icon {
        ToggleIcon::Left => "\u{2190}",
        ToggleIcon::Right => "\u{2192}",
    }
}
