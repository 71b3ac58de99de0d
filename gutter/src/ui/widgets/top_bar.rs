use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use gutter_layout::ViewportTier;

use crate::surface::MenuMarkup;
use crate::ui::widgets::section_menu::{
    self, SectionMenuEvent, SectionMenuProps,
};

const BAR_PADDING: f32 = 8.0;
const TITLE_SIZE: f32 = 18.0;

/// UI events emitted by the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TopBarEvent {
    Menu(SectionMenuEvent),
}

/// Props for rendering the top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) tier: ViewportTier,
    pub(crate) width: f32,
    /// Menu rendered in the bar, if it is placed there.
    pub(crate) menu: Option<&'a MenuMarkup>,
}

/// Render the title row with the current tier and, on mobile, the menu.
pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, TopBarEvent> {
    let tier = text(format!("{} ({:.0}px)", props.tier, props.width));
    let header = row![
        container(text(props.title).size(TITLE_SIZE)).width(Length::Fill),
        tier
    ];

    let mut content = column![header];
    if let Some(menu) = props.menu {
        content = content.push(
            section_menu::view(SectionMenuProps { markup: menu })
                .map(TopBarEvent::Menu),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding(BAR_PADDING)
        .into()
}
