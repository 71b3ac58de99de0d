use iced::widget::{Column, button, column, container, row, text};
use iced::{Color, Element, Length};

use gutter_layout::{ArrowDirection, MenuMode, SectionDisplay};

use crate::surface::{MenuMarkup, MenuSection};

const SECTION_SPACING: f32 = 2.0;
const ENTRY_INDENT: f32 = 16.0;
const TITLE_SIZE: f32 = 14.0;
const ENTRY_SIZE: f32 = 13.0;

/// UI events emitted by the section menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionMenuEvent {
    ArrowPressed(usize),
}

/// Props for rendering the section menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionMenuProps<'a> {
    pub(crate) markup: &'a MenuMarkup,
}

/// Render every menu section with its arrow and, when open, its entries.
pub(crate) fn view<'a>(
    props: SectionMenuProps<'a>,
) -> Element<'a, SectionMenuEvent> {
    let collapsed = props.markup.mode == MenuMode::Collapsed;

    let sections = props
        .markup
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| section_view(index, section, collapsed));

    container(Column::with_children(sections).spacing(SECTION_SPACING))
        .width(Length::Fill)
        .into()
}

fn section_view<'a>(
    index: usize,
    section: &'a MenuSection,
    collapsed: bool,
) -> Element<'a, SectionMenuEvent> {
    let title = if collapsed {
        short_title(section.title)
    } else {
        section.title.to_string()
    };

    let arrow = button(text(arrow_glyph(section.arrow)).size(TITLE_SIZE))
        .style(button::text)
        .on_press_maybe(
            (!collapsed).then_some(SectionMenuEvent::ArrowPressed(index)),
        );

    let header = row![
        container(text(title).size(TITLE_SIZE)).width(Length::Fill),
        arrow
    ];

    if section.display == SectionDisplay::Hidden {
        return header.into();
    }

    let entries = section.entries.iter().copied().map(entry_view);

    column![header, Column::with_children(entries)].into()
}

fn entry_view<'a>(entry: &'static str) -> Element<'a, SectionMenuEvent> {
    container(text(entry).size(ENTRY_SIZE))
        .padding([0.0, ENTRY_INDENT])
        .style(|_| container::Style {
            text_color: Some(Color::from_rgb(0.75, 0.75, 0.78)),
            ..Default::default()
        })
        .into()
}

fn arrow_glyph(arrow: ArrowDirection) -> &'static str {
    match arrow {
        ArrowDirection::Up => "\u{25B2}",
        ArrowDirection::Down => "\u{25BC}",
    }
}

fn short_title(title: &str) -> String {
    title.chars().take(1).collect()
}
