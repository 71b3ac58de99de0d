use super::model::{ArrowDirection, MenuMode, MenuPlacement, SectionDisplay};

/// Presentation surface of the secondary menu markup.
pub trait MenuView {
    /// Number of expandable sections, in markup order.
    fn section_count(&self) -> usize;

    /// Move the menu root into the sidebar content or the mobile top bar.
    fn set_placement(&mut self, placement: MenuPlacement);

    /// Switch between inline section lists and hover pop-ups.
    fn set_mode(&mut self, mode: MenuMode);

    fn set_section_display(&mut self, index: usize, display: SectionDisplay);

    fn set_section_arrow(&mut self, index: usize, arrow: ArrowDirection);
}
