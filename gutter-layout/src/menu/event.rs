/// Click events delivered to the menu controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The dropdown arrow of the section at this index was pressed.
    ArrowClicked(usize),
}
