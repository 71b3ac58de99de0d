/// Click events delivered to the sidebar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The collapse/expand toggle button was pressed.
    ToggleClicked,
    /// The lock switch was pressed.
    LockClicked,
}
