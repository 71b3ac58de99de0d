use super::model::{SidebarMode, ToggleIcon};

/// Presentation surface of the sidebar markup.
///
/// Implementations own the root element, its content area, the toggle
/// button with its icon, and the lock switch.
pub trait SidebarView {
    /// Show or hide the whole sidebar.
    fn set_visible(&mut self, visible: bool);

    /// Replace the container state class.
    fn set_mode(&mut self, mode: SidebarMode);

    /// Replace the toggle icon class.
    fn set_toggle_icon(&mut self, icon: ToggleIcon);

    /// Mirror whether a lock preference is persisted.
    fn set_lock_active(&mut self, active: bool);

    /// Reflect whether the toggle button currently reacts to clicks.
    fn set_toggle_enabled(&mut self, enabled: bool);
}
