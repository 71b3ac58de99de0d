pub(crate) mod section_menu;
pub(crate) mod sidebar;
pub(crate) mod top_bar;
