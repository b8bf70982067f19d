pub mod client_form;
pub mod configurator;
pub mod page_view;
pub mod preview;
pub mod sidebar;
