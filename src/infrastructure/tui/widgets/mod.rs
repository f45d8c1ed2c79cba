pub mod header;
pub mod layout;
pub mod screen_view;
pub mod status_bar;
