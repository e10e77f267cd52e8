pub mod dimensions_panel;
pub mod status_bar;
