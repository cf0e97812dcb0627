pub mod export_buttons;
pub mod header;
pub mod results_table;
pub mod settings_panel;
pub mod upload_area;
