pub mod arguments;
pub mod output_format;
pub mod render_controller;
