pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod render_params;
pub mod roots_table;
