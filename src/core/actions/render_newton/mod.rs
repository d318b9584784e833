pub mod backend;
pub mod generate_pixels_parallel_rayon;
pub mod generate_pixels_serial;
pub mod ports;
pub mod render_newton;
