pub mod continuous_iteration;
pub mod hsv;
pub mod kinds;
pub mod maps;
