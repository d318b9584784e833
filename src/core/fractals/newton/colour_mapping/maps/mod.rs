pub mod classic;
pub mod jewelry;
pub mod neon;
