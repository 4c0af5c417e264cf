pub mod configuration;
pub mod render;
