pub mod render;
pub mod schemas;
pub mod validate;
