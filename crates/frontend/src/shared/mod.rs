pub mod components;
pub mod fade;
pub mod icons;
pub mod reveal;
pub mod styles;
