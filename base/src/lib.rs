//! Base types shared by the chartive crates: pixel geometry and colors.

pub mod color;
pub mod geom;

pub use color::ColorU8;
