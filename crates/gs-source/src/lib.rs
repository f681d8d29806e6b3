//! Image loading and resampling for goscii.

pub mod image;
pub mod resize;

pub use resize::{Resampler, resize, target_dimensions};
