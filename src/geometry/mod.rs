mod affine;
mod bbox;

pub use affine::{Affine2D, TransformType};
pub use bbox::{BoundingBox, BoundingBoxBuilder};

/// A point in user coordinates.
pub type Point = (f32, f32);
