use std::str::FromStr;

use crate::errors::{PathOpsError, Result};
use crate::path::Path;

/// Anything which can be expressed as path data.
///
/// Stroke properties report raw SVG keywords; they are only interpreted
/// when a stroke is requested, so unsupported values surface as errors
/// naming the value.
pub trait Shape {
    /// Path data for this shape, approximating curves within `tolerance`
    fn as_path(&self, tolerance: f32) -> Result<Path>;

    fn stroke_width(&self) -> f32 {
        1.
    }

    fn stroke_linecap(&self) -> &str {
        "butt"
    }

    fn stroke_linejoin(&self) -> &str {
        "miter"
    }

    fn stroke_miterlimit(&self) -> f32 {
        4.
    }
}

impl Shape for Path {
    fn as_path(&self, _tolerance: f32) -> Result<Path> {
        Ok(self.clone())
    }
}

impl Shape for str {
    fn as_path(&self, _tolerance: f32) -> Result<Path> {
        self.parse()
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn as_path(&self, tolerance: f32) -> Result<Path> {
        (**self).as_path(tolerance)
    }

    fn stroke_width(&self) -> f32 {
        (**self).stroke_width()
    }

    fn stroke_linecap(&self) -> &str {
        (**self).stroke_linecap()
    }

    fn stroke_linejoin(&self) -> &str {
        (**self).stroke_linejoin()
    }

    fn stroke_miterlimit(&self) -> f32 {
        (**self).stroke_miterlimit()
    }
}

/// SVG presentation attributes which affect stroke geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeAttrs {
    pub width: f32,
    pub linecap: String,
    pub linejoin: String,
    pub miterlimit: f32,
}

impl Default for StrokeAttrs {
    fn default() -> Self {
        // Initial values from https://www.w3.org/TR/SVG11/painting.html
        Self {
            width: 1.,
            linecap: "butt".to_string(),
            linejoin: "miter".to_string(),
            miterlimit: 4.,
        }
    }
}

impl StrokeAttrs {
    /// Update from an SVG attribute name and value; unrelated names are ignored.
    pub fn set_attr(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "stroke-width" => self.width = crate::strp(value)?,
            "stroke-linecap" => self.linecap = value.trim().to_string(),
            "stroke-linejoin" => self.linejoin = value.trim().to_string(),
            "stroke-miterlimit" => {
                let limit = crate::strp(value)?;
                // "The value of stroke-miterlimit must be >= 1"
                if limit < 1. {
                    return Err(PathOpsError::ParseError(format!(
                        "stroke-miterlimit must be at least 1, got '{value}'"
                    )));
                }
                self.miterlimit = limit;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Path data together with its stroke attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathShape {
    pub path: Path,
    pub stroke: StrokeAttrs,
}

impl PathShape {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            stroke: StrokeAttrs::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeAttrs) -> Self {
        self.stroke = stroke;
        self
    }
}

impl From<Path> for PathShape {
    fn from(path: Path) -> Self {
        Self::new(path)
    }
}

impl FromStr for PathShape {
    type Err = PathOpsError;

    fn from_str(data: &str) -> Result<Self> {
        Ok(Self::new(data.parse()?))
    }
}

impl Shape for PathShape {
    fn as_path(&self, _tolerance: f32) -> Result<Path> {
        Ok(self.path.clone())
    }

    fn stroke_width(&self) -> f32 {
        self.stroke.width
    }

    fn stroke_linecap(&self) -> &str {
        &self.stroke.linecap
    }

    fn stroke_linejoin(&self) -> &str {
        &self.stroke.linejoin
    }

    fn stroke_miterlimit(&self) -> f32 {
        self.stroke.miterlimit
    }
}
