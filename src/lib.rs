//! svgops - geometric operations on SVG path data
//!
//! Paths are parsed from the SVG path mini-language, normalized (explicit
//! lines, expanded shorthand curves, absolute coordinates) and handed to a
//! [`GeometryKernel`] for boolean operations, stroking, transforms and
//! bounds. Results are converted back into path data.
//!
//! A [`Config`] carries the curve tolerance used when shapes are
//! converted to paths and the precision used when paths are written out.
//!
//! ## Example
//!
//! ```
//! let mut path: svgops::Path = "m1,1 2,0 1,3".parse().unwrap();
//! path.explicit_lines().expand_shorthand().absolute();
//! assert_eq!(path.to_string(), "M1,1 L3,1 L4,4");
//!
//! let moved = path.moved(2., 2.);
//! assert_eq!(moved.to_string(), "M3,3 L5,3 L6,6");
//! ```

pub mod bridge;
pub mod errors;
pub mod geometry;
pub mod kernel;
pub mod ops;
pub mod path;
pub mod shape;

pub use errors::{PathOpsError, Result};
pub use geometry::{Affine2D, BoundingBox, Point};
pub use kernel::{GeometryKernel, KernelArc, LineCap, LineJoin, PathOp, Segment, StrokeStyle};
pub use ops::PathOps;
pub use path::{CommandKind, Path, PathCommand};
pub use shape::{PathShape, Shape, StrokeAttrs};

/// Settings for path operations
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde_derive::Serialize, serde_derive::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Maximum deviation (user-units) when approximating curves, default 0.1
    pub tolerance: f32,
    /// Decimal places in serialized path data, default 3
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            precision: 3,
        }
    }
}

impl Config {
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Read a config from JSON; missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PathOpsError::from_err)
    }
}

/// Return a 'minimal' representation of the given number
pub(crate) fn fstr(x: f32) -> String {
    fstr_prec(x, 3)
}

/// Minimal representation of `x` rounded to `precision` decimal places
pub(crate) fn fstr_prec(x: f32, precision: usize) -> String {
    if x.abs() < i32::MAX as f32 && x == (x as i32) as f32 {
        return (x as i32).to_string();
    }
    let result = format!("{x:.precision$}");
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.')
    } else {
        &result
    };
    if result == "-0" {
        "0".to_string()
    } else {
        result.to_string()
    }
}

/// Parse a string to an f32
pub(crate) fn strp(s: &str) -> Result<f32> {
    let value: f32 = s.trim().parse()?;
    if !value.is_finite() {
        return Err(PathOpsError::ParseError(format!(
            "number out of range: '{}'",
            s.trim()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fstr() {
        assert_eq!(fstr(1.0), "1");
        assert_eq!(fstr(-100.0), "-100");
        assert_eq!(fstr(1.23449), "1.234");
        assert_eq!(fstr(-1.23456), "-1.235");
        assert_eq!(fstr(0.5), "0.5");
        assert_eq!(fstr(-0.0001), "0");
        assert_eq!(fstr(1.9999), "2");
        assert_eq!(fstr(23.0), "23");
    }

    #[test]
    fn test_fstr_prec() {
        assert_eq!(fstr_prec(3.14159, 0), "3");
        assert_eq!(fstr_prec(3.14159, 1), "3.1");
        assert_eq!(fstr_prec(3.14159, 4), "3.1416");
        assert_eq!(fstr_prec(-0.04, 1), "0");
        assert_eq!(fstr_prec(7.0, 5), "7");
    }

    #[test]
    fn test_strp() {
        assert_eq!(strp("1").unwrap(), 1.0);
        assert_eq!(strp(" -2.5 ").unwrap(), -2.5);
        assert_eq!(strp("1e2").unwrap(), 100.0);
        assert!(matches!(strp("x"), Err(PathOpsError::ParseError(_))));
        assert!(matches!(strp("1e40"), Err(PathOpsError::ParseError(_))));
        assert!(matches!(strp("inf"), Err(PathOpsError::ParseError(_))));
        assert!(matches!(strp("NaN"), Err(PathOpsError::ParseError(_))));
    }

    #[test]
    fn test_config_default() {
        let cfg = Config::default();
        assert_eq!(cfg.tolerance, 0.1);
        assert_eq!(cfg.precision, 3);

        let cfg = Config::default().with_precision(1).with_tolerance(0.5);
        assert_eq!(cfg.precision, 1);
        assert_eq!(cfg.tolerance, 0.5);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_config_json() {
        let cfg = Config::from_json(r#"{"precision": 2}"#).unwrap();
        assert_eq!(cfg.precision, 2);
        assert_eq!(cfg.tolerance, 0.1);

        assert!(Config::from_json("{").is_err());
    }
}
