use std::str::FromStr;

use super::Point;
use crate::errors::{PathOpsError, Result};
use crate::{fstr, strp};

/// One entry of an SVG `transform` attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformType {
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32, f32, f32),
    SkewX(f32),
    SkewY(f32),
    Matrix(f32, f32, f32, f32, f32, f32),
}

impl FromStr for TransformType {
    type Err = PathOpsError;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, '(');
        let name = parts
            .next()
            .ok_or_else(|| PathOpsError::ParseError("No transform name".to_owned()))?
            .trim();
        let args = parts
            .next()
            .ok_or_else(|| PathOpsError::ParseError("No transform args".to_owned()))?
            .trim_end()
            .strip_suffix(')')
            .ok_or_else(|| PathOpsError::ParseError("No closing bracket".to_owned()))?
            .split(&[',', ' ', '\t', '\n', '\r'])
            .filter(|&v| !v.is_empty())
            .map(strp)
            .collect::<Result<Vec<_>>>()?;
        let bad_args = |name: &str| {
            PathOpsError::ParseError(format!("Invalid number of arguments for {name}"))
        };
        // See https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
        Ok(match (name.to_lowercase().as_str(), args.as_slice()) {
            // "If <ty> is not provided, it is assumed to be zero."
            ("translate", &[tx]) => TransformType::Translate(tx, 0.),
            ("translate", &[tx, ty]) => TransformType::Translate(tx, ty),
            // "If <sy> is not provided, it is assumed to be equal to <sx>."
            ("scale", &[s]) => TransformType::Scale(s, s),
            ("scale", &[sx, sy]) => TransformType::Scale(sx, sy),
            ("rotate", &[angle]) => TransformType::Rotate(angle, 0., 0.),
            ("rotate", &[angle, cx, cy]) => TransformType::Rotate(angle, cx, cy),
            ("skewx", &[angle]) => TransformType::SkewX(angle),
            ("skewy", &[angle]) => TransformType::SkewY(angle),
            ("matrix", &[a, b, c, d, e, f]) => TransformType::Matrix(a, b, c, d, e, f),
            ("translate" | "scale" | "rotate" | "skewx" | "skewy" | "matrix", _) => {
                return Err(bad_args(name))
            }
            _ => Err(PathOpsError::ParseError(format!(
                "Unknown transform type: '{name}'"
            )))?,
        })
    }
}

/// A 2-D affine transform in SVG matrix order.
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2D {
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::new(1., 0., 0., 1., 0., 0.)
    }

    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1., 0., 0., 1., tx, ty)
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0., 0., sy, 0., 0.)
    }

    /// Rotation by `angle` degrees about (cx, cy)
    pub fn rotate(angle: f32, cx: f32, cy: f32) -> Self {
        let (sin_a, cos_a) = angle.to_radians().sin_cos();
        Self::translate(cx, cy)
            .then_apply(&Self::new(cos_a, sin_a, -sin_a, cos_a, 0., 0.))
            .then_apply(&Self::translate(-cx, -cy))
    }

    pub fn skew_x(angle: f32) -> Self {
        Self::new(1., 0., angle.to_radians().tan(), 1., 0., 0.)
    }

    pub fn skew_y(angle: f32) -> Self {
        Self::new(1., angle.to_radians().tan(), 0., 1., 0., 0.)
    }

    /// Matrix product `self * other`; `other` applies to points first,
    /// matching the left-to-right reading of an SVG transform list.
    pub fn then_apply(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn apply(&self, (x, y): Point) -> Point {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl From<&TransformType> for Affine2D {
    fn from(value: &TransformType) -> Self {
        match *value {
            TransformType::Translate(tx, ty) => Affine2D::translate(tx, ty),
            TransformType::Scale(sx, sy) => Affine2D::scale(sx, sy),
            TransformType::Rotate(angle, cx, cy) => Affine2D::rotate(angle, cx, cy),
            TransformType::SkewX(angle) => Affine2D::skew_x(angle),
            TransformType::SkewY(angle) => Affine2D::skew_y(angle),
            TransformType::Matrix(a, b, c, d, e, f) => Affine2D::new(a, b, c, d, e, f),
        }
    }
}

/// Parse an SVG `transform` attribute, e.g. `"translate(10,20) scale(2)"`.
impl FromStr for Affine2D {
    type Err = PathOpsError;

    fn from_str(value: &str) -> Result<Self> {
        value
            .split_inclusive(')')
            .map(|v| v.trim_start_matches([',', ' ', '\t', '\n', '\r']))
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<TransformType>())
            .try_fold(Affine2D::identity(), |acc, t| {
                Ok(acc.then_apply(&Affine2D::from(&t?)))
            })
    }
}

impl std::fmt::Display for Affine2D {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            w,
            "matrix({}, {}, {}, {}, {}, {})",
            fstr(self.a),
            fstr(self.b),
            fstr(self.c),
            fstr(self.d),
            fstr(self.e),
            fstr(self.f)
        )
    }
}
