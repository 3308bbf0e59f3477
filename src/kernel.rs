//! Interface to an external 2-D geometry kernel.
//!
//! The kernel owns the numerical algorithms: boolean operations,
//! stroking, conic reduction, bounds. This crate only converts path
//! data to and from the kernel's native path representation, so any
//! backend (or a test double) can sit behind [`GeometryKernel`].

use std::str::FromStr;

use itertools::Itertools;

use crate::errors::{PathOpsError, Result};
use crate::fstr;
use crate::geometry::{Affine2D, BoundingBox, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathOp {
    Union,
    Intersection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl FromStr for LineCap {
    type Err = PathOpsError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(PathOpsError::UnsupportedStyle(
                "stroke-linecap".to_string(),
                value.to_string(),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl FromStr for LineJoin {
    type Err = PathOpsError;

    fn from_str(value: &str) -> Result<Self> {
        // No arcs or miter-clip
        match value {
            "miter" => Ok(LineJoin::Miter),
            "round" => Ok(LineJoin::Round),
            "bevel" => Ok(LineJoin::Bevel),
            _ => Err(PathOpsError::UnsupportedStyle(
                "stroke-linejoin".to_string(),
                value.to_string(),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f32,
}

/// Elliptical arc parameters in kernel convention.
///
/// `sweep` is `true` for a counter-clockwise sweep, the opposite polarity
/// to the SVG `sweep-flag`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelArc {
    pub rx: f32,
    pub ry: f32,
    pub x_axis_rotation: f32,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

/// One segment of a kernel path, as reported by [`GeometryKernel::segments`].
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CurveTo(Point, Point, Point),
    /// A run of quadratics with implied on-curve midpoints; the last
    /// point is on-curve.
    QCurveTo(Vec<Point>),
    ArcTo(KernelArc),
    /// Rational quadratic: control, end, weight
    Conic(Point, Point, f32),
    ClosePath,
    /// Terminal marker with no path data
    EndPath,
}

impl Segment {
    pub fn name(&self) -> &'static str {
        match self {
            Segment::MoveTo(_) => "moveTo",
            Segment::LineTo(_) => "lineTo",
            Segment::QuadTo(_, _) => "quadTo",
            Segment::CurveTo(_, _, _) => "curveTo",
            Segment::QCurveTo(_) => "qCurveTo",
            Segment::ArcTo(_) => "arcTo",
            Segment::Conic(_, _, _) => "conicTo",
            Segment::ClosePath => "closePath",
            Segment::EndPath => "endPath",
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match self {
            Segment::MoveTo(p) | Segment::LineTo(p) => vec![*p],
            Segment::QuadTo(c, p) | Segment::Conic(c, p, _) => vec![*c, *p],
            Segment::CurveTo(c1, c2, p) => vec![*c1, *c2, *p],
            Segment::QCurveTo(points) => points.clone(),
            Segment::ArcTo(arc) => vec![arc.end],
            Segment::ClosePath | Segment::EndPath => vec![],
        }
    }

    /// Segment points in a form suitable for error messages
    pub fn describe_points(&self) -> String {
        self.points()
            .iter()
            .map(|(x, y)| format!("({}, {})", fstr(*x), fstr(*y)))
            .join(" ")
    }
}

/// The capabilities this crate needs from a geometry kernel.
///
/// Kernel paths are built incrementally with the primitive methods and
/// read back with [`segments`](GeometryKernel::segments). A kernel path
/// never outlives the operation that created it.
pub trait GeometryKernel {
    type Path;

    fn new_path(&self) -> Self::Path;

    fn move_to(&self, path: &mut Self::Path, p: Point);
    fn line_to(&self, path: &mut Self::Path, p: Point);
    fn quad_to(&self, path: &mut Self::Path, c: Point, p: Point);
    fn cubic_to(&self, path: &mut Self::Path, c1: Point, c2: Point, p: Point);
    fn arc_to(&self, path: &mut Self::Path, arc: &KernelArc);
    fn close(&self, path: &mut Self::Path);

    /// Replace any conic segments with quadratics within `tolerance`.
    fn convert_conics_to_quads(&self, path: &mut Self::Path, tolerance: f32) -> Result<()>;

    fn boolean_op(&self, a: &Self::Path, b: &Self::Path, op: PathOp) -> Result<Self::Path>;

    /// Replace `path` with the outline of its stroke.
    fn stroke(&self, path: &mut Self::Path, style: &StrokeStyle) -> Result<()>;

    fn transform(&self, path: &mut Self::Path, affine: &Affine2D) -> Result<()>;

    /// `None` for a path with no points
    fn bounds(&self, path: &Self::Path) -> Option<BoundingBox>;

    fn segments(&self, path: &Self::Path) -> Vec<Segment>;

    /// Split a [`Segment::QCurveTo`] point run into (control, end) pairs.
    ///
    /// Consecutive off-curve points imply an on-curve point midway
    /// between them, as in TrueType outlines.
    fn decompose_quadratic_chain(&self, points: &[Point]) -> Result<Vec<(Point, Point)>> {
        if points.len() < 2 {
            return Err(PathOpsError::KernelError(format!(
                "quadratic chain needs at least 2 points, got {}",
                points.len()
            )));
        }
        let n = points.len();
        Ok(points[..n - 1]
            .iter()
            .enumerate()
            .map(|(idx, &control)| {
                let end = if idx + 2 < n {
                    let next = points[idx + 1];
                    ((control.0 + next.0) / 2., (control.1 + next.1) / 2.)
                } else {
                    points[n - 1]
                };
                (control, end)
            })
            .collect())
    }
}
