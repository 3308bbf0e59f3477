#![allow(dead_code)]

use std::cell::RefCell;

use svgops::{
    Affine2D, BoundingBox, GeometryKernel, KernelArc, PathOp, Point, Segment, StrokeStyle,
};

/// Test kernel whose paths are plain segment lists.
///
/// Boolean operations don't compute geometry: union concatenates the two
/// operands and intersection keeps the first. Stroking replaces the path
/// with its bounding rectangle grown by half the stroke width. Every call
/// which does real work is recorded in `calls`.
#[derive(Default)]
pub struct MockKernel {
    calls: RefCell<Vec<String>>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn map_points(seg: &Segment, f: impl Fn(Point) -> Point) -> Segment {
    match seg {
        Segment::MoveTo(p) => Segment::MoveTo(f(*p)),
        Segment::LineTo(p) => Segment::LineTo(f(*p)),
        Segment::QuadTo(c, p) => Segment::QuadTo(f(*c), f(*p)),
        Segment::CurveTo(c1, c2, p) => Segment::CurveTo(f(*c1), f(*c2), f(*p)),
        Segment::QCurveTo(points) => Segment::QCurveTo(points.iter().map(|p| f(*p)).collect()),
        Segment::ArcTo(arc) => Segment::ArcTo(KernelArc {
            end: f(arc.end),
            ..*arc
        }),
        Segment::Conic(c, p, w) => Segment::Conic(f(*c), f(*p), *w),
        Segment::ClosePath => Segment::ClosePath,
        Segment::EndPath => Segment::EndPath,
    }
}

impl GeometryKernel for MockKernel {
    type Path = Vec<Segment>;

    fn new_path(&self) -> Vec<Segment> {
        Vec::new()
    }

    fn move_to(&self, path: &mut Vec<Segment>, p: Point) {
        path.push(Segment::MoveTo(p));
    }

    fn line_to(&self, path: &mut Vec<Segment>, p: Point) {
        path.push(Segment::LineTo(p));
    }

    fn quad_to(&self, path: &mut Vec<Segment>, c: Point, p: Point) {
        path.push(Segment::QuadTo(c, p));
    }

    fn cubic_to(&self, path: &mut Vec<Segment>, c1: Point, c2: Point, p: Point) {
        path.push(Segment::CurveTo(c1, c2, p));
    }

    fn arc_to(&self, path: &mut Vec<Segment>, arc: &KernelArc) {
        path.push(Segment::ArcTo(*arc));
    }

    fn close(&self, path: &mut Vec<Segment>) {
        path.push(Segment::ClosePath);
    }

    fn convert_conics_to_quads(&self, path: &mut Vec<Segment>, tolerance: f32) -> svgops::Result<()> {
        self.record(format!("conics_to_quads {tolerance}"));
        for seg in path.iter_mut() {
            if let Segment::Conic(c, p, _) = *seg {
                *seg = Segment::QuadTo(c, p);
            }
        }
        Ok(())
    }

    fn boolean_op(
        &self,
        a: &Vec<Segment>,
        b: &Vec<Segment>,
        op: PathOp,
    ) -> svgops::Result<Vec<Segment>> {
        self.record(format!("{op:?} {}+{}", a.len(), b.len()));
        Ok(match op {
            PathOp::Union => a.iter().chain(b.iter()).cloned().collect(),
            PathOp::Intersection => a.clone(),
        })
    }

    fn stroke(&self, path: &mut Vec<Segment>, style: &StrokeStyle) -> svgops::Result<()> {
        self.record(format!(
            "stroke {} {:?} {:?} {}",
            style.width, style.cap, style.join, style.miter_limit
        ));
        let bbox = self
            .bounds(path)
            .ok_or(svgops::PathOpsError::KernelError("empty stroke".to_string()))?;
        let hw = style.width / 2.;
        let (x1, y1, x2, y2) = (bbox.x1 - hw, bbox.y1 - hw, bbox.x2 + hw, bbox.y2 + hw);
        *path = vec![
            Segment::MoveTo((x1, y1)),
            Segment::LineTo((x2, y1)),
            Segment::LineTo((x2, y2)),
            Segment::LineTo((x1, y2)),
            Segment::ClosePath,
        ];
        Ok(())
    }

    fn transform(&self, path: &mut Vec<Segment>, affine: &Affine2D) -> svgops::Result<()> {
        self.record(format!("transform {affine}"));
        *path = path.iter().map(|s| map_points(s, |p| affine.apply(p))).collect();
        Ok(())
    }

    fn bounds(&self, path: &Vec<Segment>) -> Option<BoundingBox> {
        BoundingBox::from_points(path.iter().flat_map(|s| s.points()))
    }

    fn segments(&self, path: &Vec<Segment>) -> Vec<Segment> {
        let mut segments = path.clone();
        segments.push(Segment::EndPath);
        segments
    }
}

/// Kernel which fails every boolean operation.
#[derive(Default)]
pub struct FailingKernel(MockKernel);

impl GeometryKernel for FailingKernel {
    type Path = Vec<Segment>;

    fn new_path(&self) -> Vec<Segment> {
        self.0.new_path()
    }
    fn move_to(&self, path: &mut Vec<Segment>, p: Point) {
        self.0.move_to(path, p)
    }
    fn line_to(&self, path: &mut Vec<Segment>, p: Point) {
        self.0.line_to(path, p)
    }
    fn quad_to(&self, path: &mut Vec<Segment>, c: Point, p: Point) {
        self.0.quad_to(path, c, p)
    }
    fn cubic_to(&self, path: &mut Vec<Segment>, c1: Point, c2: Point, p: Point) {
        self.0.cubic_to(path, c1, c2, p)
    }
    fn arc_to(&self, path: &mut Vec<Segment>, arc: &KernelArc) {
        self.0.arc_to(path, arc)
    }
    fn close(&self, path: &mut Vec<Segment>) {
        self.0.close(path)
    }
    fn convert_conics_to_quads(&self, path: &mut Vec<Segment>, tolerance: f32) -> svgops::Result<()> {
        self.0.convert_conics_to_quads(path, tolerance)
    }
    fn boolean_op(&self, _: &Vec<Segment>, _: &Vec<Segment>, _: PathOp) -> svgops::Result<Vec<Segment>> {
        Err("boolean op failed".into())
    }
    fn stroke(&self, path: &mut Vec<Segment>, style: &StrokeStyle) -> svgops::Result<()> {
        self.0.stroke(path, style)
    }
    fn transform(&self, path: &mut Vec<Segment>, affine: &Affine2D) -> svgops::Result<()> {
        self.0.transform(path, affine)
    }
    fn bounds(&self, path: &Vec<Segment>) -> Option<BoundingBox> {
        self.0.bounds(path)
    }
    fn segments(&self, path: &Vec<Segment>) -> Vec<Segment> {
        self.0.segments(path)
    }
}
