//! Shape algebra: boolean operations, stroking, transforms and bounds.
//!
//! Each operation normalizes its input shapes, hands them to the kernel and
//! reads the result back as path data. [`PathOps`] bundles a kernel with a
//! [`Config`] for repeated use.

use tracing::debug;

use crate::bridge::{from_kernel, shape_to_kernel};
use crate::errors::Result;
use crate::geometry::{Affine2D, BoundingBox};
use crate::kernel::{GeometryKernel, LineCap, LineJoin, PathOp, StrokeStyle};
use crate::path::Path;
use crate::shape::Shape;
use crate::Config;

fn boolean<K, S>(kernel: &K, tolerance: f32, shapes: &[S], op: PathOp) -> Result<Path>
where
    K: GeometryKernel,
    S: Shape,
{
    let Some((first, rest)) = shapes.split_first() else {
        return Ok(Path::new());
    };
    debug!("{op:?} of {} shapes", shapes.len());
    let mut acc = shape_to_kernel(kernel, first, tolerance)?;
    for shape in rest {
        let next = shape_to_kernel(kernel, shape, tolerance)?;
        acc = kernel.boolean_op(&acc, &next, op)?;
    }
    from_kernel(kernel, &acc)
}

/// Union of all `shapes`, folded left to right. No shapes gives an empty path.
pub fn union<K, S>(kernel: &K, tolerance: f32, shapes: &[S]) -> Result<Path>
where
    K: GeometryKernel,
    S: Shape,
{
    boolean(kernel, tolerance, shapes, PathOp::Union)
}

/// Intersection of all `shapes`, folded left to right. No shapes gives an
/// empty path.
pub fn intersection<K, S>(kernel: &K, tolerance: f32, shapes: &[S]) -> Result<Path>
where
    K: GeometryKernel,
    S: Shape,
{
    boolean(kernel, tolerance, shapes, PathOp::Intersection)
}

/// Stroke style for `shape`; fails on cap or join values the kernel can't express.
pub fn stroke_style<S: Shape + ?Sized>(shape: &S) -> Result<StrokeStyle> {
    Ok(StrokeStyle {
        width: shape.stroke_width(),
        cap: shape.stroke_linecap().parse::<LineCap>()?,
        join: shape.stroke_linejoin().parse::<LineJoin>()?,
        miter_limit: shape.stroke_miterlimit(),
    })
}

/// Outline of the stroke of `shape`, using its stroke attributes.
pub fn stroke<K, S>(kernel: &K, shape: &S, tolerance: f32) -> Result<Path>
where
    K: GeometryKernel,
    S: Shape + ?Sized,
{
    let style = stroke_style(shape)?;
    debug!("stroke: {style:?}");
    let mut kpath = shape_to_kernel(kernel, shape, tolerance)?;
    kernel.stroke(&mut kpath, &style)?;
    from_kernel(kernel, &kpath)
}

pub fn transform<K, S>(kernel: &K, shape: &S, affine: &Affine2D, tolerance: f32) -> Result<Path>
where
    K: GeometryKernel,
    S: Shape + ?Sized,
{
    debug!("transform: {affine}");
    let mut kpath = shape_to_kernel(kernel, shape, tolerance)?;
    kernel.transform(&mut kpath, affine)?;
    from_kernel(kernel, &kpath)
}

/// Bounds of `shape`, or `None` if it has no points.
pub fn bounding_box<K, S>(kernel: &K, shape: &S, tolerance: f32) -> Result<Option<BoundingBox>>
where
    K: GeometryKernel,
    S: Shape + ?Sized,
{
    let kpath = shape_to_kernel(kernel, shape, tolerance)?;
    Ok(kernel.bounds(&kpath))
}

/// A geometry kernel paired with the settings to use it with.
pub struct PathOps<K> {
    kernel: K,
    config: Config,
}

impl<K: GeometryKernel> PathOps<K> {
    pub fn new(kernel: K) -> Self {
        Self::with_config(kernel, Config::default())
    }

    pub fn with_config(kernel: K, config: Config) -> Self {
        Self { kernel, config }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn union<S: Shape>(&self, shapes: &[S]) -> Result<Path> {
        union(&self.kernel, self.config.tolerance, shapes)
    }

    pub fn intersection<S: Shape>(&self, shapes: &[S]) -> Result<Path> {
        intersection(&self.kernel, self.config.tolerance, shapes)
    }

    pub fn stroke<S: Shape + ?Sized>(&self, shape: &S) -> Result<Path> {
        stroke(&self.kernel, shape, self.config.tolerance)
    }

    pub fn transform<S: Shape + ?Sized>(&self, shape: &S, affine: &Affine2D) -> Result<Path> {
        transform(&self.kernel, shape, affine, self.config.tolerance)
    }

    pub fn bounding_box<S: Shape + ?Sized>(&self, shape: &S) -> Result<Option<BoundingBox>> {
        bounding_box(&self.kernel, shape, self.config.tolerance)
    }

    /// Serialize `path` at the configured precision.
    pub fn render(&self, path: &Path) -> String {
        path.to_string_with_precision(self.config.precision)
    }
}
