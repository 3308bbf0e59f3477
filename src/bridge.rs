//! Conversion between [`Path`] and a kernel's native path type.

use itertools::Itertools;
use tracing::{debug, trace};

use crate::errors::{PathOpsError, Result};
use crate::kernel::{GeometryKernel, KernelArc, Segment};
use crate::path::{CommandKind, Path, PathCommand};
use crate::shape::Shape;

fn unsupported(cmd: &PathCommand) -> PathOpsError {
    PathOpsError::UnsupportedConstruct(
        cmd.letter().to_string(),
        cmd.args().iter().join(" "),
    )
}

/// Build a kernel path from `path`.
///
/// `path` must contain only absolute M, L, Q, C, A and Z commands; run
/// `explicit_lines`, `expand_shorthand` and `absolute` first (or use
/// [`shape_to_kernel`]). Conics produced by the kernel are reduced to
/// quadratics within `tolerance`.
pub fn to_kernel<K: GeometryKernel>(kernel: &K, path: &Path, tolerance: f32) -> Result<K::Path> {
    let mut kpath = kernel.new_path();
    for cmd in path {
        if cmd.is_relative() {
            return Err(unsupported(cmd));
        }
        let a = cmd.args();
        trace!("to_kernel: {cmd}");
        match cmd.kind() {
            CommandKind::MoveTo => kernel.move_to(&mut kpath, (a[0], a[1])),
            CommandKind::LineTo => kernel.line_to(&mut kpath, (a[0], a[1])),
            CommandKind::QuadTo => kernel.quad_to(&mut kpath, (a[0], a[1]), (a[2], a[3])),
            CommandKind::CubicTo => {
                kernel.cubic_to(&mut kpath, (a[0], a[1]), (a[2], a[3]), (a[4], a[5]))
            }
            CommandKind::ArcTo => kernel.arc_to(
                &mut kpath,
                &KernelArc {
                    rx: a[0],
                    ry: a[1],
                    x_axis_rotation: a[2],
                    large_arc: a[3] != 0.,
                    // SVG sweep-flag 1 is clockwise; kernel sweep is counter-clockwise
                    sweep: a[4] == 0.,
                    end: (a[5], a[6]),
                },
            ),
            CommandKind::ClosePath => kernel.close(&mut kpath),
            CommandKind::HLineTo
            | CommandKind::VLineTo
            | CommandKind::SmoothQuadTo
            | CommandKind::SmoothCubicTo => return Err(unsupported(cmd)),
        }
    }
    kernel.convert_conics_to_quads(&mut kpath, tolerance)?;
    debug!("to_kernel: {} commands", path.len());
    Ok(kpath)
}

/// Build a kernel path from a shape, normalizing its path data first.
pub fn shape_to_kernel<K, S>(kernel: &K, shape: &S, tolerance: f32) -> Result<K::Path>
where
    K: GeometryKernel,
    S: Shape + ?Sized,
{
    let mut path = shape.as_path(tolerance)?;
    path.explicit_lines().expand_shorthand().absolute();
    to_kernel(kernel, &path, tolerance)
}

/// Read a kernel path back as absolute path data.
///
/// Quadratic chains become one `Q` per curve. Conic segments have no path
/// data equivalent and are an error.
pub fn from_kernel<K: GeometryKernel>(kernel: &K, kpath: &K::Path) -> Result<Path> {
    let mut path = Path::new();
    let mut push = |kind, args: Vec<f32>| path.push(PathCommand::new_unchecked(kind, false, args));

    for segment in kernel.segments(kpath) {
        trace!("from_kernel: {segment:?}");
        match segment {
            Segment::MoveTo((x, y)) => push(CommandKind::MoveTo, vec![x, y]),
            Segment::LineTo((x, y)) => push(CommandKind::LineTo, vec![x, y]),
            Segment::QuadTo((cx, cy), (x, y)) => push(CommandKind::QuadTo, vec![cx, cy, x, y]),
            Segment::CurveTo((c1x, c1y), (c2x, c2y), (x, y)) => {
                push(CommandKind::CubicTo, vec![c1x, c1y, c2x, c2y, x, y])
            }
            Segment::QCurveTo(ref points) => {
                for ((cx, cy), (x, y)) in kernel.decompose_quadratic_chain(points)? {
                    push(CommandKind::QuadTo, vec![cx, cy, x, y]);
                }
            }
            Segment::ArcTo(arc) => push(
                CommandKind::ArcTo,
                vec![
                    arc.rx,
                    arc.ry,
                    arc.x_axis_rotation,
                    if arc.large_arc { 1. } else { 0. },
                    if arc.sweep { 0. } else { 1. },
                    arc.end.0,
                    arc.end.1,
                ],
            ),
            Segment::ClosePath => push(CommandKind::ClosePath, vec![]),
            Segment::EndPath => {}
            Segment::Conic(..) => {
                return Err(PathOpsError::UnsupportedConstruct(
                    segment.name().to_string(),
                    segment.describe_points(),
                ))
            }
        }
    }
    debug!("from_kernel: {} commands", path.len());
    Ok(path)
}
