//! Normalization passes over a [`Path`].
//!
//! Each pass has an in-place form (`&mut self`, chainable) and a copying
//! form which leaves the original untouched.

use super::{CommandKind, Path, PathCommand};
use crate::geometry::Point;

/// Tracks the current point and subpath start while walking commands.
#[derive(Clone, Copy, Debug, Default)]
struct Pen {
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
}

impl Pen {
    /// Offset to add to `cmd`'s coordinates to make them absolute
    fn origin_for(&self, cmd: &PathCommand) -> Point {
        if cmd.is_relative() {
            self.position
        } else {
            (0., 0.)
        }
    }

    fn advance(&mut self, cmd: &PathCommand) {
        let (px, py) = self.position;
        let (ox, oy) = self.origin_for(cmd);
        let args = cmd.args();
        self.position = match cmd.kind() {
            CommandKind::ClosePath => self.subpath_start,
            CommandKind::HLineTo => (ox + args[0], py),
            CommandKind::VLineTo => (px, oy + args[0]),
            _ => {
                let (x, y) = cmd.end_point().unwrap_or_default();
                (ox + x, oy + y)
            }
        };
        if cmd.kind() == CommandKind::MoveTo {
            self.subpath_start = self.position;
        }
    }
}

fn reflect((cx, cy): Point, (px, py): Point) -> Point {
    (2. * px - cx, 2. * py - cy)
}

impl Path {
    /// Replace `H`/`V` with `L`, keeping relative commands relative.
    pub fn explicit_lines(&mut self) -> &mut Self {
        let mut pen = Pen::default();
        for cmd in self.commands.iter_mut() {
            let (px, py) = pen.position;
            let relative = cmd.is_relative();
            let line_args = match (cmd.kind(), relative) {
                (CommandKind::HLineTo, false) => Some(vec![cmd.args()[0], py]),
                (CommandKind::HLineTo, true) => Some(vec![cmd.args()[0], 0.]),
                (CommandKind::VLineTo, false) => Some(vec![px, cmd.args()[0]]),
                (CommandKind::VLineTo, true) => Some(vec![0., cmd.args()[0]]),
                _ => None,
            };
            pen.advance(cmd);
            if let Some(args) = line_args {
                *cmd = PathCommand::new_unchecked(CommandKind::LineTo, relative, args);
            }
        }
        self
    }

    /// Replace `S`/`T` with `C`/`Q`, synthesizing the first control point.
    ///
    /// The control point is the previous command's last control point
    /// reflected about the current point if the previous command was of
    /// the same family (cubic for `S`, quadratic for `T`); otherwise it
    /// is the current point itself.
    pub fn expand_shorthand(&mut self) -> &mut Self {
        let mut pen = Pen::default();
        // previous second control point (if any) for evaluating 'S' and 's'
        let mut cubic_cp2: Option<Point> = None;
        // previous control point (if any) for evaluating 'T' and 't'
        let mut quadratic_cp: Option<Point> = None;

        for cmd in self.commands.iter_mut() {
            let current = pen.position;
            let (ox, oy) = pen.origin_for(cmd);
            let relative = cmd.is_relative();

            let expanded = match cmd.kind() {
                CommandKind::SmoothQuadTo => {
                    let (cx, cy) = quadratic_cp.map_or(current, |cp| reflect(cp, current));
                    let mut args = vec![cx - ox, cy - oy];
                    args.extend_from_slice(cmd.args());
                    Some((CommandKind::QuadTo, args))
                }
                CommandKind::SmoothCubicTo => {
                    let (cx, cy) = cubic_cp2.map_or(current, |cp| reflect(cp, current));
                    let mut args = vec![cx - ox, cy - oy];
                    args.extend_from_slice(cmd.args());
                    Some((CommandKind::CubicTo, args))
                }
                _ => None,
            };
            if let Some((kind, args)) = expanded {
                *cmd = PathCommand::new_unchecked(kind, relative, args);
            }

            let args = cmd.args();
            (cubic_cp2, quadratic_cp) = match cmd.kind() {
                CommandKind::CubicTo => (Some((ox + args[2], oy + args[3])), None),
                CommandKind::QuadTo => (None, Some((ox + args[0], oy + args[1]))),
                _ => (None, None),
            };
            pen.advance(cmd);
        }
        self
    }

    /// Convert every relative command to its absolute form.
    pub fn absolute(&mut self) -> &mut Self {
        let mut pen = Pen::default();
        for cmd in self.commands.iter_mut() {
            let (ox, oy) = pen.origin_for(cmd);
            pen.advance(cmd);
            if cmd.is_relative() {
                cmd.translate(ox, oy);
                cmd.set_relative(false);
            }
        }
        self
    }

    /// Translate the path by (dx, dy).
    ///
    /// Absolute commands are shifted; relative commands are deltas and
    /// stay as they are. A leading moveto anchors the whole path, so it
    /// is always shifted (and written in absolute form).
    pub fn move_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        for (idx, cmd) in self.commands.iter_mut().enumerate() {
            if idx == 0 && cmd.kind() == CommandKind::MoveTo {
                // a leading 'm' is relative to the origin
                cmd.set_relative(false);
                cmd.translate(dx, dy);
            } else if !cmd.is_relative() {
                cmd.translate(dx, dy);
            }
        }
        self
    }

    pub fn with_explicit_lines(&self) -> Self {
        let mut path = self.clone();
        path.explicit_lines();
        path
    }

    pub fn with_expanded_shorthand(&self) -> Self {
        let mut path = self.clone();
        path.expand_shorthand();
        path
    }

    pub fn to_absolute(&self) -> Self {
        let mut path = self.clone();
        path.absolute();
        path
    }

    pub fn moved(&self, dx: f32, dy: f32) -> Self {
        let mut path = self.clone();
        path.move_by(dx, dy);
        path
    }
}
