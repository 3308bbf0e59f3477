use std::fmt;

use itertools::Itertools;

use crate::errors::{PathOpsError, Result};
use crate::fstr_prec;
use crate::geometry::Point;

/// The ten SVG path commands, independent of relative/absolute form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HLineTo,
    VLineTo,
    QuadTo,
    SmoothQuadTo,
    CubicTo,
    SmoothCubicTo,
    ArcTo,
    ClosePath,
}

impl CommandKind {
    pub const ALL: [CommandKind; 10] = [
        CommandKind::MoveTo,
        CommandKind::LineTo,
        CommandKind::HLineTo,
        CommandKind::VLineTo,
        CommandKind::QuadTo,
        CommandKind::SmoothQuadTo,
        CommandKind::CubicTo,
        CommandKind::SmoothCubicTo,
        CommandKind::ArcTo,
        CommandKind::ClosePath,
    ];

    /// Number of operands in one instance of this command
    pub const fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => 2,
            CommandKind::HLineTo | CommandKind::VLineTo => 1,
            CommandKind::QuadTo | CommandKind::SmoothCubicTo => 4,
            CommandKind::CubicTo => 6,
            CommandKind::ArcTo => 7,
            CommandKind::ClosePath => 0,
        }
    }

    /// The absolute (uppercase) command letter
    pub const fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HLineTo => 'H',
            CommandKind::VLineTo => 'V',
            CommandKind::QuadTo => 'Q',
            CommandKind::SmoothQuadTo => 'T',
            CommandKind::CubicTo => 'C',
            CommandKind::SmoothCubicTo => 'S',
            CommandKind::ArcTo => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Kind and relative flag for a command letter.
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        let kind = Self::ALL
            .into_iter()
            .find(|k| k.letter() == letter.to_ascii_uppercase())?;
        Some((kind, letter.is_ascii_lowercase()))
    }
}

/// A single path command with its operands.
///
/// The operand count always matches `kind.arity()`; arc operands are
/// `rx ry x-axis-rotation large-arc-flag sweep-flag x y`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    kind: CommandKind,
    relative: bool,
    args: Vec<f32>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, relative: bool, args: Vec<f32>) -> Result<Self> {
        if args.len() != kind.arity() {
            return Err(PathOpsError::ArgCountError(
                letter_for(kind, relative),
                args.iter().join(" "),
            ));
        }
        Ok(Self::new_unchecked(kind, relative, args))
    }

    pub fn absolute(kind: CommandKind, args: Vec<f32>) -> Result<Self> {
        Self::new(kind, false, args)
    }

    pub fn relative(kind: CommandKind, args: Vec<f32>) -> Result<Self> {
        Self::new(kind, true, args)
    }

    pub(crate) fn new_unchecked(kind: CommandKind, relative: bool, args: Vec<f32>) -> Self {
        debug_assert_eq!(args.len(), kind.arity());
        Self {
            kind,
            relative,
            args,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn args(&self) -> &[f32] {
        &self.args
    }

    /// Command letter, lowercase for relative commands
    pub fn letter(&self) -> char {
        letter_for(self.kind, self.relative)
    }

    /// Final (x, y) operand pair, in this command's own coordinate form.
    ///
    /// `None` for H, V and Z which don't carry a full point.
    pub fn end_point(&self) -> Option<Point> {
        match self.kind {
            CommandKind::HLineTo | CommandKind::VLineTo | CommandKind::ClosePath => None,
            _ => {
                let n = self.args.len();
                Some((self.args[n - 2], self.args[n - 1]))
            }
        }
    }

    pub(crate) fn set_relative(&mut self, relative: bool) {
        self.relative = relative;
    }

    /// Offset every coordinate operand by (dx, dy), leaving radii,
    /// rotation and flags alone.
    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        match self.kind {
            CommandKind::ClosePath => {}
            CommandKind::HLineTo => self.args[0] += dx,
            CommandKind::VLineTo => self.args[0] += dy,
            CommandKind::ArcTo => {
                self.args[5] += dx;
                self.args[6] += dy;
            }
            _ => {
                for pair in self.args.chunks_exact_mut(2) {
                    pair[0] += dx;
                    pair[1] += dy;
                }
            }
        }
    }

    /// Serialize with numbers rounded to `precision` decimal places.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let num = |v: f32| fstr_prec(v, precision);
        let operands = match self.kind {
            CommandKind::ClosePath => String::new(),
            CommandKind::HLineTo | CommandKind::VLineTo => num(self.args[0]),
            CommandKind::ArcTo => format!(
                "{} {},{}",
                self.args[..5].iter().map(|v| num(*v)).join(" "),
                num(self.args[5]),
                num(self.args[6])
            ),
            _ => self
                .args
                .chunks_exact(2)
                .map(|pair| format!("{},{}", num(pair[0]), num(pair[1])))
                .join(" "),
        };
        format!("{}{}", self.letter(), operands)
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_precision(3))
    }
}

fn letter_for(kind: CommandKind, relative: bool) -> char {
    if relative {
        kind.letter().to_ascii_lowercase()
    } else {
        kind.letter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter() {
        assert_eq!(
            CommandKind::from_letter('M'),
            Some((CommandKind::MoveTo, false))
        );
        assert_eq!(
            CommandKind::from_letter('s'),
            Some((CommandKind::SmoothCubicTo, true))
        );
        assert_eq!(
            CommandKind::from_letter('z'),
            Some((CommandKind::ClosePath, true))
        );
        assert_eq!(CommandKind::from_letter('x'), None);

        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_letter(kind.letter()), Some((kind, false)));
        }
    }

    #[test]
    fn test_new_checks_arity() {
        let cmd = PathCommand::absolute(CommandKind::CubicTo, vec![1., 2., 3., 4., 5., 6.]).unwrap();
        assert_eq!(cmd.end_point(), Some((5., 6.)));

        match PathCommand::relative(CommandKind::LineTo, vec![1., 2., 3.]) {
            Err(PathOpsError::ArgCountError(cmd, args)) => {
                assert_eq!(cmd, 'l');
                assert_eq!(args, "1 2 3");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(PathCommand::absolute(CommandKind::ClosePath, vec![1.]).is_err());
        assert!(PathCommand::absolute(CommandKind::ArcTo, vec![1.; 6]).is_err());
    }

    #[test]
    fn test_translate_coordinates_only() {
        let mut arc =
            PathCommand::absolute(CommandKind::ArcTo, vec![2., 2., 1., 1., 1., 4., 4.]).unwrap();
        arc.translate(1., 3.);
        assert_eq!(arc.args(), &[2., 2., 1., 1., 1., 5., 7.]);

        let mut h = PathCommand::absolute(CommandKind::HLineTo, vec![8.]).unwrap();
        h.translate(-1., -2.);
        assert_eq!(h.args(), &[7.]);

        let mut v = PathCommand::absolute(CommandKind::VLineTo, vec![8.]).unwrap();
        v.translate(-1., -2.);
        assert_eq!(v.args(), &[6.]);

        let mut q = PathCommand::absolute(CommandKind::QuadTo, vec![5., 5., 6., 6.]).unwrap();
        q.translate(3., 1.);
        assert_eq!(q.args(), &[8., 6., 9., 7.]);
    }

    #[test]
    fn test_display() {
        let cmd = PathCommand::absolute(CommandKind::CubicTo, vec![3., 1., 4., 6., 5., 5.]).unwrap();
        assert_eq!(cmd.to_string(), "C3,1 4,6 5,5");

        let cmd = PathCommand::absolute(CommandKind::ArcTo, vec![1., 1., 0., 0., 0., 5., 5.]).unwrap();
        assert_eq!(cmd.to_string(), "A1 1 0 0 0 5,5");

        let cmd = PathCommand::relative(CommandKind::HLineTo, vec![-1.]).unwrap();
        assert_eq!(cmd.to_string(), "h-1");

        let cmd = PathCommand::relative(CommandKind::ClosePath, vec![]).unwrap();
        assert_eq!(cmd.to_string(), "z");

        let cmd = PathCommand::absolute(CommandKind::LineTo, vec![1.23456, 0.5]).unwrap();
        assert_eq!(cmd.to_string(), "L1.235,0.5");
        assert_eq!(cmd.to_string_with_precision(1), "L1.2,0.5");
    }
}
