mod command;
mod normalize;
mod syntax;

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::errors::{PathOpsError, Result};

pub use command::{CommandKind, PathCommand};
use syntax::{PathSyntax, SvgPathSyntax};

/// An ordered sequence of path commands, as found in an SVG `d` attribute.
///
/// Parse with `str::parse`, serialize with `Display`. The tokenizer behind
/// the parser is not exported:
///
/// ```compile_fail
/// use svgops::path::SvgPathSyntax;
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "json",
    derive(serde_derive::Serialize, serde_derive::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize with numbers rounded to `precision` decimal places.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        self.commands
            .iter()
            .map(|c| c.to_string_with_precision(precision))
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for Path {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

/// Writes path data with numbers rounded to 3 decimal places.
///
/// Operands are held as `f32`, so values beyond about 7 significant digits
/// don't survive a round trip (`M600000.1,1` is written `M600000.125,1`).
/// Anything smaller than 0.0005 in magnitude is written as `0`; use
/// [`Path::to_string_with_precision`] to keep more places.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.commands.iter().join(" "))
    }
}

impl FromStr for Path {
    type Err = PathOpsError;

    fn from_str(data: &str) -> Result<Self> {
        let mut pp = PathParser::new(data);
        pp.evaluate()?;
        Ok(Self::from_commands(pp.commands))
    }
}

impl TryFrom<String> for Path {
    type Error = PathOpsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Path> for String {
    fn from(value: Path) -> Self {
        value.to_string()
    }
}

struct PathParser {
    tokens: SvgPathSyntax,
    commands: Vec<PathCommand>,
}

impl PathParser {
    fn new(data: &str) -> Self {
        PathParser {
            tokens: SvgPathSyntax::new(data),
            commands: Vec::new(),
        }
    }

    /// Read all operands up to the next command letter. Arc flags are
    /// read as single characters since they may abut the next number.
    fn read_args(&mut self, kind: CommandKind) -> Result<Vec<f32>> {
        let mut args = Vec::new();
        while !self.tokens.at_end() && !self.tokens.at_command()? {
            let is_flag = kind == CommandKind::ArcTo && matches!(args.len() % 7, 3 | 4);
            let value = if is_flag {
                self.tokens.read_flag()? as f32
            } else {
                self.tokens.read_number()?
            };
            args.push(value);
        }
        Ok(args)
    }

    fn process_instruction(&mut self) -> Result<()> {
        let letter = self.tokens.read_command()?;
        let (kind, relative) = CommandKind::from_letter(letter)
            .ok_or_else(|| PathOpsError::ParseError(format!("invalid path command '{letter}'")))?;

        let start = self.tokens.index();
        let args = self.read_args(kind)?;
        let arity = kind.arity();

        // "The command letter can be eliminated on subsequent commands if the same
        // command is used multiple times in a row", so each group of `arity`
        // operands is a separate command.
        let well_formed = if arity == 0 {
            args.is_empty()
        } else {
            !args.is_empty() && args.len() % arity == 0
        };
        if !well_formed {
            return Err(PathOpsError::ArgCountError(
                letter,
                self.tokens.text_from(start),
            ));
        }

        if arity == 0 {
            self.commands
                .push(PathCommand::new_unchecked(kind, relative, Vec::new()));
            return Ok(());
        }
        for (idx, group) in args.chunks_exact(arity).enumerate() {
            // "If a moveto is followed by multiple pairs of coordinates,
            // the subsequent pairs are treated as implicit lineto commands."
            let kind = if kind == CommandKind::MoveTo && idx > 0 {
                CommandKind::LineTo
            } else {
                kind
            };
            self.commands
                .push(PathCommand::new_unchecked(kind, relative, group.to_vec()));
        }
        Ok(())
    }

    fn evaluate(&mut self) -> Result<()> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            self.process_instruction()?;
        }
        Ok(())
    }
}
