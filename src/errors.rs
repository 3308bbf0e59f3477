use std::error::Error;
use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, PathOpsError>;

#[derive(Debug)]
pub enum PathOpsError {
    ParseError(String),
    /// Command letter and the raw operands which don't fit its arity
    ArgCountError(char, String),
    /// Command or segment kind with no mapping, and its raw operands
    UnsupportedConstruct(String, String),
    /// Stroke property name and the unrecognized value
    UnsupportedStyle(String, String),
    KernelError(String),
    OtherError(Box<dyn std::error::Error>),
}

impl fmt::Display for PathOpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOpsError::ParseError(reason) => write!(f, "Parse error: {reason}"),
            PathOpsError::ArgCountError(cmd, args) => {
                write!(f, "Parse error: wrong number of arguments for '{cmd}': '{args}'")
            }
            PathOpsError::UnsupportedConstruct(kind, args) => {
                write!(f, "Unsupported construct: no mapping for \"{kind} {args}\"")
            }
            PathOpsError::UnsupportedStyle(prop, value) => {
                write!(f, "Unsupported style: {prop} '{value}'")
            }
            PathOpsError::KernelError(reason) => write!(f, "Kernel error: {reason}"),
            PathOpsError::OtherError(source) => write!(f, "{source}"),
        }
    }
}

impl Error for PathOpsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PathOpsError::ParseError(_) => None,
            PathOpsError::ArgCountError(_, _) => None,
            PathOpsError::UnsupportedConstruct(_, _) => None,
            PathOpsError::UnsupportedStyle(_, _) => None,
            PathOpsError::KernelError(_) => None,
            PathOpsError::OtherError(e) => Some(&**e),
        }
    }
}

impl PathOpsError {
    /// Wrap an arbitrary error, typically one reported by a geometry kernel.
    pub fn from_err<T>(err: T) -> PathOpsError
    where
        T: std::error::Error + 'static,
    {
        PathOpsError::OtherError(Box::new(err))
    }
}

impl From<ParseFloatError> for PathOpsError {
    fn from(err: ParseFloatError) -> PathOpsError {
        PathOpsError::ParseError(format!("float: {err}"))
    }
}

impl From<&str> for PathOpsError {
    fn from(err: &str) -> PathOpsError {
        PathOpsError::KernelError(err.to_string())
    }
}
