// MIT/Apache2 License

use std::fmt;

/// Sum error type for stencil operations.
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message.
    Msg(String),
    /// Attempted to run an unsupported operation.
    NotSupported(NSOpType),
}

/// An operation that is not supported.
#[derive(Debug, Copy, Clone)]
pub enum NSOpType {
    QuadraticCurves,
    FillRules,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::NotSupported(nsop) => {
                write!(f, "Path sink does not support feature \"{:?}\"", nsop)
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
