use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Diagnostics = 1,
    Configuration = 2,
    InvalidInput = 3,
    Io = 4,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failure to turn an icon name into markup.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("icon '{name}' not found")]
    NotFound { name: String },

    /// The asset exists but could not be read; not part of the lookup outcome.
    #[error("failed to read icon asset {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl ResolveError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NotFound { .. } => ExitCode::Diagnostics,
            Self::Io { .. } => ExitCode::Io,
        }
    }
}

/// Failures raised while rendering documents in bulk.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } => ExitCode::Io,
            Self::InvalidInput(_) => ExitCode::InvalidInput,
            Self::Resolve(err) => err.exit_code(),
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
pub type RenderResult<T> = Result<T, RenderError>;
