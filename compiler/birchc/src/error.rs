//! Errors that stop a command before it produces any diagnostics.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("invalid value '{value}' for --{flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown error code: {0}")]
    UnknownCode(String),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Classify a failed read of `path`.
    pub fn from_read(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read {
                path,
                source: error,
            },
        }
    }

    /// Usage mistakes get the usage text printed after them.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CliError::UnknownFlag(_)
                | CliError::InvalidValue { .. }
                | CliError::MissingArgument(_)
                | CliError::UnexpectedArgument(_)
        )
    }
}
