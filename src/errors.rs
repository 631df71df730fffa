//! Error mapping guide:
//! - Emitters only ever return `ValidationError`; nothing is appended when they do.
//! - File and process failures surface as `ScriptError::Io` / `ScriptError::Launch`.
//! - Map io::ErrorKind::NotFound to exit code 127, validation to 2; all others to 1.
//! - A launch without an io cause (timeout, abnormal exit) maps to 1.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An argument fell outside the legal domain of its command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("`{parameter}` must be one of {}; got '{value}'", .accepted.join(", "))]
    UnknownOption {
        parameter: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },

    #[error("`{parameter}` must be {expected}; got {value}")]
    OutOfRange {
        parameter: &'static str,
        value: String,
        expected: String,
    },

    #[error("`{parameter}` {reason}")]
    Invalid {
        parameter: &'static str,
        reason: String,
    },
}

impl ValidationError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            ValidationError::UnknownOption { parameter, .. }
            | ValidationError::OutOfRange { parameter, .. }
            | ValidationError::Invalid { parameter, .. } => parameter,
        }
    }

    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(
        parameter: &'static str,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        ValidationError::OutOfRange {
            parameter,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

/// Failures outside argument validation: writing, deleting or launching.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {}: {reason}", .program.display())]
    Launch {
        program: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl ScriptError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScriptError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Map an io::Error to a process exit code, preserving current behavior:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

/// Convert ScriptError to exit code (parity with io::Error mapping).
pub fn exit_code_for_script_error(e: &ScriptError) -> u8 {
    match e {
        ScriptError::Validation(_) => 2,
        ScriptError::Io { source, .. } => exit_code_for_io_error(source),
        ScriptError::Launch {
            source: Some(ioe), ..
        } => exit_code_for_io_error(ioe),
        ScriptError::Launch { source: None, .. } => 1,
        ScriptError::Config { .. } => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_lists_accepted_tokens() {
        let e = ValidationError::UnknownOption {
            parameter: "units",
            value: "YARDS".to_string(),
            accepted: vec!["METER", "FEET"],
        };
        assert_eq!(e.to_string(), "`units` must be one of METER, FEET; got 'YARDS'");
        assert_eq!(e.parameter(), "units");
    }

    #[test]
    fn exit_codes_follow_io_kind() {
        let nf = ScriptError::io("x", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(exit_code_for_script_error(&nf), 127);
        let denied = ScriptError::io(
            "x",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(exit_code_for_script_error(&denied), 1);
        let v = ScriptError::from(ValidationError::invalid("frame", "must be positive"));
        assert_eq!(exit_code_for_script_error(&v), 2);
    }
}
