//! Error types.
//!
//! Library code reports typed errors (`ModelError`, `StyleError`). The binary
//! collapses them into `AppError`, which carries the process exit code.

use thiserror::Error;

use crate::domain::ModelKind;

/// Errors raised when dispatching or preparing a model.
///
/// Evaluating a model never fails on numeric grounds; bad parameter values
/// produce NaN/Inf instead. These errors cover the *shape* of the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("{model} takes {expected} parameters ({names}), got {actual}")]
    ParamCount {
        model: &'static str,
        expected: usize,
        actual: usize,
        names: String,
    },

    #[error("cannot derive an initial guess for {0} from an empty data set")]
    EmptyData(&'static str),

    #[error("unknown model '{0}'")]
    UnknownModel(String),
}

impl ModelError {
    pub(crate) fn param_count(kind: ModelKind, actual: usize) -> Self {
        ModelError::ParamCount {
            model: kind.display_name(),
            expected: kind.param_len(),
            actual,
            names: kind.param_names().join(", "),
        }
    }
}

/// Errors raised while reading a style sheet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("line {line}: expected 'key: value', got '{text}'")]
    Syntax { line: usize, text: String },

    #[error("invalid value for '{key}': '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("unknown color '{0}'")]
    UnknownColor(String),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        let code = match err {
            ModelError::EmptyData(_) => 3,
            ModelError::ParamCount { .. } | ModelError::UnknownModel(_) => 2,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<StyleError> for AppError {
    fn from(err: StyleError) -> Self {
        AppError::new(2, format!("Invalid style sheet: {err}"))
    }
}
