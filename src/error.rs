use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    IoError = 12,
    UnsupportedEncoding = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

/// Structural decode failure. The `Display` text is the fixed message shown
/// to the user in place of a result; the detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("Invalid UTF-8 Hex Input")]
    InvalidUtf8Hex { detail: String },

    #[error("Invalid Hex Input")]
    InvalidHex { detail: String },

    #[error("Invalid Binary Input")]
    InvalidBinary { detail: String },

    #[error("Invalid Octal Input")]
    InvalidOctal { detail: String },

    #[error("Invalid Punycode Input")]
    InvalidPunycode { detail: String },

    #[error("Invalid Base64 Input")]
    InvalidBase64 { detail: String },
}

impl TransformError {
    pub fn detail(&self) -> &str {
        match self {
            TransformError::InvalidUtf8Hex { detail }
            | TransformError::InvalidHex { detail }
            | TransformError::InvalidBinary { detail }
            | TransformError::InvalidOctal { detail }
            | TransformError::InvalidPunycode { detail }
            | TransformError::InvalidBase64 { detail } => detail,
        }
    }

    pub fn invalid_punycode(detail: impl Into<String>) -> Self {
        Self::InvalidPunycode { detail: detail.into() }
    }
}

#[derive(Debug, Error)]
pub enum TextcodecError {
    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextcodecError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TextcodecError::Transform(_) | TextcodecError::InvalidInput { .. } => ExitCode::InvalidInput,
            TextcodecError::Io(_) => ExitCode::IoError,
            TextcodecError::UnsupportedEncoding { .. } => ExitCode::UnsupportedEncoding,
            TextcodecError::Json(_) => ExitCode::GeneralError,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, TextcodecError>;
