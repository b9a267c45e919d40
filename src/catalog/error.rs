use crate::errors::domain::{classify_io_error, DomainError, ErrorCode, IoErrorHint};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    NotFound,
    PermissionDenied,
    ReadFailed,
    ParseFailed,
}

impl ErrorCode for CatalogErrorCode {
    fn as_code_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::ReadFailed => "read_failed",
            Self::ParseFailed => "parse_failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogError {
    code: CatalogErrorCode,
    message: String,
}

impl CatalogError {
    pub fn new(code: CatalogErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn from_io_error(context: &str, error: std::io::Error) -> Self {
        let code = match classify_io_error(&error) {
            IoErrorHint::NotFound => CatalogErrorCode::NotFound,
            IoErrorHint::PermissionDenied => CatalogErrorCode::PermissionDenied,
            // read_to_string reports non-UTF-8 content this way
            IoErrorHint::InvalidData => CatalogErrorCode::ParseFailed,
            IoErrorHint::Other => CatalogErrorCode::ReadFailed,
        };
        Self::new(code, format!("{context}: {error}"))
    }

    pub fn from_json_error(context: &str, error: serde_json::Error) -> Self {
        Self::new(CatalogErrorCode::ParseFailed, format!("{context}: {error}"))
    }

    pub fn code(&self) -> CatalogErrorCode {
        self.code
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CatalogError {}

impl DomainError for CatalogError {
    fn code_str(&self) -> &'static str {
        self.code.as_code_str()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
