use crate::errors::api_error::{ApiError, ApiResult};
use std::io::ErrorKind;

pub trait ErrorCode {
    #[allow(clippy::wrong_self_convention)]
    fn as_code_str(self) -> &'static str;
}

pub trait DomainError: std::error::Error {
    fn code_str(&self) -> &'static str;
    fn message(&self) -> &str;

    fn to_api_error(&self) -> ApiError {
        ApiError::new(self.code_str(), self.message())
    }
}

pub fn map_api_result<T, E>(result: Result<T, E>) -> ApiResult<T>
where
    E: DomainError,
{
    result.map_err(|error| error.to_api_error())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorHint {
    NotFound,
    PermissionDenied,
    InvalidData,
    Other,
}

pub fn classify_io_error(error: &std::io::Error) -> IoErrorHint {
    let from_kind = match error.kind() {
        ErrorKind::NotFound => IoErrorHint::NotFound,
        ErrorKind::PermissionDenied => IoErrorHint::PermissionDenied,
        ErrorKind::InvalidData => IoErrorHint::InvalidData,
        _ => IoErrorHint::Other,
    };
    if from_kind != IoErrorHint::Other {
        return from_kind;
    }
    error
        .raw_os_error()
        .map(classify_raw_os_error)
        .unwrap_or(IoErrorHint::Other)
}

pub fn classify_raw_os_error(raw: i32) -> IoErrorHint {
    #[cfg(windows)]
    {
        return match raw {
            5 => IoErrorHint::PermissionDenied, // ERROR_ACCESS_DENIED
            2 | 3 => IoErrorHint::NotFound,     // ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND
            _ => IoErrorHint::Other,
        };
    }

    #[cfg(unix)]
    {
        return match raw {
            1 | 13 => IoErrorHint::PermissionDenied, // EPERM | EACCES
            2 | 20 => IoErrorHint::NotFound,         // ENOENT | ENOTDIR
            _ => IoErrorHint::Other,
        };
    }

    #[allow(unreachable_code)]
    IoErrorHint::Other
}

#[cfg(test)]
mod tests {
    use super::{classify_io_error, map_api_result, DomainError, ErrorCode, IoErrorHint};
    use std::fmt;
    use std::io::{Error, ErrorKind};

    #[derive(Debug, Clone, Copy)]
    enum SampleCode {
        Broken,
    }

    impl ErrorCode for SampleCode {
        fn as_code_str(self) -> &'static str {
            match self {
                Self::Broken => "broken",
            }
        }
    }

    #[derive(Debug)]
    struct SampleError;

    impl fmt::Display for SampleError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("it broke")
        }
    }

    impl std::error::Error for SampleError {}

    impl DomainError for SampleError {
        fn code_str(&self) -> &'static str {
            SampleCode::Broken.as_code_str()
        }

        fn message(&self) -> &str {
            "it broke"
        }
    }

    #[test]
    fn maps_domain_error_to_api_error() {
        let err = map_api_result::<(), _>(Err(SampleError)).unwrap_err();
        assert_eq!(err.code, "broken");
        assert_eq!(err.message, "it broke");
    }

    #[test]
    fn classifies_io_error_kinds() {
        assert_eq!(
            classify_io_error(&Error::from(ErrorKind::NotFound)),
            IoErrorHint::NotFound
        );
        assert_eq!(
            classify_io_error(&Error::from(ErrorKind::PermissionDenied)),
            IoErrorHint::PermissionDenied
        );
        assert_eq!(
            classify_io_error(&Error::other("boom")),
            IoErrorHint::Other
        );
    }

    #[cfg(unix)]
    #[test]
    fn classifies_raw_os_errors() {
        assert_eq!(
            classify_io_error(&Error::from_raw_os_error(13)),
            IoErrorHint::PermissionDenied
        );
        assert_eq!(
            classify_io_error(&Error::from_raw_os_error(20)),
            IoErrorHint::NotFound
        );
    }
}
