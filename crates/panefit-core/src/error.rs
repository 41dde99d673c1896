use std::fmt;
use std::path::PathBuf;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// An error reported by the native windowing API.
///
/// `code` is the OS last-error value as reported by the platform layer
/// (an `HRESULT` on Windows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    pub code: i32,
    pub message: String,
}

impl NativeError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "OS error 0x{:08X}", self.code)
        } else {
            write!(f, "OS error 0x{:08X}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for NativeError {}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("process listing failed: {message}")]
    ProcessListing { message: String },

    #[error("no visible window for pid {pid}")]
    WindowNotFound { pid: u32 },

    #[error("{operation} failed for pid {pid}: {source}")]
    Native {
        operation: &'static str,
        pid: u32,
        #[source]
        source: NativeError,
    },

    #[error("config error at '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("window control is only available on Windows")]
    Unsupported,
}

impl Error {
    pub(crate) fn listing(message: impl fmt::Display) -> Self {
        Self::ProcessListing {
            message: message.to_string(),
        }
    }

    pub(crate) fn native(operation: &'static str, pid: u32, source: NativeError) -> Self {
        Self::Native {
            operation,
            pid,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_pid() {
        let err = Error::WindowNotFound { pid: 4242 };
        assert_eq!(err.to_string(), "no visible window for pid 4242");
    }

    #[test]
    fn native_error_keeps_operation_and_code() {
        let err = Error::native(
            "get window rect",
            7,
            NativeError::new(0x8007_0578_u32 as i32, "Invalid window handle."),
        );
        assert_eq!(
            err.to_string(),
            "get window rect failed for pid 7: OS error 0x80070578: Invalid window handle."
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn listing_error_keeps_the_message() {
        let err = Error::listing("line 3: unterminated quoted field");
        assert_eq!(
            err.to_string(),
            "process listing failed: line 3: unterminated quoted field"
        );
    }
}
