use std::fmt;

/// Custom error types for RKD parsing
#[derive(Debug)]
pub enum RkdError {
    /// I/O errors
    Io(std::io::Error),
    /// UTF-8 parsing errors
    Utf8(std::str::Utf8Error),
    /// The file does not start with the RKD magic signature
    BadMagic,
    /// The file ends before the magic + meta header prologue is complete.
    ///
    /// Truncation *inside the record stream* is not an error: the decoder
    /// stops at the last fully-contained record and keeps whatever was
    /// decoded so far.
    Truncated { expected: usize, available: usize },
    /// Export format error
    Export(String),
}

impl fmt::Display for RkdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RkdError::Io(err) => write!(f, "I/O error: {}", err),
            RkdError::Utf8(err) => write!(f, "UTF-8 error: {}", err),
            RkdError::BadMagic => write!(f, "not an RKD file (invalid magic signature)"),
            RkdError::Truncated {
                expected,
                available,
            } => write!(
                f,
                "file too small: need {} bytes, have {}",
                expected, available
            ),
            RkdError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for RkdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RkdError::Io(err) => Some(err),
            RkdError::Utf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RkdError {
    fn from(err: std::io::Error) -> Self {
        RkdError::Io(err)
    }
}

impl From<std::str::Utf8Error> for RkdError {
    fn from(err: std::str::Utf8Error) -> Self {
        RkdError::Utf8(err)
    }
}

pub type Result<T> = std::result::Result<T, RkdError>;
