//! Error types for vec128 operations.
//!
//! The vector primitives and the math engine are total functions and never
//! fail. Errors only come from the slice kernels (mismatched buffers) and
//! from the diagnostic dump (a failing output sink).

use std::fmt;
use std::io;

/// Errors that can occur in vec128 operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vec128Error {
    /// Two buffers that must be processed in lockstep have different lengths.
    LengthMismatch {
        /// Length of the input buffer.
        expected: usize,
        /// Length of the buffer that did not match it.
        actual: usize,
    },
    /// Writing to a diagnostic output sink failed.
    Io {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for Vec128Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vec128Error::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected {} elements, got {}",
                expected, actual
            ),
            Vec128Error::Io { message } => write!(f, "Output error: {}", message),
        }
    }
}

impl std::error::Error for Vec128Error {}

impl From<io::Error> for Vec128Error {
    fn from(err: io::Error) -> Self {
        io_error(err.to_string())
    }
}

/// Result type alias for vec128 operations.
pub type Result<T> = std::result::Result<T, Vec128Error>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> Vec128Error {
    Vec128Error::LengthMismatch { expected, actual }
}

/// Creates an output error.
pub fn io_error(message: impl Into<String>) -> Vec128Error {
    Vec128Error::Io {
        message: message.into(),
    }
}

/// Fails with [`Vec128Error::LengthMismatch`] unless both lengths agree.
#[inline]
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(length_mismatch(expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(1024, 1000);
        let display = format!("{}", error);
        assert!(display.contains("Length mismatch"));
        assert!(display.contains("1024"));
        assert!(display.contains("1000"));
    }

    #[test]
    fn test_io_error_display() {
        let error = io_error("broken pipe");
        let display = format!("{}", error);
        assert!(display.contains("Output error"));
        assert!(display.contains("broken pipe"));
    }

    #[test]
    fn test_from_io_error() {
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "sink closed");
        let error: Vec128Error = err.into();
        assert_eq!(error, io_error("sink closed"));
    }

    #[test]
    fn test_ensure_same_len() {
        assert!(ensure_same_len(4, 4).is_ok());
        assert_eq!(ensure_same_len(4, 3), Err(length_mismatch(4, 3)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = length_mismatch(8, 4);

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
