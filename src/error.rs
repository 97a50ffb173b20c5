use thiserror::Error;

/// Convenience result type for abbreviation and search operations.
pub type UtilResult<T> = Result<T, UtilError>;

/// Error type returned by every fallible function in this crate.
///
/// Abbreviation only ever fails with [`UtilError::InvalidInput`]; search fails with
/// [`UtilError::InvalidArgument`] or [`UtilError::Parse`] (and [`UtilError::Io`] when reading
/// from a file).
#[derive(Debug, Error)]
pub enum UtilError {
    /// The value passed to [`crate::number::abbreviate`] is not a finite number.
    #[error("invalid input '{raw}': {message}")]
    InvalidInput { raw: String, message: String },

    /// A search argument is missing or empty.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    /// The search text is not valid JSON, or is valid JSON but not an array.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Underlying I/O error (file entrypoint only).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The closed set of error kinds, for callers that only need to branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidArgument,
    Parse,
    Io,
}

impl UtilError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UtilError::InvalidInput { .. } => ErrorKind::InvalidInput,
            UtilError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            UtilError::Parse { .. } => ErrorKind::Parse,
            UtilError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_input(raw: impl Into<String>, message: impl Into<String>) -> Self {
        UtilError::InvalidInput {
            raw: raw.into(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        UtilError::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        UtilError::Parse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, UtilError};

    #[test]
    fn kind_matches_variant() {
        assert_eq!(UtilError::invalid_input("x", "nope").kind(), ErrorKind::InvalidInput);
        assert_eq!(UtilError::invalid_argument("term", "empty").kind(), ErrorKind::InvalidArgument);
        assert_eq!(UtilError::parse("bad").kind(), ErrorKind::Parse);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(UtilError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn display_includes_context() {
        let msg = UtilError::invalid_argument("term", "must be a non-empty string").to_string();
        assert!(msg.contains("invalid argument 'term'"));
        assert!(msg.contains("non-empty"));

        let msg = UtilError::invalid_input("abc", "not a number").to_string();
        assert_eq!(msg, "invalid input 'abc': not a number");
    }
}
