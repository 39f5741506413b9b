use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for docstore operations.
///
/// Each kind names one category of failure so callers can branch on it
/// without parsing messages.
///
/// # Examples
///
/// ```rust
/// use docstore::errors::{DocStoreError, DocStoreResult, ErrorKind};
///
/// fn example() -> DocStoreResult<()> {
///     Err(DocStoreError::new("initial id must be positive", ErrorKind::InvalidConfiguration))
/// }
///
/// assert_eq!(example().unwrap_err().kind(), &ErrorKind::InvalidConfiguration);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Error during filter evaluation or construction
    FilterError,
    /// Store configuration was rejected by the builder
    InvalidConfiguration,
    /// No identifier could be assigned to a document
    InvalidId,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::InvalidConfiguration => write!(f, "Invalid configuration"),
            ErrorKind::InvalidId => write!(f, "Invalid ID"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type returned by fallible docstore operations.
///
/// `DocStoreError` carries a message, an [`ErrorKind`], an optional cause and
/// the backtrace captured where it was created.
///
/// ```rust
/// use docstore::errors::{DocStoreError, ErrorKind};
///
/// let cause = DocStoreError::new("bad pattern", ErrorKind::FilterError);
/// let err = DocStoreError::new_with_cause("search failed", ErrorKind::FilterError, cause);
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct DocStoreError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<DocStoreError>>,
    backtrace: Atomic<Backtrace>,
}

impl DocStoreError {
    /// Creates a new error with the given message and kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DocStoreError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new error that wraps `cause`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DocStoreError) -> Self {
        DocStoreError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&DocStoreError> {
        self.cause.as_deref()
    }
}

impl Display for DocStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for DocStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for DocStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// Shorthand for `Result<T, DocStoreError>`.
pub type DocStoreResult<T> = Result<T, DocStoreError>;

impl From<String> for DocStoreError {
    fn from(msg: String) -> Self {
        DocStoreError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for DocStoreError {
    fn from(msg: &str) -> Self {
        DocStoreError::new(msg, ErrorKind::InternalError)
    }
}
