//! Error types for contact submission and the create form.
//!
//! # Design
//! A rejected submission and a transport fault are both "error creating
//! contact" to the caller; the variants exist so logs and tests can tell
//! them apart. The status code in `Rejected` is diagnostic only.

/// Errors returned by `ContactClient`.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The server answered with a non-2xx status.
    #[error("error creating contact: failed to create contact (HTTP {status})")]
    Rejected { status: u16 },

    /// The request could not complete or the response could not be parsed.
    #[error("error creating contact: {0}")]
    Transport(String),
}

/// Failure reported by an `HttpTransport` before any response was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for ContactError {
    fn from(err: TransportError) -> Self {
        ContactError::Transport(err.0)
    }
}

/// Structural precondition violations of `CreateContactForm`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("loading shade is not present in the document")]
    LoadingShadeMissing,

    #[error("form field `{0}` is not present in the document")]
    FieldMissing(String),
}
