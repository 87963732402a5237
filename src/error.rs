//! # Service Errors
//!
//! Errors raised by the service layer. Each variant maps to an HTTP status
//! and a fixed summary message in the error response body.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for service operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by service operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller's input was missing or malformed.
    #[error("{0}")]
    RequestArgument(String),

    /// No participant with the requested DID or id exists.
    #[error("{0}")]
    ParticipantNotFound(String),

    /// The participant exists but has no certificate with the requested id.
    #[error("{0}")]
    CertificateNotFound(String),

    /// A DID document could not be assembled.
    #[error("{message}")]
    DidDocumentGeneration {
        /// Description of the failure.
        message: String,

        /// Underlying cause.
        #[source]
        source: didweb_core::Error,
    },

    /// The participant store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Summary shown to callers for this kind of error.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::RequestArgument(_) => "Failed to process management request.",
            Self::ParticipantNotFound(_) => "Requested participant was not found",
            Self::CertificateNotFound(_) => "Requested certificate was not found",
            Self::DidDocumentGeneration { .. } => "Failed to generate requested DID document",
            Self::Store(_) | Self::Other(_) => "An unknown error occurred",
        }
    }

    /// Details shown to callers. Empty for unclassified errors, whose details
    /// are only logged.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Store(_) | Self::Other(_) => String::new(),
            _ => self.to_string(),
        }
    }
}
