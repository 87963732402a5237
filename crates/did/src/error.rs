//! # DID Web Errors
//!
//! Typed errors raised while parsing identifiers or converting certificates
//! into verification methods.

use thiserror::Error;

/// Errors returned by `did:web` core operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The identifier is not a well-formed `did:web` DID.
    #[error("invalid did:web identifier: {0}")]
    InvalidDid(String),

    /// The input holds no parseable X.509 certificate, or the certificate's
    /// key material is malformed.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    /// The certificate's subject public key uses an algorithm other than RSA.
    #[error("unsupported public key algorithm: {0}")]
    UnsupportedKeyType(String),

    /// A certificate could not be converted into a verification method.
    #[error("{0}")]
    PemConversion(String),
}

impl Error {
    /// Short machine-readable code for the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidDid(_) => "invalid_did",
            Self::InvalidCertificate(_) => "invalid_certificate",
            Self::UnsupportedKeyType(_) => "unsupported_key_type",
            Self::PemConversion(_) => "pem_conversion",
        }
    }
}
