//! # DID Web Core
//!
//! Building blocks for hosting `did:web` identities backed by X.509
//! certificates:
//!
//! - [`url`] maps `did:web` identifiers to the HTTPS URLs their documents and
//!   certificates are served from.
//! - [`pem`] decodes PEM certificates and extracts RSA public key material.
//! - [`verification`] turns a certificate into a `JsonWebKey2020`
//!   verification method.
//! - [`document`] is the DID document returned to resolvers.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-web>
//! - <https://www.w3.org/TR/did-core>

mod error;

pub mod document;
pub mod pem;
pub mod url;
pub mod verification;

pub use self::document::{CONTEXT, Document};
pub use self::error::Error;
pub use self::url::{
    COMMON_CERTIFICATE_FILE, DID_DOCUMENT_FILE, DID_WEB_PREFIX, DidWeb, WebUrl, certificate_url,
    resolution_url,
};
pub use self::verification::{PublicJwk, VerificationMethod, VerificationMethodBuilder};

/// Result type for `did:web` core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
