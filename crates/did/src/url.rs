//! # DID Web URLs
//!
//! Map `did:web` identifiers to the HTTPS locations their DID documents and
//! certificates are served from, and build participant identifiers for the
//! configured domain.
//!
//! A `did:web` identifier is of the form
//!
//! `did:web:<domain>[%3A<port>][:<path-segment>]*`.
//!
//! See <https://w3c-ccg.github.io/did-method-web/#read-resolve>

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Prefix shared by all `did:web` identifiers.
pub const DID_WEB_PREFIX: &str = "did:web:";

/// File name of a DID document at its resolution location.
pub const DID_DOCUMENT_FILE: &str = "did.json";

/// File name the federation-wide common certificate is served under.
pub const COMMON_CERTIFICATE_FILE: &str = "cert.ss.pem";

const WELL_KNOWN: &str = ".well-known";
const PARTICIPANT_PATH: &str = "participant";
const ENCODED_COLON: &str = "%3A";

/// Builds `did:web` identifiers for the domain this service is hosted on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidWeb {
    domain: String,
}

impl DidWeb {
    /// Create a builder for the given domain, optionally including a port
    /// (`example.com` or `localhost:8443`).
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into() }
    }

    /// The configured domain, as provided.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The `did:web` identifier of the domain root.
    ///
    /// Only the first `:` of the domain (the host/port separator) is percent
    /// encoded. Any later colons are kept and so read as path separators.
    #[must_use]
    pub fn common_did(&self) -> String {
        format!("{DID_WEB_PREFIX}{}", self.domain.replacen(':', ENCODED_COLON, 1))
    }

    /// The `did:web` identifier of the participant with the given id.
    #[must_use]
    pub fn participant_did(&self, participant_id: &str) -> String {
        format!("{}:{PARTICIPANT_PATH}:{participant_id}", self.common_did())
    }
}

/// A `did:web` identifier split into the components used for resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebUrl {
    /// Fully qualified domain name, with a percent-encoded port colon decoded.
    pub domain: String,

    /// Path segments following the domain, if any.
    pub path: Option<Vec<String>>,
}

impl FromStr for WebUrl {
    type Err = Error;

    /// Parse a `did:web` identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDid`] if the string does not start with
    /// `did:web:` or has an empty method-specific id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(id) = s.strip_prefix(DID_WEB_PREFIX) else {
            return Err(Error::InvalidDid(format!("{s} does not start with '{DID_WEB_PREFIX}'")));
        };

        let mut segments = id.split(':').map(|segment| segment.replace(ENCODED_COLON, ":"));
        let domain = segments.next().unwrap_or_default();
        if domain.is_empty() {
            return Err(Error::InvalidDid(format!("missing domain: {s}")));
        }
        let path = segments.collect::<Vec<_>>();

        Ok(Self {
            domain,
            path: if path.is_empty() { None } else { Some(path) },
        })
    }
}

impl Display for WebUrl {
    /// Format as a `did:web` identifier.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{DID_WEB_PREFIX}{}", self.domain.replacen(':', ENCODED_COLON, 1))?;
        if let Some(path) = &self.path {
            write!(f, ":{}", path.join(":"))?;
        }
        Ok(())
    }
}

impl WebUrl {
    /// Convert to the HTTPS URL of the DID document.
    ///
    /// Domain-root identifiers resolve under `/.well-known/`, identifiers with
    /// a path never do.
    #[must_use]
    pub fn to_web_http(&self) -> String {
        self.path.as_ref().map_or_else(
            || format!("https://{}/{WELL_KNOWN}/{DID_DOCUMENT_FILE}", self.domain),
            |path| format!("https://{}/{}/{DID_DOCUMENT_FILE}", self.domain, path.join("/")),
        )
    }
}

/// Resolve a `did:web` identifier to the HTTPS URL of its DID document.
///
/// # Errors
///
/// Returns [`Error::InvalidDid`] if `did` is not a `did:web` identifier.
pub fn resolution_url(did: &str) -> crate::Result<String> {
    Ok(WebUrl::from_str(did)?.to_web_http())
}

/// Resolve the HTTPS URL of a file hosted next to the DID document of `did`,
/// such as a certificate.
///
/// # Errors
///
/// Returns [`Error::InvalidDid`] if `did` is not a `did:web` identifier.
pub fn certificate_url(did: &str, file_name: &str) -> crate::Result<String> {
    let url = resolution_url(did)?;
    let base = url.strip_suffix(DID_DOCUMENT_FILE).unwrap_or(&url);
    Ok(format!("{base}{file_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_root() {
        let url = resolution_url("did:web:example.com").expect("should resolve");
        assert_eq!(url, "https://example.com/.well-known/did.json");

        let url = resolution_url("did:web:localhost%3A1234").expect("should resolve");
        assert_eq!(url, "https://localhost:1234/.well-known/did.json");
    }

    #[test]
    fn with_path() {
        let url = resolution_url("did:web:example.com:some:path:123").expect("should resolve");
        assert_eq!(url, "https://example.com/some/path/123/did.json");

        let url = resolution_url("did:web:localhost%3A8443:participant:abc").expect("should resolve");
        assert_eq!(url, "https://localhost:8443/participant/abc/did.json");
        assert!(!url.contains(".well-known"));
    }

    #[test]
    fn components() {
        let url = WebUrl::from_str("did:web:localhost%3A8443:participant:abc").expect("should parse");
        assert_eq!(url.domain, "localhost:8443");
        assert_eq!(url.path, Some(vec!["participant".to_string(), "abc".to_string()]));
        assert_eq!(url.to_string(), "did:web:localhost%3A8443:participant:abc");

        let url = WebUrl::from_str("did:web:example.com").expect("should parse");
        assert_eq!(url.domain, "example.com");
        assert_eq!(url.path, None);
    }

    #[test]
    fn not_did_web() {
        let Err(Error::InvalidDid(_)) = resolution_url("did:key:z6Mkabc") else {
            panic!("should reject other methods");
        };
        let Err(Error::InvalidDid(_)) = resolution_url("did:web:") else {
            panic!("should reject empty domain");
        };
    }

    #[test]
    fn certificate_location() {
        let url = certificate_url("did:web:example.com:participant:abc", "cert-1.pem")
            .expect("should resolve");
        assert_eq!(url, "https://example.com/participant/abc/cert-1.pem");

        let url = certificate_url("did:web:localhost%3A8443", COMMON_CERTIFICATE_FILE)
            .expect("should resolve");
        assert_eq!(url, "https://localhost:8443/.well-known/cert.ss.pem");
    }

    #[test]
    fn participant_ids() {
        let did_web = DidWeb::new("localhost:8443");
        assert_eq!(did_web.common_did(), "did:web:localhost%3A8443");
        assert_eq!(did_web.participant_did("abc"), "did:web:localhost%3A8443:participant:abc");

        let did_web = DidWeb::new("example.com");
        assert_eq!(did_web.common_did(), "did:web:example.com");
        assert_eq!(did_web.participant_did("abc"), "did:web:example.com:participant:abc");
    }

    // Only the host/port separator is encoded.
    #[test]
    fn first_colon_only() {
        let did_web = DidWeb::new("example.com:8443:tenant");
        assert_eq!(did_web.common_did(), "did:web:example.com%3A8443:tenant");

        let url = resolution_url(&did_web.common_did()).expect("should resolve");
        assert_eq!(url, "https://example.com:8443/tenant/did.json");
    }
}
