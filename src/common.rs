//! # Common Identity
//!
//! The federation root identity, `did:web:<domain>`. It is not persisted: its
//! only key material is the common certificate, read once at startup and
//! shared read-only for the life of the process.

use anyhow::{Context, Result};
use didweb_core::{COMMON_CERTIFICATE_FILE, DidWeb, certificate_url, pem};

use crate::config::CommonVerificationMethodSettings;

/// Common certificate compiled into the binary, used when no certificate path
/// is configured.
pub const BUNDLED_CERTIFICATE: &str = include_str!("../resources/cert.ss.pem");

/// The common verification method added to every participant's DID
/// document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonVerificationMethod {
    /// Verification method id (DID URL fragment).
    pub id: String,

    /// PEM-encoded common certificate.
    pub certificate: String,
}

/// The federation root identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonIdentity {
    did: String,
    verification_method: Option<CommonVerificationMethod>,
}

impl CommonIdentity {
    /// Create the common identity for the domain. `verification_method` is
    /// `None` when the common verification method is disabled.
    #[must_use]
    pub fn new(did_web: &DidWeb, verification_method: Option<CommonVerificationMethod>) -> Self {
        Self {
            did: did_web.common_did(),
            verification_method,
        }
    }

    /// Create the common identity from settings, reading the common
    /// certificate if the common verification method is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the certificate cannot be read or is not a valid
    /// X.509 certificate.
    pub fn load(did_web: &DidWeb, settings: &CommonVerificationMethodSettings) -> Result<Self> {
        if !settings.enabled {
            return Ok(Self::new(did_web, None));
        }

        let certificate = match settings.cert_path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => std::fs::read_to_string(path).with_context(|| {
                format!("failed to read common certificate {}", path.display())
            })?,
            None => BUNDLED_CERTIFICATE.to_string(),
        };
        pem::parse_certificate(&certificate).context("common certificate is invalid")?;
        tracing::info!("loaded common certificate for {}", did_web.common_did());

        Ok(Self::new(
            did_web,
            Some(CommonVerificationMethod {
                id: settings.id.clone(),
                certificate,
            }),
        ))
    }

    /// The federation's DID.
    #[must_use]
    pub fn did(&self) -> &str {
        &self.did
    }

    /// The common verification method, if enabled.
    #[must_use]
    pub const fn verification_method(&self) -> Option<&CommonVerificationMethod> {
        self.verification_method.as_ref()
    }

    /// The common certificate, if the common verification method is enabled.
    #[must_use]
    pub fn certificate(&self) -> Option<&str> {
        self.verification_method.as_ref().map(|vm| vm.certificate.as_str())
    }

    /// URL the common certificate is served at.
    ///
    /// # Errors
    ///
    /// Returns an error if the common DID is not a valid `did:web` DID.
    pub fn certificate_url(&self) -> didweb_core::Result<String> {
        certificate_url(&self.did, COMMON_CERTIFICATE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use test_utils::certificates;

    use super::*;

    #[test]
    fn disabled() {
        let did_web = DidWeb::new("localhost:8443");
        let common = CommonIdentity::load(&did_web, &CommonVerificationMethodSettings::default())
            .expect("should load");

        assert_eq!(common.did(), "did:web:localhost%3A8443");
        assert!(common.verification_method().is_none());
        assert!(common.certificate().is_none());
    }

    #[test]
    fn bundled() {
        let settings = CommonVerificationMethodSettings {
            enabled: true,
            id: "common".to_string(),
            cert_path: None,
        };
        let common =
            CommonIdentity::load(&DidWeb::new("example.com"), &settings).expect("should load");

        assert_eq!(common.certificate(), Some(certificates::COMMON));
        assert_eq!(common.verification_method().map(|vm| vm.id.as_str()), Some("common"));
        assert_eq!(
            common.certificate_url().expect("should resolve"),
            "https://example.com/.well-known/cert.ss.pem"
        );
    }

    #[test]
    fn missing_file() {
        let settings = CommonVerificationMethodSettings {
            enabled: true,
            id: "common".to_string(),
            cert_path: Some(PathBuf::from("/nonexistent/cert.ss.pem")),
        };
        CommonIdentity::load(&DidWeb::new("example.com"), &settings).expect_err("should fail");
    }
}
