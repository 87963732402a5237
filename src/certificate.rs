//! # Certificate Lookup
//!
//! Serves the PEM certificates referenced by the `x5u` member of published
//! verification methods.

use std::sync::Arc;

use didweb_core::DidWeb;

use crate::common::CommonIdentity;
use crate::error::{Error, Result};
use crate::store::ParticipantStore;

/// Looks up participant and common certificates.
#[derive(Clone, Debug)]
pub struct CertificateLookup<S> {
    store: S,
    did_web: DidWeb,
    common: Arc<CommonIdentity>,
}

impl<S: ParticipantStore> CertificateLookup<S> {
    /// Create a lookup over the given store.
    pub const fn new(store: S, did_web: DidWeb, common: Arc<CommonIdentity>) -> Self {
        Self { store, did_web, common }
    }

    /// The PEM certificate stored under `certificate_id` for a participant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParticipantNotFound`] for an unknown participant and
    /// [`Error::CertificateNotFound`] if the participant has no such
    /// certificate.
    pub async fn participant_certificate(
        &self, participant_id: &str, certificate_id: &str,
    ) -> Result<String> {
        let did = self.did_web.participant_did(participant_id);
        let Some(identity) = self.store.find_by_did(&did).await? else {
            return Err(Error::ParticipantNotFound("Participant could not be found.".into()));
        };

        identity
            .certificate(certificate_id)
            .map(|record| record.certificate_pem.clone())
            .ok_or_else(|| Error::CertificateNotFound("Certificate could not be found.".into()))
    }

    /// The common certificate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CertificateNotFound`] when the common verification
    /// method is disabled.
    pub fn common_certificate(&self) -> Result<String> {
        self.common.certificate().map(ToString::to_string).ok_or_else(|| {
            Error::CertificateNotFound("Common certificate is not configured.".into())
        })
    }
}
