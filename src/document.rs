//! # DID Document Assembly
//!
//! Builds the DID documents served for participants and for the federation
//! root from stored identities.
//!
//! Assembly is all-or-nothing: if any certificate of an identity cannot be
//! converted, no document is produced for it.

use std::sync::Arc;

use didweb_core::{
    DidWeb, Document, VerificationMethod, VerificationMethodBuilder, certificate_url,
};

use crate::common::CommonIdentity;
use crate::error::{Error, Result};
use crate::identity::ParticipantIdentity;
use crate::store::ParticipantStore;

/// Assembles DID documents.
#[derive(Clone, Debug)]
pub struct DocumentAssembler<S> {
    store: S,
    did_web: DidWeb,
    common: Arc<CommonIdentity>,
}

impl<S: ParticipantStore> DocumentAssembler<S> {
    /// Create an assembler over the given store.
    pub const fn new(store: S, did_web: DidWeb, common: Arc<CommonIdentity>) -> Self {
        Self { store, did_web, common }
    }

    /// The DID document of the participant with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParticipantNotFound`] for an unknown participant and
    /// [`Error::DidDocumentGeneration`] if the document cannot be assembled.
    pub async fn participant_document(&self, participant_id: &str) -> Result<Document> {
        let did = self.did_web.participant_did(participant_id);
        let Some(identity) = self.store.find_by_did(&did).await? else {
            return Err(Error::ParticipantNotFound("Participant could not be found.".into()));
        };
        self.assemble(&identity)
    }

    /// The DID document of the federation root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DidDocumentGeneration`] if the common certificate
    /// cannot be converted.
    pub fn common_document(&self) -> Result<Document> {
        let identity = ParticipantIdentity::new(self.common.did());
        self.build(&identity).map_err(|source| Error::DidDocumentGeneration {
            message: format!("Failed to build did.json for Federation: {source}"),
            source,
        })
    }

    /// Assemble the DID document of a stored identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DidDocumentGeneration`] wrapping the first failure.
    pub fn assemble(&self, identity: &ParticipantIdentity) -> Result<Document> {
        self.build(identity).map_err(|source| {
            tracing::warn!(
                code = source.code(),
                "failed to assemble DID document for {}: {source}",
                identity.did
            );
            Error::DidDocumentGeneration {
                message: source.to_string(),
                source,
            }
        })
    }

    fn build(&self, identity: &ParticipantIdentity) -> didweb_core::Result<Document> {
        let did = &identity.did;
        let mut document = Document::new(did);
        document.also_known_as.clone_from(&identity.aliases);

        for record in &identity.verification_methods {
            let vm = VerificationMethodBuilder::new(&record.certificate_pem)
                .controller(did)
                .id(format!("{did}#{}", record.certificate_id))
                .certificate_url(certificate_url(did, &format!("{}.pem", record.certificate_id))?)
                .build()?;
            document.verification_method.push(vm);
        }

        if let Some(common) = self.common_verification_method(did)? {
            document.verification_method.push(common);
        }

        Ok(document)
    }

    // The common method is controlled by the federation but listed under the
    // subject's DID.
    fn common_verification_method(&self, did: &str) -> didweb_core::Result<Option<VerificationMethod>> {
        let Some(common) = self.common.verification_method() else {
            return Ok(None);
        };
        let vm = VerificationMethodBuilder::new(&common.certificate)
            .controller(self.common.did())
            .id(format!("{did}#{}", common.id))
            .certificate_url(self.common.certificate_url()?)
            .build()?;
        Ok(Some(vm))
    }
}
