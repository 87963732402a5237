//! # Identity Management
//!
//! Create, update and remove participant identities.
//!
//! A participant's id is derived from its subject name, so generating an
//! identity for the same subject twice yields the same DID and leaves the
//! stored identity untouched.

use std::sync::LazyLock;

use anyhow::anyhow;
use didweb_core::{DidWeb, pem};
use md5::{Digest, Md5};
use regex::Regex;
use uuid::Builder;

use crate::error::{Error, Result};
use crate::identity::{
    Certificates, CreateRequest, ParticipantDidInfo, ParticipantIdentity, UpdateRequest,
    VerificationMethodRecord,
};
use crate::store::{ParticipantStore, StoreError};

static CERTIFICATE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9A-Za-z-]+$").expect("should compile"));

/// Derive a participant id from a subject name: the name-based (version 3)
/// UUID of the subject's UTF-8 bytes, without a namespace.
#[must_use]
pub fn participant_id(subject: &str) -> String {
    let digest = Md5::digest(subject.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    Builder::from_md5_bytes(bytes).into_uuid().to_string()
}

/// Manages the lifecycle of participant identities.
#[derive(Clone, Debug)]
pub struct Registrar<S> {
    store: S,
    did_web: DidWeb,
    common_vm_id: Option<String>,
}

impl<S: ParticipantStore> Registrar<S> {
    /// Create a registrar. `common_vm_id` is the reserved id of the common
    /// verification method, `None` when it is disabled.
    pub const fn new(store: S, did_web: DidWeb, common_vm_id: Option<String>) -> Self {
        Self {
            store,
            did_web,
            common_vm_id,
        }
    }

    /// Create the identity of the participant named by the request's
    /// subject. An existing identity is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestArgument`] if the subject is blank or a
    /// certificate is invalid.
    pub async fn generate(&self, request: CreateRequest) -> Result<ParticipantDidInfo> {
        let Some(subject) = request.subject.filter(|s| !s.trim().is_empty()) else {
            return Err(Error::RequestArgument("Missing or empty subject name.".into()));
        };
        let did = self.did_web.participant_did(&participant_id(&subject));

        if let Some(existing) = self.store.find_by_did(&did).await? {
            tracing::info!("did {did} already exists");
            return Ok(self.info(&existing));
        }

        let identity = ParticipantIdentity {
            did: did.clone(),
            aliases: request.aliases.unwrap_or_default(),
            verification_methods: self.verification_methods(request.certificates.unwrap_or_default())?,
        };

        let identity = match self.store.insert(identity).await {
            Ok(identity) => identity,
            Err(StoreError::Conflict(_)) => {
                tracing::info!("did {did} was created concurrently");
                self.store
                    .find_by_did(&did)
                    .await?
                    .ok_or_else(|| anyhow!("did {did} conflicted but could not be read"))?
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("created {did}");

        Ok(self.info(&identity))
    }

    /// Update the aliases and/or certificates of an existing identity.
    /// Fields to keep are left untouched; replaced fields are overwritten
    /// wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestArgument`] if the DID is blank or a certificate
    /// is invalid, and [`Error::ParticipantNotFound`] if no identity has the
    /// DID.
    pub async fn update(&self, request: UpdateRequest) -> Result<ParticipantDidInfo> {
        let Some(did) = request.did.filter(|d| !d.trim().is_empty()) else {
            return Err(Error::RequestArgument("Missing or empty did.".into()));
        };
        let Some(mut identity) = self.store.find_by_did(&did).await? else {
            return Err(Error::ParticipantNotFound("Did does not exist in the database.".into()));
        };

        let verification_methods =
            request.certificates.try_map(|certificates| self.verification_methods(certificates))?;
        request.aliases.apply(&mut identity.aliases);
        verification_methods.apply(&mut identity.verification_methods);

        let identity = match self.store.replace(identity).await {
            Ok(identity) => identity,
            Err(StoreError::NotFound(did)) => {
                tracing::info!("did {did} was removed during update");
                return Err(Error::ParticipantNotFound("Did does not exist in the database.".into()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(self.info(&identity))
    }

    /// Remove the identity with the given DID, if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestArgument`] if the DID is blank.
    pub async fn remove(&self, did: &str) -> Result<()> {
        if did.trim().is_empty() {
            return Err(Error::RequestArgument("Missing or empty did.".into()));
        }
        if self.store.find_by_did(did).await?.is_none() {
            tracing::info!("did {did} does not exist");
            return Ok(());
        }
        self.store.delete_by_did(did).await?;
        Ok(())
    }

    // Validate certificates in submission order, stopping at the first
    // violation.
    fn verification_methods(
        &self, certificates: Certificates,
    ) -> Result<Vec<VerificationMethodRecord>> {
        certificates
            .into_iter()
            .map(|(id, certificate)| {
                if pem::parse_certificate(&certificate).is_err() {
                    return Err(Error::RequestArgument(format!(
                        "Certificate with ID {id} is not valid."
                    )));
                }
                if !CERTIFICATE_ID.is_match(&id) {
                    return Err(Error::RequestArgument(format!(
                        "Certificate has invalid characters in ID: {id}"
                    )));
                }
                if self.common_vm_id.as_deref() == Some(id.as_str()) {
                    return Err(Error::RequestArgument(format!(
                        "Certificate ID {id} is reserved for common verification method."
                    )));
                }
                Ok(VerificationMethodRecord {
                    certificate_id: id,
                    certificate_pem: certificate,
                })
            })
            .collect()
    }

    fn info(&self, identity: &ParticipantIdentity) -> ParticipantDidInfo {
        let did = &identity.did;
        let mut verification_method_ids = identity
            .verification_methods
            .iter()
            .map(|vm| format!("{did}#{}", vm.certificate_id))
            .collect::<Vec<_>>();
        if let Some(common_vm_id) = &self.common_vm_id {
            verification_method_ids.push(format!("{did}#{common_vm_id}"));
        }

        ParticipantDidInfo {
            did: did.clone(),
            verification_method_ids,
            aliases: identity.aliases.clone(),
        }
    }
}
