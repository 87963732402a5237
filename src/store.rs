//! # Participant Store
//!
//! Persistence contract for participant identities, keyed by DID, and an
//! in-memory implementation.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

use crate::identity::ParticipantIdentity;

/// Errors raised by a [`ParticipantStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// An identity with the DID already exists.
    #[error("participant {0} already exists")]
    Conflict(String),

    /// No identity with the DID exists.
    #[error("participant {0} does not exist")]
    NotFound(String),

    /// The backing store failed.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// [`ParticipantStore`] persists participant identities.
///
/// Implementations must treat the DID as a unique key: [`Self::insert`] is the
/// authoritative guard against duplicate identities, callers only use
/// [`Self::find_by_did`] as a fast path.
pub trait ParticipantStore: Send + Sync + Clone + 'static {
    /// Find the identity with the given DID.
    fn find_by_did(
        &self, did: &str,
    ) -> impl Future<Output = Result<Option<ParticipantIdentity>, StoreError>> + Send;

    /// Insert a new identity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if an identity with the same DID
    /// already exists.
    fn insert(
        &self, identity: ParticipantIdentity,
    ) -> impl Future<Output = Result<ParticipantIdentity, StoreError>> + Send;

    /// Replace the stored identity with the same DID. The existence check and
    /// the write are one operation, so a concurrently removed identity is not
    /// recreated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no identity with the DID exists.
    fn replace(
        &self, identity: ParticipantIdentity,
    ) -> impl Future<Output = Result<ParticipantIdentity, StoreError>> + Send;

    /// Delete the identity with the given DID.
    fn delete_by_did(&self, did: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory [`ParticipantStore`]. Clones share the same identities.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    participants: Arc<DashMap<String, ParticipantIdentity>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl ParticipantStore for MemoryStore {
    async fn find_by_did(&self, did: &str) -> Result<Option<ParticipantIdentity>, StoreError> {
        Ok(self.participants.get(did).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, identity: ParticipantIdentity) -> Result<ParticipantIdentity, StoreError> {
        match self.participants.entry(identity.did.clone()) {
            Entry::Occupied(entry) => Err(StoreError::Conflict(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(identity.clone());
                Ok(identity)
            }
        }
    }

    async fn replace(
        &self, identity: ParticipantIdentity,
    ) -> Result<ParticipantIdentity, StoreError> {
        match self.participants.entry(identity.did.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(identity.clone());
                Ok(identity)
            }
            Entry::Vacant(entry) => Err(StoreError::NotFound(entry.into_key())),
        }
    }

    async fn delete_by_did(&self, did: &str) -> Result<(), StoreError> {
        self.participants.remove(did);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DID: &str = "did:web:example.com:participant:abc";

    #[tokio::test]
    async fn insert_is_unique() {
        let store = MemoryStore::new();
        store.insert(ParticipantIdentity::new(DID)).await.expect("should insert");

        let Err(StoreError::Conflict(did)) = store.insert(ParticipantIdentity::new(DID)).await
        else {
            panic!("should conflict");
        };
        assert_eq!(did, DID);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn replace_and_delete() {
        let store = MemoryStore::new();
        let mut identity = ParticipantIdentity::new(DID);
        store.insert(identity.clone()).await.expect("should insert");

        identity.aliases = vec!["a1".to_string()];
        store.replace(identity.clone()).await.expect("should replace");
        let found = store.find_by_did(DID).await.expect("should find").expect("should exist");
        assert_eq!(found, identity);

        store.delete_by_did(DID).await.expect("should delete");
        assert!(store.find_by_did(DID).await.expect("should find").is_none());
        assert!(store.is_empty());
    }

    // Replacing a removed identity must not bring it back.
    #[tokio::test]
    async fn replace_missing() {
        let store = MemoryStore::new();
        store.insert(ParticipantIdentity::new(DID)).await.expect("should insert");
        store.delete_by_did(DID).await.expect("should delete");

        let Err(StoreError::NotFound(did)) = store.replace(ParticipantIdentity::new(DID)).await
        else {
            panic!("should not find");
        };
        assert_eq!(did, DID);
        assert!(store.is_empty());
    }
}
