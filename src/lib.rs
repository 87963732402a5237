//! # did:web Participant Identity Service
//!
//! Issues, updates and retires `did:web` identifiers for the participants of
//! a federation and serves their DID documents and X.509 certificates.
//!
//! Each participant is identified by
//! `did:web:<domain>:participant:<participant-id>`, where the participant id
//! is derived from the participant's subject name. Its DID document lists one
//! `JsonWebKey2020` verification method per registered RSA certificate and,
//! when enabled, a federation-wide common verification method.
//!
//! The federation itself is identified by `did:web:<domain>`.

pub mod certificate;
pub mod common;
pub mod config;
pub mod document;
mod error;
pub mod handlers;
pub mod identity;
pub mod management;
pub mod store;

pub use didweb_core;

pub use self::certificate::CertificateLookup;
pub use self::common::{CommonIdentity, CommonVerificationMethod};
pub use self::config::Settings;
pub use self::document::DocumentAssembler;
pub use self::error::{Error, Result};
pub use self::handlers::{AppState, ErrorResponse, router};
pub use self::identity::{
    Certificates, CreateRequest, ParticipantDidInfo, ParticipantIdentity, Update, UpdateRequest,
    VerificationMethodRecord,
};
pub use self::management::{Registrar, participant_id};
pub use self::store::{MemoryStore, ParticipantStore, StoreError};
