//! # Participant Identities
//!
//! The persisted participant record and the request/response types of the
//! management API.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Certificates keyed by certificate id, in submission order.
pub type Certificates = IndexMap<String, String>;

/// A participant's `did:web` identity as persisted.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentity {
    /// The participant's DID. Unique and immutable.
    pub did: String,

    /// Alternative identifiers of the participant.
    pub aliases: Vec<String>,

    /// Certificates listed as verification methods, in insertion order.
    pub verification_methods: Vec<VerificationMethodRecord>,
}

impl ParticipantIdentity {
    /// Create an identity with no aliases or certificates.
    #[must_use]
    pub fn new(did: impl Into<String>) -> Self {
        Self {
            did: did.into(),
            ..Self::default()
        }
    }

    /// Look up a stored certificate by its id.
    #[must_use]
    pub fn certificate(&self, certificate_id: &str) -> Option<&VerificationMethodRecord> {
        self.verification_methods.iter().find(|vm| vm.certificate_id == certificate_id)
    }
}

/// A stored certificate backing one verification method.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethodRecord {
    /// Certificate id, used as the verification method fragment.
    pub certificate_id: String,

    /// PEM-encoded X.509 certificate.
    pub certificate_pem: String,
}

/// A field of an update request: either keep the stored value or replace it
/// wholesale.
///
/// A missing or `null` JSON value deserializes to [`Update::Keep`]. Any other
/// value, including an empty collection, is a [`Update::Replace`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Update<T> {
    /// Leave the stored value untouched.
    #[default]
    Keep,

    /// Replace the stored value.
    Replace(T),
}

impl<T> Update<T> {
    /// Overwrite `target` when this is a [`Update::Replace`].
    pub fn apply(self, target: &mut T) {
        if let Self::Replace(value) = self {
            *target = value;
        }
    }

    /// Convert the replacement value, if any.
    ///
    /// # Errors
    ///
    /// Returns the conversion's error.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Update<U>, E> {
        match self {
            Self::Keep => Ok(Update::Keep),
            Self::Replace(value) => f(value).map(Update::Replace),
        }
    }
}

impl<T> From<Option<T>> for Update<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Replace)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Update<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}

impl<T: Serialize> Serialize for Update<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Keep => serializer.serialize_none(),
            Self::Replace(value) => serializer.serialize_some(value),
        }
    }
}

/// Request to create a participant identity.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    /// Unique subject name the participant id is derived from.
    #[serde(default)]
    pub subject: Option<String>,

    /// Alternative identifiers of the participant.
    #[serde(default)]
    pub aliases: Option<Vec<String>>,

    /// Certificates to list as verification methods, keyed by id.
    #[serde(default)]
    pub certificates: Option<Certificates>,
}

/// Request to update an existing participant identity.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// DID of the identity to update.
    #[serde(default)]
    pub did: Option<String>,

    /// Replacement aliases.
    #[serde(default)]
    pub aliases: Update<Vec<String>>,

    /// Replacement certificates, keyed by id.
    #[serde(default)]
    pub certificates: Update<Certificates>,
}

/// Summary of a participant identity returned by the management API.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDidInfo {
    /// The participant's DID.
    pub did: String,

    /// Ids of the verification methods in the participant's DID document.
    pub verification_method_ids: Vec<String>,

    /// Alternative identifiers of the participant.
    pub aliases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn update_states() {
        let req: UpdateRequest =
            serde_json::from_value(json!({"did": "did:web:example.com"})).expect("should parse");
        assert_eq!(req.aliases, Update::Keep);
        assert_eq!(req.certificates, Update::Keep);

        let req: UpdateRequest =
            serde_json::from_value(json!({"did": "x", "aliases": null, "certificates": {}}))
                .expect("should parse");
        assert_eq!(req.aliases, Update::Keep);
        assert_eq!(req.certificates, Update::Replace(Certificates::new()));

        let req: UpdateRequest =
            serde_json::from_value(json!({"did": "x", "aliases": ["a1"]})).expect("should parse");
        assert_eq!(req.aliases, Update::Replace(vec!["a1".to_string()]));
    }

    #[test]
    fn apply_update() {
        let mut aliases = vec!["a1".to_string()];
        Update::Keep.apply(&mut aliases);
        assert_eq!(aliases, vec!["a1".to_string()]);

        Update::Replace(vec![]).apply(&mut aliases);
        assert!(aliases.is_empty());
    }

    #[test]
    fn certificate_order() {
        let req: CreateRequest = serde_json::from_str(
            r#"{"subject": "Example", "certificates": {"zz": "1", "aa": "2", "mm": "3"}}"#,
        )
        .expect("should parse");

        let ids = req.certificates.expect("should have certificates").into_keys().collect::<Vec<_>>();
        assert_eq!(ids, vec!["zz", "aa", "mm"]);
    }
}
