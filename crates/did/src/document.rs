//! # DID Document
//!
//! A DID Document is a JSON-LD document that contains information related to a
//! DID.

use serde::{Deserialize, Serialize};

use crate::verification::VerificationMethod;

/// Contexts of every DID document served.
pub const CONTEXT: [&str; 2] =
    ["https://www.w3.org/ns/did/v1", "https://w3id.org/security/suites/jws-2020/v1"];

/// DID Document
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The context of the DID document.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// The DID for a particular DID subject.
    pub id: String,

    /// Verification methods of the DID subject, in the order they were added.
    pub verification_method: Vec<VerificationMethod>,

    /// A set of URIs that are other identifiers for the subject of the above
    /// DID.
    pub also_known_as: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            context: CONTEXT.iter().map(ToString::to_string).collect(),
            id: String::new(),
            verification_method: vec![],
            also_known_as: vec![],
        }
    }
}

impl Document {
    /// Create an empty document for the given DID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Retrieve a verification method by its ID.
    #[must_use]
    pub fn verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method.iter().find(|vm| vm.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let doc = Document::new("did:web:example.com");
        insta::assert_json_snapshot!(doc, @r#"
        {
          "@context": [
            "https://www.w3.org/ns/did/v1",
            "https://w3id.org/security/suites/jws-2020/v1"
          ],
          "id": "did:web:example.com",
          "verificationMethod": [],
          "alsoKnownAs": []
        }
        "#);
    }
}
