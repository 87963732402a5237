//! # Verification Methods
//!
//! A DID document expresses the public keys of its subject as verification
//! methods. Here every verification method is a `JsonWebKey2020` holding the
//! RSA public key of an X.509 certificate, with `x5u` pointing at the hosted
//! certificate.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pem;

/// JSON-LD context of a `JsonWebKey2020` verification method.
pub const VERIFICATION_METHOD_CONTEXT: &str = "https://w3c-ccg.github.io/lds-jws2020/contexts/v1/";

/// Verification method type.
pub const JSON_WEB_KEY_2020: &str = "JsonWebKey2020";

/// JWK algorithm advertised for certificate keys.
pub const ALG_PS256: &str = "PS256";

const KTY_RSA: &str = "RSA";

/// A verification method of a DID document.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// JSON-LD context for the terms used by the method.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// DID URL identifying the verification method (`<did>#<fragment>`).
    pub id: String,

    /// Verification method type. Always `JsonWebKey2020`.
    #[serde(rename = "type")]
    pub type_: String,

    /// The DID of the controller of the verification method.
    pub controller: String,

    /// The public key.
    pub public_key_jwk: PublicJwk,
}

/// RSA public key in JWK form, referencing its certificate.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicJwk {
    /// Key type.
    pub kty: String,

    /// Modulus, base64url encoded.
    pub n: String,

    /// Public exponent, base64url encoded.
    pub e: String,

    /// Algorithm the key is intended for.
    pub alg: String,

    /// URL of the X.509 certificate backing the key.
    pub x5u: String,
}

/// Builds a [`VerificationMethod`] from a PEM certificate.
#[derive(Clone, Debug, Default)]
pub struct VerificationMethodBuilder {
    certificate: String,
    controller: String,
    id: String,
    certificate_url: String,
}

impl VerificationMethodBuilder {
    /// Start building a verification method for the given PEM certificate.
    #[must_use]
    pub fn new(certificate: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            ..Self::default()
        }
    }

    /// DID of the verification method's controller.
    #[must_use]
    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = controller.into();
        self
    }

    /// Verification method id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// URL the certificate is hosted at.
    #[must_use]
    pub fn certificate_url(mut self, url: impl Into<String>) -> Self {
        self.certificate_url = url.into();
        self
    }

    /// Build the verification method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PemConversion`] if the certificate cannot be parsed or
    /// does not hold an RSA public key.
    pub fn build(self) -> crate::Result<VerificationMethod> {
        tracing::debug!("building verification method {}", self.id);
        let certificate = pem::parse_certificate(&self.certificate)
            .map_err(|e| Error::PemConversion(format!("Certificate conversion failed: {e}")))?;
        let key = pem::extract_rsa_public_key(&certificate)
            .map_err(|e| Error::PemConversion(format!("Public key conversion failed: {e}")))?;

        Ok(VerificationMethod {
            context: vec![VERIFICATION_METHOD_CONTEXT.to_string()],
            id: self.id,
            type_: JSON_WEB_KEY_2020.to_string(),
            controller: self.controller,
            public_key_jwk: PublicJwk {
                kty: KTY_RSA.to_string(),
                n: key.n(),
                e: key.e(),
                alg: ALG_PS256.to_string(),
                x5u: self.certificate_url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_utils::certificates;

    use super::*;

    const DID: &str = "did:web:example.com:participant:abc";

    #[test]
    fn from_certificate() {
        let vm = VerificationMethodBuilder::new(certificates::PARTICIPANT)
            .controller(DID)
            .id(format!("{DID}#cert-1"))
            .certificate_url("https://example.com/participant/abc/cert-1.pem")
            .build()
            .expect("should build");

        assert_eq!(vm.id, "did:web:example.com:participant:abc#cert-1");
        assert_eq!(vm.controller, DID);
        assert_eq!(vm.type_, "JsonWebKey2020");
        assert_eq!(vm.public_key_jwk.kty, "RSA");
        assert_eq!(vm.public_key_jwk.alg, "PS256");
        assert_eq!(vm.public_key_jwk.n, certificates::PARTICIPANT_N);
        assert_eq!(vm.public_key_jwk.e, certificates::RSA_E);
        assert_eq!(vm.public_key_jwk.x5u, "https://example.com/participant/abc/cert-1.pem");
    }

    #[test]
    fn serialized_shape() {
        let vm = VerificationMethodBuilder::new(certificates::PARTICIPANT)
            .controller(DID)
            .id(format!("{DID}#cert-1"))
            .certificate_url("https://example.com/participant/abc/cert-1.pem")
            .build()
            .expect("should build");

        let value = serde_json::to_value(&vm).expect("should serialize");
        assert_eq!(
            value,
            json!({
                "@context": ["https://w3c-ccg.github.io/lds-jws2020/contexts/v1/"],
                "id": "did:web:example.com:participant:abc#cert-1",
                "type": "JsonWebKey2020",
                "controller": "did:web:example.com:participant:abc",
                "publicKeyJwk": {
                    "kty": "RSA",
                    "n": certificates::PARTICIPANT_N,
                    "e": "AQAB",
                    "alg": "PS256",
                    "x5u": "https://example.com/participant/abc/cert-1.pem"
                }
            })
        );
    }

    #[test]
    fn broken_certificate() {
        let Err(Error::PemConversion(msg)) =
            VerificationMethodBuilder::new(certificates::BROKEN).id("x").build()
        else {
            panic!("should fail");
        };
        assert!(msg.starts_with("Certificate conversion failed"));
    }

    #[test]
    fn non_rsa_certificate() {
        let Err(Error::PemConversion(msg)) =
            VerificationMethodBuilder::new(certificates::EC).id("x").build()
        else {
            panic!("should fail");
        };
        assert!(msg.contains("unsupported public key algorithm"));
    }
}
