//! # PEM Certificates
//!
//! Decode PEM-encoded X.509 certificates and extract the RSA public key
//! material needed to express them as JSON Web Keys.

use base64ct::{Base64UrlUnpadded, Encoding};
use num_bigint::{BigInt, BigUint, Sign};
use pkcs1::der::Decode;
use x509_cert::der::asn1::ObjectIdentifier;
pub use x509_cert::Certificate;

use crate::error::Error;

/// `rsaEncryption` from RFC 8017.
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Parse one or more PEM-encoded certificates, returning the first.
///
/// # Errors
///
/// Returns [`Error::InvalidCertificate`] if the input is malformed or holds no
/// certificate.
pub fn parse_certificate(pem: &str) -> crate::Result<Certificate> {
    // `load_pem_chain` underflows on blank input
    if pem.trim().is_empty() {
        return Err(Error::InvalidCertificate("no certificate found".into()));
    }
    let certificates = Certificate::load_pem_chain(pem.as_bytes())
        .map_err(|e| Error::InvalidCertificate(format!("issue decoding PEM: {e}")))?;
    certificates
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidCertificate("no certificate found".into()))
}

/// RSA public key parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus.
    pub modulus: BigUint,

    /// Public exponent.
    pub exponent: BigUint,
}

impl RsaPublicKey {
    /// JWK `n` parameter: the modulus as unpadded base64url of its big-endian
    /// two's-complement bytes.
    #[must_use]
    pub fn n(&self) -> String {
        encode_signed(&self.modulus)
    }

    /// JWK `e` parameter: the public exponent, encoded as for [`Self::n`].
    #[must_use]
    pub fn e(&self) -> String {
        encode_signed(&self.exponent)
    }
}

// A leading zero byte is kept when the most significant bit is set.
fn encode_signed(value: &BigUint) -> String {
    let bytes = BigInt::from_biguint(Sign::Plus, value.clone()).to_signed_bytes_be();
    Base64UrlUnpadded::encode_string(&bytes)
}

/// Extract the RSA public key from a certificate.
///
/// # Errors
///
/// Returns [`Error::UnsupportedKeyType`] if the certificate's key is not an
/// RSA key, or [`Error::InvalidCertificate`] if the key cannot be decoded.
pub fn extract_rsa_public_key(certificate: &Certificate) -> crate::Result<RsaPublicKey> {
    let spki = &certificate.tbs_certificate.subject_public_key_info;
    if spki.algorithm.oid != RSA_ENCRYPTION {
        return Err(Error::UnsupportedKeyType(spki.algorithm.oid.to_string()));
    }

    let Some(key_bytes) = spki.subject_public_key.as_bytes() else {
        return Err(Error::InvalidCertificate("public key is not byte aligned".into()));
    };
    let key = pkcs1::RsaPublicKey::from_der(key_bytes)
        .map_err(|e| Error::InvalidCertificate(format!("issue decoding RSA public key: {e}")))?;

    Ok(RsaPublicKey {
        modulus: BigUint::from_bytes_be(key.modulus.as_bytes()),
        exponent: BigUint::from_bytes_be(key.public_exponent.as_bytes()),
    })
}

#[cfg(test)]
mod tests {
    use test_utils::certificates;

    use super::*;

    #[test]
    fn rsa_certificate() {
        let cert = parse_certificate(certificates::PARTICIPANT).expect("should parse");
        let key = extract_rsa_public_key(&cert).expect("should be RSA");

        assert_eq!(key.modulus.bits(), 2048);
        assert_eq!(key.exponent, BigUint::from(65_537u32));
        assert_eq!(key.n(), certificates::PARTICIPANT_N);
        assert_eq!(key.e(), certificates::RSA_E);
    }

    // The modulus has its top bit set so the encoding carries a sign byte.
    #[test]
    fn sign_byte() {
        let cert = parse_certificate(certificates::PARTICIPANT).expect("should parse");
        let key = extract_rsa_public_key(&cert).expect("should be RSA");

        let bytes = Base64UrlUnpadded::decode_vec(&key.n()).expect("should decode");
        assert_eq!(bytes.len(), 257);
        assert_eq!(bytes[0], 0);
        assert_eq!(BigUint::from_bytes_be(&bytes), key.modulus);
    }

    #[test]
    fn first_of_chain() {
        let chain = format!("{}{}", certificates::PARTICIPANT, certificates::COMMON);
        let cert = parse_certificate(&chain).expect("should parse");
        let key = extract_rsa_public_key(&cert).expect("should be RSA");
        assert_eq!(key.n(), certificates::PARTICIPANT_N);
    }

    #[test]
    fn not_a_certificate() {
        let Err(Error::InvalidCertificate(_)) = parse_certificate(certificates::BROKEN) else {
            panic!("should fail");
        };
    }

    #[test]
    fn blank_input() {
        for pem in ["", "\n\n", "  \r\n"] {
            let Err(Error::InvalidCertificate(msg)) = parse_certificate(pem) else {
                panic!("should fail for {pem:?}");
            };
            assert_eq!(msg, "no certificate found");
        }
    }

    #[test]
    fn ec_key() {
        let cert = parse_certificate(certificates::EC).expect("should parse");
        let Err(Error::UnsupportedKeyType(oid)) = extract_rsa_public_key(&cert) else {
            panic!("should reject EC key");
        };
        assert_eq!(oid, "1.2.840.10045.2.1");
    }
}
