//! RSA-SHA256 verification of `X-Webhook-Signature`.

use {
    crate::{config::ConfigError, domain::error::GatewayError},
    base64::{Engine, engine::general_purpose::STANDARD},
    rsa::{
        RsaPublicKey,
        pkcs1v15::{Signature, VerifyingKey},
        pkcs8::DecodePublicKey,
        signature::Verifier,
    },
    sha2::Sha256,
};

pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// OpenPix webhook public key (base64 of the PEM document).
pub const OPENPIX_PUBLIC_KEY_BASE64: &str = "LS0tLS1CRUdJTiBQVUJMSUMgS0VZLS0tLS0KTUlHZk1BMEdDU3FHU0liM0RRRUJBUVVBQTRHTkFEQ0JpUUtCZ1FDLytOdElranpldnZxRCtJM01NdjNiTFhEdApwdnhCalk0QnNSclNkY2EzcnRBd01jUllZdnhTbmQ3amFnVkxwY3RNaU94UU84aWVVQ0tMU1dIcHNNQWpPL3paCldNS2Jxb0c4TU5waS91M2ZwNnp6MG1jSENPU3FZc1BVVUcxOWJ1VzhiaXM1WloySVpnQk9iV1NwVHZKMGNuajYKSEtCQUE4MkpsbitsR3dTMU13SURBUUFCCi0tLS0tRU5EIFBVQkxJQyBLRVktLS0tLQo=";

#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    key: RsaPublicKey,
}

impl WebhookVerifier {
    /// Verifier for the key OpenPix signs production webhooks with.
    pub fn openpix() -> Result<Self, ConfigError> {
        Self::from_base64_pem(OPENPIX_PUBLIC_KEY_BASE64)
    }

    pub fn from_base64_pem(encoded: &str) -> Result<Self, ConfigError> {
        let pem = STANDARD
            .decode(encoded)
            .map_err(|e| ConfigError::VerificationKey(format!("base64: {e}")))?;
        let pem = String::from_utf8(pem)
            .map_err(|e| ConfigError::VerificationKey(format!("utf-8: {e}")))?;
        Self::from_public_key_pem(&pem)
    }

    pub fn from_public_key_pem(pem: &str) -> Result<Self, ConfigError> {
        let key = RsaPublicKey::from_public_key_pem(pem)
            .map_err(|e| ConfigError::VerificationKey(e.to_string()))?;
        Ok(Self::from_key(key))
    }

    pub fn from_key(key: RsaPublicKey) -> Self {
        Self { key }
    }

    /// Checks `signature` (base64) against the raw, unparsed body bytes.
    pub fn verify(&self, body: &[u8], signature: &str) -> Result<(), GatewayError> {
        let raw = STANDARD
            .decode(signature.trim())
            .map_err(|e| GatewayError::WebhookSignature(format!("signature is not base64: {e}")))?;
        let signature = Signature::try_from(raw.as_slice())
            .map_err(|e| GatewayError::WebhookSignature(e.to_string()))?;
        VerifyingKey::<Sha256>::new(self.key.clone())
            .verify(body, &signature)
            .map_err(|_| GatewayError::WebhookSignature("signature mismatch".into()))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rsa::{
            RsaPrivateKey,
            pkcs1v15::SigningKey,
            signature::{SignatureEncoding, Signer},
        },
    };

    fn keypair() -> (SigningKey<Sha256>, WebhookVerifier) {
        let private = RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
        let public = RsaPublicKey::from(&private);
        (SigningKey::new(private), WebhookVerifier::from_key(public))
    }

    #[test]
    fn embedded_key_parses() {
        WebhookVerifier::openpix().unwrap();
    }

    #[test]
    fn embedded_key_rejects_foreign_signature() {
        let (signer, _) = keypair();
        let body = br#"{"event":"OPENPIX:CHARGE_COMPLETED"}"#;
        let sig = STANDARD.encode(signer.sign(body).to_bytes());
        assert!(WebhookVerifier::openpix().unwrap().verify(body, &sig).is_err());
    }

    #[test]
    fn valid_signature_verifies() {
        let (signer, verifier) = keypair();
        let body = br#"{"event":"OPENPIX:CHARGE_COMPLETED","charge":{"correlationID":"abc123"}}"#;
        let sig = STANDARD.encode(signer.sign(body).to_bytes());
        verifier.verify(body, &sig).unwrap();
    }

    #[test]
    fn garbage_signatures_rejected() {
        let (_, verifier) = keypair();
        for sig in ["", "not base64!!", "AAAA"] {
            assert!(matches!(
                verifier.verify(b"{}", sig),
                Err(GatewayError::WebhookSignature(_))
            ));
        }
    }

    #[test]
    fn bad_key_material_rejected() {
        assert!(WebhookVerifier::from_base64_pem("%%%").is_err());
        assert!(WebhookVerifier::from_public_key_pem("-----BEGIN PUBLIC KEY-----\n").is_err());
    }
}
