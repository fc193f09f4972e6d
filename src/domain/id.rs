use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::GatewayError;

/// Order purchase key, sent to OpenPix as the charge `correlationID`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PurchaseKey(String);

impl PurchaseKey {
    pub const MAX_LEN: usize = 255;

    pub fn new(key: impl Into<String>) -> Result<Self, GatewayError> {
        let key = key.into();
        if key.is_empty() {
            return Err(GatewayError::Validation(
                "PurchaseKey cannot be empty".into(),
            ));
        }
        if key.len() > Self::MAX_LEN {
            return Err(GatewayError::Validation(format!(
                "PurchaseKey longer than {} bytes",
                Self::MAX_LEN
            )));
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(GatewayError::Validation(format!(
                "PurchaseKey contains whitespace or control characters: {key:?}"
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PurchaseKey {
    type Error = GatewayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PurchaseKey> for String {
    fn from(key: PurchaseKey) -> Self {
        key.0
    }
}
