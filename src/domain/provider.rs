use {
    super::error::GatewayError,
    super::id::PurchaseKey,
    super::money::MoneyAmount,
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin},
};

/// Body of the charge-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeRequest {
    pub value: MoneyAmount,
    #[serde(rename = "correlationID")]
    pub correlation_id: PurchaseKey,
}

/// What the provider reports back about the charge. Only `correlationID` is
/// guaranteed; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    #[serde(rename = "correlationID")]
    pub correlation_id: String,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub br_code: Option<String>,
    #[serde(default)]
    pub payment_link_url: Option<String>,
    #[serde(default)]
    pub qr_code_image: Option<String>,
}

pub trait PixProvider: Send + Sync {
    /// Creates the charge, or returns the existing one for this correlation id.
    fn create_charge<'a>(
        &'a self,
        request: &'a ChargeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Charge, GatewayError>> + Send + 'a>>;
}
