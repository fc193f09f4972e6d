use {
    super::id::PurchaseKey,
    super::order::{BuyerInfo, CartItem},
    super::provider::Charge,
    chrono::{DateTime, Utc},
    rust_decimal::Decimal,
    serde::Deserialize,
    uuid::Uuid,
};

/// Purchase data handed over by the commerce pipeline when the buyer picks Pix.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub price: Decimal,
    pub purchase_key: PurchaseKey,
    pub user_email: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cart_details: Vec<CartItem>,
    #[serde(default)]
    pub user_info: BuyerInfo,
    /// Validation errors already raised by the checkout form.
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Checkout had errors; nothing was created.
    BackToCheckout,
    /// Order is pending and the charge exists at the provider.
    AwaitingPayment { order_id: Uuid, charge: Charge },
}
