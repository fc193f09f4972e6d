use {
    super::error::GatewayError,
    super::id::PurchaseKey,
    super::money::Currency,
    chrono::{DateTime, Utc},
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
    std::fmt,
    uuid::Uuid,
};

/// Gateway tag stored on every order created through this service.
pub const GATEWAY_OPENPIX: &str = "openpix";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Complete,
    Failed,
    Refunded,
    Abandoned,
    Revoked,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Complete => "complete",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
            Self::Abandoned => "abandoned",
            Self::Revoked => "revoked",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "complete" => Ok(Self::Complete),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            "abandoned" => Ok(Self::Abandoned),
            "revoked" => Ok(Self::Revoked),
            other => Err(GatewayError::Validation(format!(
                "unknown order status: {other}"
            ))),
        }
    }
}

/// Buyer details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerInfo {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub price: Decimal,
}

fn default_quantity() -> u32 {
    1
}

/// Order record as read back from the store.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub(crate) id: Uuid,
    pub(crate) purchase_key: PurchaseKey,
    pub(crate) amount: Decimal,
    pub(crate) currency: Currency,
    pub(crate) status: OrderStatus,
    pub(crate) gateway: String,
    pub(crate) user_email: String,
    pub(crate) cart: Vec<CartItem>,
    pub(crate) buyer: BuyerInfo,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Order {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn purchase_key(&self) -> &PurchaseKey {
        &self.purchase_key
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// True while the buyer still has to pay through the Pix widget.
    pub fn awaits_pix_payment(&self) -> bool {
        self.gateway == GATEWAY_OPENPIX && self.status == OrderStatus::Pending
    }
}

/// For INSERT — id generated in Rust via Uuid::now_v7().
#[derive(Debug, Clone)]
pub struct NewOrder {
    id: Uuid,
    purchase_key: PurchaseKey,
    amount: Decimal,
    currency: Currency,
    status: OrderStatus,
    gateway: String,
    user_email: String,
    cart: Vec<CartItem>,
    buyer: BuyerInfo,
    created_at: DateTime<Utc>,
}

pub struct NewOrderParams {
    pub purchase_key: PurchaseKey,
    pub amount: Decimal,
    pub currency: Currency,
    pub user_email: String,
    pub cart: Vec<CartItem>,
    pub buyer: BuyerInfo,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    /// Orders start out `pending` on the `openpix` gateway.
    pub fn pending(params: NewOrderParams) -> Self {
        Self {
            id: Uuid::now_v7(),
            purchase_key: params.purchase_key,
            amount: params.amount,
            currency: params.currency,
            status: OrderStatus::Pending,
            gateway: GATEWAY_OPENPIX.to_string(),
            user_email: params.user_email,
            cart: params.cart,
            buyer: params.buyer,
            created_at: params.created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn purchase_key(&self) -> &PurchaseKey {
        &self.purchase_key
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn buyer(&self) -> &BuyerInfo {
        &self.buyer
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Materializes the stored record; used by stores that keep orders in memory.
    pub fn into_order(self) -> Order {
        Order {
            id: self.id,
            purchase_key: self.purchase_key,
            amount: self.amount,
            currency: self.currency,
            status: self.status,
            gateway: self.gateway,
            user_email: self.user_email,
            cart: self.cart,
            buyer: self.buyer,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
