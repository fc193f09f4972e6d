use {
    super::error::GatewayError,
    rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Charge value in the smallest unit OpenPix accepts (centavos for BRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn new(minor: i64) -> Result<Self, GatewayError> {
        if minor < 0 {
            return Err(GatewayError::Validation(format!(
                "MoneyAmount cannot be negative, got: {minor}"
            )));
        }
        Ok(Self(minor))
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Converts a checkout price into the charge value.
    ///
    /// Zero-decimal currencies pass the price through; everything else is
    /// multiplied by 100. Both are rounded half away from zero.
    pub fn from_price(price: Decimal, currency: &Currency) -> Result<Self, GatewayError> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(GatewayError::Validation(format!(
                "price cannot be negative, got: {price}"
            )));
        }

        let scaled = if currency.is_zero_decimal() {
            price
        } else {
            price
                .checked_mul(Decimal::ONE_HUNDRED)
                .ok_or_else(|| GatewayError::Validation(format!("price too large: {price}")))?
        };

        let minor = scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(|| GatewayError::Validation(format!("price too large: {price}")))?;

        Self::new(minor)
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Currencies whose smallest unit is the whole unit.
    pub const ZERO_DECIMAL: &'static [&'static str] = &[
        "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND", "VUV",
        "XAF", "XOF", "XPF",
    ];

    pub fn brl() -> Self {
        Self("BRL".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_zero_decimal(&self) -> bool {
        Self::ZERO_DECIMAL.contains(&self.0.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Currency {
    type Error = GatewayError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GatewayError::Validation(format!("unknown currency: {s}")));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Currency {
    type Error = GatewayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.0
    }
}
