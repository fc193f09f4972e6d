use {
    crate::domain::money::Currency,
    std::{env, net::SocketAddr},
    thiserror::Error,
    url::Url,
};

pub const DEFAULT_API_URL: &str = "https://api.openpix.com.br";
pub const DEFAULT_PLUGIN_URL: &str = "https://plugin.openpix.com.br";
pub const WEBHOOK_PATH: &str = "/webhook/callback";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("webhook verification key: {0}")]
    VerificationKey(String),
}

/// Merchant settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_id: String,
    pub api_url: Url,
    pub plugin_url: Url,
    pub currency: Currency,
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub public_base_url: Url,
    pub checkout_url: Url,
    pub success_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let app_id = get("OPENPIX_APP_ID").ok_or(ConfigError::Missing("OPENPIX_APP_ID"))?;
        let api_url = parse_url(
            "OPENPIX_API_URL",
            get("OPENPIX_API_URL").as_deref().unwrap_or(DEFAULT_API_URL),
        )?;
        let plugin_url = parse_url(
            "OPENPIX_PLUGIN_URL",
            get("OPENPIX_PLUGIN_URL")
                .as_deref()
                .unwrap_or(DEFAULT_PLUGIN_URL),
        )?;
        let currency = match get("STORE_CURRENCY") {
            Some(code) => Currency::try_from(code.as_str()).map_err(|e| ConfigError::Invalid {
                name: "STORE_CURRENCY",
                reason: e.to_string(),
            })?,
            None => Currency::brl(),
        };
        let bind_addr = get("BIND_ADDR")
            .as_deref()
            .unwrap_or("0.0.0.0:3000")
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;
        let public_base_url = parse_url(
            "PUBLIC_BASE_URL",
            get("PUBLIC_BASE_URL")
                .as_deref()
                .unwrap_or("http://localhost:3000"),
        )?;
        let checkout_url = match get("CHECKOUT_URL") {
            Some(url) => parse_url("CHECKOUT_URL", &url)?,
            None => join(&public_base_url, "/checkout")?,
        };
        let success_url = match get("SUCCESS_URL") {
            Some(url) => parse_url("SUCCESS_URL", &url)?,
            None => join(&public_base_url, "/checkout/success")?,
        };

        Ok(Self {
            app_id,
            api_url,
            plugin_url,
            currency,
            database_url: get("DATABASE_URL"),
            bind_addr,
            public_base_url,
            checkout_url,
            success_url,
        })
    }

    /// URL the merchant registers in the OpenPix dashboard.
    pub fn webhook_url(&self) -> Result<Url, ConfigError> {
        join(&self.public_base_url, WEBHOOK_PATH)
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn join(base: &Url, path: &str) -> Result<Url, ConfigError> {
    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    parse_url("PUBLIC_BASE_URL", &joined)
}
