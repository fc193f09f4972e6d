use {
    crate::domain::{
        error::GatewayError,
        provider::{Charge, ChargeRequest, PixProvider},
    },
    serde::Deserialize,
    std::{future::Future, pin::Pin, time::Duration},
    url::Url,
};

pub const CHARGE_TIMEOUT: Duration = Duration::from_secs(60);
pub const CLIENT_VERSION: &str = "1.0.0";
pub const PLATFORM: &str = "EASYDIGITALDOWNLOADS";

#[derive(Debug, Deserialize)]
struct ChargeResponse {
    charge: Charge,
}

pub struct OpenPixClient {
    http: reqwest::Client,
    charge_url: Url,
    app_id: String,
}

impl OpenPixClient {
    pub fn new(api_url: &Url, app_id: impl Into<String>) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(CHARGE_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Provider(format!("http client: {e}")))?;
        Self::with_client(http, api_url, app_id)
    }

    pub fn with_client(
        http: reqwest::Client,
        api_url: &Url,
        app_id: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let raw = format!(
            "{}/api/v1/charge?return_existing=true",
            api_url.as_str().trim_end_matches('/')
        );
        let charge_url = Url::parse(&raw)
            .map_err(|e| GatewayError::Validation(format!("OpenPix API url: {e}")))?;
        Ok(Self {
            http,
            charge_url,
            app_id: app_id.into(),
        })
    }

    pub fn charge_url(&self) -> &Url {
        &self.charge_url
    }
}

impl PixProvider for OpenPixClient {
    fn create_charge<'a>(
        &'a self,
        request: &'a ChargeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Charge, GatewayError>> + Send + 'a>> {
        Box::pin(async move { self.create_charge_inner(request).await })
    }
}

impl OpenPixClient {
    async fn create_charge_inner(&self, request: &ChargeRequest) -> Result<Charge, GatewayError> {
        let response = self
            .http
            .post(self.charge_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::AUTHORIZATION, self.app_id.as_str())
            .header("version", CLIENT_VERSION)
            .header("platform", PLATFORM)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Provider(format!("OpenPix API: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Provider(format!(
                "OpenPix API returned {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: ChargeResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Provider(format!("OpenPix API response: {e}")))?;

        Ok(parsed.charge)
    }
}
