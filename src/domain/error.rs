use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("webhook signature: {0}")]
    WebhookSignature(String),

    /// Signature was valid but the body is not a JSON event.
    #[error("malformed webhook event: {0}")]
    MalformedEvent(serde_json::Error),

    #[error("payment not found: {0}")]
    PaymentNotFound(String),

    #[error("provider: {0}")]
    Provider(String),
}
