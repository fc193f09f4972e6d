use crate::domain::error::GatewayError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INVALID_SIGNATURE: &str = "Invalid Webhook signature";
pub const PAYMENT_NOT_FOUND: &str = "Payment not found.";

pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GatewayError::WebhookSignature(reason) => {
                tracing::warn!(reason = %reason, "rejected webhook signature");
                (StatusCode::BAD_REQUEST, INVALID_SIGNATURE.to_string())
            }
            GatewayError::PaymentNotFound(key) => {
                tracing::warn!(correlation_id = %key, "no order for correlation id");
                (StatusCode::BAD_REQUEST, PAYMENT_NOT_FOUND.to_string())
            }
            GatewayError::MalformedEvent(err) => {
                tracing::warn!("signed webhook body is not a JSON event: {err}");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid webhook payload.".to_string(),
                )
            }
            GatewayError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            GatewayError::Provider(msg) => {
                tracing::error!("provider error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment provider unavailable.".to_string(),
                )
            }
            GatewayError::Database(err) => {
                tracing::error!("database error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error.".to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
