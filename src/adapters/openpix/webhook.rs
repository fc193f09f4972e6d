use {
    crate::{
        AppState,
        adapters::{api_errors::ApiError, openpix::signature::SIGNATURE_HEADER},
        domain::webhook::WebhookOutcome,
    },
    axum::{
        Json,
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
    },
};

/// `POST|PUT /webhook/callback`. Takes the body as raw bytes: the signature
/// covers exactly what OpenPix sent.
#[tracing::instrument(
    name = "webhook",
    skip_all,
    fields(event = tracing::field::Empty, correlation_id = tracing::field::Empty)
)]
pub async fn wh_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());

    match state.receiver.handle(signature, &body).await? {
        WebhookOutcome::Completed(payment_id) => {
            tracing::info!(payment_id = %payment_id, "payment marked complete");
            Ok((
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": "Payment was updated successfully.",
                    "paymentID": payment_id,
                })),
            )
                .into_response())
        }
        WebhookOutcome::Ignored => {
            tracing::debug!("event ignored");
            Ok(StatusCode::OK.into_response())
        }
    }
}
