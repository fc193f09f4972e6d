use {
    crate::{
        adapters::openpix::signature::WebhookVerifier,
        domain::{
            error::GatewayError,
            id::PurchaseKey,
            order::OrderStatus,
            store::OrderStore,
            webhook::{WebhookEvent, WebhookOutcome},
        },
    },
    std::sync::Arc,
};

/// Verifies and applies OpenPix webhook deliveries.
pub struct WebhookReceiver {
    verifier: WebhookVerifier,
    store: Arc<dyn OrderStore>,
}

impl WebhookReceiver {
    pub fn new(verifier: WebhookVerifier, store: Arc<dyn OrderStore>) -> Self {
        Self { verifier, store }
    }

    /// Runs one delivery: signature over the raw body first, then parse,
    /// then dispatch. Nothing is read from the body before the signature
    /// checks out.
    pub async fn handle(
        &self,
        signature: Option<&str>,
        body: &[u8],
    ) -> Result<WebhookOutcome, GatewayError> {
        let signature = signature
            .ok_or_else(|| GatewayError::WebhookSignature("missing signature header".into()))?;
        self.verifier.verify(body, signature)?;

        let event = WebhookEvent::from_slice(body).map_err(GatewayError::MalformedEvent)?;

        tracing::Span::current().record("event", event.name().unwrap_or(""));

        if !event.is_charge_completed() {
            return Ok(WebhookOutcome::Ignored);
        }

        self.complete_charge(event.correlation_id().unwrap_or(""))
            .await
    }

    async fn complete_charge(&self, correlation_id: &str) -> Result<WebhookOutcome, GatewayError> {
        tracing::Span::current().record("correlation_id", correlation_id);

        // An unusable correlation id cannot match any order.
        let key = PurchaseKey::new(correlation_id)
            .map_err(|_| GatewayError::PaymentNotFound(correlation_id.to_string()))?;

        let order = self
            .store
            .find_by_key(&key)
            .await?
            .ok_or_else(|| GatewayError::PaymentNotFound(correlation_id.to_string()))?;

        // Unconditional: redelivery rewrites the same status.
        if !self
            .store
            .set_status(order.id(), OrderStatus::Complete)
            .await?
        {
            return Err(GatewayError::PaymentNotFound(correlation_id.to_string()));
        }

        Ok(WebhookOutcome::Completed(order.id()))
    }
}
