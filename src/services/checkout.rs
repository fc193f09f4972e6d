use {
    crate::domain::{
        checkout::{CheckoutOutcome, CheckoutRequest},
        error::GatewayError,
        money::{Currency, MoneyAmount},
        order::{NewOrder, NewOrderParams},
        provider::{ChargeRequest, PixProvider},
        store::OrderStore,
    },
    chrono::Utc,
    std::sync::Arc,
};

/// Turns a Pix checkout into a pending order plus an OpenPix charge.
pub struct ChargeInitiator {
    store: Arc<dyn OrderStore>,
    provider: Arc<dyn PixProvider>,
    currency: Currency,
}

impl ChargeInitiator {
    pub fn new(
        store: Arc<dyn OrderStore>,
        provider: Arc<dyn PixProvider>,
        currency: Currency,
    ) -> Self {
        Self {
            store,
            provider,
            currency,
        }
    }

    pub async fn process_payment(
        &self,
        checkout: CheckoutRequest,
    ) -> Result<CheckoutOutcome, GatewayError> {
        if !checkout.errors.is_empty() {
            tracing::info!(
                purchase_key = %checkout.purchase_key,
                errors = checkout.errors.len(),
                "checkout has errors, sending buyer back"
            );
            return Ok(CheckoutOutcome::BackToCheckout);
        }

        let value = MoneyAmount::from_price(checkout.price, &self.currency)?;

        // The order must exist before the provider knows about the charge,
        // since the webhook can arrive before create_charge returns.
        let order_id = match self.store.find_by_key(&checkout.purchase_key).await? {
            // Retry after a failed charge: same order, and OpenPix hands back
            // the existing charge for this correlationID.
            Some(existing) if existing.awaits_pix_payment() => {
                tracing::info!(
                    order_id = %existing.id(),
                    purchase_key = %checkout.purchase_key,
                    "reusing pending order"
                );
                existing.id()
            }
            Some(existing) => {
                return Err(GatewayError::Validation(format!(
                    "purchase key already used: {} is {}",
                    checkout.purchase_key,
                    existing.status()
                )));
            }
            None => {
                let order = NewOrder::pending(NewOrderParams {
                    purchase_key: checkout.purchase_key.clone(),
                    amount: checkout.price,
                    currency: self.currency.clone(),
                    user_email: checkout.user_email,
                    cart: checkout.cart_details,
                    buyer: checkout.user_info,
                    created_at: checkout.date.unwrap_or_else(Utc::now),
                });
                let order_id = self.store.create(&order).await?;
                tracing::info!(
                    order_id = %order_id,
                    purchase_key = %checkout.purchase_key,
                    user_email = %order.user_email(),
                    "pending order created"
                );
                order_id
            }
        };

        let request = ChargeRequest {
            value,
            correlation_id: checkout.purchase_key,
        };
        let charge = self.provider.create_charge(&request).await?;
        tracing::info!(
            order_id = %order_id,
            value = %request.value,
            charge_status = charge.status.as_deref().unwrap_or("unknown"),
            "charge created"
        );

        Ok(CheckoutOutcome::AwaitingPayment { order_id, charge })
    }
}
