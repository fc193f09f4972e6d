use {
    crate::{
        AppState,
        adapters::{
            api_errors::{ApiError, PAYMENT_NOT_FOUND},
            openpix::widget::payment_instructions,
        },
        domain::{
            checkout::{CheckoutOutcome, CheckoutRequest},
            error::GatewayError,
            id::PurchaseKey,
            order::GATEWAY_OPENPIX,
        },
    },
    axum::{
        Json,
        extract::{Path, State, rejection::JsonRejection},
        http::StatusCode,
        response::{Html, IntoResponse, Redirect, Response},
    },
    url::Url,
};

pub const PROVIDER_UNAVAILABLE: &str = "provider_unavailable";
pub const INVALID_CHECKOUT: &str = "invalid_checkout";

/// Where the storefront sends buyers, plus what the receipt widget needs.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub app_id: String,
    pub plugin_url: Url,
    pub checkout_url: Url,
    pub success_url: Url,
}

impl Storefront {
    pub fn back_to_checkout(&self, error: Option<&str>) -> Url {
        let mut url = self.checkout_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("payment-mode", GATEWAY_OPENPIX);
            if let Some(error) = error {
                query.append_pair("error", error);
            }
        }
        url
    }

    pub fn awaiting_payment(&self, key: &PurchaseKey) -> Url {
        let mut url = self.success_url.clone();
        url.query_pairs_mut().append_pair("payment_key", key.as_str());
        url
    }
}

/// `POST /checkout`, called by the commerce pipeline when Pix is chosen.
#[tracing::instrument(name = "checkout", skip_all, fields(purchase_key = tracing::field::Empty))]
pub async fn checkout_handler(
    State(state): State<AppState>,
    checkout: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Redirect, ApiError> {
    let Json(checkout) = match checkout {
        Ok(checkout) => checkout,
        Err(rejection) => {
            tracing::warn!("unreadable checkout: {rejection}");
            return Ok(Redirect::to(
                state
                    .storefront
                    .back_to_checkout(Some(INVALID_CHECKOUT))
                    .as_str(),
            ));
        }
    };
    let key = checkout.purchase_key.clone();
    tracing::Span::current().record("purchase_key", key.as_str());

    match state.initiator.process_payment(checkout).await {
        Ok(CheckoutOutcome::BackToCheckout) => Ok(Redirect::to(
            state.storefront.back_to_checkout(None).as_str(),
        )),
        Ok(CheckoutOutcome::AwaitingPayment { order_id, .. }) => {
            tracing::info!(order_id = %order_id, "awaiting Pix payment");
            Ok(Redirect::to(state.storefront.awaiting_payment(&key).as_str()))
        }
        Err(GatewayError::Provider(msg)) => {
            // Order stays pending; a retry with the same key reuses it.
            tracing::warn!("charge creation failed: {msg}");
            Ok(Redirect::to(
                state
                    .storefront
                    .back_to_checkout(Some(PROVIDER_UNAVAILABLE))
                    .as_str(),
            ))
        }
        Err(GatewayError::Validation(msg)) => {
            tracing::warn!("checkout rejected: {msg}");
            Ok(Redirect::to(
                state
                    .storefront
                    .back_to_checkout(Some(INVALID_CHECKOUT))
                    .as_str(),
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// `GET /receipt/{purchase_key}`: Pix payment instructions for pending orders.
pub async fn receipt_handler(
    State(state): State<AppState>,
    Path(purchase_key): Path<String>,
) -> Result<Response, ApiError> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": PAYMENT_NOT_FOUND })),
        )
            .into_response()
    };

    let Ok(key) = PurchaseKey::new(purchase_key) else {
        return Ok(not_found());
    };
    let Some(order) = state.store.find_by_key(&key).await? else {
        return Ok(not_found());
    };

    if !order.awaits_pix_payment() {
        return Ok(Html(String::new()).into_response());
    }

    let storefront = &state.storefront;
    Ok(Html(payment_instructions(
        &storefront.plugin_url,
        &storefront.app_id,
        order.purchase_key(),
    ))
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront {
        Storefront {
            app_id: "app".into(),
            plugin_url: Url::parse("https://plugin.openpix.com.br").unwrap(),
            checkout_url: Url::parse("https://shop.example.com/checkout").unwrap(),
            success_url: Url::parse("https://shop.example.com/checkout/success").unwrap(),
        }
    }

    #[test]
    fn checkout_redirects() {
        let sf = storefront();
        assert_eq!(
            sf.back_to_checkout(None).as_str(),
            "https://shop.example.com/checkout?payment-mode=openpix"
        );
        assert_eq!(
            sf.back_to_checkout(Some(PROVIDER_UNAVAILABLE)).as_str(),
            "https://shop.example.com/checkout?payment-mode=openpix&error=provider_unavailable"
        );
        assert_eq!(
            sf.awaiting_payment(&PurchaseKey::new("abc123").unwrap())
                .as_str(),
            "https://shop.example.com/checkout/success?payment_key=abc123"
        );
    }
}
