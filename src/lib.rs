pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod services;

use {
    adapters::{
        openpix::webhook::wh_handler,
        storefront::{Storefront, checkout_handler, receipt_handler},
    },
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    domain::store::OrderStore,
    services::{checkout::ChargeInitiator, webhook::WebhookReceiver},
    std::{sync::Arc, time::Duration},
    tower_http::timeout::TimeoutLayer,
};

/// Outlasts the 60 s charge call so checkout requests are not cut short.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(70);

#[derive(Clone)]
pub struct AppState {
    pub receiver: Arc<WebhookReceiver>,
    pub initiator: Arc<ChargeInitiator>,
    pub store: Arc<dyn OrderStore>,
    pub storefront: Arc<Storefront>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(config::WEBHOOK_PATH, post(wh_handler).put(wh_handler))
        .route("/checkout", post(checkout_handler))
        .route("/receipt/{purchase_key}", get(receipt_handler))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}
