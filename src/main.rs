use {
    pix_gateway::{
        AppState,
        adapters::{
            openpix::{client::OpenPixClient, signature::WebhookVerifier},
            storefront::Storefront,
        },
        config::Config,
        domain::store::OrderStore,
        infra::{memory::InMemoryOrderStore, postgres::order_repo::PgOrderStore},
        services::{checkout::ChargeInitiator, webhook::WebhookReceiver},
    },
    sqlx::postgres::PgPoolOptions,
    std::{sync::Arc, time::Duration},
    tokio::signal,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");

    let store: Arc<dyn OrderStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(20)
                .acquire_timeout(Duration::from_secs(3))
                .connect(database_url)
                .await
                .expect("failed to connect to database");
            let store = PgOrderStore::new(pool);
            store.migrate().await.expect("failed to run migrations");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, orders are kept in memory");
            Arc::new(InMemoryOrderStore::new())
        }
    };

    let verifier = WebhookVerifier::openpix().expect("embedded OpenPix key must parse");
    let provider = OpenPixClient::new(&config.api_url, config.app_id.clone())
        .expect("failed to build OpenPix client");

    let state = AppState {
        receiver: Arc::new(WebhookReceiver::new(verifier, store.clone())),
        initiator: Arc::new(ChargeInitiator::new(
            store.clone(),
            Arc::new(provider),
            config.currency.clone(),
        )),
        store,
        storefront: Arc::new(Storefront {
            app_id: config.app_id.clone(),
            plugin_url: config.plugin_url.clone(),
            checkout_url: config.checkout_url.clone(),
            success_url: config.success_url.clone(),
        }),
    };

    match config.webhook_url() {
        Ok(url) => tracing::info!(webhook_url = %url, "register this URL in the OpenPix dashboard"),
        Err(e) => tracing::warn!("cannot build webhook URL: {e}"),
    }

    let app = pix_gateway::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind");
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
