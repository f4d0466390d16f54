//! SkyFare Payments API Server
//!
//! Payment boundary of the SkyFare flight-booking app: creates orders with the
//! payment gateway and verifies checkout signatures.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::RazorpayClientImpl;
use app::PaymentService;
use config::Config;
use domain::ports::PaymentGateway;

/// Application state shared across all handlers
pub struct AppState<G>
where
    G: PaymentGateway,
{
    pub payment_service: Arc<PaymentService<G>>,
    /// Public gateway key id exposed to the checkout
    pub key_id: String,
}

impl<G> Clone for AppState<G>
where
    G: PaymentGateway,
{
    fn clone(&self) -> Self {
        Self {
            payment_service: self.payment_service.clone(),
            key_id: self.key_id.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Payment routes, nested under `/api/payment`
fn payment_routes<G>() -> Router<AppState<G>>
where
    G: PaymentGateway + 'static,
{
    Router::new()
        .route("/order", post(handlers::create_order::<G>))
        .route("/verify", post(handlers::verify_payment::<G>))
        .route("/config", get(handlers::checkout_config::<G>))
}

/// Build the application router
///
/// `wrap_payments` lets the caller layer extra middleware (rate limiting)
/// onto the payment routes only.
pub fn build_router<G, F>(state: AppState<G>, wrap_payments: F) -> Router
where
    G: PaymentGateway + 'static,
    F: FnOnce(Router<AppState<G>>) -> Router<AppState<G>>,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        .nest("/api/payment", wrap_payments(payment_routes()))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Per-peer-IP rate limit for the payment routes
///
/// Every order creation costs an outbound gateway call. Pass the result to
/// `build_router`; the router must be served with peer `ConnectInfo`.
pub fn payment_rate_limit<G>(
    config: &Config,
) -> anyhow::Result<impl FnOnce(Router<AppState<G>>) -> Router<AppState<G>>>
where
    G: PaymentGateway + 'static,
{
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(move |routes: Router<AppState<G>>| {
        routes.layer(GovernorLayer {
            config: governor_config,
        })
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skyfare_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SkyFare payments API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    // Create adapters
    let gateway = Arc::new(
        RazorpayClientImpl::new(
            config.razorpay_api_url.clone(),
            config.razorpay_key_id.clone(),
            config.razorpay_key_secret.clone(),
            config.gateway_timeout,
        )
        .context("Failed to build payment gateway client")?,
    );

    // Create application services
    let payment_service = Arc::new(PaymentService::new(
        gateway,
        config.razorpay_key_secret.clone(),
        config.gateway_timeout,
    ));

    let state = AppState {
        payment_service,
        key_id: config.razorpay_key_id.clone(),
    };

    let app = build_router(state, payment_rate_limit(&config)?);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
