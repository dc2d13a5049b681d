//! REST API over the balance and forecast engine.
//!
//! Provides three GET endpoints:
//! - `/site`: loaded site configuration
//! - `/balance`: balance and economics for a temperature and period
//! - `/forecast`: monthly forecast with totals

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::balance::SiteConfig;
use crate::forecast::{DEFAULT_MONTHS, MonthProfile};

pub use types::{BalanceQuery, BalanceResponse, ErrorResponse, ForecastResponse, SiteResponse};

/// Immutable application state shared across all request handlers.
///
/// Constructed once from a validated site and wrapped in `Arc`. Handlers
/// only read it, so no locks are needed; every request computes its own
/// balance.
pub struct AppState {
    /// Display name of the site.
    pub name: String,
    /// Validated site configuration.
    pub site: SiteConfig,
    /// Climate profile used by `/forecast`.
    pub months: Vec<MonthProfile>,
}

impl AppState {
    /// Creates state using [`DEFAULT_MONTHS`].
    pub fn new(name: impl Into<String>, site: SiteConfig) -> Self {
        Self {
            name: name.into(),
            site,
            months: DEFAULT_MONTHS.to_vec(),
        }
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/site", get(handlers::get_site))
        .route("/balance", get(handlers::get_balance))
        .route("/forecast", get(handlers::get_forecast))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
