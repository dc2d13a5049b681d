//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{BalanceQuery, BalanceResponse, ErrorResponse, ForecastResponse, SiteResponse};
use crate::balance::compute_balance;
use crate::forecast::generate_forecast;

/// Returns the site name and configuration.
///
/// `GET /site` → 200 + `SiteResponse` JSON
pub async fn get_site(State(state): State<Arc<AppState>>) -> Json<SiteResponse> {
    Json(SiteResponse {
        name: state.name.clone(),
        site: state.site.clone(),
    })
}

/// Returns the balance for one period.
///
/// `GET /balance` → 1 day at the site's design temperature
/// `GET /balance?outdoor_temp_c=T&period_days=N` → N days at T °C
/// `GET /balance?period_days=0` → 400 + `ErrorResponse`
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BalanceQuery>,
) -> impl IntoResponse {
    let outdoor_temp_c = query.outdoor_temp_c.unwrap_or(state.site.outdoor_temp_c);
    let period_days = query.period_days.unwrap_or(1);

    if period_days == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "`period_days` must be >= 1".to_string(),
            }),
        ));
    }
    if !outdoor_temp_c.is_finite() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "`outdoor_temp_c` must be a finite number".to_string(),
            }),
        ));
    }

    let balance = compute_balance(&state.site, outdoor_temp_c, period_days);
    Ok(Json(BalanceResponse::new(
        outdoor_temp_c,
        balance,
        &state.site,
    )))
}

/// Returns the monthly forecast over the state's climate profile.
///
/// `GET /forecast` → 200 + `ForecastResponse` JSON
pub async fn get_forecast(State(state): State<Arc<AppState>>) -> Json<ForecastResponse> {
    let forecast = generate_forecast(&state.site, &state.months);
    Json(ForecastResponse::new(forecast, &state.site))
}
