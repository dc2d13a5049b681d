//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use common::{assert_close, barnwell};
use district_heat::api::{AppState, router};

fn build_api_state() -> Arc<AppState> {
    Arc::new(AppState::new("Barnwell", barnwell()))
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(build_api_state());
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn site_reports_installed_sources() {
    let (status, json) = get_json("/site").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Barnwell");
    assert_eq!(json["site"]["floor_area_m2"], 22_102.0);
    assert_eq!(json["site"]["chp"]["adjustment_fraction"], 0.95);
    assert_eq!(json["site"]["heat_pump"]["coefficient_of_performance"], 4.0);
}

#[tokio::test]
async fn design_day_balance_matches_engine() {
    let (status, json) = get_json("/balance").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["balance"]["period_days"], 1);
    let demand = json["balance"]["heat_demand_kwh"].as_f64().unwrap();
    assert_close(demand, 1790.262, 1e-3);
    let boiler = json["balance"]["boiler_thermal_kwh"].as_f64().unwrap();
    assert_close(boiler, 613.287, 1e-3);
    let efficiency = json["economics"]["overall_efficiency_pct"].as_f64();
    assert!(efficiency.unwrap() > 0.0);
}

#[tokio::test]
async fn balance_query_overrides_temperature_and_days() {
    let (status, json) = get_json("/balance?outdoor_temp_c=-5&period_days=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outdoor_temp_c"], -5.0);
    assert_eq!(json["balance"]["period_days"], 7);
}

#[tokio::test]
async fn zero_day_period_is_rejected() {
    let (status, json) = get_json("/balance?period_days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("period_days"));
}

#[tokio::test]
async fn forecast_returns_twelve_months_and_totals() {
    let (status, json) = get_json("/forecast").await;
    assert_eq!(status, StatusCode::OK);
    let months = json["months"].as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0]["month"]["name"], "Jan");
    assert_eq!(json["total"]["period_days"], 365);
    let jan = months[0]["balance"]["heat_demand_kwh"].as_f64().unwrap();
    assert_close(jan, 55_498.122, 1e-3);
}
