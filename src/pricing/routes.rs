//! Pricing route handlers.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::error::Result;
use crate::AppState;

use super::models::Formula;
use super::requests::{CitySearchQuery, QuoteAllRequest, QuoteRequest};
use super::responses::{
    CacheStatsResponse, CityListResponse, CitySearchResponse, CitySummary, InvalidateResponse,
    QuoteAllResponse, QuoteResponse,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/quote/all", post(quote_all))
        .route("/cities", get(cities))
        .route("/cities/search", get(search_cities))
        .route("/cache/invalidate", post(invalidate_cache))
        .route("/cache/stats", get(cache_stats))
}

/// Quote one trip for one formula.
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let formula: Formula = req.formula.parse()?;
    let quote = state
        .quotes
        .quote(
            &req.origin_city,
            &req.destination_city,
            req.distance_meters,
            formula,
        )
        .await?;
    Ok(Json(quote.into()))
}

/// Quote one trip under every formula, for comparison displays.
async fn quote_all(
    State(state): State<AppState>,
    Json(req): Json<QuoteAllRequest>,
) -> Result<Json<QuoteAllResponse>> {
    let quotes = state
        .quotes
        .quote_all_formulas(&req.origin_city, &req.destination_city, req.distance_meters)
        .await?;
    Ok(Json(QuoteAllResponse {
        quotes: quotes
            .into_iter()
            .map(|(formula, quote)| (formula, quote.into()))
            .collect(),
    }))
}

/// All served pickup cities, sorted.
async fn cities(State(state): State<AppState>) -> Result<Json<CityListResponse>> {
    let table = state.rates.table().await?;
    Ok(Json(CityListResponse {
        cities: table.city_names(),
    }))
}

/// City autocomplete.
async fn search_cities(
    State(state): State<AppState>,
    Query(query): Query<CitySearchQuery>,
) -> Result<Json<CitySearchResponse>> {
    let table = state.rates.table().await?;
    let results = table
        .search(&query.q, query.limit)
        .into_iter()
        .map(CitySummary::from)
        .collect();
    Ok(Json(CitySearchResponse { results }))
}

/// Admin hook: drop the rate snapshot and the config cache so edited tariffs
/// take effect immediately.
async fn invalidate_cache(State(state): State<AppState>) -> Result<Json<InvalidateResponse>> {
    state.rates.invalidate().await;
    state.pricing_config.invalidate();
    info!("pricing caches invalidated by admin request");
    Ok(Json(InvalidateResponse {
        status: "invalidated",
    }))
}

/// Cache monitoring snapshot.
async fn cache_stats(State(state): State<AppState>) -> Result<Json<CacheStatsResponse>> {
    let snapshot = state.cache.rate_table_snapshot().await;
    Ok(Json(CacheStatsResponse {
        rate_table_cached: snapshot.is_some(),
        rate_city_count: snapshot.map(|t| t.len()).unwrap_or(0),
    }))
}
