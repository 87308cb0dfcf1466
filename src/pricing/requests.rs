//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

/// Request to quote one trip.
///
/// `formula` is a grid column name (NORMAL, EXPRESS, URGENCE, VL_NORMAL,
/// VL_EXPRESS); it is parsed by the handler so an unknown value surfaces as
/// the engine's own error, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub origin_city: String,
    pub destination_city: String,
    pub distance_meters: f64,
    pub formula: String,
}

/// Request to quote one trip under every formula.
#[derive(Debug, Deserialize)]
pub struct QuoteAllRequest {
    pub origin_city: String,
    pub destination_city: String,
    pub distance_meters: f64,
}

/// Query parameters for city autocomplete.
#[derive(Debug, Deserialize)]
pub struct CitySearchQuery {
    pub q: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    10
}
