//! Response DTOs for pricing API endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{CityRate, Formula, PriceQuote};

/// A worked quote, with the voucher breakdown as strings for lossless JSON.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub origin_city: String,
    pub destination_city: String,
    pub formula: Formula,
    pub base_vouchers: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub surcharge_vouchers: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_vouchers: Decimal,
    pub total_amount_minor_units: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_km: Decimal,
    pub capital_in_route: bool,
    pub surcharge_applied: bool,
    pub calculation_trace: String,
}

impl From<PriceQuote> for QuoteResponse {
    fn from(quote: PriceQuote) -> Self {
        QuoteResponse {
            origin_city: quote.origin_city,
            destination_city: quote.destination_city,
            formula: quote.formula,
            base_vouchers: quote.base_vouchers,
            surcharge_vouchers: quote.surcharge_vouchers,
            total_vouchers: quote.total_vouchers,
            total_amount_minor_units: quote.total_amount_minor_units,
            distance_km: quote.distance_km,
            capital_in_route: quote.capital_in_route,
            surcharge_applied: quote.surcharge_applied,
            calculation_trace: quote.calculation_trace,
        }
    }
}

/// All five formulas quoted side by side, keyed by formula name.
#[derive(Debug, Serialize)]
pub struct QuoteAllResponse {
    pub quotes: BTreeMap<&'static str, QuoteResponse>,
}

/// Sorted canonical city names.
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<String>,
}

/// One autocomplete hit.
#[derive(Debug, Serialize)]
pub struct CitySummary {
    pub city_name: String,
    pub postal_code: String,
}

impl From<&CityRate> for CitySummary {
    fn from(rate: &CityRate) -> Self {
        CitySummary {
            city_name: rate.city_name.clone(),
            postal_code: rate.postal_code.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CitySearchResponse {
    pub results: Vec<CitySummary>,
}

/// Cache monitoring snapshot.
#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub rate_table_cached: bool,
    pub rate_city_count: usize,
}

#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    pub status: &'static str,
}

/// Generic pricing error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quote_serializes_decimals_as_strings() {
        let quote = PriceQuote {
            origin_city: "Saint-Prix".to_string(),
            destination_city: "Nanterre".to_string(),
            formula: Formula::VlNormal,
            base_vouchers: 16,
            surcharge_vouchers: dec!(1.2),
            total_vouchers: dec!(17.2),
            total_amount_minor_units: 9_460,
            distance_km: dec!(12),
            capital_in_route: false,
            surcharge_applied: true,
            calculation_trace: "16 + 1.2 vouchers × 5.50€ = 94.60€".to_string(),
        };
        let json = serde_json::to_value(QuoteResponse::from(quote)).unwrap();

        assert_eq!(json["formula"], "VL_NORMAL");
        assert_eq!(json["surcharge_vouchers"], "1.2");
        assert_eq!(json["total_vouchers"], "17.2");
        assert_eq!(json["total_amount_minor_units"], 9_460);
        assert_eq!(json["capital_in_route"], false);
    }

    #[test]
    fn error_payload_carries_the_kind() {
        let json = serde_json::to_value(ErrorResponse {
            error_type: "unknown_origin_city",
            message: "pickup city not in the rate grid: Timbuktu".to_string(),
        })
        .unwrap();
        assert_eq!(json["error_type"], "unknown_origin_city");
    }
}
