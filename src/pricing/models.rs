//! Domain types for the voucher-based fare engine.
//!
//! Rate rows use sqlx's FromRow derive for direct database deserialization;
//! everything else is plain in-memory data shared via `Arc` snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

/// The five service formulas of the fare grid.
///
/// Each formula is an independent column in the rate table; the engine never
/// compares tiers against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Formula {
    Normal,
    Express,
    Urgence,
    VlNormal,
    VlExpress,
}

impl Formula {
    /// All formulas, in rate-grid column order.
    pub const ALL: [Formula; 5] = [
        Formula::Normal,
        Formula::Express,
        Formula::Urgence,
        Formula::VlNormal,
        Formula::VlExpress,
    ];

    /// Column index into [`CityRate::vouchers`].
    pub fn index(self) -> usize {
        match self {
            Formula::Normal => 0,
            Formula::Express => 1,
            Formula::Urgence => 2,
            Formula::VlNormal => 3,
            Formula::VlExpress => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Formula::Normal => "NORMAL",
            Formula::Express => "EXPRESS",
            Formula::Urgence => "URGENCE",
            Formula::VlNormal => "VL_NORMAL",
            Formula::VlExpress => "VL_EXPRESS",
        }
    }
}

impl FromStr for Formula {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORMAL" => Ok(Formula::Normal),
            "EXPRESS" => Ok(Formula::Express),
            "URGENCE" => Ok(Formula::Urgence),
            "VL_NORMAL" => Ok(Formula::VlNormal),
            "VL_EXPRESS" => Ok(Formula::VlExpress),
            other => Err(PricingError::UnknownFormula(other.to_string())),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pickup city of the fare grid: a fixed voucher count per formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRate {
    pub postal_code: String,
    /// Canonical display form, accents and hyphens preserved.
    pub city_name: String,
    /// Voucher counts in [`Formula::ALL`] column order.
    pub vouchers: [u32; 5],
}

impl CityRate {
    pub fn voucher_count(&self, formula: Formula) -> u32 {
        self.vouchers[formula.index()]
    }
}

/// Row of the `city_pricing` table.
#[derive(Debug, Clone, FromRow)]
pub struct CityPricingRow {
    pub id: Uuid,
    pub city_name: String,
    pub zip_code: Option<String>,
    pub price_normal: i32,
    pub price_express: i32,
    pub price_urgence: i32,
    pub price_vl_normal: i32,
    pub price_vl_express: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CityPricingRow> for CityRate {
    fn from(row: CityPricingRow) -> Self {
        let count = |v: i32| v.max(0) as u32;
        CityRate {
            postal_code: row.zip_code.unwrap_or_default(),
            city_name: row.city_name,
            vouchers: [
                count(row.price_normal),
                count(row.price_express),
                count(row.price_urgence),
                count(row.price_vl_normal),
                count(row.price_vl_express),
            ],
        }
    }
}

/// Row of the `tariff_metadata` key/value settings table.
#[derive(Debug, Clone, FromRow)]
pub struct TariffMetadataRow {
    pub key: String,
    pub value: String,
}

/// Dynamic knobs of the fare engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingConfig {
    /// Currency value of one voucher, in cents.
    pub voucher_value_minor_units: i64,
    /// Voucher cost per kilometre for the suburb-to-suburb surcharge.
    pub surcharge_per_km_vouchers: Decimal,
}

impl PricingConfig {
    /// Voucher value in major currency units, for display.
    pub fn voucher_value_euros(&self) -> Decimal {
        Decimal::new(self.voucher_value_minor_units, 2)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            voucher_value_minor_units: 550,
            surcharge_per_km_vouchers: Decimal::new(1, 1),
        }
    }
}

/// Fully-worked fare for one trip and one formula.
///
/// Built fresh per calculation and never mutated; identical inputs against an
/// unchanged grid and config produce identical quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub origin_city: String,
    pub destination_city: String,
    pub formula: Formula,
    pub base_vouchers: u32,
    pub surcharge_vouchers: Decimal,
    pub total_vouchers: Decimal,
    pub total_amount_minor_units: i64,
    pub distance_km: Decimal,
    pub capital_in_route: bool,
    pub surcharge_applied: bool,
    pub calculation_trace: String,
}

/// Failure taxonomy of the fare engine.
///
/// The engine either computes exactly or reports one of these; it never
/// substitutes a silent default price for a recognized-but-failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("pickup city not in the rate grid: {0}")]
    UnknownOriginCity(String),

    #[error("unknown formula: {0}")]
    UnknownFormula(String),

    #[error("rate source unavailable: {0}")]
    RateSourceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_parses_grid_column_names() {
        assert_eq!("NORMAL".parse::<Formula>().unwrap(), Formula::Normal);
        assert_eq!("vl_express".parse::<Formula>().unwrap(), Formula::VlExpress);
        assert_eq!(" express ".parse::<Formula>().unwrap(), Formula::Express);
    }

    #[test]
    fn formula_rejects_unknown_names() {
        let err = "FLASH".parse::<Formula>().unwrap_err();
        assert_eq!(err, PricingError::UnknownFormula("FLASH".to_string()));
    }

    #[test]
    fn formula_indexes_cover_all_columns() {
        let mut seen = [false; 5];
        for formula in Formula::ALL {
            seen[formula.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn city_pricing_row_maps_to_rate() {
        let row = CityPricingRow {
            id: Uuid::new_v4(),
            city_name: "Melun".to_string(),
            zip_code: Some("77000".to_string()),
            price_normal: 24,
            price_express: 27,
            price_urgence: 30,
            price_vl_normal: 28,
            price_vl_express: 31,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let rate = CityRate::from(row);
        assert_eq!(rate.postal_code, "77000");
        assert_eq!(rate.voucher_count(Formula::Express), 27);
        assert_eq!(rate.voucher_count(Formula::VlExpress), 31);
    }

    #[test]
    fn negative_db_counts_clamp_to_zero() {
        let row = CityPricingRow {
            id: Uuid::new_v4(),
            city_name: "Broken".to_string(),
            zip_code: None,
            price_normal: -3,
            price_express: 1,
            price_urgence: 2,
            price_vl_normal: 3,
            price_vl_express: 4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(CityRate::from(row).voucher_count(Formula::Normal), 0);
    }

    #[test]
    fn default_config_matches_grid_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.voucher_value_minor_units, 550);
        assert_eq!(config.surcharge_per_km_vouchers.to_string(), "0.1");
        assert_eq!(config.voucher_value_euros().to_string(), "5.50");
    }
}
