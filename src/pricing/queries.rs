//! Database queries for the fare engine.

use sqlx::PgPool;

use super::models::{CityPricingRow, TariffMetadataRow};

/// Fetch the whole fare grid.
pub async fn fetch_city_rates(pool: &PgPool) -> Result<Vec<CityPricingRow>, sqlx::Error> {
    sqlx::query_as::<_, CityPricingRow>(
        r#"
        SELECT
            id, city_name, zip_code,
            price_normal, price_express, price_urgence,
            price_vl_normal, price_vl_express,
            created_at, updated_at
        FROM city_pricing
        ORDER BY city_name
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetch all tariff settings key/value pairs.
pub async fn fetch_tariff_metadata(pool: &PgPool) -> Result<Vec<TariffMetadataRow>, sqlx::Error> {
    sqlx::query_as::<_, TariffMetadataRow>(
        r#"
        SELECT key, value
        FROM tariff_metadata
        "#,
    )
    .fetch_all(pool)
    .await
}
