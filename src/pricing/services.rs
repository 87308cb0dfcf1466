//! Quote orchestration over a rate source and the config loader.
//!
//! Resolution policy: the pickup city must exist in the grid
//! (`UnknownOriginCity` otherwise); an unresolved destination does not block
//! the quote and is priced as a generic suburb. The surcharge rule only needs
//! to know whether the destination is the capital, and that is decided from
//! the normalized name, in or out of the grid.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::calculators::{build_quote, distance_km_from_meters};
use super::config::PricingConfigLoader;
use super::distance::DistanceProvider;
use super::models::{Formula, PriceQuote, PricingError};
use super::normalize::lookup_key;
use super::table::CityRateSource;

pub struct QuoteService {
    rates: Arc<dyn CityRateSource>,
    config: Arc<PricingConfigLoader>,
}

impl QuoteService {
    pub fn new(rates: Arc<dyn CityRateSource>, config: Arc<PricingConfigLoader>) -> Self {
        QuoteService { rates, config }
    }

    /// Quote one trip for one formula.
    pub async fn quote(
        &self,
        origin_city: &str,
        destination_city: &str,
        distance_meters: f64,
        formula: Formula,
    ) -> Result<PriceQuote, PricingError> {
        let distance_km = distance_km_from_meters(distance_meters)?;
        let destination_key = lookup_key(destination_city)?;

        let table = self.rates.table().await?;

        let origin = table
            .lookup(origin_city)?
            .ok_or_else(|| PricingError::UnknownOriginCity(origin_city.trim().to_string()))?;
        let origin_key = lookup_key(&origin.city_name)?;

        let destination_label = match table.lookup(destination_city)? {
            Some(rate) => rate.city_name.clone(),
            None => {
                debug!(
                    "destination {destination_key} not in the rate grid, \
                     pricing it as a generic suburb"
                );
                destination_key.clone()
            }
        };

        let config = self.config.load_cached().await;

        Ok(build_quote(
            origin,
            &origin_key,
            &destination_label,
            &destination_key,
            distance_km,
            formula,
            &config,
        ))
    }

    /// Quote one trip under every formula, for side-by-side comparison.
    pub async fn quote_all_formulas(
        &self,
        origin_city: &str,
        destination_city: &str,
        distance_meters: f64,
    ) -> Result<BTreeMap<&'static str, PriceQuote>, PricingError> {
        let mut quotes = BTreeMap::new();
        for formula in Formula::ALL {
            let quote = self
                .quote(origin_city, destination_city, distance_meters, formula)
                .await?;
            quotes.insert(formula.as_str(), quote);
        }
        Ok(quotes)
    }

    /// Quote a trip whose distance comes from an injected provider instead of
    /// the caller.
    pub async fn quote_route(
        &self,
        distances: &dyn DistanceProvider,
        origin_city: &str,
        destination_city: &str,
        formula: Formula,
    ) -> Result<PriceQuote, PricingError> {
        let meters = distances
            .distance_meters(origin_city, destination_city)
            .await?;
        self.quote(origin_city, destination_city, meters, formula)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::config::{PricingConfigLoader, StaticSettingsProvider};
    use crate::pricing::distance::FixedDistanceProvider;
    use crate::pricing::table::StaticRateTable;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> QuoteService {
        QuoteService::new(
            Arc::new(StaticRateTable::new()),
            Arc::new(PricingConfigLoader::new(Arc::new(
                StaticSettingsProvider::default(),
            ))),
        )
    }

    #[tokio::test]
    async fn melun_express_to_paris() {
        let quote = service()
            .quote("Melun", "Paris", 47_300.0, Formula::Express)
            .await
            .unwrap();
        assert_eq!(quote.origin_city, "Melun");
        assert_eq!(quote.destination_city, "Paris");
        assert_eq!(quote.base_vouchers, 27);
        assert_eq!(quote.surcharge_vouchers, Decimal::ZERO);
        assert_eq!(quote.total_amount_minor_units, 14_850);
    }

    #[tokio::test]
    async fn unknown_origin_is_fatal() {
        let err = service()
            .quote("Timbuktu", "Paris", 10_000.0, Formula::Normal)
            .await
            .unwrap_err();
        assert_eq!(err, PricingError::UnknownOriginCity("Timbuktu".to_string()));
    }

    #[tokio::test]
    async fn unknown_destination_is_priced_as_a_suburb() {
        let quote = service()
            .quote("Saint-Prix", "Hamlet-sur-Nulle-Part", 12_000.0, Formula::Normal)
            .await
            .unwrap();
        assert_eq!(quote.destination_city, "HAMLET-SUR-NULLE-PART");
        assert!(quote.surcharge_applied);
        assert_eq!(quote.surcharge_vouchers, dec!(1.2));
    }

    #[tokio::test]
    async fn empty_cities_and_bad_distances_are_rejected() {
        let svc = service();
        assert!(matches!(
            svc.quote("", "Paris", 1_000.0, Formula::Normal).await,
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.quote("Melun", "  ", 1_000.0, Formula::Normal).await,
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.quote("Melun", "Paris", -5.0, Formula::Normal).await,
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn all_formulas_quote_covers_the_grid_columns() {
        let quotes = service()
            .quote_all_formulas("Melun", "Paris", 47_300.0)
            .await
            .unwrap();
        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes["NORMAL"].base_vouchers, 24);
        assert_eq!(quotes["EXPRESS"].base_vouchers, 27);
        assert_eq!(quotes["URGENCE"].base_vouchers, 30);
        assert_eq!(quotes["VL_NORMAL"].base_vouchers, 28);
        assert_eq!(quotes["VL_EXPRESS"].base_vouchers, 31);
    }

    #[tokio::test]
    async fn provider_supplied_distance_feeds_the_surcharge() {
        let distances = FixedDistanceProvider::default()
            .with_route("Saint-Prix", "Nanterre", 12_000.0);
        let quote = service()
            .quote_route(&distances, "Saint-Prix", "Nanterre", Formula::Normal)
            .await
            .unwrap();
        assert_eq!(quote.distance_km, dec!(12));
        assert_eq!(quote.surcharge_vouchers, dec!(1.2));
    }

    #[tokio::test]
    async fn quotes_are_idempotent() {
        let svc = service();
        let a = svc
            .quote("Cachan", "Paris", 8_500.0, Formula::Urgence)
            .await
            .unwrap();
        let b = svc
            .quote("Cachan", "Paris", 8_500.0, Formula::Urgence)
            .await
            .unwrap();
        assert_eq!(a, b);
    }
}
