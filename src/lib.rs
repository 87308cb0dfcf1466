//! Rust/Axum pricing engine for an Île-de-France courier platform.
//!
//! The surrounding ordering portal, dispatch console and driver app are
//! external collaborators; this service owns only the fare calculation and
//! its reference data.

use std::sync::Arc;

pub mod cache;
pub mod error;
pub mod pricing;

use cache::AppCache;
use pricing::config::PricingConfigLoader;
use pricing::services::QuoteService;
use pricing::table::CityRateSource;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub rates: Arc<dyn CityRateSource>,
    pub pricing_config: Arc<PricingConfigLoader>,
    pub quotes: Arc<QuoteService>,
}
