//! Fare engine for the courier platform.
//!
//! Deterministic voucher-based pricing: a fixed pickup charge per city and
//! formula, a kilometre surcharge for suburb-to-suburb trips, and a voucher
//! to currency conversion. The surrounding application calls this module
//! over HTTP/JSON to quote, display and persist fares.

pub mod calculators;
pub mod config;
pub mod distance;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod static_rates;
pub mod table;

// Re-export commonly used items
pub use calculators::round_minor_units;
pub use models::{CityRate, Formula, PriceQuote, PricingConfig, PricingError};
pub use routes::router;
pub use services::QuoteService;
pub use table::{CityRateSource, DbRateTable, RateTable, StaticRateTable};
