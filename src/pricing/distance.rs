//! Road-distance seam.
//!
//! Distances come from an external routing service the host already talks
//! to; the API therefore takes meters from the caller. This trait is the
//! narrow contract for hosts that resolve distances themselves, and the
//! fixed implementation keeps the arithmetic tests network-free.

use std::collections::HashMap;

use async_trait::async_trait;

use super::models::PricingError;
use super::normalize::lookup_key;

#[async_trait]
pub trait DistanceProvider: Send + Sync {
    /// Road distance between two cities, in meters.
    async fn distance_meters(
        &self,
        origin_city: &str,
        destination_city: &str,
    ) -> Result<f64, PricingError>;
}

/// In-memory distance matrix keyed by normalized city pairs.
#[derive(Default)]
pub struct FixedDistanceProvider {
    routes: HashMap<(String, String), f64>,
}

impl FixedDistanceProvider {
    pub fn with_route(mut self, origin: &str, destination: &str, meters: f64) -> Self {
        if let (Ok(from), Ok(to)) = (lookup_key(origin), lookup_key(destination)) {
            self.routes.insert((from, to), meters);
        }
        self
    }
}

#[async_trait]
impl DistanceProvider for FixedDistanceProvider {
    async fn distance_meters(
        &self,
        origin_city: &str,
        destination_city: &str,
    ) -> Result<f64, PricingError> {
        let key = (lookup_key(origin_city)?, lookup_key(destination_city)?);
        self.routes.get(&key).copied().ok_or_else(|| {
            PricingError::InvalidInput(format!("no distance known for {} -> {}", key.0, key.1))
        })
    }
}
