//! In-memory caching using moka
//!
//! Holds the fare-grid snapshot between admin edits. The grid changes rarely
//! (tariff updates), so a long TTL with an explicit invalidation hook fits.

use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::pricing::table::{CityRateSource, RateTable};

/// Singleton cache key for the current rate-table snapshot.
pub const RATE_TABLE_KEY: &str = "rate-table";

/// Application cache holding fare-grid snapshots.
#[derive(Clone)]
pub struct AppCache {
    /// Rate-table snapshots (singleton under [`RATE_TABLE_KEY`]).
    pub rates: Cache<String, Arc<RateTable>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs.
    pub fn new() -> Self {
        Self {
            // One snapshot, refreshed hourly unless invalidated sooner.
            rates: Cache::builder()
                .max_capacity(1)
                .time_to_live(Duration::from_secs(60 * 60))
                .build(),
        }
    }

    /// Current snapshot, if one is cached.
    pub async fn rate_table_snapshot(&self) -> Option<Arc<RateTable>> {
        self.rates.get(RATE_TABLE_KEY).await
    }

    /// Invalidate all caches.
    pub fn invalidate_all(&self) {
        self.rates.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Start background rate-grid warmer
///
/// Loads the grid on startup and keeps the snapshot warm with a periodic
/// refresh, so the first quote after a TTL expiry does not pay the fetch.
pub async fn start_rate_warmer(rates: Arc<dyn CityRateSource>) {
    warm_rates(rates.as_ref()).await;

    let mut interval = interval(Duration::from_secs(10 * 60));
    // First tick fires immediately and we already warmed above.
    interval.tick().await;
    loop {
        interval.tick().await;
        warm_rates(rates.as_ref()).await;
    }
}

async fn warm_rates(rates: &dyn CityRateSource) {
    match rates.table().await {
        Ok(table) => info!("rate grid warm: {} cities", table.len()),
        Err(e) => warn!("Failed to warm rate grid cache: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::CityRate;

    #[tokio::test]
    async fn snapshot_round_trips_through_the_cache() {
        let cache = AppCache::new();
        assert!(cache.rate_table_snapshot().await.is_none());

        let table = Arc::new(RateTable::new(vec![CityRate {
            postal_code: "77000".to_string(),
            city_name: "Melun".to_string(),
            vouchers: [24, 27, 30, 28, 31],
        }]));
        cache
            .rates
            .insert(RATE_TABLE_KEY.to_string(), table)
            .await;

        let cached = cache.rate_table_snapshot().await.unwrap();
        assert_eq!(cached.len(), 1);

        cache.invalidate_all();
        // moka applies invalidation lazily; run pending tasks to observe it.
        cache.rates.run_pending_tasks().await;
        assert!(cache.rate_table_snapshot().await.is_none());
    }
}
