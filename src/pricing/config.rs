//! Pricing configuration loading with a time-boxed cache.
//!
//! Configuration storage being unreachable must never block quoting: every
//! load falls back, per field, to the grid defaults (voucher worth 5.50,
//! 0.1 voucher per kilometre).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{info, warn};

use super::models::PricingConfig;
use super::queries;

/// How long a loaded configuration stays fresh.
pub const CONFIG_CACHE_TTL: Duration = Duration::from_secs(300);

const BON_VALUE_KEY: &str = "bon_value_eur";
const SUPPLEMENT_KEY: &str = "supplement_per_km_bons";

/// External settings storage, as string key/value pairs.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn tariff_metadata(&self) -> anyhow::Result<HashMap<String, String>>;
}

/// Settings from the `tariff_metadata` table.
pub struct DbSettingsProvider {
    pool: PgPool,
}

impl DbSettingsProvider {
    pub fn new(pool: PgPool) -> Self {
        DbSettingsProvider { pool }
    }
}

#[async_trait]
impl SettingsProvider for DbSettingsProvider {
    async fn tariff_metadata(&self) -> anyhow::Result<HashMap<String, String>> {
        let rows = queries::fetch_tariff_metadata(&self.pool).await?;
        Ok(rows.into_iter().map(|r| (r.key, r.value)).collect())
    }
}

/// Fixed in-memory settings, for tests and database-less deployments.
#[derive(Default)]
pub struct StaticSettingsProvider {
    entries: HashMap<String, String>,
}

impl StaticSettingsProvider {
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl SettingsProvider for StaticSettingsProvider {
    async fn tariff_metadata(&self) -> anyhow::Result<HashMap<String, String>> {
        Ok(self.entries.clone())
    }
}

/// Loads [`PricingConfig`] from a settings provider, caching the result for a
/// fixed time-to-live.
///
/// The cache is an explicit slot on the loader, not module state, so tests
/// inject a TTL and drive expiry deterministically.
pub struct PricingConfigLoader {
    provider: Arc<dyn SettingsProvider>,
    ttl: Duration,
    cached: RwLock<Option<(PricingConfig, Instant)>>,
}

impl PricingConfigLoader {
    pub fn new(provider: Arc<dyn SettingsProvider>) -> Self {
        Self::with_ttl(provider, CONFIG_CACHE_TTL)
    }

    pub fn with_ttl(provider: Arc<dyn SettingsProvider>, ttl: Duration) -> Self {
        PricingConfigLoader {
            provider,
            ttl,
            cached: RwLock::new(None),
        }
    }

    /// Fetch and parse the configuration. Never fails: fetch errors and
    /// missing or unparseable keys fall back to defaults per field.
    pub async fn load(&self) -> PricingConfig {
        match self.provider.tariff_metadata().await {
            Ok(settings) => parse_config(&settings),
            Err(err) => {
                warn!("pricing config fetch failed, using defaults: {err}");
                PricingConfig::default()
            }
        }
    }

    /// Cached load: returns the previous result while it is younger than the
    /// TTL, otherwise re-loads and refreshes the timestamp - also when the
    /// re-load came back as defaults.
    pub async fn load_cached(&self) -> PricingConfig {
        if let Ok(slot) = self.cached.read() {
            if let Some((config, loaded_at)) = slot.as_ref() {
                if loaded_at.elapsed() < self.ttl {
                    return config.clone();
                }
            }
        }

        let config = self.load().await;
        if let Ok(mut slot) = self.cached.write() {
            *slot = Some((config.clone(), Instant::now()));
        }
        config
    }

    /// Drop the cached configuration; the next [`Self::load_cached`]
    /// re-fetches.
    pub fn invalidate(&self) {
        if let Ok(mut slot) = self.cached.write() {
            *slot = None;
        }
        info!("pricing config cache invalidated");
    }
}

fn parse_config(settings: &HashMap<String, String>) -> PricingConfig {
    let defaults = PricingConfig::default();

    let voucher_value_minor_units = settings
        .get(BON_VALUE_KEY)
        .and_then(|v| v.trim().parse::<Decimal>().ok())
        .filter(|d| d.is_sign_positive() && !d.is_zero())
        .and_then(|eur| {
            (eur * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .unwrap_or(defaults.voucher_value_minor_units);

    let surcharge_per_km_vouchers = settings
        .get(SUPPLEMENT_KEY)
        .and_then(|v| v.trim().parse::<Decimal>().ok())
        .filter(|d| d.is_sign_positive() && !d.is_zero())
        .unwrap_or(defaults.surcharge_per_km_vouchers);

    PricingConfig {
        voucher_value_minor_units,
        surcharge_per_km_vouchers,
    }
}
