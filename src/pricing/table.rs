//! City rate table and its sourcing strategies.
//!
//! A [`RateTable`] is an immutable snapshot of the fare grid. Sources build
//! snapshots and hand them out as `Arc`s; reloads replace the whole snapshot
//! so concurrent readers never observe a partially-updated table.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::cache::{AppCache, RATE_TABLE_KEY};

use super::models::{CityRate, PricingError};
use super::normalize::{lookup_key, search_key};
use super::queries;
use super::static_rates::builtin_rates;

const FETCH_ATTEMPTS: u32 = 3;
const FETCH_BACKOFF: Duration = Duration::from_millis(250);

/// Immutable snapshot of the fare grid with a lookup index.
#[derive(Debug)]
pub struct RateTable {
    rows: Vec<CityRate>,
    index: HashMap<String, usize>,
}

impl RateTable {
    /// Build a snapshot. Row order is preserved; on duplicate lookup keys the
    /// first row wins, keeping lookups deterministic.
    pub fn new(rows: Vec<CityRate>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, rate) in rows.iter().enumerate() {
            if let Ok(key) = lookup_key(&rate.city_name) {
                index.entry(key).or_insert(i);
            }
        }
        RateTable { rows, index }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data-integrity audit: lookup keys shared by more than one row, and
    /// rows whose name produces no key at all. Duplicates are a data problem,
    /// not an engine one; callers log them.
    pub fn audit(&self) -> Vec<String> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut findings = Vec::new();
        for rate in &self.rows {
            match lookup_key(&rate.city_name) {
                Ok(key) => *counts.entry(key).or_default() += 1,
                Err(_) => findings.push(format!("unkeyable city name: {:?}", rate.city_name)),
            }
        }
        let mut dupes: Vec<_> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(key, n)| format!("{n} rows share lookup key {key}"))
            .collect();
        dupes.sort();
        findings.extend(dupes);
        findings
    }

    /// Resolve a city name to its rate row.
    ///
    /// Matching ladder, first hit wins: exact match on the normalized key,
    /// then a case-insensitive match on the stored display name, then a
    /// diacritic-stripped comparison of both sides. The later rungs are
    /// defense-in-depth; a deterministic normalizer satisfies them via the
    /// first. `Ok(None)` means the city is genuinely not served.
    pub fn lookup(&self, city: &str) -> Result<Option<&CityRate>, PricingError> {
        let key = lookup_key(city)?;

        if let Some(&i) = self.index.get(&key) {
            return Ok(Some(&self.rows[i]));
        }

        let trimmed = city.trim();
        if let Some(rate) = self
            .rows
            .iter()
            .find(|r| r.city_name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Some(rate));
        }

        Ok(self
            .rows
            .iter()
            .find(|r| lookup_key(&r.city_name).map(|k| k == key).unwrap_or(false)))
    }

    /// All canonical city names, sorted, for autocomplete lists.
    pub fn city_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.city_name.clone()).collect();
        names.sort();
        names
    }

    /// Loose search for autocomplete: postal-code prefix, display-name
    /// substring, or article-insensitive substring via [`search_key`].
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CityRate> {
        let term = query.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let term_lower = term.to_lowercase();
        let term_key = search_key(term);

        self.rows
            .iter()
            .filter(|r| {
                r.postal_code.starts_with(term)
                    || r.city_name.to_lowercase().contains(&term_lower)
                    || (!term_key.is_empty() && search_key(&r.city_name).contains(&term_key))
            })
            .take(limit)
            .collect()
    }
}

/// A strategy for obtaining the current fare grid.
///
/// Both the compiled grid and the database-backed grid sit behind this
/// interface so the engine does not care where rates come from.
#[async_trait]
pub trait CityRateSource: Send + Sync {
    /// Current snapshot, loading it if necessary.
    async fn table(&self) -> Result<Arc<RateTable>, PricingError>;

    /// Drop any cached snapshot; the next [`CityRateSource::table`] reloads.
    async fn invalidate(&self);

    /// Force-refresh and return the new snapshot.
    async fn reload(&self) -> Result<Arc<RateTable>, PricingError>;
}

/// Compiled in-process grid.
pub struct StaticRateTable {
    table: Arc<RateTable>,
}

impl StaticRateTable {
    pub fn new() -> Self {
        Self::with_rows(builtin_rates())
    }

    pub fn with_rows(rows: Vec<CityRate>) -> Self {
        let table = RateTable::new(rows);
        for finding in table.audit() {
            warn!("rate grid integrity: {finding}");
        }
        StaticRateTable {
            table: Arc::new(table),
        }
    }
}

impl Default for StaticRateTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CityRateSource for StaticRateTable {
    async fn table(&self) -> Result<Arc<RateTable>, PricingError> {
        Ok(self.table.clone())
    }

    async fn invalidate(&self) {}

    async fn reload(&self) -> Result<Arc<RateTable>, PricingError> {
        Ok(self.table.clone())
    }
}

/// Database-backed grid with an in-memory snapshot cache.
///
/// All rows are fetched on first use and served from the cached snapshot
/// afterwards. A fetch failure surfaces as `RateSourceUnavailable` unless a
/// previously-successful snapshot exists to fall back on.
pub struct DbRateTable {
    pool: PgPool,
    cache: AppCache,
    last_good: RwLock<Option<Arc<RateTable>>>,
}

impl DbRateTable {
    pub fn new(pool: PgPool, cache: AppCache) -> Self {
        DbRateTable {
            pool,
            cache,
            last_good: RwLock::new(None),
        }
    }

    async fn fetch_snapshot(&self) -> Result<Arc<RateTable>, PricingError> {
        let mut attempt = 1;
        let rows = loop {
            match queries::fetch_city_rates(&self.pool).await {
                Ok(rows) => break rows,
                Err(err) if attempt < FETCH_ATTEMPTS => {
                    let backoff = FETCH_BACKOFF * 2u32.pow(attempt - 1);
                    warn!(
                        "rate grid fetch attempt {attempt}/{FETCH_ATTEMPTS} failed, \
                         retrying in {backoff:?}: {err}"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    return Err(PricingError::RateSourceUnavailable(err.to_string()));
                }
            }
        };

        let table = RateTable::new(rows.into_iter().map(CityRate::from).collect());
        for finding in table.audit() {
            warn!("rate grid integrity: {finding}");
        }
        info!("rate grid loaded: {} cities", table.len());

        let snapshot = Arc::new(table);
        self.cache
            .rates
            .insert(RATE_TABLE_KEY.to_string(), snapshot.clone())
            .await;
        if let Ok(mut slot) = self.last_good.write() {
            *slot = Some(snapshot.clone());
        }
        Ok(snapshot)
    }

    fn stale_snapshot(&self) -> Option<Arc<RateTable>> {
        self.last_good.read().ok().and_then(|slot| slot.clone())
    }
}

#[async_trait]
impl CityRateSource for DbRateTable {
    async fn table(&self) -> Result<Arc<RateTable>, PricingError> {
        if let Some(snapshot) = self.cache.rates.get(RATE_TABLE_KEY).await {
            return Ok(snapshot);
        }
        match self.fetch_snapshot().await {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => match self.stale_snapshot() {
                Some(snapshot) => {
                    warn!("rate grid fetch failed, serving last good snapshot: {err}");
                    Ok(snapshot)
                }
                None => Err(err),
            },
        }
    }

    async fn invalidate(&self) {
        self.cache.rates.invalidate(RATE_TABLE_KEY).await;
        info!("rate grid cache invalidated");
    }

    async fn reload(&self) -> Result<Arc<RateTable>, PricingError> {
        self.invalidate().await;
        self.fetch_snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::Formula;

    fn rate(name: &str, zip: &str, vouchers: [u32; 5]) -> CityRate {
        CityRate {
            postal_code: zip.to_string(),
            city_name: name.to_string(),
            vouchers,
        }
    }

    #[test]
    fn lookup_round_trips_every_builtin_city_and_formula() {
        let rows = builtin_rates();
        let table = RateTable::new(rows.clone());
        for expected in &rows {
            let found = table
                .lookup(&expected.city_name)
                .unwrap()
                .unwrap_or_else(|| panic!("{} not found", expected.city_name));
            for formula in Formula::ALL {
                assert_eq!(found.voucher_count(formula), expected.voucher_count(formula));
            }
        }
    }

    #[test]
    fn lookup_tolerates_case_and_diacritics() {
        let table = RateTable::new(builtin_rates());
        for query in ["Évry", "EVRY", "evry", "  évry  "] {
            let rate = table.lookup(query).unwrap().unwrap();
            assert_eq!(rate.city_name, "Évry");
        }
        assert_eq!(
            table.lookup("VERSAILLES").unwrap().unwrap().city_name,
            "Versailles"
        );
        assert_eq!(
            table.lookup("les mureaux").unwrap().unwrap().city_name,
            "Les Mureaux"
        );
    }

    #[test]
    fn lookup_misses_are_not_errors() {
        let table = RateTable::new(builtin_rates());
        assert!(table.lookup("Timbuktu").unwrap().is_none());
        assert!(table.lookup("Tokyo").unwrap().is_none());
    }

    #[test]
    fn lookup_rejects_empty_input() {
        let table = RateTable::new(builtin_rates());
        assert!(matches!(
            table.lookup("   "),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn duplicate_keys_keep_the_first_row_and_show_in_audit() {
        let table = RateTable::new(vec![
            rate("Melun", "77000", [1, 1, 1, 1, 1]),
            rate("MELUN", "77999", [9, 9, 9, 9, 9]),
        ]);
        let found = table.lookup("melun").unwrap().unwrap();
        assert_eq!(found.postal_code, "77000");

        let findings = table.audit();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("MELUN"));
    }

    #[test]
    fn audit_is_clean_for_the_builtin_grid() {
        let table = RateTable::new(builtin_rates());
        assert!(table.audit().is_empty(), "{:?}", table.audit());
    }

    #[test]
    fn search_matches_postal_prefix_name_and_stripped_article() {
        let table = RateTable::new(builtin_rates());

        let by_zip = table.search("77000", 10);
        assert!(by_zip.iter().any(|r| r.city_name == "Melun"));

        let by_name = table.search("mureaux", 10);
        assert!(by_name.iter().any(|r| r.city_name == "Les Mureaux"));

        // Article-stripped search finds "Le Bourget" from "bourget".
        let by_stripped = table.search("bourget", 10);
        assert!(by_stripped.iter().any(|r| r.city_name == "Le Bourget"));

        assert!(table.search("", 10).is_empty());
        assert_eq!(table.search("Paris", 3).len(), 3);
    }

    #[tokio::test]
    async fn static_source_serves_the_builtin_grid() {
        let source = StaticRateTable::new();
        let table = source.table().await.unwrap();
        assert!(table.lookup("Melun").unwrap().is_some());

        // Invalidate is a no-op for the compiled grid.
        source.invalidate().await;
        assert!(source.table().await.unwrap().lookup("Melun").unwrap().is_some());
    }

    #[tokio::test]
    async fn static_source_accepts_custom_rows() {
        let source = StaticRateTable::with_rows(vec![rate("Testville", "99000", [1, 2, 3, 4, 5])]);
        let table = source.table().await.unwrap();
        assert_eq!(
            table.lookup("testville").unwrap().unwrap().voucher_count(Formula::Urgence),
            3
        );
    }
}
