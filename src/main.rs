//! Service entry point: wire the rate source, config loader and HTTP router.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use coursier_pricing_web::cache::{self, AppCache};
use coursier_pricing_web::pricing::{self, config::DbSettingsProvider, config::PricingConfigLoader,
    config::StaticSettingsProvider, CityRateSource, DbRateTable, QuoteService, StaticRateTable};
use coursier_pricing_web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("coursier_pricing_web=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let cache = AppCache::new();
    let (rates, pricing_config) = build_sources(cache.clone()).await?;

    let quotes = Arc::new(QuoteService::new(rates.clone(), pricing_config.clone()));
    let state = AppState {
        cache,
        rates: rates.clone(),
        pricing_config,
        quotes,
    };

    tokio::spawn(cache::start_rate_warmer(rates));

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state);

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("pricing service listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Pick the rate/config sources: the database when configured, otherwise the
/// compiled grid. `RATE_SOURCE=static` forces the compiled grid.
async fn build_sources(
    cache: AppCache,
) -> anyhow::Result<(Arc<dyn CityRateSource>, Arc<PricingConfigLoader>)> {
    let force_static = env::var("RATE_SOURCE").is_ok_and(|v| v.eq_ignore_ascii_case("static"));
    let database_url = env::var("DATABASE_URL").ok();

    if let (false, Some(url)) = (force_static, database_url) {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&url)
            .await
            .context("failed to connect to DATABASE_URL")?;
        let rates: Arc<dyn CityRateSource> = Arc::new(DbRateTable::new(pool.clone(), cache));
        let config = Arc::new(PricingConfigLoader::new(Arc::new(DbSettingsProvider::new(
            pool,
        ))));
        Ok((rates, config))
    } else {
        warn!("database not in use, serving the builtin rate grid and default config");
        let rates: Arc<dyn CityRateSource> = Arc::new(StaticRateTable::new());
        let config = Arc::new(PricingConfigLoader::new(Arc::new(
            StaticSettingsProvider::default(),
        )));
        Ok((rates, config))
    }
}

async fn health() -> &'static str {
    "ok"
}
