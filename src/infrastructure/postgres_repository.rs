// PostgreSQL repository implementation
use crate::application::trade_repository::{RepositoryResult, TradeRepository};
use crate::domain::trade::{RecentTrade, SectorPoint, SectorTradeCount, TopStock, TradeSummary};
use crate::infrastructure::config::DatabaseSettings;
use crate::infrastructure::queries;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a repository over a lazily connected pool.
    ///
    /// No connection is opened here, so the service starts while the store is
    /// still unreachable; each query checks out (and health-checks) a
    /// connection only when it runs.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Self {
        let options = Self::session_options(
            PgConnectOptions::new()
                .host(&settings.host)
                .port(settings.port)
                .database(&settings.name)
                .username(&settings.user)
                .password(&settings.password),
        );

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .test_before_acquire(true)
            .connect_lazy_with(options);

        tracing::info!(
            host = %settings.host,
            port = settings.port,
            database = %settings.name,
            "Configured analytics store pool"
        );

        Self::new(pool)
    }

    /// Session parameters every dashboard connection runs with.
    ///
    /// Naive `timestamp` columns are converted with the session TimeZone
    /// when read as `timestamptz`; UTC keeps them as stored.
    pub fn session_options(options: PgConnectOptions) -> PgConnectOptions {
        options.options([("TimeZone", "UTC")])
    }
}

#[async_trait]
impl TradeRepository for PostgresRepository {
    async fn trade_summary(&self, window_minutes: i32) -> RepositoryResult<Option<TradeSummary>> {
        let summary = sqlx::query_as::<_, TradeSummary>(queries::TRADE_SUMMARY)
            .bind(window_minutes)
            .fetch_optional(&self.pool)
            .await?;
        Ok(summary)
    }

    async fn sector_series(&self, window_minutes: i32) -> RepositoryResult<Vec<SectorPoint>> {
        let points = sqlx::query_as::<_, SectorPoint>(queries::SECTOR_SERIES)
            .bind(window_minutes)
            .fetch_all(&self.pool)
            .await?;
        Ok(points)
    }

    async fn sector_trade_counts(&self, window_minutes: i32) -> RepositoryResult<Vec<SectorTradeCount>> {
        let counts = sqlx::query_as::<_, SectorTradeCount>(queries::SECTOR_TRADE_COUNTS)
            .bind(window_minutes)
            .fetch_all(&self.pool)
            .await?;
        Ok(counts)
    }

    async fn top_stocks(&self, window_minutes: i32, limit: i64) -> RepositoryResult<Vec<TopStock>> {
        let stocks = sqlx::query_as::<_, TopStock>(queries::TOP_STOCKS)
            .bind(window_minutes)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(stocks)
    }

    async fn recent_trades(&self, limit: i64) -> RepositoryResult<Vec<RecentTrade>> {
        let trades = sqlx::query_as::<_, RecentTrade>(queries::RECENT_TRADES)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(trades)
    }
}
