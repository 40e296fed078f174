// Repository trait for trade analytics data access
use crate::domain::trade::{RecentTrade, SectorPoint, SectorTradeCount, TopStock, TradeSummary};
use crate::infrastructure::error::DashboardError;
use async_trait::async_trait;

pub type RepositoryResult<T> = Result<T, DashboardError>;

#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Count, value sum, average price and distinct sectors over the trailing window
    async fn trade_summary(&self, window_minutes: i32) -> RepositoryResult<Option<TradeSummary>>;

    /// One row per (window_start, sector), keeping the latest ingested record
    async fn sector_series(&self, window_minutes: i32) -> RepositoryResult<Vec<SectorPoint>>;

    /// Trade counts summed per sector, highest first
    async fn sector_trade_counts(&self, window_minutes: i32) -> RepositoryResult<Vec<SectorTradeCount>>;

    /// Stocks ranked by traded value, highest first
    async fn top_stocks(&self, window_minutes: i32, limit: i64) -> RepositoryResult<Vec<TopStock>>;

    /// Newest raw trades first
    async fn recent_trades(&self, limit: i64) -> RepositoryResult<Vec<RecentTrade>>;
}
