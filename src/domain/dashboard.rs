// Dashboard domain model - everything one refresh cycle produced
use super::panel::Panel;
use super::trade::{RecentTrade, SectorPoint, SectorTradeCount, TopStock, TradeSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub refresh_count: u64,
    pub generated_at: DateTime<Utc>,
    pub metrics: Panel<TradeSummary>,
    pub sector_series: Panel<Vec<SectorPoint>>,
    pub sector_trades: Panel<Vec<SectorTradeCount>>,
    pub top_stocks: Panel<Vec<TopStock>>,
    pub recent_trades: Panel<Vec<RecentTrade>>,
}

impl DashboardSnapshot {
    /// Diagnostics of every panel whose query failed, in page order.
    pub fn errors(&self) -> Vec<&str> {
        [
            self.metrics.error(),
            self.sector_series.error(),
            self.sector_trades.error(),
            self.top_stocks.error(),
            self.recent_trades.error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
