// Trade analytics domain models - one row type per dashboard query
//
// Enrichment columns may be NULL in the store; they decode as `None` so a
// single incomplete row never takes the whole panel down.
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Aggregate over the trailing metrics window.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TradeSummary {
    pub total_trades: i64,
    pub total_value: Option<f64>,
    pub avg_price: Option<f64>,
    pub active_sectors: i64,
}

impl TradeSummary {
    pub fn has_trades(&self) -> bool {
        self.total_trades > 0
    }
}

/// Latest ingested value for one (window_start, sector) pair.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SectorPoint {
    pub window_start: DateTime<Utc>,
    pub sector: Option<String>,
    pub total_value: Option<f64>,
    pub trade_count: Option<i64>,
}

impl SectorPoint {
    pub fn new(window_start: DateTime<Utc>, sector: &str, total_value: f64, trade_count: i64) -> Self {
        Self {
            window_start,
            sector: Some(sector.to_string()),
            total_value: Some(total_value),
            trade_count: Some(trade_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct SectorTradeCount {
    pub sector: Option<String>,
    pub total_trades: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TopStock {
    pub symbol: Option<String>,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub trade_count: i64,
    pub total_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RecentTrade {
    pub timestamp: Option<DateTime<Utc>>,
    pub symbol: Option<String>,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub price: Option<f64>,
    pub volume: Option<i64>,
    pub trade_value: Option<f64>,
}
