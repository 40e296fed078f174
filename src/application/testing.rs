// In-memory repositories for service, driver and handler tests
use crate::application::trade_repository::{RepositoryResult, TradeRepository};
use crate::domain::trade::{RecentTrade, SectorPoint, SectorTradeCount, TopStock, TradeSummary};
use crate::infrastructure::error::DashboardError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct FixtureTrade {
    pub at: DateTime<Utc>,
    pub symbol: String,
    pub company: Option<String>,
    pub sector: Option<String>,
    pub price: f64,
    pub volume: i64,
}

impl FixtureTrade {
    pub fn minutes_ago(minutes: i64, symbol: &str, sector: &str, price: f64, volume: i64) -> Self {
        Self {
            at: Utc::now() - Duration::minutes(minutes),
            symbol: symbol.to_string(),
            company: Some(format!("{symbol} Corp")),
            sector: Some(sector.to_string()),
            price,
            volume,
        }
    }

    /// A trade the enrichment step could not match: no company, no sector.
    pub fn unenriched(mut self) -> Self {
        self.company = None;
        self.sector = None;
        self
    }

    fn trade_value(&self) -> f64 {
        self.price * self.volume as f64
    }
}

#[derive(Debug, Clone)]
pub struct FixtureMetric {
    pub window_start: DateTime<Utc>,
    pub sector: Option<String>,
    pub total_value: f64,
    pub trade_count: i64,
    pub ingestion_time: DateTime<Utc>,
}

/// Mirrors the panel queries over fixture rows and records every call.
#[derive(Default)]
pub struct MemoryRepository {
    trades: Vec<FixtureTrade>,
    metrics: Vec<FixtureMetric>,
    calls: Mutex<Vec<&'static str>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trade(mut self, trade: FixtureTrade) -> Self {
        self.trades.push(trade);
        self
    }

    pub fn with_metric(mut self, metric: FixtureMetric) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn trades_since(&self, window_minutes: i32) -> impl Iterator<Item = &FixtureTrade> {
        let cutoff = Utc::now() - Duration::minutes(window_minutes.into());
        self.trades.iter().filter(move |t| t.at > cutoff)
    }

    fn metrics_since(&self, window_minutes: i32) -> impl Iterator<Item = &FixtureMetric> {
        let cutoff = Utc::now() - Duration::minutes(window_minutes.into());
        self.metrics.iter().filter(move |m| m.window_start > cutoff)
    }
}

#[async_trait]
impl TradeRepository for MemoryRepository {
    async fn trade_summary(&self, window_minutes: i32) -> RepositoryResult<Option<TradeSummary>> {
        self.record("trade_summary");
        let trades: Vec<_> = self.trades_since(window_minutes).collect();
        let count = trades.len() as i64;
        let sectors: BTreeSet<_> = trades.iter().filter_map(|t| t.sector.as_deref()).collect();
        let (total_value, avg_price) = if trades.is_empty() {
            (None, None)
        } else {
            (
                Some(trades.iter().map(|t| t.trade_value()).sum::<f64>()),
                Some(trades.iter().map(|t| t.price).sum::<f64>() / count as f64),
            )
        };

        Ok(Some(TradeSummary {
            total_trades: count,
            total_value,
            avg_price,
            active_sectors: sectors.len() as i64,
        }))
    }

    async fn sector_series(&self, window_minutes: i32) -> RepositoryResult<Vec<SectorPoint>> {
        self.record("sector_series");
        let mut latest: BTreeMap<(DateTime<Utc>, Option<String>), &FixtureMetric> = BTreeMap::new();
        for metric in self.metrics_since(window_minutes) {
            let key = (metric.window_start, metric.sector.clone());
            let newer = latest
                .get(&key)
                .is_none_or(|kept| kept.ingestion_time < metric.ingestion_time);
            if newer {
                latest.insert(key, metric);
            }
        }

        Ok(latest
            .into_values()
            .map(|m| SectorPoint {
                window_start: m.window_start,
                sector: m.sector.clone(),
                total_value: Some(m.total_value),
                trade_count: Some(m.trade_count),
            })
            .collect())
    }

    async fn sector_trade_counts(&self, window_minutes: i32) -> RepositoryResult<Vec<SectorTradeCount>> {
        self.record("sector_trade_counts");
        let mut totals: BTreeMap<Option<&str>, i64> = BTreeMap::new();
        for metric in self.metrics_since(window_minutes) {
            *totals.entry(metric.sector.as_deref()).or_default() += metric.trade_count;
        }

        let mut counts: Vec<_> = totals
            .into_iter()
            .map(|(sector, total_trades)| SectorTradeCount {
                sector: sector.map(str::to_string),
                total_trades,
            })
            .collect();
        counts.sort_by(|a, b| b.total_trades.cmp(&a.total_trades));
        Ok(counts)
    }

    async fn top_stocks(&self, window_minutes: i32, limit: i64) -> RepositoryResult<Vec<TopStock>> {
        self.record("top_stocks");
        type GroupKey<'a> = (&'a str, Option<&'a str>, Option<&'a str>);
        let mut groups: BTreeMap<GroupKey<'_>, (i64, f64)> = BTreeMap::new();
        for trade in self.trades_since(window_minutes) {
            let entry = groups
                .entry((trade.symbol.as_str(), trade.company.as_deref(), trade.sector.as_deref()))
                .or_default();
            entry.0 += 1;
            entry.1 += trade.trade_value();
        }

        let mut ranked: Vec<_> = groups.into_iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.1.total_cmp(&a.1));
        ranked.truncate(limit.max(0) as usize);
        Ok(ranked
            .into_iter()
            .map(|((symbol, company, sector), (trade_count, total_value))| TopStock {
                symbol: Some(symbol.to_string()),
                company: company.map(str::to_string),
                sector: sector.map(str::to_string),
                trade_count,
                total_value: Some(total_value),
            })
            .collect())
    }

    async fn recent_trades(&self, limit: i64) -> RepositoryResult<Vec<RecentTrade>> {
        self.record("recent_trades");
        let mut trades: Vec<_> = self.trades.iter().collect();
        trades.sort_by(|a, b| b.at.cmp(&a.at));
        trades.truncate(limit.max(0) as usize);
        Ok(trades
            .into_iter()
            .map(|t| RecentTrade {
                timestamp: Some(t.at),
                symbol: Some(t.symbol.clone()),
                company: t.company.clone(),
                sector: t.sector.clone(),
                price: Some(t.price),
                volume: Some(t.volume),
                trade_value: Some(t.trade_value()),
            })
            .collect())
    }
}

/// Fails every query with the same store error.
pub struct FailingRepository(fn() -> sqlx::Error);

impl FailingRepository {
    /// A store that refuses every connection.
    pub fn unreachable() -> Self {
        Self(|| sqlx::Error::PoolTimedOut)
    }

    /// A store whose rows do not fit the row types.
    pub fn mismatched_rows() -> Self {
        Self(|| sqlx::Error::ColumnNotFound("sector".into()))
    }

    fn error(&self) -> DashboardError {
        DashboardError::from((self.0)())
    }
}

#[async_trait]
impl TradeRepository for FailingRepository {
    async fn trade_summary(&self, _window_minutes: i32) -> RepositoryResult<Option<TradeSummary>> {
        Err(self.error())
    }

    async fn sector_series(&self, _window_minutes: i32) -> RepositoryResult<Vec<SectorPoint>> {
        Err(self.error())
    }

    async fn sector_trade_counts(&self, _window_minutes: i32) -> RepositoryResult<Vec<SectorTradeCount>> {
        Err(self.error())
    }

    async fn top_stocks(&self, _window_minutes: i32, _limit: i64) -> RepositoryResult<Vec<TopStock>> {
        Err(self.error())
    }

    async fn recent_trades(&self, _limit: i64) -> RepositoryResult<Vec<RecentTrade>> {
        Err(self.error())
    }
}
