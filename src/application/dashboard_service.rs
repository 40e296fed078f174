// Dashboard service - Use case for building one refresh cycle's snapshot
use crate::application::trade_repository::{RepositoryResult, TradeRepository};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::panel::Panel;
use crate::domain::session::SessionState;
use crate::domain::trade::TradeSummary;
use crate::infrastructure::config::PanelSettings;
use crate::infrastructure::error::DashboardError;
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn TradeRepository>,
    panels: PanelSettings,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn TradeRepository>, panels: PanelSettings) -> Self {
        Self { repository, panels }
    }

    pub fn panels(&self) -> &PanelSettings {
        &self.panels
    }

    /// Query every panel, one after another, from fresh data.
    ///
    /// Never fails: a query error is logged and becomes `Panel::Failed` for
    /// that panel only, the remaining panels still render.
    pub async fn snapshot(&self, session: SessionState) -> DashboardSnapshot {
        tracing::debug!(refresh_count = session.refresh_count, "Building dashboard snapshot");

        let metrics = summary_panel(
            self.repository
                .trade_summary(self.panels.metrics_window_minutes)
                .await,
        );
        let sector_series = rows_panel(
            "sector_series",
            self.repository
                .sector_series(self.panels.series_window_minutes)
                .await,
        );
        let sector_trades = rows_panel(
            "sector_trades",
            self.repository
                .sector_trade_counts(self.panels.series_window_minutes)
                .await,
        );
        let top_stocks = rows_panel(
            "top_stocks",
            self.repository
                .top_stocks(self.panels.series_window_minutes, self.panels.top_stocks_limit)
                .await,
        );
        let recent_trades = rows_panel(
            "recent_trades",
            self.repository
                .recent_trades(self.panels.recent_trades_limit)
                .await,
        );

        let snapshot = DashboardSnapshot {
            refresh_count: session.refresh_count,
            generated_at: Utc::now(),
            metrics,
            sector_series,
            sector_trades,
            top_stocks,
            recent_trades,
        };

        let failed = snapshot.errors().len();
        if failed > 0 {
            tracing::warn!(
                refresh_count = snapshot.refresh_count,
                failed_panels = failed,
                "Dashboard snapshot is incomplete"
            );
        }
        snapshot
    }
}

// COUNT(*) always yields a row, so a zero count is the "no data" case.
fn summary_panel(result: RepositoryResult<Option<TradeSummary>>) -> Panel<TradeSummary> {
    match result {
        Ok(Some(summary)) if summary.has_trades() => Panel::Ready(summary),
        Ok(_) => Panel::Empty,
        Err(e) => failed_panel("metrics", e),
    }
}

fn rows_panel<T>(panel: &str, result: RepositoryResult<Vec<T>>) -> Panel<Vec<T>> {
    match result {
        Ok(rows) => Panel::from_rows(rows),
        Err(e) => failed_panel(panel, e),
    }
}

fn failed_panel<T>(panel: &str, error: DashboardError) -> Panel<T> {
    tracing::error!(panel, error = %error, "Panel query failed");
    Panel::failed(error.to_string())
}
