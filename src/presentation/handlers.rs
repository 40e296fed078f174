// HTTP request handlers
use crate::application::refresh_driver::RefreshDriver;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::session::{RefreshInterval, RefreshMode, SessionState};
use crate::infrastructure::config::RefreshSettings;
use crate::presentation::app_state::AppState;
use crate::presentation::page::{render_page, PageControls};
use axum::{
    extract::{Query, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        Html,
    },
    Json,
};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRefresh {
    On,
    Off,
}

/// Sidebar controls plus the session counter carried between reloads.
#[derive(Debug, Default, Deserialize)]
pub struct RefreshQuery {
    pub interval: Option<u64>,
    pub auto: Option<AutoRefresh>,
    pub cycle: Option<u64>,
}

impl RefreshQuery {
    fn interval(&self, defaults: &RefreshSettings) -> RefreshInterval {
        self.interval
            .map(RefreshInterval::from_secs)
            .unwrap_or_else(|| defaults.interval())
    }

    fn auto_refresh(&self, defaults: &RefreshSettings) -> bool {
        self.auto
            .map(|auto| auto == AutoRefresh::On)
            .unwrap_or(defaults.auto_refresh)
    }

    fn session(&self) -> SessionState {
        SessionState::new(self.cycle.unwrap_or(0))
    }

    fn driver(&self, state: &AppState) -> RefreshDriver {
        let mode = RefreshMode::new(
            self.auto_refresh(&state.refresh),
            self.interval(&state.refresh),
        );
        RefreshDriver::new(state.dashboard_service.clone(), mode)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the whole page from fresh queries; auto-refresh reloads it with
/// the counter advanced by one.
pub async fn dashboard_page(
    Query(query): Query<RefreshQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let session = query.session();
    let driver = query.driver(&state);
    let snapshot = state.dashboard_service.snapshot(session).await;

    let controls = PageControls {
        interval: query.interval(&state.refresh),
        auto_refresh: query.auto_refresh(&state.refresh),
        next_cycle: driver.next_cycle(session),
    };
    Html(render_page(&snapshot, &controls, state.dashboard_service.panels()))
}

/// Same snapshot the page renders, as JSON
pub async fn dashboard_snapshot(
    Query(query): Query<RefreshQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<DashboardSnapshot> {
    Json(state.dashboard_service.snapshot(query.session()).await)
}

/// One `snapshot` event per refresh cycle until the client disconnects
pub async fn stream_dashboard(
    Query(query): Query<RefreshQuery>,
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let driver = query.driver(&state);
    tracing::info!(mode = ?driver.mode(), "Dashboard stream opened");

    let events = driver
        .snapshots(query.session())
        .map(|snapshot| Event::default().event("snapshot").json_data(&snapshot));

    Sse::new(events).keep_alive(KeepAlive::default())
}
