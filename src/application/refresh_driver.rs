// Refresh driver - re-runs every panel after a fixed delay
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::session::{RefreshInterval, RefreshMode, SessionState};
use futures::Stream;

#[derive(Clone)]
pub struct RefreshDriver {
    service: DashboardService,
    mode: RefreshMode,
}

impl RefreshDriver {
    pub fn new(service: DashboardService, mode: RefreshMode) -> Self {
        Self { service, mode }
    }

    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    /// Delay and session state of the cycle after `session`, if cycling.
    pub fn next_cycle(&self, session: SessionState) -> Option<(RefreshInterval, SessionState)> {
        self.mode
            .interval()
            .map(|interval| (interval, session.advanced()))
    }

    /// Render one snapshot now, then one per interval while cycling.
    ///
    /// The delay is exact: no back-off, no jitter. An idle driver yields a
    /// single snapshot and ends. Dropping the stream stops the cycle.
    pub fn snapshots(self, session: SessionState) -> impl Stream<Item = DashboardSnapshot> {
        async_stream::stream! {
            let mut session = session;
            yield self.service.snapshot(session).await;

            while let Some((interval, next)) = self.next_cycle(session) {
                tokio::time::sleep(interval.as_duration()).await;
                session = next;
                tracing::debug!(refresh_count = session.refresh_count, "Refresh cycle");
                yield self.service.snapshot(session).await;
            }
        }
    }
}
