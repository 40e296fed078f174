// Server-rendered dashboard page
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::panel::Panel;
use crate::domain::session::{RefreshInterval, SessionState, MAX_REFRESH_SECS, MIN_REFRESH_SECS};
use crate::domain::trade::{RecentTrade, TradeSummary};
use crate::infrastructure::config::PanelSettings;
use crate::presentation::charts::{sector_bar_chart, sector_line_chart, top_stocks_pie_chart};
use crate::presentation::format::{
    escape_html, format_count, format_dollars, format_price, window_phrase, window_short,
};
use std::fmt::Display;
use serde_json::{Map, Value};

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

/// Sidebar settings and the reload that continues the refresh cycle.
#[derive(Debug, Clone, Copy)]
pub struct PageControls {
    pub interval: RefreshInterval,
    pub auto_refresh: bool,
    pub next_cycle: Option<(RefreshInterval, SessionState)>,
}

impl PageControls {
    pub fn reload_url(&self) -> Option<(u64, String)> {
        self.next_cycle.map(|(interval, session)| {
            (
                interval.secs(),
                format!(
                    "/?interval={}&auto=on&cycle={}",
                    interval.secs(),
                    session.refresh_count
                ),
            )
        })
    }
}

pub fn render_page(snapshot: &DashboardSnapshot, controls: &PageControls, panels: &PanelSettings) -> String {
    let reload = controls
        .reload_url()
        .map(|(secs, url)| {
            format!(r#"<meta http-equiv="refresh" content="{secs};url={}">"#, escape_html(&url))
        })
        .unwrap_or_default();

    let mut charts = Map::new();
    if let Some(points) = snapshot.sector_series.data() {
        charts.insert("sector-line".into(), sector_line_chart(points, panels.series_window_minutes));
    }
    if let Some(counts) = snapshot.sector_trades.data() {
        charts.insert("sector-bar".into(), sector_bar_chart(counts));
    }
    if let Some(stocks) = snapshot.top_stocks.data() {
        charts.insert("top-stocks-pie".into(), top_stocks_pie_chart(stocks, panels.top_stocks_limit));
    }
    // JSON inside <script> must not be able to close the tag.
    let charts_json = Value::Object(charts).to_string().replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {reload}
    <title>Stock Trading Dashboard</title>
    <script src="{CHART_JS}"></script>
    <style>{css}</style>
</head>
<body>
    <aside class="sidebar">
        {sidebar}
    </aside>
    <main class="content">
        <h1>📈 Real-Time Stock Trading Dashboard</h1>
        {metrics}
        <h3>💰 Sector Trading Volume Over Time</h3>
        {line}
        <div class="columns">
            <section>
                <h3>📊 Trade Count by Sector</h3>
                {bar}
            </section>
            <section>
                <h3>🏆 Top Traded Stocks</h3>
                {pie}
            </section>
        </div>
        <h3>📋 Recent Trades</h3>
        {table}
        <footer>Refresh #{count} &middot; updated {updated}</footer>
    </main>
    <script>
        const charts = {charts_json};
        for (const [id, config] of Object.entries(charts)) {{
            const canvas = document.getElementById(id);
            if (canvas && window.Chart) {{ new Chart(canvas, config); }}
        }}
    </script>
</body>
</html>"#,
        css = CSS,
        sidebar = render_sidebar(controls, snapshot.refresh_count),
        metrics = render_metrics(&snapshot.metrics, panels.metrics_window_minutes),
        line = render_chart_panel(&snapshot.sector_series, "sector-line", "tall", panels.series_window_minutes),
        bar = render_chart_panel(&snapshot.sector_trades, "sector-bar", "square", panels.series_window_minutes),
        pie = render_chart_panel(&snapshot.top_stocks, "top-stocks-pie", "square", panels.series_window_minutes),
        table = render_recent_trades(&snapshot.recent_trades),
        count = snapshot.refresh_count,
        updated = snapshot.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn render_sidebar(controls: &PageControls, refresh_count: u64) -> String {
    let (on, off) = if controls.auto_refresh {
        (" selected", "")
    } else {
        ("", " selected")
    };
    format!(
        r#"<h2>Settings</h2>
        <form method="get" action="/">
            <label for="interval">Refresh Rate (seconds)</label>
            <input id="interval" name="interval" type="range" min="{MIN_REFRESH_SECS}" max="{MAX_REFRESH_SECS}" value="{interval}" oninput="this.nextElementSibling.value = this.value">
            <output>{interval}</output>
            <label for="auto">Auto Refresh</label>
            <select id="auto" name="auto">
                <option value="on"{on}>On</option>
                <option value="off"{off}>Off</option>
            </select>
            <input type="hidden" name="cycle" value="{refresh_count}">
            <button type="submit">Apply</button>
        </form>"#,
        interval = controls.interval.secs(),
    )
}

fn render_alert(message: &str) -> String {
    format!(r#"<div class="alert error">{}</div>"#, escape_html(message))
}

fn render_metrics(panel: &Panel<TradeSummary>, window_minutes: i32) -> String {
    match panel {
        Panel::Ready(summary) => {
            let window = window_short(window_minutes);
            let cards = [
                (format!("Total Trades ({window})"), format_count(summary.total_trades)),
                (format!("Total Value ({window})"), format_dollars(summary.total_value.unwrap_or(0.0))),
                ("Avg Price".to_string(), format_price(summary.avg_price.unwrap_or(0.0))),
                ("Active Sectors".to_string(), format_count(summary.active_sectors)),
            ];
            let cards: String = cards
                .iter()
                .map(|(label, value)| {
                    format!(
                        r#"<div class="metric"><div class="label">{label}</div><div class="value">{value}</div></div>"#
                    )
                })
                .collect();
            format!(r#"<div class="metrics">{cards}</div>"#)
        }
        Panel::Empty => no_recent_trades(window_minutes),
        Panel::Failed { message } => format!("{}{}", render_alert(message), no_recent_trades(window_minutes)),
    }
}

fn no_recent_trades(window_minutes: i32) -> String {
    format!(
        r#"<div class="alert warning">No data found in the last {}.</div>"#,
        window_phrase(window_minutes)
    )
}

fn render_chart_panel<T>(panel: &Panel<T>, id: &str, shape: &str, window_minutes: i32) -> String {
    match panel {
        Panel::Ready(_) => format!(r#"<div class="chart {shape}"><canvas id="{id}"></canvas></div>"#),
        Panel::Empty => format!(r#"<p class="muted">No data in the last {}.</p>"#, window_phrase(window_minutes)),
        Panel::Failed { message } => render_alert(message),
    }
}

// NULL columns render as empty cells.
fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text_cell(value: &Option<String>) -> String {
    value.as_deref().map(escape_html).unwrap_or_default()
}

fn render_recent_trades(panel: &Panel<Vec<RecentTrade>>) -> String {
    let trades = match panel {
        Panel::Ready(trades) => trades,
        Panel::Empty => return r#"<p class="muted">No trades recorded yet.</p>"#.to_string(),
        Panel::Failed { message } => return render_alert(message),
    };

    let rows: String = trades
        .iter()
        .map(|t| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                cell(t.timestamp.map(|ts| ts.format("%Y-%m-%d %H:%M:%S"))),
                text_cell(&t.symbol),
                text_cell(&t.company),
                text_cell(&t.sector),
                cell(t.price.map(|p| format!("{p:.2}"))),
                cell(t.volume),
                cell(t.trade_value.map(|v| format!("{v:.2}"))),
            )
        })
        .collect();

    format!(
        r#"<table>
            <thead><tr><th>timestamp</th><th>symbol</th><th>company</th><th>sector</th><th>price</th><th>volume</th><th>trade_value</th></tr></thead>
            <tbody>{rows}</tbody>
        </table>"#
    )
}

const CSS: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; display: flex; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; color: #262730; background: #fff; }
    .sidebar { width: 260px; min-height: 100vh; padding: 24px; background: #f0f2f6; }
    .sidebar form { display: flex; flex-direction: column; gap: 8px; }
    .content { flex: 1; padding: 24px 48px; min-width: 0; }
    .metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin: 16px 0; }
    .metric .label { font-size: 14px; color: #555; }
    .metric .value { font-size: 32px; }
    .columns { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
    .chart.tall { height: 400px; }
    .chart.square { height: 360px; }
    .alert { padding: 12px 16px; border-radius: 6px; margin: 8px 0; }
    .alert.error { background: #ffe2e2; color: #7d1a1a; }
    .alert.warning { background: #fff6d6; color: #7a5b00; }
    .muted { color: #888; }
    table { width: 100%; border-collapse: collapse; font-size: 14px; }
    th, td { padding: 6px 10px; border-bottom: 1px solid #e6e6e6; text-align: left; }
    td.num { text-align: right; font-variant-numeric: tabular-nums; }
    footer { margin-top: 24px; font-size: 12px; color: #888; }
"#;
