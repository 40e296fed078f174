// Chart.js configurations built from panel rows
use crate::domain::trade::{SectorPoint, SectorTradeCount, TopStock};
use crate::presentation::format::window_title;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};

const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Points pivoted into one series per sector over a shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSeries {
    pub times: Vec<DateTime<Utc>>,
    pub sectors: Vec<(String, Vec<Option<f64>>)>,
}

impl SectorSeries {
    pub fn from_points(points: &[SectorPoint]) -> Self {
        let times: Vec<DateTime<Utc>> = points
            .iter()
            .map(|p| p.window_start)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut by_sector: BTreeMap<&str, Vec<Option<f64>>> = BTreeMap::new();
        for point in points {
            let values = by_sector
                .entry(label(&point.sector))
                .or_insert_with(|| vec![None; times.len()]);
            if let Ok(slot) = times.binary_search(&point.window_start) {
                values[slot] = point.total_value;
            }
        }

        let sectors = by_sector
            .into_iter()
            .map(|(sector, values)| (sector.to_string(), values))
            .collect();

        Self { times, sectors }
    }
}

// NULL sectors and symbols chart under a blank label.
fn label(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

pub fn sector_line_chart(points: &[SectorPoint], window_minutes: i32) -> Value {
    let series = SectorSeries::from_points(points);
    let labels: Vec<String> = series
        .times
        .iter()
        .map(|t| t.format("%H:%M").to_string())
        .collect();
    let datasets: Vec<Value> = series
        .sectors
        .iter()
        .enumerate()
        .map(|(i, (sector, values))| {
            json!({
                "label": sector,
                "data": values,
                "borderColor": color(i),
                "backgroundColor": color(i),
                "spanGaps": true,
                "tension": 0.2
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": { "labels": labels, "datasets": datasets },
        "options": {
            "maintainAspectRatio": false,
            "plugins": { "title": { "display": true, "text": format!("Trading Value by Sector (Last {})", window_title(window_minutes)) } },
            "scales": {
                "x": { "title": { "display": true, "text": "Time" } },
                "y": { "title": { "display": true, "text": "Total Value ($)" } }
            }
        }
    })
}

pub fn sector_bar_chart(counts: &[SectorTradeCount]) -> Value {
    let labels: Vec<&str> = counts.iter().map(|c| label(&c.sector)).collect();
    let data: Vec<i64> = counts.iter().map(|c| c.total_trades).collect();
    let colors: Vec<&str> = (0..counts.len()).map(color).collect();

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{ "label": "total_trades", "data": data, "backgroundColor": colors }]
        },
        "options": {
            "plugins": {
                "title": { "display": true, "text": "Total Trades by Sector" },
                "legend": { "display": false }
            },
            "scales": {
                "x": { "title": { "display": true, "text": "sector" } },
                "y": { "title": { "display": true, "text": "total_trades" } }
            }
        }
    })
}

pub fn top_stocks_pie_chart(stocks: &[TopStock], limit: i64) -> Value {
    let labels: Vec<&str> = stocks.iter().map(|s| label(&s.symbol)).collect();
    let data: Vec<Option<f64>> = stocks.iter().map(|s| s.total_value).collect();
    let colors: Vec<&str> = (0..stocks.len()).map(color).collect();

    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{ "data": data, "backgroundColor": colors }]
        },
        "options": {
            "cutout": "40%",
            "plugins": { "title": { "display": true, "text": format!("Top {limit} Stocks by Value") } }
        }
    })
}
