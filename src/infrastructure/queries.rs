// SQL text for the dashboard panels.
//
// Column aliases are the field names of the row types in `domain::trade`;
// numeric columns are cast so the row types do not depend on how the
// streaming job declared them. Windows and limits are bind parameters.
//
// Timestamp columns are read through `::timestamptz`. The pool pins the
// session TimeZone to UTC (`PostgresRepository::session_options`), so a
// naive `timestamp` comes back exactly as stored.

pub const TRADE_SUMMARY: &str = r#"
SELECT
    COUNT(*) AS total_trades,
    SUM(trade_value)::float8 AS total_value,
    AVG(price)::float8 AS avg_price,
    COUNT(DISTINCT sector) AS active_sectors
FROM enriched_trades
WHERE event_timestamp > NOW() - make_interval(mins => $1)
"#;

pub const SECTOR_SERIES: &str = r#"
SELECT DISTINCT ON (window_start, sector)
    window_start::timestamptz AS window_start,
    sector,
    total_value::float8 AS total_value,
    trade_count::bigint AS trade_count
FROM sector_metrics
WHERE window_start > NOW() - make_interval(mins => $1)
ORDER BY window_start, sector, ingestion_time DESC
"#;

pub const SECTOR_TRADE_COUNTS: &str = r#"
SELECT
    sector,
    COALESCE(SUM(trade_count), 0)::bigint AS total_trades
FROM sector_metrics
WHERE window_start > NOW() - make_interval(mins => $1)
GROUP BY sector
ORDER BY total_trades DESC, sector
"#;

pub const TOP_STOCKS: &str = r#"
SELECT
    symbol,
    company,
    sector,
    COUNT(*) AS trade_count,
    SUM(trade_value)::float8 AS total_value
FROM enriched_trades
WHERE event_timestamp > NOW() - make_interval(mins => $1)
GROUP BY symbol, company, sector
ORDER BY total_value DESC NULLS LAST, symbol
LIMIT $2
"#;

pub const RECENT_TRADES: &str = r#"
SELECT
    event_timestamp::timestamptz AS timestamp,
    symbol,
    company,
    sector,
    price::float8 AS price,
    volume::bigint AS volume,
    trade_value::float8 AS trade_value
FROM enriched_trades
ORDER BY event_timestamp DESC NULLS LAST
LIMIT $1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(query: &str) -> String {
        query.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_queries_bind_windows_instead_of_interpolating() {
        for query in [TRADE_SUMMARY, SECTOR_SERIES, SECTOR_TRADE_COUNTS, TOP_STOCKS] {
            assert!(query.contains("make_interval(mins => $1)"), "{query}");
            assert!(!query.contains("INTERVAL '"), "{query}");
        }
        assert!(TOP_STOCKS.contains("LIMIT $2"));
        assert!(RECENT_TRADES.contains("LIMIT $1"));
    }

    #[test]
    fn test_sector_series_keeps_latest_ingestion_per_window_and_sector() {
        let query = normalized(SECTOR_SERIES);
        assert!(query.starts_with("SELECT DISTINCT ON (window_start, sector)"));
        assert!(query.ends_with("ORDER BY window_start, sector, ingestion_time DESC"));
    }

    #[test]
    fn test_rankings_are_deterministic() {
        assert!(normalized(TOP_STOCKS).contains("ORDER BY total_value DESC NULLS LAST, symbol"));
        assert!(normalized(SECTOR_TRADE_COUNTS).contains("ORDER BY total_trades DESC, sector"));
        assert!(normalized(RECENT_TRADES).contains("ORDER BY event_timestamp DESC NULLS LAST"));
    }

    #[test]
    fn test_column_aliases_match_row_fields() {
        let summary = normalized(TRADE_SUMMARY);
        for column in ["total_trades", "total_value", "avg_price", "active_sectors"] {
            assert!(summary.contains(&format!("AS {column}")), "{column}");
        }

        assert!(normalized(SECTOR_TRADE_COUNTS).contains("COALESCE(SUM(trade_count), 0)::bigint AS total_trades"));

        let recent = normalized(RECENT_TRADES);
        for column in ["timestamp", "price", "volume", "trade_value"] {
            assert!(recent.contains(&format!("AS {column}")), "{column}");
        }
    }
}
