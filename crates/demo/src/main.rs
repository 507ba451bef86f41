// File: crates/demo/src/main.rs
// Summary: Demo loads an OHLC CSV, resolves time/index per record and builds plot rows for one series kind.

use anyhow::{Context, Result};
use chart_rows::{
    plot_row_creator, AbstractData, AreaData, BarData, BaselineData, CandlestickData, LineData, OriginalTime,
    PlotRow, PlotRowValue, SeriesDataItem, SeriesKind, Time, TimePointIndex, WhitespaceData,
};
use chart_rows::row::{PLOT_ROW_VALUE_HIGH, PLOT_ROW_VALUE_LOW};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

const UP: &str = "#26a69a";
const DOWN: &str = "#ef5350";

/// One CSV record. `prices` is None when any of open/high/low/close is missing.
struct Record {
    time: Time,
    prices: Option<[f64; 4]>,
}

fn main() -> Result<()> {
    env_logger::init();

    // Usage: constellation-rows-demo [csv-path] [kind]
    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .unwrap_or_else(|| "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.csv".to_string());
    let kind = match args.next() {
        Some(name) => name.parse::<SeriesKind>()?,
        None => SeriesKind::Candlestick,
    };

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let records = load_ohlc_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} records", records.len());
    if records.is_empty() {
        anyhow::bail!("no records loaded, check headers/delimiter.");
    }

    let rows = build_rows(kind, records)?;
    let gaps = rows.iter().filter(|r| r.is_whitespace()).count();
    println!("Built {} {} rows ({} whitespace)", rows.len(), kind, gaps);

    if let Some((lo, hi)) = value_range(&rows) {
        println!("Value range: [{:.4}, {:.4}]", lo, hi);
    }

    for row in rows.iter().take(3) {
        println!("{}", serde_json::to_string_pretty(row)?);
    }
    Ok(())
}

fn build_rows(kind: SeriesKind, records: Vec<Record>) -> Result<Vec<PlotRow>> {
    let create = plot_row_creator(kind);
    let converter = |d: &AbstractData| -> PlotRowValue {
        let f = |k: &str| d.field_f64(k).unwrap_or(f64::NAN);
        [f("open"), f("high"), f("low"), f("close")]
    };

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.into_iter().enumerate() {
        let time = rec
            .time
            .to_time_point()
            .with_context(|| format!("record {i}: cannot resolve time {:?}", rec.time))?;
        let index = TimePointIndex(u32::try_from(i).context("too many records")?);
        let item = to_item(kind, rec.time.clone(), rec.prices);
        let row = create(time, index, &item, OriginalTime(rec.time), Some(&converter))
            .with_context(|| format!("record {i}: building {kind} row"))?;
        rows.push(row);
    }
    log::info!("normalized {} records as {}", rows.len(), kind);
    Ok(rows)
}

/// Shape a record for `kind`. Records without prices become whitespace.
fn to_item(kind: SeriesKind, time: Time, prices: Option<[f64; 4]>) -> SeriesDataItem {
    let Some([o, h, l, c]) = prices else {
        return SeriesDataItem::Whitespace(WhitespaceData { time, custom_values: None });
    };
    let dir = if c >= o { UP } else { DOWN };
    match kind {
        SeriesKind::Line => LineData { time, value: c, color: None, custom_values: None }.into(),
        // Histogram of close-open, colored by direction
        SeriesKind::Histogram => LineData { time, value: c - o, color: Some(dir.into()), custom_values: None }.into(),
        SeriesKind::Area => AreaData {
            time,
            value: c,
            line_color: None,
            top_color: None,
            bottom_color: None,
            custom_values: None,
        }
        .into(),
        SeriesKind::Baseline => BaselineData {
            time,
            value: c,
            top_line_color: None,
            bottom_line_color: None,
            top_fill_color1: None,
            top_fill_color2: None,
            bottom_fill_color1: None,
            bottom_fill_color2: None,
            custom_values: None,
        }
        .into(),
        SeriesKind::Bar => BarData { time, open: o, high: h, low: l, close: c, color: Some(dir.into()), custom_values: None }.into(),
        SeriesKind::Candlestick => CandlestickData {
            time,
            open: o,
            high: h,
            low: l,
            close: c,
            color: Some(dir.into()),
            border_color: None,
            wick_color: None,
            custom_values: None,
        }
        .into(),
        SeriesKind::Abstract => AbstractData::new(time)
            .with_field("open", o)
            .with_field("high", h)
            .with_field("low", l)
            .with_field("close", c)
            .into(),
    }
}

/// Min low / max high over value-bearing rows.
fn value_range(rows: &[PlotRow]) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for v in rows.iter().filter_map(PlotRow::value) {
        let (lo, hi) = range.unwrap_or((f64::INFINITY, f64::NEG_INFINITY));
        range = Some((lo.min(v[PLOT_ROW_VALUE_LOW]), hi.max(v[PLOT_ROW_VALUE_HIGH])));
    }
    range
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load Binance-like OHLC CSV into records.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        log::warn!("could not find one of open/high/low/close columns; rows will be whitespace");
    }

    let mut out = Vec::new();
    for (row_index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };

        // records without a usable time fall back to their position
        let time = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time)
            .unwrap_or(Time::Utc(row_index as i64));

        let prices = match (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            (Some(o), Some(h), Some(l), Some(c)) => Some([o, h, l, c]),
            _ => None,
        };
        out.push(Record { time, prices });
    }
    Ok(out)
}

fn parse_time(s: &str) -> Option<Time> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        if n > 10_i64.pow(12) {
            return Some(Time::Utc(n / 1000));
        }
        return Some(Time::Utc(n));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Time::Utc(dt.and_utc().timestamp()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(|_| Time::from(s))
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
