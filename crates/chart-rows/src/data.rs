// File: crates/chart-rows/src/data.rs
// Summary: Caller-supplied data items per series kind, plus structural JSON ingestion.
// Notes:
// - Field names follow the camelCase shape callers send (`customValues`, `topLineColor`, ...).
// - Style fields are `Option` so that "not given" never collapses into a default color.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlotRowError, Result};
use crate::series::SeriesKind;
use crate::time::Time;

/// CSS color string, passed through untouched.
pub type Color = String;

/// Opaque caller payload attached to a point.
pub type CustomValues = Map<String, Value>;

/// A time slot without a value. Extends the time axis, ignored by value scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitespaceData {
    pub time: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

/// Single value point for line and histogram series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineData {
    pub time: Time,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

/// Histogram points share the line point shape.
pub type HistogramData = LineData;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaData {
    pub time: Time,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineData {
    pub time: Time,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_line_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_line_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_fill_color1: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_fill_color2: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color1: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color2: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

/// OHLC bar point. Missing prices in JSON input become NaN rather than an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarData {
    pub time: Time,
    #[serde(default = "missing_price")]
    pub open: f64,
    #[serde(default = "missing_price")]
    pub high: f64,
    #[serde(default = "missing_price")]
    pub low: f64,
    #[serde(default = "missing_price")]
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickData {
    pub time: Time,
    #[serde(default = "missing_price")]
    pub open: f64,
    #[serde(default = "missing_price")]
    pub high: f64,
    #[serde(default = "missing_price")]
    pub low: f64,
    #[serde(default = "missing_price")]
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wick_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

/// Free-form point for abstract series. Anything besides time, color and
/// custom values lands in `fields` and is only interpreted by the converter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractData {
    pub time: Time,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn missing_price() -> f64 { f64::NAN }

impl AbstractData {
    pub fn new(time: impl Into<Time>) -> Self {
        Self { time: time.into(), color: None, custom_values: None, fields: Map::new() }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }
}

impl From<WhitespaceData> for AbstractData {
    fn from(w: WhitespaceData) -> Self {
        Self { time: w.time, color: None, custom_values: w.custom_values, fields: Map::new() }
    }
}

/// One caller data point, already shaped for a series kind or marked as whitespace.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesDataItem {
    Whitespace(WhitespaceData),
    Line(LineData),
    Area(AreaData),
    Baseline(BaselineData),
    Bar(BarData),
    Candlestick(CandlestickData),
    Abstract(AbstractData),
}

impl SeriesDataItem {
    pub fn time(&self) -> &Time {
        match self {
            SeriesDataItem::Whitespace(d) => &d.time,
            SeriesDataItem::Line(d) => &d.time,
            SeriesDataItem::Area(d) => &d.time,
            SeriesDataItem::Baseline(d) => &d.time,
            SeriesDataItem::Bar(d) => &d.time,
            SeriesDataItem::Candlestick(d) => &d.time,
            SeriesDataItem::Abstract(d) => &d.time,
        }
    }

    pub fn custom_values(&self) -> Option<&CustomValues> {
        match self {
            SeriesDataItem::Whitespace(d) => d.custom_values.as_ref(),
            SeriesDataItem::Line(d) => d.custom_values.as_ref(),
            SeriesDataItem::Area(d) => d.custom_values.as_ref(),
            SeriesDataItem::Baseline(d) => d.custom_values.as_ref(),
            SeriesDataItem::Bar(d) => d.custom_values.as_ref(),
            SeriesDataItem::Candlestick(d) => d.custom_values.as_ref(),
            SeriesDataItem::Abstract(d) => d.custom_values.as_ref(),
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, SeriesDataItem::Whitespace(_))
    }

    /// Short shape name used in error messages and logs.
    pub const fn shape_name(&self) -> &'static str {
        match self {
            SeriesDataItem::Whitespace(_) => "whitespace",
            SeriesDataItem::Line(_) => "line",
            SeriesDataItem::Area(_) => "area",
            SeriesDataItem::Baseline(_) => "baseline",
            SeriesDataItem::Bar(_) => "bar",
            SeriesDataItem::Candlestick(_) => "candlestick",
            SeriesDataItem::Abstract(_) => "abstract",
        }
    }

    /// Shape a raw JSON object for `kind`. Objects without the kind's
    /// value-defining fields become whitespace (see [`is_whitespace_json`]).
    pub fn from_json(kind: SeriesKind, value: Value) -> Result<Self> {
        let invalid = |source: serde_json::Error| PlotRowError::InvalidItem { kind, source };
        if is_whitespace_json(kind, &value) {
            return serde_json::from_value(value).map(SeriesDataItem::Whitespace).map_err(invalid);
        }
        let item = match kind {
            SeriesKind::Line | SeriesKind::Histogram => serde_json::from_value(value).map(SeriesDataItem::Line),
            SeriesKind::Area => serde_json::from_value(value).map(SeriesDataItem::Area),
            SeriesKind::Baseline => serde_json::from_value(value).map(SeriesDataItem::Baseline),
            SeriesKind::Bar => serde_json::from_value(value).map(SeriesDataItem::Bar),
            SeriesKind::Candlestick => serde_json::from_value(value).map(SeriesDataItem::Candlestick),
            SeriesKind::Abstract => serde_json::from_value(value).map(SeriesDataItem::Abstract),
        };
        item.map_err(invalid)
    }
}

/// Structural whitespace test for raw JSON input.
///
/// Single value kinds (line, histogram, area, baseline) are whitespace when
/// `value` is absent or null; bar and candlestick when none of
/// `open`/`high`/`low`/`close` is present. Abstract input is never
/// whitespace, its converter decides what "no value" means.
pub fn is_whitespace_json(kind: SeriesKind, value: &Value) -> bool {
    let has = |field: &str| value.get(field).is_some_and(|v| !v.is_null());
    match kind {
        SeriesKind::Line | SeriesKind::Histogram | SeriesKind::Area | SeriesKind::Baseline => !has("value"),
        SeriesKind::Bar | SeriesKind::Candlestick => !["open", "high", "low", "close"].into_iter().any(has),
        SeriesKind::Abstract => false,
    }
}

impl From<WhitespaceData> for SeriesDataItem {
    fn from(d: WhitespaceData) -> Self { SeriesDataItem::Whitespace(d) }
}

impl From<LineData> for SeriesDataItem {
    fn from(d: LineData) -> Self { SeriesDataItem::Line(d) }
}

impl From<AreaData> for SeriesDataItem {
    fn from(d: AreaData) -> Self { SeriesDataItem::Area(d) }
}

impl From<BaselineData> for SeriesDataItem {
    fn from(d: BaselineData) -> Self { SeriesDataItem::Baseline(d) }
}

impl From<BarData> for SeriesDataItem {
    fn from(d: BarData) -> Self { SeriesDataItem::Bar(d) }
}

impl From<CandlestickData> for SeriesDataItem {
    fn from(d: CandlestickData) -> Self { SeriesDataItem::Candlestick(d) }
}

impl From<AbstractData> for SeriesDataItem {
    fn from(d: AbstractData) -> Self { SeriesDataItem::Abstract(d) }
}
