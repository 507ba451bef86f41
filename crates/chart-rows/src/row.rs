// File: crates/chart-rows/src/row.rs
// Summary: Plot rows produced from data items: value-bearing rows, whitespace rows, and the classifier.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::{Color, CustomValues};
use crate::time::{OriginalTime, TimePoint, TimePointIndex};

/// Value tuple in open, high, low, close order.
/// Single value kinds repeat the same value in all four slots.
pub type PlotRowValue = [f64; 4];

pub const PLOT_ROW_VALUE_OPEN: usize = 0;
pub const PLOT_ROW_VALUE_HIGH: usize = 1;
pub const PLOT_ROW_VALUE_LOW: usize = 2;
pub const PLOT_ROW_VALUE_CLOSE: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoredLineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_fill_color1: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_fill_color2: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color1: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color2: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wick_color: Option<Color>,
}

/// Abstract rows keep every item field except time and color in `data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub data: Map<String, Value>,
}

/// Kind-specific part of a value-bearing row. Serialized flat into the row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlotRowStyle {
    ColoredLine(ColoredLineStyle),
    Area(AreaStyle),
    Baseline(BaselineStyle),
    Bar(BarStyle),
    Candlestick(CandlestickStyle),
    Abstract(AbstractStyle),
}

impl PlotRowStyle {
    /// Per-point primary color, for kinds that have one.
    pub fn color(&self) -> Option<&Color> {
        match self {
            PlotRowStyle::ColoredLine(s) => s.color.as_ref(),
            PlotRowStyle::Bar(s) => s.color.as_ref(),
            PlotRowStyle::Candlestick(s) => s.color.as_ref(),
            PlotRowStyle::Abstract(s) => s.color.as_ref(),
            PlotRowStyle::Area(_) | PlotRowStyle::Baseline(_) => None,
        }
    }
}

/// Row carrying a value tuple.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPlotRow {
    pub index: TimePointIndex,
    pub time: TimePoint,
    pub original_time: OriginalTime,
    pub value: PlotRowValue,
    #[serde(flatten)]
    pub style: PlotRowStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

/// Placeholder row: occupies a time slot, takes no part in value scaling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitespacePlotRow {
    pub index: TimePointIndex,
    pub time: TimePoint,
    pub original_time: OriginalTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlotRow {
    Series(SeriesPlotRow),
    Whitespace(WhitespacePlotRow),
}

impl PlotRow {
    pub fn index(&self) -> TimePointIndex {
        match self {
            PlotRow::Series(r) => r.index,
            PlotRow::Whitespace(r) => r.index,
        }
    }

    pub fn time(&self) -> TimePoint {
        match self {
            PlotRow::Series(r) => r.time,
            PlotRow::Whitespace(r) => r.time,
        }
    }

    pub fn original_time(&self) -> &OriginalTime {
        match self {
            PlotRow::Series(r) => &r.original_time,
            PlotRow::Whitespace(r) => &r.original_time,
        }
    }

    pub fn value(&self) -> Option<&PlotRowValue> {
        match self {
            PlotRow::Series(r) => Some(&r.value),
            PlotRow::Whitespace(_) => None,
        }
    }

    pub fn style(&self) -> Option<&PlotRowStyle> {
        match self {
            PlotRow::Series(r) => Some(&r.style),
            PlotRow::Whitespace(_) => None,
        }
    }

    pub fn custom_values(&self) -> Option<&CustomValues> {
        match self {
            PlotRow::Series(r) => r.custom_values.as_ref(),
            PlotRow::Whitespace(r) => r.custom_values.as_ref(),
        }
    }

    pub(crate) fn set_custom_values(&mut self, values: CustomValues) {
        match self {
            PlotRow::Series(r) => r.custom_values = Some(values),
            PlotRow::Whitespace(r) => r.custom_values = Some(values),
        }
    }

    pub fn as_series(&self) -> Option<&SeriesPlotRow> {
        match self {
            PlotRow::Series(r) => Some(r),
            PlotRow::Whitespace(_) => None,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        !is_series_plot_row(self)
    }
}

/// True when the row carries a value and so takes part in value scaling.
pub fn is_series_plot_row(row: &PlotRow) -> bool {
    row.value().is_some()
}
