// File: crates/chart-rows/src/builders.rs
// Summary: Per-kind row builders. Each assumes its item already carries a value.

use serde_json::Value;

use crate::data::{AbstractData, AreaData, BarData, BaselineData, CandlestickData, LineData, SeriesDataItem};
use crate::row::{
    AbstractStyle, AreaStyle, BarStyle, BaselineStyle, CandlestickStyle, ColoredLineStyle, PlotRowStyle,
    PlotRowValue, SeriesPlotRow,
};
use crate::time::{OriginalTime, TimePoint, TimePointIndex};

/// Builds a value-bearing row from the item shape of one series kind.
pub(crate) trait PlotRowBuilder {
    type Item;

    /// Shape name reported when an item of another kind is handed in.
    const SHAPE: &'static str;

    fn data(item: &SeriesDataItem) -> Option<&Self::Item>;

    fn build(time: TimePoint, index: TimePointIndex, item: &Self::Item, original_time: OriginalTime) -> SeriesPlotRow;
}

/// Shared by line and histogram series.
pub(crate) struct ColoredLineBuilder;
pub(crate) struct AreaBuilder;
pub(crate) struct BaselineBuilder;
pub(crate) struct BarBuilder;
pub(crate) struct CandlestickBuilder;

#[inline]
fn single(v: f64) -> PlotRowValue {
    [v, v, v, v]
}

impl PlotRowBuilder for ColoredLineBuilder {
    type Item = LineData;
    const SHAPE: &'static str = "line";

    fn data(item: &SeriesDataItem) -> Option<&LineData> {
        match item {
            SeriesDataItem::Line(d) => Some(d),
            _ => None,
        }
    }

    fn build(time: TimePoint, index: TimePointIndex, item: &LineData, original_time: OriginalTime) -> SeriesPlotRow {
        SeriesPlotRow {
            index,
            time,
            original_time,
            value: single(item.value),
            style: PlotRowStyle::ColoredLine(ColoredLineStyle { color: item.color.clone() }),
            custom_values: None,
        }
    }
}

impl PlotRowBuilder for AreaBuilder {
    type Item = AreaData;
    const SHAPE: &'static str = "area";

    fn data(item: &SeriesDataItem) -> Option<&AreaData> {
        match item {
            SeriesDataItem::Area(d) => Some(d),
            _ => None,
        }
    }

    fn build(time: TimePoint, index: TimePointIndex, item: &AreaData, original_time: OriginalTime) -> SeriesPlotRow {
        let style = AreaStyle {
            line_color: item.line_color.clone(),
            top_color: item.top_color.clone(),
            bottom_color: item.bottom_color.clone(),
        };
        SeriesPlotRow {
            index,
            time,
            original_time,
            value: single(item.value),
            style: PlotRowStyle::Area(style),
            custom_values: None,
        }
    }
}

impl PlotRowBuilder for BaselineBuilder {
    type Item = BaselineData;
    const SHAPE: &'static str = "baseline";

    fn data(item: &SeriesDataItem) -> Option<&BaselineData> {
        match item {
            SeriesDataItem::Baseline(d) => Some(d),
            _ => None,
        }
    }

    fn build(time: TimePoint, index: TimePointIndex, item: &BaselineData, original_time: OriginalTime) -> SeriesPlotRow {
        let style = BaselineStyle {
            top_line_color: item.top_line_color.clone(),
            bottom_line_color: item.bottom_line_color.clone(),
            top_fill_color1: item.top_fill_color1.clone(),
            top_fill_color2: item.top_fill_color2.clone(),
            bottom_fill_color1: item.bottom_fill_color1.clone(),
            bottom_fill_color2: item.bottom_fill_color2.clone(),
        };
        SeriesPlotRow {
            index,
            time,
            original_time,
            value: single(item.value),
            style: PlotRowStyle::Baseline(style),
            custom_values: None,
        }
    }
}

impl PlotRowBuilder for BarBuilder {
    type Item = BarData;
    const SHAPE: &'static str = "bar";

    fn data(item: &SeriesDataItem) -> Option<&BarData> {
        match item {
            SeriesDataItem::Bar(d) => Some(d),
            _ => None,
        }
    }

    fn build(time: TimePoint, index: TimePointIndex, item: &BarData, original_time: OriginalTime) -> SeriesPlotRow {
        SeriesPlotRow {
            index,
            time,
            original_time,
            value: [item.open, item.high, item.low, item.close],
            style: PlotRowStyle::Bar(BarStyle { color: item.color.clone() }),
            custom_values: None,
        }
    }
}

impl PlotRowBuilder for CandlestickBuilder {
    type Item = CandlestickData;
    const SHAPE: &'static str = "candlestick";

    fn data(item: &SeriesDataItem) -> Option<&CandlestickData> {
        match item {
            SeriesDataItem::Candlestick(d) => Some(d),
            _ => None,
        }
    }

    fn build(time: TimePoint, index: TimePointIndex, item: &CandlestickData, original_time: OriginalTime) -> SeriesPlotRow {
        let style = CandlestickStyle {
            color: item.color.clone(),
            border_color: item.border_color.clone(),
            wick_color: item.wick_color.clone(),
        };
        SeriesPlotRow {
            index,
            time,
            original_time,
            value: [item.open, item.high, item.low, item.close],
            style: PlotRowStyle::Candlestick(style),
            custom_values: None,
        }
    }
}

/// Abstract rows: the converter supplies the value (called once), every
/// field except time and color goes to the data bag.
pub(crate) fn abstract_row(
    time: TimePoint,
    index: TimePointIndex,
    item: &AbstractData,
    original_time: OriginalTime,
    converter: &dyn Fn(&AbstractData) -> PlotRowValue,
) -> SeriesPlotRow {
    let value = converter(item);
    let mut data = item.fields.clone();
    if let Some(custom) = &item.custom_values {
        data.insert("customValues".to_string(), Value::Object(custom.clone()));
    }
    SeriesPlotRow {
        index,
        time,
        original_time,
        value,
        style: PlotRowStyle::Abstract(AbstractStyle { color: item.color.clone(), data }),
        custom_values: None,
    }
}
