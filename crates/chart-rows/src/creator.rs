// File: crates/chart-rows/src/creator.rs
// Summary: Row creator lookup by series kind: whitespace adapter, custom values wrapper, dispatch.

use crate::builders::{
    abstract_row, AreaBuilder, BarBuilder, BaselineBuilder, CandlestickBuilder, ColoredLineBuilder, PlotRowBuilder,
};
use crate::data::{AbstractData, SeriesDataItem};
use crate::error::{PlotRowError, Result};
use crate::row::{PlotRow, PlotRowValue, WhitespacePlotRow};
use crate::series::SeriesKind;
use crate::time::{OriginalTime, TimePoint, TimePointIndex};

/// Builds one row from an item whose time and index are already resolved.
///
/// The converter is only read by abstract series; every other kind ignores it.
pub type PlotRowCreator = fn(
    TimePoint,
    TimePointIndex,
    &SeriesDataItem,
    OriginalTime,
    Option<&dyn Fn(&AbstractData) -> PlotRowValue>,
) -> Result<PlotRow>;

/// Creator for `kind`. Line and histogram get the same function.
pub fn plot_row_creator(kind: SeriesKind) -> PlotRowCreator {
    match kind {
        SeriesKind::Line | SeriesKind::Histogram => create_whitespace_adapted::<ColoredLineBuilder>,
        SeriesKind::Area => create_whitespace_adapted::<AreaBuilder>,
        SeriesKind::Baseline => create_whitespace_adapted::<BaselineBuilder>,
        SeriesKind::Bar => create_whitespace_adapted::<BarBuilder>,
        SeriesKind::Candlestick => create_whitespace_adapted::<CandlestickBuilder>,
        SeriesKind::Abstract => create_abstract,
    }
}

/// Look up the creator for `kind` and run it on one item.
pub fn create_plot_row(
    kind: SeriesKind,
    time: TimePoint,
    index: TimePointIndex,
    item: &SeriesDataItem,
    original_time: OriginalTime,
    converter: Option<&dyn Fn(&AbstractData) -> PlotRowValue>,
) -> Result<PlotRow> {
    log::trace!("creating {kind} row at index {} from {} item", index.0, item.shape_name());
    plot_row_creator(kind)(time, index, item, original_time, converter)
}

/// Single entry point for both placeholder and value-bearing input of one kind.
fn create_whitespace_adapted<B: PlotRowBuilder>(
    time: TimePoint,
    index: TimePointIndex,
    item: &SeriesDataItem,
    original_time: OriginalTime,
    _converter: Option<&dyn Fn(&AbstractData) -> PlotRowValue>,
) -> Result<PlotRow> {
    let row = if item.is_whitespace() {
        log::debug!("whitespace row at index {}", index.0);
        PlotRow::Whitespace(WhitespacePlotRow { index, time, original_time, custom_values: None })
    } else {
        let data = B::data(item).ok_or_else(|| {
            log::debug!("rejecting {} item for {} builder", item.shape_name(), B::SHAPE);
            PlotRowError::UnexpectedItem { expected: B::SHAPE, found: item.shape_name() }
        })?;
        PlotRow::Series(B::build(time, index, data, original_time))
    };
    Ok(wrap_custom_values(row, item))
}

/// Abstract series are never whitespace-adapted. A whitespace item is handed to
/// the converter as abstract data without extra fields.
fn create_abstract(
    time: TimePoint,
    index: TimePointIndex,
    item: &SeriesDataItem,
    original_time: OriginalTime,
    converter: Option<&dyn Fn(&AbstractData) -> PlotRowValue>,
) -> Result<PlotRow> {
    let converter = converter.ok_or(PlotRowError::MissingConverter)?;
    let row = match item {
        SeriesDataItem::Abstract(data) => abstract_row(time, index, data, original_time, converter),
        SeriesDataItem::Whitespace(w) => {
            let data = AbstractData::from(w.clone());
            abstract_row(time, index, &data, original_time, converter)
        }
        other => {
            log::debug!("rejecting {} item for abstract builder", other.shape_name());
            return Err(PlotRowError::UnexpectedItem { expected: "abstract", found: other.shape_name() });
        }
    };
    Ok(wrap_custom_values(PlotRow::Series(row), item))
}

/// Attach the item's custom values to a finished row, whatever its shape.
fn wrap_custom_values(mut row: PlotRow, item: &SeriesDataItem) -> PlotRow {
    if let Some(custom) = item.custom_values() {
        row.set_custom_values(custom.clone());
    }
    row
}
