// File: crates/chart-rows/src/lib.rs
// Summary: Library entry point; exports data items, plot rows and the per-kind row creators.

pub mod series;
pub mod time;
pub mod data;
pub mod row;
pub mod creator;
pub mod error;
mod builders;

pub use series::SeriesKind;
pub use time::{BusinessDay, OriginalTime, Time, TimePoint, TimePointIndex};
pub use data::{
    AbstractData, AreaData, BarData, BaselineData, CandlestickData, Color, CustomValues, HistogramData, LineData,
    SeriesDataItem, WhitespaceData, is_whitespace_json,
};
pub use row::{is_series_plot_row, PlotRow, PlotRowStyle, PlotRowValue, SeriesPlotRow, WhitespacePlotRow};
pub use creator::{create_plot_row, plot_row_creator, PlotRowCreator};
pub use error::{PlotRowError, Result};
