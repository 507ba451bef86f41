// File: crates/chart-rows/src/error.rs
// Summary: Error type shared by row creation, item ingestion and time conversion.

use crate::series::SeriesKind;

pub type Result<T> = std::result::Result<T, PlotRowError>;

#[derive(Debug, thiserror::Error)]
pub enum PlotRowError {
    /// Abstract series were asked to build a row without a value converter.
    /// This is a caller configuration defect; no row is produced.
    #[error("abstract series requires a data-to-value converter, none was supplied")]
    MissingConverter,

    /// The item handed to a builder has the shape of another series kind.
    #[error("expected {expected} item, got {found}")]
    UnexpectedItem { expected: &'static str, found: &'static str },

    #[error("invalid {kind} data item: {source}")]
    InvalidItem {
        kind: SeriesKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("unknown series kind '{0}'")]
    UnknownSeriesKind(String),
}
