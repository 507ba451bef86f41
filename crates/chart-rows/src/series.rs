// File: crates/chart-rows/src/series.rs
// Summary: Closed set of series kinds understood by the row creators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotRowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Line,
    Histogram,   // same row shape as Line
    Area,
    Baseline,    // area split around a base value
    Bar,         // OHLC bar (no filled body)
    Candlestick,
    Abstract,    // value tuple computed by a caller converter
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 7] = [
        SeriesKind::Line,
        SeriesKind::Histogram,
        SeriesKind::Area,
        SeriesKind::Baseline,
        SeriesKind::Bar,
        SeriesKind::Candlestick,
        SeriesKind::Abstract,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SeriesKind::Line => "Line",
            SeriesKind::Histogram => "Histogram",
            SeriesKind::Area => "Area",
            SeriesKind::Baseline => "Baseline",
            SeriesKind::Bar => "Bar",
            SeriesKind::Candlestick => "Candlestick",
            SeriesKind::Abstract => "Abstract",
        }
    }

    /// Kinds whose value tuple is read from open/high/low/close fields.
    pub const fn is_ohlc(self) -> bool {
        matches!(self, SeriesKind::Bar | SeriesKind::Candlestick)
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeriesKind {
    type Err = PlotRowError;

    /// Case-insensitive lookup by kind name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlotRowError::UnknownSeriesKind(s.to_string()))
    }
}
