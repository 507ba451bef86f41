// File: crates/chart-rows/src/time.rs
// Summary: Time values carried by data items and rows (time point, index, original time).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlotRowError, Result};

/// Normalized time assigned by the time axis, in UTC seconds.
/// Rows only copy it; ordering is what the axis relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimePoint(pub i64);

/// Position of a time point in the caller-owned time axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimePointIndex(pub u32);

/// Time exactly as the caller supplied it, kept for display and callbacks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginalTime(pub Time);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Caller-facing time: a UTC timestamp, a business day, or an ISO `YYYY-MM-DD` string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Time {
    Utc(i64),
    BusinessDay(BusinessDay),
    Text(String),
}

impl BusinessDay {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_time_point(&self) -> Result<TimePoint> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(midnight_utc)
            .ok_or_else(|| {
                PlotRowError::InvalidTime(format!(
                    "{}-{:02}-{:02} is not a calendar date",
                    self.year, self.month, self.day
                ))
            })
    }
}

impl Time {
    /// Convert to UTC seconds. Business days and date strings map to midnight UTC.
    pub fn to_time_point(&self) -> Result<TimePoint> {
        match self {
            Time::Utc(ts) => Ok(TimePoint(*ts)),
            Time::BusinessDay(day) => day.to_time_point(),
            Time::Text(s) => {
                let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map_err(|e| PlotRowError::InvalidTime(format!("'{s}': {e}")))?;
                midnight_utc(date).ok_or_else(|| PlotRowError::InvalidTime(s.clone()))
            }
        }
    }
}

fn midnight_utc(date: NaiveDate) -> Option<TimePoint> {
    date.and_hms_opt(0, 0, 0).map(|dt| TimePoint(dt.and_utc().timestamp()))
}

impl From<i64> for Time {
    fn from(ts: i64) -> Self { Time::Utc(ts) }
}

impl From<BusinessDay> for Time {
    fn from(day: BusinessDay) -> Self { Time::BusinessDay(day) }
}

impl From<&str> for Time {
    fn from(s: &str) -> Self { Time::Text(s.to_string()) }
}

impl From<Time> for OriginalTime {
    fn from(t: Time) -> Self { OriginalTime(t) }
}
