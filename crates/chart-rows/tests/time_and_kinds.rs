// File: crates/chart-rows/tests/time_and_kinds.rs
// Purpose: Time conversion helpers and series kind naming.

use chart_rows::{BusinessDay, PlotRowError, SeriesKind, Time, TimePoint};

#[test]
fn time_points_from_caller_times() {
    assert_eq!(Time::Utc(1_554_940_800).to_time_point().expect("utc"), TimePoint(1_554_940_800));
    assert_eq!(Time::from(BusinessDay::new(2019, 4, 11)).to_time_point().expect("day"), TimePoint(1_554_940_800));
    assert_eq!(Time::from("2024-02-29").to_time_point().expect("iso"), TimePoint(1_709_164_800));
}

#[test]
fn invalid_dates_are_rejected() {
    let err = BusinessDay::new(2023, 2, 29).to_time_point().expect_err("not a leap year");
    assert!(matches!(err, PlotRowError::InvalidTime(_)));
    assert!(Time::from("yesterday").to_time_point().is_err());
}

#[test]
fn time_deserializes_untagged() {
    let t: Time = serde_json::from_str("1554940800").expect("number");
    assert_eq!(t, Time::Utc(1_554_940_800));
    let t: Time = serde_json::from_str(r#"{"year":2019,"month":4,"day":11}"#).expect("object");
    assert_eq!(t, Time::BusinessDay(BusinessDay::new(2019, 4, 11)));
    let t: Time = serde_json::from_str(r#""2019-04-11""#).expect("string");
    assert_eq!(t, Time::from("2019-04-11"));
}

#[test]
fn kinds_parse_case_insensitively() {
    for kind in SeriesKind::ALL {
        assert_eq!(kind.to_string().to_lowercase().parse::<SeriesKind>().expect("parse"), kind);
    }
    assert_eq!(" CandleStick ".parse::<SeriesKind>().expect("parse"), SeriesKind::Candlestick);
    assert!(matches!("pie".parse::<SeriesKind>(), Err(PlotRowError::UnknownSeriesKind(name)) if name == "pie"));
}

#[test]
fn only_bar_and_candlestick_are_ohlc() {
    let ohlc: Vec<_> = SeriesKind::ALL.into_iter().filter(|k| k.is_ohlc()).collect();
    assert_eq!(ohlc, vec![SeriesKind::Bar, SeriesKind::Candlestick]);
}
