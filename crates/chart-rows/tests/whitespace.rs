// File: crates/chart-rows/tests/whitespace.rs
// Purpose: Whitespace handling, custom values passthrough and structural JSON ingestion.

use chart_rows::{
    create_plot_row, is_series_plot_row, is_whitespace_json, plot_row_creator, AbstractData, AreaData,
    CustomValues, OriginalTime, PlotRow, PlotRowError, PlotRowValue, SeriesDataItem, SeriesKind, Time, TimePoint,
    TimePointIndex, WhitespaceData,
};
use serde_json::json;

const NON_ABSTRACT: [SeriesKind; 6] = [
    SeriesKind::Line,
    SeriesKind::Histogram,
    SeriesKind::Area,
    SeriesKind::Baseline,
    SeriesKind::Bar,
    SeriesKind::Candlestick,
];

fn custom(key: &str, value: serde_json::Value) -> CustomValues {
    let mut map = CustomValues::new();
    map.insert(key.to_string(), value);
    map
}

fn whitespace(custom_values: Option<CustomValues>) -> SeriesDataItem {
    SeriesDataItem::Whitespace(WhitespaceData { time: Time::from("2024-02-29"), custom_values })
}

fn create(kind: SeriesKind, item: &SeriesDataItem) -> PlotRow {
    plot_row_creator(kind)(TimePoint(1_709_164_800), TimePointIndex(12), item, OriginalTime(Time::from("2024-02-29")), None)
        .expect("row")
}

#[test]
fn whitespace_bar_row_has_only_time_fields() {
    let row = create(SeriesKind::Bar, &whitespace(None));
    assert!(row.is_whitespace());
    assert!(!is_series_plot_row(&row));
    assert!(row.value().is_none());
    assert!(row.style().is_none());

    let out = serde_json::to_value(&row).expect("serialize");
    assert_eq!(out, json!({ "index": 12, "time": 1_709_164_800, "originalTime": "2024-02-29" }));
}

#[test]
fn whitespace_rows_for_every_non_abstract_kind() {
    for kind in NON_ABSTRACT {
        let row = create(kind, &whitespace(None));
        match row {
            PlotRow::Whitespace(w) => {
                assert_eq!(w.index, TimePointIndex(12), "{kind}");
                assert_eq!(w.time, TimePoint(1_709_164_800), "{kind}");
                assert!(w.custom_values.is_none(), "{kind}");
            }
            PlotRow::Series(_) => panic!("{kind} produced a value row from whitespace"),
        }
    }
}

#[test]
fn whitespace_rows_keep_custom_values() {
    let payload = custom("note", json!({ "gap": true }));
    for kind in NON_ABSTRACT {
        let row = create(kind, &whitespace(Some(payload.clone())));
        assert!(row.is_whitespace());
        assert_eq!(row.custom_values(), Some(&payload), "{kind}");
    }
}

#[test]
fn area_row_keeps_custom_values() {
    let payload = custom("foo", json!("bar"));
    let item = SeriesDataItem::Area(AreaData {
        time: Time::Utc(5),
        value: 5.0,
        line_color: None,
        top_color: None,
        bottom_color: None,
        custom_values: Some(payload.clone()),
    });
    let row = create(SeriesKind::Area, &item);
    assert_eq!(row.custom_values(), Some(&payload));
    let out = serde_json::to_value(&row).expect("serialize");
    assert_eq!(out["customValues"], json!({ "foo": "bar" }));
}

#[test]
fn abstract_row_keeps_custom_values() {
    let payload = custom("id", json!(7));
    let mut data = AbstractData::new(Time::Utc(5));
    data.custom_values = Some(payload.clone());
    let converter = |_: &AbstractData| -> PlotRowValue { [0.0; 4] };
    let row = create_plot_row(
        SeriesKind::Abstract,
        TimePoint(5),
        TimePointIndex(0),
        &SeriesDataItem::Abstract(data),
        OriginalTime(Time::Utc(5)),
        Some(&converter),
    )
    .expect("abstract row");
    assert_eq!(row.custom_values(), Some(&payload));
}

#[test]
fn json_classifier_per_kind() {
    let bare = json!({ "time": 100 });
    for kind in NON_ABSTRACT {
        assert!(is_whitespace_json(kind, &bare), "{kind}");
    }
    assert!(!is_whitespace_json(SeriesKind::Abstract, &bare));

    let single = json!({ "time": 100, "value": 1.0 });
    assert!(!is_whitespace_json(SeriesKind::Line, &single));
    assert!(!is_whitespace_json(SeriesKind::Baseline, &single));
    assert!(is_whitespace_json(SeriesKind::Bar, &single));

    let null_value = json!({ "time": 100, "value": null });
    assert!(is_whitespace_json(SeriesKind::Area, &null_value));

    let partial_ohlc = json!({ "time": 100, "close": 3.0 });
    assert!(!is_whitespace_json(SeriesKind::Candlestick, &partial_ohlc));
    assert!(is_whitespace_json(SeriesKind::Histogram, &partial_ohlc));
}

#[test]
fn json_items_become_typed_items() {
    let item = SeriesDataItem::from_json(
        SeriesKind::Candlestick,
        json!({ "time": "2019-04-11", "open": 10, "high": 15, "low": 8, "close": 12, "wickColor": "#000" }),
    )
    .expect("candlestick");
    let SeriesDataItem::Candlestick(data) = &item else { panic!("candlestick item expected") };
    assert_eq!(data.time, Time::from("2019-04-11"));
    assert_eq!([data.open, data.high, data.low, data.close], [10.0, 15.0, 8.0, 12.0]);
    assert_eq!(data.wick_color.as_deref(), Some("#000"));
    assert!(data.color.is_none());

    let gap = SeriesDataItem::from_json(
        SeriesKind::Line,
        json!({ "time": { "year": 2019, "month": 4, "day": 12 }, "customValues": { "k": 1 } }),
    )
    .expect("whitespace");
    assert!(gap.is_whitespace());
    assert_eq!(gap.custom_values(), Some(&custom("k", json!(1))));
}

#[test]
fn json_partial_ohlc_propagates_nan() {
    let item = SeriesDataItem::from_json(SeriesKind::Bar, json!({ "time": 1, "close": 3.0 })).expect("bar");
    let row = create(SeriesKind::Bar, &item);
    let value = row.value().expect("value row");
    assert!(value[0].is_nan() && value[1].is_nan() && value[2].is_nan());
    assert_eq!(value[3], 3.0);
}

#[test]
fn json_abstract_fields_are_collected() {
    let item = SeriesDataItem::from_json(
        SeriesKind::Abstract,
        json!({ "time": 1, "color": "red", "bid": 1.5, "ask": 1.7 }),
    )
    .expect("abstract");
    let SeriesDataItem::Abstract(data) = &item else { panic!("abstract item expected") };
    assert_eq!(data.color.as_deref(), Some("red"));
    assert_eq!(data.field_f64("bid"), Some(1.5));
    assert_eq!(data.field_f64("ask"), Some(1.7));
    assert!(!data.fields.contains_key("time"));
    assert!(!data.fields.contains_key("color"));
}

#[test]
fn json_with_bad_value_is_an_error() {
    let err = SeriesDataItem::from_json(SeriesKind::Area, json!({ "time": 1, "value": "high" }))
        .expect_err("value must be numeric");
    assert!(matches!(err, PlotRowError::InvalidItem { kind: SeriesKind::Area, .. }));
}
