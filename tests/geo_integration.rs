//! Integration tests for country aggregation and chart series

use lynx_charts::analytics::{aggregate, to_series, ChartPoint, GeoPanel, GeoRecord};

fn parse(payload: &str) -> Vec<GeoRecord> {
    serde_json::from_str(payload).unwrap()
}

#[test]
fn test_aggregate_counts_unknown() {
    let records = parse(r#"[{"geo":{"country":"US"}},{"geo":{"country":"US"}},{}]"#);

    let counts = aggregate(&records);
    let entries: Vec<(&str, u64)> = counts.iter().collect();
    assert_eq!(entries, vec![("US", 2), ("Unknown", 1)]);
}

#[test]
fn test_single_country_series() {
    let records = parse(r#"[{"geo":{"country":"FR"}}]"#);

    assert_eq!(
        to_series(&aggregate(&records)),
        vec![ChartPoint {
            x: "FR".to_string(),
            y: 1
        }]
    );
}

#[test]
fn test_no_record_dropped() {
    let records = parse(
        r#"[
            {"geo":{"country":"IN","city":"Pune"}},
            {"geo":{"country":null}},
            {"geo":{"country":""}},
            {"geo":null},
            {"referrer":"news"},
            {"geo":{"country":"IN"}},
            {"geo":{"country":"KE"}}
        ]"#,
    );

    let counts = aggregate(&records);
    assert_eq!(counts.total(), records.len() as u64);
    assert_eq!(counts.labels(), vec!["IN", "Unknown", "KE"]);
    assert_eq!(counts.get("Unknown"), Some(4));
}

#[test]
fn test_repeated_calls_are_identical() {
    let records = parse(r#"[{"geo":{"country":"PL"}},{},{"geo":{"country":"CZ"}},{"geo":{"country":"PL"}}]"#);

    let first = to_series(&aggregate(&records));
    let second = to_series(&aggregate(&records));
    assert_eq!(first, second);
}

#[test]
fn test_geo_panel_json() {
    let records = parse(r#"[{"geo":{"country":"NO"}},{}]"#);

    let json = serde_json::to_value(GeoPanel::build(&records)).unwrap();
    assert_eq!(json["categories"], serde_json::json!(["NO", "Unknown"]));
    assert_eq!(
        json["series"],
        serde_json::json!([{"x": "NO", "y": 1}, {"x": "Unknown", "y": 1}])
    );
    assert_eq!(json["counts"], serde_json::json!({"NO": 1, "Unknown": 1}));
}
