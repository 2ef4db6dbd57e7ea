use rreserve::config::{CONFIG_KEYS, Config};
use rreserve::utils::table::Table;
use std::time::Duration;

#[test]
fn test_partial_config_gets_defaults() {
    let cfg = Config::from_yaml("api_base: http://reservations.internal:8080\n").unwrap();
    assert_eq!(cfg.api_base, "http://reservations.internal:8080");
    assert_eq!(cfg.debounce(), Duration::from_millis(200));
    assert_eq!(cfg.request_timeout(), Duration::from_secs(15));
    assert!(cfg.database.ends_with("rreserve.sqlite"));
}

#[test]
fn test_missing_fields_reported() {
    let missing = Config::missing_fields("database: /tmp/x.sqlite\ndebounce_ms: 50\n").unwrap();
    assert_eq!(missing, vec!["api_base", "request_timeout_secs"]);

    let full = serde_yaml::to_string(&Config::default()).unwrap();
    assert!(Config::missing_fields(&full).unwrap().is_empty());

    assert_eq!(Config::missing_fields("- a list\n").unwrap(), CONFIG_KEYS.to_vec());
}

#[test]
fn test_malformed_config_is_an_error() {
    assert!(Config::from_yaml("debounce_ms: [not a number").is_err());
}

#[test]
fn test_table_aligns_columns() {
    let mut table = Table::new(["Days", "Open"]);
    table.add_row(vec!["Mon–Thu".into(), "17:00".into()]);
    table.add_row(vec!["Sun".into(), "11:00".into()]);

    assert_eq!(
        table.render(),
        "Days     Open\nMon–Thu  17:00\nSun      11:00\n"
    );
}

#[test]
fn test_table_pads_wide_characters_by_display_width() {
    let mut table = Table::new(["Name", "Slot"]);
    table.add_row(vec!["東京".into(), "17:00".into()]);
    table.add_row(vec!["Tokyo".into(), "17:30".into()]);

    assert_eq!(
        table.render(),
        "Name   Slot\n東京   17:00\nTokyo  17:30\n"
    );
}
