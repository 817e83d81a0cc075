use crate::api::DEFAULT_ENDPOINT;
use crate::config::Config;
use crate::record::Record;
use crate::sync::RecordSync;
use std::fs;
use tempfile::NamedTempFile;
use tokio::time::Duration;

const CONFIG: &str = r#"
endpoint: "http://dns.lan:9353/api/v1"
update_interval: 5
records:
  - "router.lan. 600 IN A 192.168.1.1"
  - "router.lan.  600  IN  TXT  \"gateway\""
"#;

#[test]
fn test_load_config_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, CONFIG).unwrap();

    let config = Config::load(temp_file.path()).unwrap();
    assert_eq!(config.endpoint, "http://dns.lan:9353/api/v1");
    assert_eq!(config.update_interval, 5);
    assert_eq!(
        config.records,
        vec![
            Record::a("router.lan.", "192.168.1.1").with_ttl(600),
            Record::txt("router.lan.", "gateway").with_ttl(600),
        ]
    );
}

#[test]
fn test_default_endpoint() {
    let config = Config::parse(
        r#"
        update_interval: 1
        records:
          - "a.lan. 60 IN AAAA fd00::1"
        "#,
    )
    .unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn test_invalid_record_line() {
    let err = Config::parse(
        r#"
        update_interval: 1
        records:
          - "a.lan. 60 IN MX 10 mail.lan."
        "#,
    )
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("invalid record: a.lan. 60 IN MX 10 mail.lan."));
}

#[test]
fn test_validation() {
    let no_records = Config::parse(
        r#"
        update_interval: 1
        records: []
        "#,
    );
    assert!(no_records.is_err());

    let zero_interval = Config::parse(
        r#"
        update_interval: 0
        records:
          - "a.lan. 60 IN A 10.0.0.1"
        "#,
    );
    assert!(zero_interval.is_err());
}

#[test]
fn test_update_interval_upper_bound() {
    let config = |interval: u64| {
        Config::parse(&format!(
            "update_interval: {}\nrecords:\n  - \"a.lan. 60 IN A 10.0.0.1\"\n",
            interval
        ))
    };

    let max = config(525_600).unwrap();
    assert_eq!(
        RecordSync::from_config(max).update_interval(),
        Duration::from_secs(525_600 * 60)
    );

    assert!(config(525_601).is_err());
    assert!(config(u64::MAX).is_err());
}

#[test]
fn test_missing_file() {
    let err = Config::load("/nonexistent/landns.yaml").unwrap_err();
    assert!(err.to_string().starts_with("Failed to open config file"));
}
