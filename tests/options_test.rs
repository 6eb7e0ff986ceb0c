use page_digest::{Error, Options, SummaryType};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_reads_every_field() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("page-digest.toml");
    fs::write(
        &path,
        r#"
api_key = "stored-key"
model = "gemini-2.0-flash"
api_base = "http://localhost:8080/v1beta"
temperature = 0.7
summary_type = "detailed"
"#,
    )
    .expect("write config");

    let opts = Options::load(&path).expect("load config");

    assert_eq!(opts.api_key().ok(), Some("stored-key"));
    assert_eq!(opts.model, "gemini-2.0-flash");
    assert_eq!(opts.api_base, "http://localhost:8080/v1beta");
    assert!((opts.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(opts.summary_type, SummaryType::Detailed);
}

#[test]
fn empty_file_gives_defaults() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("empty.toml");
    fs::write(&path, "").expect("write config");

    let opts = Options::load(&path).expect("load config");

    assert_eq!(opts, Options::default());
    assert!(matches!(opts.api_key(), Err(Error::MissingApiKey)));
}

#[test]
fn unknown_summary_type_becomes_general() {
    let opts = Options::from_toml_str("summary_type = \"haiku\"").expect("parse config");
    assert_eq!(opts.summary_type, SummaryType::General);
}

#[test]
fn options_round_trip_through_toml() {
    let opts = Options {
        api_key: Some("k".to_string()),
        summary_type: SummaryType::Bullets,
        ..Options::default()
    };

    let text = toml::to_string(&opts).expect("serialize");
    let parsed = Options::from_toml_str(&text).expect("parse");

    assert_eq!(parsed, opts);
}

#[test]
fn missing_key_message_is_user_facing() {
    let message = Error::MissingApiKey.to_string();
    assert!(message.starts_with("API key not found."));
    assert!(message.contains("GEMINI_API_KEY"));
}
