use super::defaults::{DEFAULT_PADDING, DEFAULT_SEARCH_MARGIN, DEFAULT_SELECTED_BG, MAX_LIMIT};
use super::*;
use crate::error::WmenuError;
use crate::filter::CaseMode;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.get_limit(), DEFAULT_LIMIT);
    assert!(!config.get_insensitive());
    assert_eq!(config.get_delimiters(), DEFAULT_DELIMITERS);
    assert_eq!(config.get_prompt(), "");
    assert_eq!(config.get_position(), Position::Top);
    assert_eq!(config.get_orientation(), Orientation::Horizontal);
    assert_eq!(config.get_padding(), DEFAULT_PADDING);
    assert_eq!(config.get_search_margin(), DEFAULT_SEARCH_MARGIN);
    assert_eq!(config.get_colors().selected.bg, DEFAULT_SELECTED_BG);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_camel_case_fields() {
    let json = r##"{
        "limit": 5,
        "insensitive": true,
        "delimiters": "\n",
        "prompt": "run:",
        "position": "bottom",
        "orientation": "vertical",
        "padding": 4,
        "searchMargin": 0.3,
        "colors": { "selected": { "fg": "#ffffff", "bg": 4660 } }
    }"##;
    let config = parse_config(json).unwrap();
    assert_eq!(config.get_limit(), 5);
    assert_eq!(config.get_case_mode(), CaseMode::Insensitive);
    assert_eq!(config.get_delimiters(), "\n");
    assert_eq!(config.get_prompt(), "run:");
    assert_eq!(config.get_position(), Position::Bottom);
    assert_eq!(config.get_orientation(), Orientation::Vertical);
    assert_eq!(config.get_padding(), 4);
    assert_eq!(config.get_search_margin(), 0.3);

    let colors = config.get_colors();
    assert_eq!(colors.selected.fg, 0xffffff);
    assert_eq!(colors.selected.bg, 0x1234);
    // unspecified schemes keep their defaults
    assert_eq!(colors.normal, Colors::default().normal);
}

#[test]
fn test_parse_empty_file_is_default() {
    assert_eq!(parse_config("  \n").unwrap(), Config::default());
    assert_eq!(parse_config("{}").unwrap(), Config::default());
}

#[test]
fn test_parse_rejects_bad_values() {
    assert!(parse_config(r#"{"limit": -1}"#).is_err());
    assert!(parse_config(r#"{"position": "left"}"#).is_err());
    assert!(parse_config(r##"{"colors": {"normal": {"fg": "#12", "bg": "#000000"}}}"##).is_err());
}

#[test]
fn test_serialization_skips_unset_fields() {
    let config = Config {
        limit: Some(3),
        ..Config::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"limit":3}"#);
}

#[test]
fn test_colors_serialize_as_hex_strings() {
    let config = Config {
        colors: Some(Colors::default()),
        ..Config::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r##""bg":"#005577""##));
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.get_colors(), Colors::default());
}

#[test]
fn test_overrides_take_precedence() {
    let mut config = parse_config(r#"{"limit": 5, "prompt": "file"}"#).unwrap();
    config.apply_overrides(ConfigOverrides {
        limit: Some(20),
        insensitive: true,
        orientation: Some(Orientation::Vertical),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.get_limit(), 20);
    assert!(config.get_insensitive());
    assert_eq!(config.get_prompt(), "file");
    assert_eq!(config.get_orientation(), Orientation::Vertical);
}

#[test]
fn test_insensitive_flag_absent_keeps_file_value() {
    let mut config = parse_config(r#"{"insensitive": true}"#).unwrap();
    config.apply_overrides(ConfigOverrides::default());
    assert!(config.get_insensitive());
}

#[test]
fn test_picker_options_follow_config() {
    let config = parse_config(r#"{"limit": 0, "insensitive": true}"#).unwrap();
    let options = config.picker_options();
    assert_eq!(options.limit, 0);
    assert_eq!(options.case, CaseMode::Insensitive);
}

#[test]
fn test_validate_rejects_empty_delimiters() {
    let config = parse_config(r#"{"delimiters": ""}"#).unwrap();
    assert!(matches!(config.validate(), Err(WmenuError::Config(_))));
}

#[test]
fn test_validate_rejects_out_of_range_margin() {
    let config = parse_config(r#"{"searchMargin": 1.5}"#).unwrap();
    assert!(matches!(config.validate(), Err(WmenuError::Config(_))));
}

#[test]
fn test_validate_rejects_huge_limit() {
    let config = parse_config(r#"{"limit": 18446744073709551615}"#).unwrap();
    assert!(matches!(config.validate(), Err(WmenuError::Config(_))));

    let mut config = Config::default();
    config.apply_overrides(ConfigOverrides {
        limit: Some(MAX_LIMIT + 1),
        ..ConfigOverrides::default()
    });
    assert!(matches!(config.validate(), Err(WmenuError::Config(_))));

    config.limit = Some(MAX_LIMIT);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let location = ConfigLocation::default_location(dir.path().join("absent.json"));
    let config = load_config(&location).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let location = ConfigLocation::explicit(dir.path().join("absent.json"));
    let err = load_config(&location).unwrap_err();
    match err {
        WmenuError::ConfigRead { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected ConfigRead, got {:?}", other),
    }
}

#[test]
fn test_load_config_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"limit": 7, "orientation": "vertical"}"#).unwrap();
    let config = load_config(&ConfigLocation::explicit(path.clone())).unwrap();
    assert_eq!(config.get_limit(), 7);
    assert_eq!(config.get_orientation(), Orientation::Vertical);
}

#[test]
fn test_load_config_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ limit: 7 ").unwrap();
    let err = load_config(&ConfigLocation::default_location(path.clone())).unwrap_err();
    assert!(matches!(err, WmenuError::ConfigParse { .. }));
}

#[test]
fn test_config_path_prefers_explicit() {
    let location = config_path(Some("/etc/wmenu.json")).unwrap();
    assert_eq!(location, ConfigLocation::explicit("/etc/wmenu.json"));
}

#[test]
fn test_config_path_expands_tilde() {
    if let Some(home) = dirs::home_dir() {
        let location = config_path(Some("~/wmenu.json")).unwrap();
        assert_eq!(location.path, home.join("wmenu.json"));
        assert!(location.explicit);
    }
}
