use super::*;

#[test]
fn defaults_match_the_classic_scene() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.theme, SkyTheme::NightSky);
    assert_eq!(cfg.greeting, "Merry Christmas!");
    assert_eq!(cfg.hat_anchor, 'C');
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = SceneConfig::from_json_str(r#"{"theme":"winter_morning"}"#).unwrap();
    assert_eq!(cfg.theme, SkyTheme::WinterMorning);
    assert_eq!(cfg.greeting, DEFAULT_GREETING);
}

#[test]
fn full_json_round_trips() {
    let cfg = SceneConfig {
        theme: SkyTheme::WinterMorning,
        greeting: "Happy Holidays".to_owned(),
        hat_anchor: 'H',
    };
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(SceneConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn unknown_fields_are_config_errors() {
    let err = SceneConfig::from_json_str(r#"{"colour":"red"}"#).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
}

#[test]
fn greeting_validation() {
    let mut cfg = SceneConfig {
        greeting: "   ".to_owned(),
        ..SceneConfig::default()
    };
    assert!(cfg.validate().is_err());

    cfg.greeting = "x".repeat(MAX_GREETING_CHARS);
    assert!(cfg.validate().is_ok());
    cfg.greeting.push('y');
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_files_as_io() {
    let err = SceneConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, SceneError::Io(_)));
}
