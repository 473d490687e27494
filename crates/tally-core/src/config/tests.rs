use super::*;

#[test]
fn test_defaults_when_sections_missing() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.tally.data_dir, "~/.tally");
    assert_eq!(cfg.i18n.default_language(), LanguageCode::En);
    assert_eq!(cfg.i18n.fresh_secs, 300);
    assert_eq!(cfg.i18n.retain_secs, 600);
    assert!(cfg.i18n.remember_session);
    assert!(!cfg.api.enabled);
    assert!(!cfg.api.is_authenticated());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_i18n_section_from_toml() {
    let toml_str = r#"
        [i18n]
        default_language = "pt-BR"
        fresh_secs = 60
        retain_secs = 120
        session_dir = "/tmp/tally-session"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.i18n.default_language(), LanguageCode::Pt);
    assert_eq!(cfg.i18n.fresh_for(), Duration::from_secs(60));
    assert_eq!(cfg.i18n.retain_for(), Duration::from_secs(120));
    assert_eq!(cfg.session_dir(), PathBuf::from("/tmp/tally-session"));
}

#[test]
fn test_unknown_default_language_falls_back() {
    let cfg: I18nConfig = toml::from_str(r#"default_language = "tlh""#).unwrap();
    assert_eq!(cfg.default_language(), LanguageCode::En);
}

#[test]
fn test_authenticated_requires_enabled_and_token() {
    let cfg: ApiConfig = toml::from_str(r#"token = "abc""#).unwrap();
    assert!(!cfg.is_authenticated());

    let cfg: ApiConfig = toml::from_str("enabled = true\ntoken = \"  \"").unwrap();
    assert!(!cfg.is_authenticated());

    let cfg: ApiConfig = toml::from_str("enabled = true\ntoken = \"abc\"").unwrap();
    assert!(cfg.is_authenticated());
    assert_eq!(cfg.timeout_secs, 15);
}

#[test]
fn test_validate_rejects_retain_shorter_than_fresh() {
    let mut cfg = Config::default();
    cfg.i18n.fresh_secs = 600;
    cfg.i18n.retain_secs = 60;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("retain_secs"));
}

#[test]
fn test_session_dir_defaults_under_data_dir() {
    let mut cfg = Config::default();
    cfg.tally.data_dir = "/var/lib/tally".to_string();
    assert_eq!(cfg.session_dir(), PathBuf::from("/var/lib/tally/session"));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__tally_config__.toml").unwrap();
    assert_eq!(cfg.tally.data_dir, "~/.tally");
    assert_eq!(cfg.tally.log_level, "info");
}

#[test]
fn test_load_reads_and_validates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[api]\nenabled = true\ntoken = \"t\"\n").unwrap();
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert!(cfg.api.is_authenticated());

    std::fs::write(&path, "[i18n]\nfresh_secs = 10\nretain_secs = 5\n").unwrap();
    assert!(matches!(
        load(path.to_str().unwrap()),
        Err(TallyError::Config(_))
    ));

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(load(path.to_str().unwrap()).is_err());
}

#[test]
fn test_tally_section_has_no_name_field() {
    let cfg: Config = toml::from_str("[tally]\nlog_level = \"debug\"\n").unwrap();
    assert_eq!(cfg.tally.log_level, "debug");
    let rendered = toml::to_string(&cfg.tally).unwrap();
    assert!(!rendered.contains("name"));
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
    assert_eq!(shellexpand("relative"), "relative");
}
