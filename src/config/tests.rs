use super::*;

#[test]
fn defaults_are_sensible_without_any_sources() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.storage.data_dir, PathBuf::from("data"));
    assert_eq!(settings.storage.key, "cifra-blog-posts");
    assert!(!settings.storage.detached);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.storage.data_dir = Some(PathBuf::from("/srv/from-file"));
    raw.logging.level = Some("info".to_string());

    let overrides = GlobalOverrides {
        data_dir: Some(PathBuf::from("/srv/from-cli")),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.storage.data_dir, PathBuf::from("/srv/from-cli"));
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = GlobalOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn detached_flag_survives_into_settings() {
    let mut raw = RawSettings::default();
    let overrides = GlobalOverrides {
        detached: true,
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert!(settings.storage.detached);
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("shouting".to_string());

    let error = Settings::from_raw(raw).expect_err("invalid level");
    assert!(matches!(error, SettingsError::InvalidLogLevel { .. }));
}

#[test]
fn blank_storage_key_is_rejected() {
    let mut raw = RawSettings::default();
    raw.storage.key = Some("   ".to_string());

    let error = Settings::from_raw(raw).expect_err("blank key");
    assert!(matches!(error, SettingsError::EmptyStorageKey));
}

#[test]
fn default_command_is_absent_and_list_parses_filters() {
    let args = CliArgs::parse_from(["cifra"]);
    assert!(args.command.is_none());

    let args = CliArgs::parse_from([
        "cifra", "list", "--tag", "security", "--search", "zero-day", "--json",
    ]);
    match args.command.expect("list command") {
        Command::List(list) => {
            assert_eq!(list.tag.as_deref(), Some("security"));
            assert_eq!(list.search.as_deref(), Some("zero-day"));
            assert!(list.json);
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_write_arguments_with_repeated_tags() {
    let args = CliArgs::parse_from([
        "cifra",
        "--data-dir",
        "/tmp/cifra-data",
        "write",
        "--title",
        "Logging the Quiet Way",
        "--content-file",
        "post.md",
        "--tag",
        "logging",
        "--tag",
        "rust",
        "--date",
        "2026-08-06",
    ]);

    assert_eq!(
        args.overrides.data_dir.as_deref(),
        Some(Path::new("/tmp/cifra-data"))
    );
    match args.command.expect("write command") {
        Command::Write(write) => {
            assert_eq!(write.title, "Logging the Quiet Way");
            assert_eq!(write.content_file.as_deref(), Some(Path::new("post.md")));
            assert_eq!(write.tags, vec!["logging".to_string(), "rust".to_string()]);
            assert_eq!(write.date.as_deref(), Some("2026-08-06"));
            assert!(!write.json);
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_show_and_delete_arguments() {
    let args = CliArgs::parse_from(["cifra", "show", "ransomware-defense-strategies"]);
    match args.command.expect("show command") {
        Command::Show(show) => {
            assert_eq!(show.slug, "ransomware-defense-strategies");
            assert!(!show.json);
        }
        _ => panic!("wrong command parsed"),
    }

    let args = CliArgs::parse_from(["cifra", "delete", "4"]);
    match args.command.expect("delete command") {
        Command::Delete(delete) => assert_eq!(delete.id, "4"),
        _ => panic!("wrong command parsed"),
    }
}
