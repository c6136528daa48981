//! Configuration and scenario loading tests

use std::io::Write;

use slidepanel::config::{ConfigError, SlidepanelConfig};
use slidepanel::panel::{PanelOptions, Side};
use slidepanel::scenario::Scenario;

const CONFIG: &str = r#"
panelDefaults:
  delay: 250
  hideOnEscape: true
  side: right
  visibleClass: open
"#;

#[test]
fn test_parse_panel_defaults() {
    let config = SlidepanelConfig::parse(CONFIG).unwrap();

    let defaults = &config.panel_defaults;
    assert_eq!(defaults.delay, Some(250));
    assert_eq!(defaults.hide_on_escape, Some(true));
    assert_eq!(defaults.side, Some(Side::Right));
    assert_eq!(defaults.visible_class.as_deref(), Some("open"));
    assert_eq!(defaults.hide_on_click, None);
}

#[test]
fn test_empty_config_is_default() {
    assert_eq!(SlidepanelConfig::parse("").unwrap(), SlidepanelConfig::default());
    assert_eq!(SlidepanelConfig::parse("  \n").unwrap(), SlidepanelConfig::default());
}

#[test]
fn test_invalid_config_is_parse_error() {
    let err = SlidepanelConfig::parse("panelDefaults:\n  delay: soon\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = SlidepanelConfig::load_from(file.path()).unwrap();

    assert_eq!(config.panel_defaults.delay, Some(250));
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SlidepanelConfig::load_from(&dir.path().join("config.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn test_binding_options_override_defaults() {
    let config = SlidepanelConfig::parse(CONFIG).unwrap();

    let options = config.options_for(&PanelOptions::new().delay(0).hide_on_click(true));
    let merged = options.merge_over_defaults();

    assert_eq!(merged.delay, 0);
    assert!(merged.hide_on_click);
    assert!(merged.hide_on_escape);
    assert_eq!(merged.side, Side::Right);
    assert_eq!(merged.visible_class, "open");
    assert!(!merged.reset_scroll);
}

#[test]
fn test_config_defaults_reach_scenario_panels() {
    let config = SlidepanelConfig::parse(CONFIG).unwrap();
    let scenario = Scenario::parse(
        r##"
document:
  children:
    - { tag: nav, id: menu, class: [open] }
panels:
  - selector: "#menu"
steps:
  - escape
"##,
    )
    .unwrap();

    let report = scenario.run(&config, 0).unwrap();

    assert!(!report.panels[0].visible);
    assert_eq!(report.steps[0].changes.as_deref(), Some("#menu: hidden"));
}

#[test]
fn test_scenario_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Scenario::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read scenario"));
}

#[test]
fn test_scenario_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "document: {{}}\nsteps:\n  - wait: 20").unwrap();

    let scenario = Scenario::load(file.path()).unwrap();
    let report = scenario.run(&SlidepanelConfig::default(), 5).unwrap();

    assert_eq!(report.elapsed_ms, 25);
    assert!(report.panels.is_empty());
}
