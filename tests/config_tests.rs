use std::io::Write;
use std::time::Duration;

use swipe_deck::config::{self, CarouselConfig, Configuration};
use swipe_deck::CarouselError;

#[test]
fn empty_document_uses_defaults() {
    let cfg = config::from_yaml_str("{}").unwrap();
    assert_eq!(cfg, Configuration::default());
    assert_eq!(cfg.carousels.len(), 2);
    assert_eq!(cfg.carousels[0].items, vec!["red", "orange", "green", "blue"]);
    assert_eq!(cfg.carousels[1].items, vec!["purple", "indigo"]);
    assert_eq!(cfg.window.title, "Swipable Cards");
    cfg.validate().unwrap();
}

#[test]
fn carousel_defaults_match_documented_values() {
    let opts = CarouselConfig::default();
    assert_eq!(opts.width, 300.0);
    assert_eq!(opts.height, 200.0);
    assert_eq!(opts.initial_index, 0);
    assert_eq!(opts.idle_delay, Duration::from_secs(3));
    assert_eq!(opts.flip_duration, Duration::from_millis(200));
    assert_eq!(opts.snap_back_duration, Duration::from_millis(200));
    assert_eq!(opts.fling_speed, Some(0.75));
}

#[test]
fn parse_kebab_case_carousel_options() {
    let yaml = r##"
window:
  width: 1024
  fps: 30
carousels:
  - items: [teal, "#ff8800"]
    width: 400
    height: 250
    initial-index: 1
    idle-delay: 5s
    flip-duration: 350ms
    fling-speed: ~
"##;
    let cfg = config::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.window.width, 1024);
    assert_eq!(cfg.window.height, 600);
    assert_eq!(cfg.window.fps, 30);

    let entry = &cfg.carousels[0];
    assert_eq!(entry.items, vec!["teal", "#ff8800"]);
    assert_eq!(entry.options.width, 400.0);
    assert_eq!(entry.options.height, 250.0);
    assert_eq!(entry.options.initial_index, 1);
    assert_eq!(entry.options.idle_delay, Duration::from_secs(5));
    assert_eq!(entry.options.flip_duration, Duration::from_millis(350));
    assert_eq!(entry.options.snap_back_duration, Duration::from_millis(200));
    assert_eq!(entry.options.fling_speed, None);
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_empty_items() {
    let yaml = r#"
carousels:
  - items: []
"#;
    let cfg = config::from_yaml_str(yaml).unwrap();
    assert!(matches!(cfg.validate(), Err(CarouselError::InvalidConfig(_))));
}

#[test]
fn validate_rejects_no_carousels_and_bad_sizes() {
    let cfg = config::from_yaml_str("carousels: []").unwrap();
    assert!(cfg.validate().is_err());

    let yaml = r#"
carousels:
  - items: [red]
    height: -5
"#;
    let cfg = config::from_yaml_str(yaml).unwrap();
    assert!(cfg.validate().is_err());

    let yaml = r#"
carousels:
  - items: [red]
    fling-speed: 0
"#;
    let cfg = config::from_yaml_str(yaml).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_duration_is_a_config_error() {
    let yaml = r#"
carousels:
  - items: [red]
    idle-delay: soon
"#;
    assert!(matches!(
        config::from_yaml_str(yaml),
        Err(CarouselError::Config(_))
    ));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "carousels:\n  - items: [blue, green]\n    idle-delay: 1500ms").unwrap();
    let cfg = config::from_yaml_file(file.path()).unwrap();
    assert_eq!(cfg.carousels.len(), 1);
    assert_eq!(cfg.carousels[0].options.idle_delay, Duration::from_millis(1500));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = config::from_yaml_file(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, CarouselError::Io(_)));
}
