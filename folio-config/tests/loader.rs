//! Config source resolution tests
//!
//! The loader is exercised with an injected variable lookup so the tests never
//! touch the process environment.

use std::collections::HashMap;
use std::fs;

use folio_config::loader::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, load_from_file, parse_from_str, parse_json,
};
use folio_config::{CarouselConfig, ConfigLoader, ConfigSource, Easing};
use tempfile::tempdir;

fn vars(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let load = ConfigLoader::new(vars(&[]), dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, CarouselConfig::default());
}

#[test]
fn env_path_wins_over_inline_and_default_file() {
    let dir = tempdir().unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "transition_ms = 300\n").unwrap();
    fs::write(dir.path().join("carousel.toml"), "transition_ms = 700\n").unwrap();

    let lookup = vars(&[
        (CONFIG_PATH_VAR, explicit.display().to_string()),
        (CONFIG_JSON_VAR, r#"{"transition_ms": 900}"#.to_string()),
    ]);
    let load = ConfigLoader::new(lookup, dir.path()).load().unwrap();

    assert_eq!(load.source, ConfigSource::EnvPath(explicit));
    assert_eq!(load.config.transition_ms, 300);
    // Unset keys keep their defaults.
    assert_eq!(load.config.auto_rotate_interval_ms, 4_000);
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let dir = tempdir().unwrap();
    let lookup = vars(&[(
        CONFIG_JSON_VAR,
        r#"{"visible_radius": 1, "easing": "ease-in-out"}"#.to_string(),
    )]);
    let load = ConfigLoader::new(lookup, dir.path()).load().unwrap();

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.visible_radius, 1);
    assert_eq!(load.config.easing, Easing::EaseInOut);
}

#[test]
fn blank_variables_are_ignored() {
    let dir = tempdir().unwrap();
    let lookup = vars(&[
        (CONFIG_PATH_VAR, "   ".to_string()),
        (CONFIG_JSON_VAR, String::new()),
    ]);
    let load = ConfigLoader::new(lookup, dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::Default);
}

#[test]
fn discovers_default_file_under_config_dir() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/carousel.json");
    fs::write(&path, r#"{"geometry": {"card_width": 240.0}}"#).unwrap();

    let load = ConfigLoader::new(vars(&[]), dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.geometry.card_width, 240.0);
    assert_eq!(load.config.geometry.card_depth, 100.0);
}

#[test]
fn invalid_values_fail_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("carousel.toml");
    fs::write(&path, "transition_ms = 5000\nauto_rotate_interval_ms = 4000\n").unwrap();

    let err = load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("must exceed transition_ms"));
}

#[test]
fn flat_or_plateaued_falloff_is_rejected() {
    let flat = parse_json(r#"{"geometry": {"scale_step": 0.0, "opacity_step": 0.0}}"#);
    assert!(format!("{:#}", flat.unwrap_err()).contains("geometry.scale_step"));

    let plateau = parse_json(r#"{"visible_radius": 4}"#);
    assert!(
        format!("{:#}", plateau.unwrap_err())
            .contains("geometry.opacity_floor reaches its floor")
    );
}

#[test]
fn unknown_extension_tries_toml_then_json() {
    let toml = parse_from_str("resume_cooldown_ms = 1234", "inline").unwrap();
    assert_eq!(toml.resume_cooldown_ms, 1234);

    let json = parse_from_str(r#"{"resume_cooldown_ms": 4321}"#, "inline").unwrap();
    assert_eq!(json.resume_cooldown_ms, 4321);

    assert!(parse_from_str("{{ nope", "inline").is_err());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
