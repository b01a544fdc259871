use std::{collections::HashMap, time::Duration};

use mimic_insight::{config::Settings, hierarchy::LeafRange};

fn settings(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_match_the_dashboard() {
    let settings = settings(&[]).unwrap();
    assert_eq!(settings.api_base_url, "https://tfg-api.angeloyo.com");
    assert_eq!(settings.health_timeout, Duration::from_secs(5));
    assert_eq!(settings.health_interval, Duration::from_secs(30));
    assert_eq!(settings.icicle_min_count, 50.0);
    assert_eq!(settings.sunburst_range, LeafRange::between(50_000.0, 500_000.0));
    assert_eq!(settings.chord_range, LeafRange::between(10_000.0, 1_000_000.0));
}

#[test]
fn overrides_are_trimmed_and_parsed() {
    let settings = settings(&[
        ("MIMIC_API_URL", " http://localhost:8088/ "),
        ("HEALTH_TIMEOUT_SECS", "2"),
        ("ICICLE_MIN_COUNT", "not a number"),
        ("CHORD_MAX_COUNT", "42"),
    ])
    .unwrap();
    assert_eq!(settings.api_base_url, "http://localhost:8088");
    assert_eq!(settings.health_timeout, Duration::from_secs(2));
    assert_eq!(settings.icicle_min_count, 50.0);
    assert_eq!(settings.chord_range.max, Some(42.0));
}

#[test]
fn invalid_url_is_rejected() {
    assert!(settings(&[("MIMIC_API_URL", "not a url")]).is_err());
}

#[test]
fn outputs_dir_is_created_on_demand() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested/outputs");
    let settings = settings(&[("OUTPUTS_DIR", target.to_str().unwrap())]).unwrap();
    assert!(!target.exists());
    settings.ensure_outputs_dir().unwrap();
    assert!(target.is_dir());
    assert_eq!(settings.join_output("index.json"), target.join("index.json"));
}
