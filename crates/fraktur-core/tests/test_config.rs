use fraktur_core::config::RenderSettings;
use fraktur_core::consts::{DEFAULT_MAX_ITERATIONS, INITIAL_ITERATIONS, ITERATION_INCREMENT};

#[test]
fn test_default_settings() {
    let settings = RenderSettings::default();
    assert_eq!(settings.initial_iterations, INITIAL_ITERATIONS);
    assert_eq!(settings.iteration_increment, ITERATION_INCREMENT);
    assert_eq!(settings.max_iterations, DEFAULT_MAX_ITERATIONS);
}

#[test]
fn test_settings_round_trip() {
    let settings = RenderSettings {
        initial_iterations: 128,
        iteration_increment: 64,
        max_iterations: 4_000,
    };

    let json = serde_json::to_string(&settings).unwrap();
    let back: RenderSettings = serde_json::from_str(&json).unwrap();

    assert_eq!(back.initial_iterations, 128);
    assert_eq!(back.iteration_increment, 64);
    assert_eq!(back.max_iterations, 4_000);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let back: RenderSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(back.initial_iterations, INITIAL_ITERATIONS);
    assert_eq!(back.iteration_increment, ITERATION_INCREMENT);
    assert_eq!(back.max_iterations, DEFAULT_MAX_ITERATIONS);
}

#[test]
fn test_partial_settings_keep_other_defaults() {
    let back: RenderSettings = serde_json::from_str(r#"{"max_iterations": 250}"#).unwrap();
    assert_eq!(back.max_iterations, 250);
    assert_eq!(back.initial_iterations, INITIAL_ITERATIONS);
}
