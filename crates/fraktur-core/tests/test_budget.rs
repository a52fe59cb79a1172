use fraktur_core::render::iteration_budget;

#[test]
fn test_budget_at_zoom_zero_is_initial() {
    assert_eq!(iteration_budget(0.0, 96, 40, 10_000), 96);
}

#[test]
fn test_budget_grows_per_zoom_step() {
    assert_eq!(iteration_budget(2.0, 96, 40, 10_000), 176);
}

#[test]
fn test_budget_monotone_in_zoom_steps() {
    let mut previous = 0;
    for step in 0..400 {
        let budget = iteration_budget(step as f64 * 0.5, 96, 40, 10_000);
        assert!(
            budget >= previous,
            "budget decreased at step {step}: {budget} < {previous}"
        );
        previous = budget;
    }
}

#[test]
fn test_budget_clamped_to_cap() {
    assert_eq!(iteration_budget(1_000.0, 96, 40, 10_000), 10_000);
}

#[test]
fn test_negative_zoom_steps_clamp_to_floor() {
    assert_eq!(iteration_budget(-5.0, 96, 40, 10_000), 1);
    assert_eq!(iteration_budget(-1e9, 96, 40, 10_000), 1);
}

#[test]
fn test_zero_inputs_stay_in_range() {
    assert_eq!(iteration_budget(0.0, 0, 0, 10_000), 1);
    assert_eq!(iteration_budget(5.0, 96, 40, 0), 1);
}

#[test]
fn test_non_finite_steps_degrade_to_floor() {
    assert_eq!(iteration_budget(f64::NAN, 96, 40, 10_000), 1);
    assert_eq!(iteration_budget(f64::NEG_INFINITY, 96, 40, 10_000), 1);
    assert_eq!(iteration_budget(f64::INFINITY, 96, 40, 10_000), 10_000);
}
