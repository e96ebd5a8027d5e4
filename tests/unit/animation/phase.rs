use super::*;

#[test]
fn phases_start_at_zero() {
    assert_eq!(TimePhases::at(0), TimePhases::default());
}

#[test]
fn phases_use_independent_periods() {
    let p = TimePhases::at(1100);
    assert_eq!(p.twinkle, 0.5);
    assert_eq!(p.sway, 1100.0 / 6200.0);
    assert_eq!(p.sky, 1100.0 / 18000.0);
    assert_eq!(p.star_twinkle, 1100.0 / 3500.0);
}

#[test]
fn each_phase_repeats_after_its_period() {
    let t = 12_345;
    assert_eq!(
        TimePhases::at(t).twinkle,
        TimePhases::at(t + TWINKLE_PERIOD_MS).twinkle
    );
    assert_eq!(TimePhases::at(t).sway, TimePhases::at(t + SWAY_PERIOD_MS).sway);
    assert_eq!(TimePhases::at(t).sky, TimePhases::at(t + SKY_PERIOD_MS).sky);
    assert_eq!(
        TimePhases::at(t).star_twinkle,
        TimePhases::at(t + STAR_TWINKLE_PERIOD_MS).star_twinkle
    );
}

#[test]
fn phases_stay_in_unit_interval_for_huge_times() {
    let p = TimePhases::at(u64::MAX);
    for v in [p.twinkle, p.sway, p.sky, p.star_twinkle] {
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn zero_period_is_guarded() {
    assert_eq!(phase(500, 0), 0.0);
}
