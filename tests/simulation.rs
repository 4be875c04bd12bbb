//! Simulation integration tests.

#![allow(clippy::float_cmp)]

use straightsim::{
    DEFAULT_MATCHES, Simulation, SimulationError, SimulationOptions, SimulationReport, Target,
};

#[test]
fn options_builder_sets_fields() {
    let defaults = SimulationOptions::default();
    assert_eq!(defaults.target, Target::Straight);
    assert_eq!(defaults.matches, DEFAULT_MATCHES);
    assert_eq!(DEFAULT_MATCHES, 1000);

    let options = SimulationOptions::default()
        .with_target(Target::Quads)
        .with_matches(3);
    assert_eq!(options.target, Target::Quads);
    assert_eq!(options.matches, 3);
}

#[test]
fn targets_parse_from_their_names() {
    for target in Target::ALL {
        assert_eq!(target.name().parse::<Target>().unwrap(), target);
    }
    assert_eq!("full-house".parse::<Target>().unwrap(), Target::FullHouse);
    assert!("royal-flush".parse::<Target>().is_err());
}

#[test]
fn default_run_stops_at_exactly_one_thousand_straights() {
    let mut simulation = Simulation::new(SimulationOptions::default(), 2024);
    let report = simulation.run().unwrap();

    assert_eq!(report.target, Target::Straight);
    assert_eq!(report.matches, 1000);
    assert!(report.count >= 1000);
    assert_eq!(report.probability(), 100.0 * 1000.0 / report.count as f64);

    // Nine rank windows, 4^5 suit choices each: 9216 / 2598960 ~= 0.355%.
    let probability = report.probability();
    assert!(probability > 0.2 && probability < 0.6, "{probability}");
}

#[test]
fn runs_are_reproducible_from_the_seed() {
    let options = SimulationOptions::default().with_matches(50);
    let a = Simulation::new(options, 11).run().unwrap();
    let b = Simulation::new(options, 11).run().unwrap();
    assert_eq!(a, b);
}

#[test]
fn other_targets_use_the_same_stopping_rule() {
    let options = SimulationOptions::default()
        .with_target(Target::Pair)
        .with_matches(200);
    let report = Simulation::new(options, 5).run().unwrap();

    assert_eq!(report.matches, 200);
    assert!(report.count >= 200);
    // One pair shows up in about 42% of hands.
    let probability = report.probability();
    assert!(probability > 30.0 && probability < 55.0, "{probability}");
}

#[test]
fn zero_matches_is_rejected() {
    let options = SimulationOptions::default().with_matches(0);
    assert_eq!(
        Simulation::new(options, 1).run().unwrap_err(),
        SimulationError::ZeroMatches
    );
}

#[test]
fn draw_deals_five_cards() {
    let mut simulation = Simulation::new(SimulationOptions::default(), 3);
    let hand = simulation.draw().unwrap();
    assert_eq!(hand.cards().len(), 5);
}

#[test]
fn report_formats_as_a_percentage() {
    let report = SimulationReport {
        target: Target::Straight,
        matches: 1000,
        count: 250_000,
    };
    assert_eq!(report.probability(), 0.4);
    assert_eq!(report.to_string(), "The probability of straight is 0.4%");
}
