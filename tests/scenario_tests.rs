use approx::assert_relative_eq;

use solsim::{ConfigError, Dimension, ScenarioConfig, SimulationState};

const EARTH_SUN: &str = r#"
engine:
  time_scale: 3.0

bodies:
  - name: Sun
    mass: 1.989e30
    radius: 6.9634e8
    x: [0.0, 0.0]
    v: [0.0, 0.0]
    anchor: true
    visual_radius: 20.0
    color: { r: 255, g: 255, b: 0 }
  - name: Earth
    mass: 5.972e24
    radius: 6.371e6
    x: [149.6, 0.0]
    v: [0.0, 2.9789e-5]
"#;

fn body_yaml(name: &str, mass: &str, x: &str) -> String {
    format!("  - name: {name}\n    mass: {mass}\n    radius: 1.0e6\n    x: {x}\n    v: [0.0, 0.0]\n")
}

#[test]
fn parses_bodies_and_engine() {
    let cfg = ScenarioConfig::from_yaml_str(EARTH_SUN).unwrap();
    assert_eq!(cfg.bodies.len(), 2);
    assert!(cfg.bodies[0].anchor);
    assert!(!cfg.bodies[1].anchor);

    let sim = SimulationState::from_config(&cfg);
    assert_eq!(sim.body_count(), 2);
    assert!(sim.central_body().unwrap().is_anchor());
    assert_eq!(sim.time_scale(), 3.0);
    assert!(!sim.is_spatial_mode());
    assert_eq!(sim.initial_conditions().len(), 2);

    let sun = sim.find_body("Sun").unwrap();
    assert_eq!(sun.visual_radius, 20.0);
    assert_eq!((sun.color.r, sun.color.g, sun.color.b), (255, 255, 0));
}

#[test]
fn empty_bodies_fall_back_to_solar_system() {
    let cfg = ScenarioConfig::from_yaml_str("engine:\n  spatial: true\n  paused: true\n").unwrap();
    let sim = SimulationState::from_config(&cfg);

    assert_eq!(sim.body_count(), 17);
    assert!(sim.is_spatial_mode());
    assert!(sim.is_paused());
    assert_eq!(sim.engine().dimension, Dimension::Spatial);
}

#[test]
fn parameter_overrides_apply() {
    let src = "parameters:\n  time_scale_max: 4.0\n  spatial_damping: 0.25\nengine:\n  time_scale: 100.0\n";
    let cfg = ScenarioConfig::from_yaml_str(src).unwrap();
    let sim = SimulationState::from_config(&cfg);

    assert_eq!(sim.parameters().spatial_damping, 0.25);
    assert_eq!(sim.parameters().time_scale_min, 0.1);
    assert_eq!(sim.time_scale(), 4.0);
}

#[test]
fn spatial_scenario_keeps_z() {
    let src = format!(
        "engine:\n  spatial: true\nbodies:\n{}{}",
        body_yaml("Sun", "1.989e30", "[0.0, 0.0, 0.0]"),
        body_yaml("Probe", "1.0e3", "[10.0, 0.0, 2.5]"),
    );
    let cfg = ScenarioConfig::from_yaml_str(&src).unwrap();
    let sim = SimulationState::from_config(&cfg);

    assert_relative_eq!(sim.bodies()[1].x.z, 2.5);
}

#[test]
fn planar_scenario_flattens_z() {
    let src = format!(
        "bodies:\n{}{}",
        body_yaml("Sun", "1.989e30", "[0.0, 0.0]"),
        body_yaml("Probe", "1.0e3", "[10.0, 0.0, 2.5]"),
    );
    let cfg = ScenarioConfig::from_yaml_str(&src).unwrap();
    let sim = SimulationState::from_config(&cfg);

    assert_eq!(sim.bodies()[1].x.z, 0.0);
    assert_eq!(sim.initial_conditions()[1].x.z, 0.0);
}

#[test]
fn rejects_wrong_dimension() {
    let src = format!("bodies:\n{}", body_yaml("Sun", "1.989e30", "[0.0]"));
    let err = ScenarioConfig::from_yaml_str(&src).unwrap_err();
    assert!(matches!(err, ConfigError::Dimension { field: "x", len: 1, .. }), "{err}");
}

#[test]
fn rejects_non_positive_mass() {
    let src = format!("bodies:\n{}", body_yaml("Dust", "-1.0", "[0.0, 0.0]"));
    let err = ScenarioConfig::from_yaml_str(&src).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositive { field: "mass", .. }), "{err}");
}

#[test]
fn rejects_duplicate_names() {
    let src = format!(
        "bodies:\n{}{}",
        body_yaml("Io", "1.0e22", "[0.0, 0.0]"),
        body_yaml("Io", "1.0e22", "[1.0, 0.0]"),
    );
    let err = ScenarioConfig::from_yaml_str(&src).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateName(ref name) if name == "Io"), "{err}");
}

#[test]
fn rejects_bad_time_scale_bounds() {
    let err = ScenarioConfig::from_yaml_str("parameters:\n  time_scale_min: 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::TimeScaleBounds { .. }), "{err}");

    let err = ScenarioConfig::from_yaml_str("parameters:\n  time_scale_min: 5.0\n  time_scale_max: 1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::TimeScaleBounds { .. }), "{err}");
}

#[test]
fn rejects_out_of_range_parameters() {
    for (src, expected) in [
        ("parameters:\n  spatial_damping: -0.1\n", "spatial_damping"),
        ("parameters:\n  spatial_damping: 0.0\n", "spatial_damping"),
        ("parameters:\n  min_separation: .nan\n", "min_separation"),
        ("parameters:\n  min_separation: -1.0\n", "min_separation"),
        ("parameters:\n  previous_step: -0.016\n", "previous_step"),
        ("parameters:\n  previous_step: .inf\n", "previous_step"),
    ] {
        let err = ScenarioConfig::from_yaml_str(src).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { field, .. } if field == expected), "{src}: {err}");
    }
}

#[test]
fn rejects_non_finite_body_state() {
    let src = format!("bodies:\n{}", body_yaml("Ghost", "1.0e22", "[.nan, 0.0]"));
    let err = ScenarioConfig::from_yaml_str(&src).unwrap_err();
    assert!(matches!(err, ConfigError::NonFinite { field: "x", .. }), "{err}");

    let src = "bodies:\n  - name: Ghost\n    mass: 1.0e22\n    radius: 1.0e6\n    x: [1.0, 0.0]\n    v: [0.0, .inf, 0.0]\n";
    let err = ScenarioConfig::from_yaml_str(src).unwrap_err();
    assert!(matches!(err, ConfigError::NonFinite { field: "v", .. }), "{err}");
}

#[test]
fn rejects_malformed_yaml() {
    let err = ScenarioConfig::from_yaml_str("bodies: [unterminated").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)), "{err}");
}

#[test]
fn missing_file_is_io_error() {
    let err = ScenarioConfig::from_path("scenarios/does_not_exist.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}

#[test]
fn shipped_scenarios_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["solar_system.yaml", "earth_sun.yaml", "inclined.yaml"] {
        let cfg = ScenarioConfig::from_path(dir.join(name)).unwrap();
        let mut sim = SimulationState::from_config(&cfg);
        let e0 = sim.total_energy();
        for _ in 0..60 {
            sim.step(1.0 / 60.0);
        }
        assert!(sim.total_energy().is_finite(), "{name} blew up");
        assert!(e0 < 0.0, "{name} should start bound");
    }
}

#[test]
fn reset_after_config_restores_scenario() {
    let cfg = ScenarioConfig::from_yaml_str(EARTH_SUN).unwrap();
    let mut sim = SimulationState::from_config(&cfg);
    let x0 = sim.bodies()[1].x;

    for _ in 0..30 {
        sim.step(0.1);
    }
    assert_ne!(sim.bodies()[1].x, x0);

    sim.reset();
    assert_eq!(sim.bodies()[1].x, x0);
}
