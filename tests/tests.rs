use soupsim::{
    integrate, step_creature, step_soup, Canvas, Colour, Creature, Engine, EngineConfig, NVec2,
    NullCanvas, Parameters, ParametersConfig, Particle, Phase, Scenario, ScenarioConfig, Soup,
    Spring, Wanderer,
};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Spawn parameters matching the default scenario
pub fn test_params() -> Parameters {
    Parameters {
        seed: 42,
        particles_min: 4,
        particles_max: 9,
        mass_min: 0.4,
        mass_max: 1.6,
        radius_min: 2.0,
        radius_max: 10.0,
        anchor_boost: 15.0,
        rest_max: 20.0,
        stiffness_min: 0.01,
        stiffness_max: 0.11,
        spring_damping_min: 0.01,
        spring_damping_max: 0.11,
        long_rest_max: 180.0,
        second_spring_chance: 0.5,
        default_stiffness: 0.1,
        default_damping: 0.01,
        wander_min: 0.25,
        wander_max: 2.75,
        speed_min: 0.25,
        speed_max: 1.25,
    }
}

/// Engine with a 1280x720 viewport
pub fn test_engine(population: usize) -> Engine {
    Engine {
        population,
        width: 1280.0,
        height: 720.0,
    }
}

/// Full YAML-facing config mirroring the default scenario
pub fn test_config() -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            population: 15,
            width: 1280.0,
            height: 720.0,
        },
        parameters: ParametersConfig {
            seed: 42,
            particles_min: 4,
            particles_max: 9,
            mass_min: 0.4,
            mass_max: 1.6,
            radius_min: 2.0,
            radius_max: 10.0,
            anchor_boost: 15.0,
            rest_max: 20.0,
            stiffness_min: 0.01,
            stiffness_max: 0.11,
            spring_damping_min: 0.01,
            spring_damping_max: 0.11,
            long_rest_max: 180.0,
            second_spring_chance: 0.5,
            default_stiffness: 0.1,
            default_damping: 0.01,
            wander_min: 0.25,
            wander_max: 2.75,
            speed_min: 0.25,
            speed_max: 1.25,
        },
    }
}

/// Build an inert wanderer (no steering) at a given position
pub fn still_wanderer(x: f64, y: f64) -> Wanderer {
    Wanderer {
        body: Particle::new(NVec2::new(x, y), 1.0, 5.0, Colour::Cyan),
        heading: 0.0,
        wander_rate: 0.0,
        speed: 0.0,
    }
}

/// Hand-built creature from particle positions, no springs
pub fn hand_creature(positions: &[(f64, f64)]) -> Creature {
    let particles: Vec<Wanderer> = positions
        .iter()
        .map(|&(x, y)| still_wanderer(x, y))
        .collect();
    let origin = particles[0].body.pos;
    Creature {
        particles,
        springs: Vec::new(),
        origin,
        colour: Colour::Cyan,
        dead: false,
    }
}

/// Canvas that counts what reaches it
#[derive(Default)]
pub struct CountingCanvas {
    pub springs: usize,
    pub particles: usize,
}

impl Canvas for CountingCanvas {
    fn draw_spring(&mut self, _a: NVec2, _b: NVec2) {
        self.springs += 1;
    }

    fn draw_particle(&mut self, _particle: &soupsim::ParticleSnapshot) {
        self.particles += 1;
    }
}

// ==================================================================================
// Particle integration tests
// ==================================================================================

#[test]
fn fixed_particle_is_frozen() {
    let mut p = Particle::new(NVec2::new(3.0, 4.0), 2.0, 5.0, Colour::Red);
    p.fixed = true;
    p.vel = NVec2::new(1.0, -2.0);
    p.acc = NVec2::new(10.0, 10.0);

    integrate(&mut p);

    assert_eq!(p.pos, NVec2::new(3.0, 4.0));
    assert_eq!(p.vel, NVec2::new(1.0, -2.0));
}

#[test]
fn acceleration_resets_after_integration() {
    let mut p = Particle::new(NVec2::zeros(), 1.0, 5.0, Colour::Red);
    p.acc = NVec2::new(3.0, -4.0);

    integrate(&mut p);

    assert_eq!(p.acc, NVec2::zeros());
}

#[test]
fn drag_scales_velocity_by_exactly_0_9() {
    let mut p = Particle::new(NVec2::zeros(), 1.0, 5.0, Colour::Red);
    p.vel = NVec2::new(2.0, -4.0);

    integrate(&mut p);

    assert!((p.vel.x - 2.0 * 0.9).abs() < 1e-15);
    assert!((p.vel.y - (-4.0) * 0.9).abs() < 1e-15);
}

#[test]
fn acceleration_contributes_before_drag() {
    // mass 2 halves the accumulated force; position sees the undamped
    // velocity, drag applies only afterwards
    let mut p = Particle::new(NVec2::zeros(), 2.0, 5.0, Colour::Red);
    p.acc = NVec2::new(1.0, 0.0);

    integrate(&mut p);

    assert!((p.pos.x - 0.5).abs() < 1e-15);
    assert!((p.vel.x - 0.45).abs() < 1e-15);
}

// ==================================================================================
// Spring tests
// ==================================================================================

#[test]
fn coincident_endpoints_apply_no_force() {
    let mut particles = vec![still_wanderer(10.0, 10.0), still_wanderer(10.0, 10.0)];
    let spring = Spring::new(0, 1, 50.0, 0.1, 0.05);

    spring.apply(&mut particles);

    assert_eq!(particles[0].body.acc, NVec2::zeros());
    assert_eq!(particles[1].body.acc, NVec2::zeros());
}

#[test]
fn spring_at_rest_length_applies_no_force() {
    let mut particles = vec![still_wanderer(0.0, 0.0), still_wanderer(50.0, 0.0)];
    let spring = Spring::new(0, 1, 50.0, 0.1, 0.3);

    spring.apply(&mut particles);

    assert_eq!(particles[0].body.acc, NVec2::zeros());
    assert_eq!(particles[1].body.acc, NVec2::zeros());
}

#[test]
fn stretched_spring_pulls_along_axis() {
    // (100 - 50) * 0.1 = 5 before directional projection, along x only
    let mut particles = vec![still_wanderer(0.0, 0.0), still_wanderer(100.0, 0.0)];
    let spring = Spring::new(0, 1, 50.0, 0.1, 0.0);

    spring.apply(&mut particles);

    let a0 = particles[0].body.acc;
    let a1 = particles[1].body.acc;

    assert!((a0.x - 5.0).abs() < 1e-12, "expected +5 on x, got {}", a0.x);
    assert!((a1.x + 5.0).abs() < 1e-12, "expected -5 on x, got {}", a1.x);
    assert_eq!(a0.y, 0.0);
    assert_eq!(a1.y, 0.0);
}

#[test]
fn spring_forces_are_equal_and_opposite() {
    let mut particles = vec![still_wanderer(12.0, -3.0), still_wanderer(40.0, 55.0)];
    particles[0].body.vel = NVec2::new(1.0, 2.0);
    particles[1].body.vel = NVec2::new(-0.5, 0.25);
    let spring = Spring::new(0, 1, 10.0, 0.08, 0.04);

    spring.apply(&mut particles);

    let net = particles[0].body.acc + particles[1].body.acc;
    assert!(net.norm() < 1e-12, "net force not zero: {:?}", net);
    assert!(particles[0].body.acc.norm() > 0.0);
}

// ==================================================================================
// Creature tests
// ==================================================================================

#[test]
fn spawned_creature_has_valid_topology() {
    let params = test_params();
    let engine = test_engine(1);

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let creature = Creature::spawn(&engine, &params, &mut rng);

        let n = creature.particles.len();
        assert!((4..=9).contains(&n), "particle count {n} out of range");

        // n-1 mandatory springs plus up to n-1 optional ones
        assert!(creature.springs.len() >= n - 1);
        assert!(creature.springs.len() <= 2 * (n - 1));

        for s in &creature.springs {
            assert!(s.a < n && s.b < n, "spring endpoint outside creature");
            assert_ne!(s.a, s.b, "spring connects a particle to itself");
            assert!(s.rest_length >= 0.0);
        }

        // all particles start at the origin in the creature's colour
        for w in &creature.particles {
            assert_eq!(w.body.pos, creature.origin);
            assert_eq!(w.body.colour, creature.colour);
            assert!(w.body.mass > 0.0 && w.body.radius > 0.0);
        }
    }
}

#[test]
fn offscreen_creature_dies() {
    let engine = test_engine(1);
    let mut rng = StdRng::seed_from_u64(7);

    // entirely past the left edge, radius margin included
    let mut creature = hand_creature(&[(-5000.0, 300.0), (-4990.0, 310.0)]);
    step_creature(&mut creature, &engine, &mut rng);

    assert!(creature.dead);
}

#[test]
fn onscreen_creature_stays_alive() {
    let engine = test_engine(1);
    let mut rng = StdRng::seed_from_u64(7);

    let mut creature = hand_creature(&[(100.0, 100.0), (120.0, 110.0)]);
    step_creature(&mut creature, &engine, &mut rng);

    assert!(!creature.dead);
}

#[test]
fn draw_reports_springs_then_all_particles() {
    let params = test_params();
    let engine = test_engine(1);
    let mut rng = StdRng::seed_from_u64(3);
    let creature = Creature::spawn(&engine, &params, &mut rng);

    let mut canvas = CountingCanvas::default();
    creature.draw(&mut canvas);

    assert_eq!(canvas.particles, creature.particles.len());
    assert_eq!(canvas.springs, creature.springs.len());
}

#[test]
fn kill_releases_collections() {
    let params = test_params();
    let engine = test_engine(1);
    let mut rng = StdRng::seed_from_u64(3);
    let mut creature = Creature::spawn(&engine, &params, &mut rng);

    creature.kill();

    assert!(creature.particles.is_empty());
    assert!(creature.springs.is_empty());
}

// ==================================================================================
// Soup / phase tests
// ==================================================================================

#[test]
fn phases_alternate_strictly() {
    let params = test_params();
    let engine = test_engine(1);
    let mut rng = StdRng::seed_from_u64(11);

    let mut creature = hand_creature(&[(100.0, 100.0)]);
    creature.particles[0].body.vel = NVec2::new(5.0, 0.0);
    let mut soup = Soup::new(vec![creature]);

    for step in 0..6u64 {
        let before = soup.creatures[0].particles[0].body.pos;
        let mut canvas = CountingCanvas::default();

        let ran = step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);
        let after = soup.creatures[0].particles[0].body.pos;

        if step % 2 == 0 {
            assert_eq!(ran, Phase::Update);
            assert_ne!(before, after, "physics did not advance on update step");
            assert_eq!(canvas.particles, 0, "draw happened on an update step");
        } else {
            assert_eq!(ran, Phase::Draw);
            assert_eq!(before, after, "physics advanced on a draw step");
            assert_eq!(canvas.particles, 1);
        }
        assert_eq!(soup.tick, step + 1);
    }
}

#[test]
fn dead_creatures_are_recycled_on_update() {
    let params = test_params();
    let engine = test_engine(1);
    let mut rng = StdRng::seed_from_u64(13);

    let mut dead = hand_creature(&[(100.0, 100.0)]);
    dead.dead = true;
    let mut soup = Soup::new(vec![dead]);

    let mut canvas = NullCanvas;
    let ran = step_soup(&mut soup, &engine, &params, &mut rng, &mut canvas);

    assert_eq!(ran, Phase::Update);
    let replacement = &soup.creatures[0];
    assert!(!replacement.dead);
    assert!(replacement.particles.len() >= 4);
    assert!(replacement.origin.x >= 0.0 && replacement.origin.x <= engine.width);
    assert!(replacement.origin.y >= 0.0 && replacement.origin.y <= engine.height);
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn build_scenario_spawns_full_population() {
    let scenario = Scenario::build_scenario(test_config()).unwrap();

    assert_eq!(scenario.soup.creatures.len(), 15);
    assert_eq!(scenario.soup.phase, Phase::Update);
    assert_eq!(scenario.soup.tick, 0);
}

#[test]
fn build_scenario_rejects_non_positive_mass() {
    let mut cfg = test_config();
    cfg.parameters.mass_min = 0.0;

    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn build_scenario_rejects_non_positive_radius() {
    let mut cfg = test_config();
    cfg.parameters.radius_min = -1.0;

    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn build_scenario_rejects_bad_probability() {
    let mut cfg = test_config();
    cfg.parameters.second_spring_chance = 1.5;

    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn seeded_scenarios_are_reproducible() {
    let a = Scenario::build_scenario(test_config()).unwrap();
    let b = Scenario::build_scenario(test_config()).unwrap();

    for (ca, cb) in a.soup.creatures.iter().zip(b.soup.creatures.iter()) {
        assert_eq!(ca.origin, cb.origin);
        assert_eq!(ca.particles.len(), cb.particles.len());
        assert_eq!(ca.springs.len(), cb.springs.len());
        for (wa, wb) in ca.particles.iter().zip(cb.particles.iter()) {
            assert_eq!(wa.body.radius, wb.body.radius);
            assert_eq!(wa.body.mass, wb.body.mass);
        }
    }
}

#[test]
fn yaml_scenario_parses_and_builds() {
    let yaml = r#"
engine:
  population: 3
  width: 640.0
  height: 480.0

parameters:
  seed: 7
  particles_min: 4
  particles_max: 9
  mass_min: 0.4
  mass_max: 1.6
  radius_min: 2.0
  radius_max: 10.0
  anchor_boost: 15.0
  rest_max: 20.0
  stiffness_min: 0.01
  stiffness_max: 0.11
  spring_damping_min: 0.01
  spring_damping_max: 0.11
  long_rest_max: 180.0
  second_spring_chance: 0.5
  default_stiffness: 0.1
  default_damping: 0.01
  wander_min: 0.25
  wander_max: 2.75
  speed_min: 0.25
  speed_max: 1.25
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.soup.creatures.len(), 3);
    for creature in &scenario.soup.creatures {
        assert!(creature.origin.x <= 640.0 && creature.origin.y <= 480.0);
    }
}
