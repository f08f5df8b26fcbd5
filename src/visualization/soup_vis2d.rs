use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::integrator::step_soup;
use crate::simulation::render::{Canvas, ParticleSnapshot};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Phase};

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} creatures",
        scenario.soup.creatures.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_camera_system)
        .add_systems(Update, (viewport_resize_system, soup_step_system))
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());
}

/// Keep the engine viewport in sync with the window so spawning and culling
/// track resizes.
fn viewport_resize_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    if let Ok(window) = windows.get_single() {
        scenario.engine.width = window.width() as f64;
        scenario.engine.height = window.height() as f64;
    }
}

/// Canvas backed by Bevy gizmos. The simulation uses a top-left origin with
/// y down; Bevy centers the camera with y up, so positions are remapped here.
struct GizmoCanvas<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    width: f32,
    height: f32,
}

impl GizmoCanvas<'_, '_, '_> {
    fn to_screen(&self, p: NVec2) -> Vec2 {
        Vec2::new(
            p.x as f32 - self.width * 0.5,
            self.height * 0.5 - p.y as f32,
        )
    }
}

impl Canvas for GizmoCanvas<'_, '_, '_> {
    fn draw_spring(&mut self, a: NVec2, b: NVec2) {
        self.gizmos.line_2d(
            self.to_screen(a),
            self.to_screen(b),
            Color::rgba(1.0, 1.0, 1.0, 0.05),
        );
    }

    fn draw_particle(&mut self, particle: &ParticleSnapshot) {
        let center = self.to_screen(particle.position);
        let radius = particle.radius as f32;
        let (r, g, b) = particle.colour.rgb();

        self.gizmos.circle_2d(center, radius, Color::rgb_u8(r, g, b));

        // Faint white halo whose alpha and size grow with speed
        let a = particle.speed_sq as f32;
        let alpha = 0.02 + (a * 0.0008).min(0.5);
        let halo = radius + 5.0 + a.min(60.0) * 0.25;
        self.gizmos
            .circle_2d(center, halo, Color::rgba(1.0, 1.0, 1.0, alpha));

        // Short heading tick so the travel direction is visible
        let dir = Vec2::new(particle.heading.cos() as f32, -(particle.heading.sin() as f32));
        self.gizmos.line_2d(
            center,
            center + dir * radius * 1.2,
            Color::rgba(1.0, 1.0, 1.0, alpha),
        );
    }
}

fn soup_step_system(mut scenario: ResMut<Scenario>, mut gizmos: Gizmos) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        engine,
        parameters,
        soup,
        rng,
    } = &mut *scenario;

    let mut canvas = GizmoCanvas {
        gizmos: &mut gizmos,
        width: engine.width as f32,
        height: engine.height as f32,
    };

    let ran = step_soup(soup, engine, parameters, rng, &mut canvas);

    // Gizmos clear every frame, so physics frames redraw the current state
    // instead of leaving the screen blank between draw phases.
    if ran == Phase::Update {
        for creature in &soup.creatures {
            creature.draw(&mut canvas);
        }
    }
}
