use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::trajectory::Trajectory;

/// Marker for the ball entity
#[derive(Component)]
struct Ball;

/// Playback cursor over a finished trajectory
///
/// The trajectory is computed eagerly before the app starts; this resource
/// only paces which prefix of it is shown each frame
#[derive(Resource)]
struct Playback {
    trajectory: Trajectory,
    index: usize, // current sample shown
    timer: Timer, // fixed-rate frame scheduler
}

/// Precomputed screen-space polyline of the static curve backdrop
#[derive(Resource)]
struct Backdrop(Vec<Vec2>);

const SCALE: f32 = 50.0;
const BALL_RADIUS: f32 = 6.0;
const BACKDROP_SAMPLES: usize = 500;
const BACKDROP_PADDING: f64 = 1.0;

pub fn run_viewer(scenario: Scenario, trajectory: Trajectory) {
    println!("run_viewer: starting Bevy 2D viewer with {} trajectory samples", trajectory.len());

    let backdrop = sample_backdrop(&scenario, &trajectory);

    // One trajectory sample per playback frame, at the configured rate
    let frame_period = (1.0 / scenario.engine.fps.max(1.0)) as f32;
    let playback = Playback {
        trajectory,
        index: 0,
        timer: Timer::from_seconds(frame_period, TimerMode::Repeating),
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(playback)
        .insert_resource(backdrop)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_viewer_system)
        .add_systems(Update, (advance_playback_system, draw_curve_system, sync_ball_system))
        .run();
}

/// Sample the curve across the trajectory's x-range, padded so a mass that
/// never leaves its equilibrium still gets a visible backdrop
fn sample_backdrop(scenario: &Scenario, trajectory: &Trajectory) -> Backdrop {
    let (lo, hi) = trajectory.x_range();
    let lo = lo - BACKDROP_PADDING;
    let hi = hi + BACKDROP_PADDING;

    let step = (hi - lo) / (BACKDROP_SAMPLES - 1) as f64;
    let xs: Vec<f64> = (0..BACKDROP_SAMPLES).map(|i| lo + i as f64 * step).collect();
    let ys = scenario.curve.evaluate_many(&xs);

    let points = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| Vec2::new(x as f32 * SCALE, y as f32 * SCALE))
        .collect();

    Backdrop(points)
}

fn setup_viewer_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // The ball starts at sample 0; drawn above the gizmo lines
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(BALL_RADIUS))),
            material: materials.add(ColorMaterial::from(Color::srgb(0.2, 0.8, 0.3))),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..Default::default()
        },
        Ball,
    ));
}

fn advance_playback_system(time: Res<Time>, scenario: Res<Scenario>, mut playback: ResMut<Playback>) {
    playback.timer.tick(time.delta());

    let steps = playback.timer.times_finished_this_tick() as usize;
    if steps == 0 {
        return;
    }

    let len = playback.trajectory.len();
    if scenario.engine.loop_playback {
        playback.index = (playback.index + steps) % len;
    } else {
        playback.index = (playback.index + steps).min(len - 1);
    }
}

fn draw_curve_system(mut gizmos: Gizmos, scenario: Res<Scenario>, playback: Res<Playback>, backdrop: Res<Backdrop>) {
    // Static curve backdrop
    gizmos.linestrip_2d(backdrop.0.iter().copied(), Color::srgb(0.3, 0.5, 0.9));

    // Path traced so far: prefix [0..=index], y derived through the curve
    let trail = playback.trajectory.points()[..=playback.index].iter().map(|p| {
        let y = scenario.curve.evaluate(p.x);
        Vec2::new(p.x as f32 * SCALE, y as f32 * SCALE)
    });
    gizmos.linestrip_2d(trail, Color::srgb(0.9, 0.25, 0.2));
}

fn sync_ball_system(scenario: Res<Scenario>, playback: Res<Playback>, mut query: Query<&mut Transform, With<Ball>>) {
    if let Some(pos) = playback.trajectory.position(playback.index, scenario.curve) {
        for mut transform in &mut query {
            transform.translation.x = pos.x as f32 * SCALE;
            transform.translation.y = pos.y as f32 * SCALE;
        }
    }
}
