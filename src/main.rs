//! Headless demo adapter
//!
//! Stands in for a windowing toolkit: runs the fixed-timestep loop with a
//! small autopilot in place of polled keys and logs the scene instead of
//! drawing it. Exits 0 on game over or tick cap, 1 if a tuning override is
//! present but unreadable.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;

use toro_blast::consts::SIM_DT;
use toro_blast::sim::{GamePhase, GameState, TickInput, tick};
use toro_blast::tuning::Tuning;

/// Demo length cap (2 minutes of simulated time)
const MAX_TICKS: u64 = 120 * 60;

/// Shortest signed displacement from `from` to `to` on a wrapped axis
fn wrapped_delta(from: f32, to: f32, extent: f32) -> f32 {
    (to - from + extent / 2.0).rem_euclid(extent) - extent / 2.0
}

/// Point the ship at the nearest asteroid and shoot at it
///
/// Aims along the shortest toroidal displacement, fires when roughly
/// aligned, and thrusts when the target is far. Modeled on holding keys, so
/// every field is a plain "is the key down" flag.
fn autopilot(state: &GameState) -> TickInput {
    let ship = &state.ship;
    let nearest = state.asteroids.iter_live().min_by(|a, b| {
        let da = toroidal_distance_sq(ship.position, a.position, state.size);
        let db = toroidal_distance_sq(ship.position, b.position, state.size);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    let Some(target) = nearest else {
        return TickInput::default();
    };

    let dx = wrapped_delta(ship.position.x, target.position.x, state.size.x);
    let dy = wrapped_delta(ship.position.y, target.position.y, state.size.y);
    let desired = dy.atan2(dx);

    // Shortest turn toward the target heading
    let mut error = desired - ship.angle;
    while error > std::f32::consts::PI {
        error -= std::f32::consts::TAU;
    }
    while error < -std::f32::consts::PI {
        error += std::f32::consts::TAU;
    }

    TickInput {
        rotate_left: error > 0.05,
        rotate_right: error < -0.05,
        thrust: dx * dx + dy * dy > 200.0 * 200.0 && error.abs() < 0.5,
        retro: false,
        fire: error.abs() < 0.2,
    }
}

fn toroidal_distance_sq(a: Vec3, b: Vec3, size: Vec3) -> f32 {
    let dx = wrapped_delta(a.x, b.x, size.x);
    let dy = wrapped_delta(a.y, b.y, size.y);
    dx * dx + dy * dy
}

fn main() {
    env_logger::init();

    // Optional balance override next to the binary; absence is the default
    let tuning_path = std::path::Path::new("tuning.json");
    let tuning = if tuning_path.exists() {
        match Tuning::load(tuning_path) {
            Ok(tuning) => {
                log::info!("loaded tuning overrides from {}", tuning_path.display());
                tuning
            }
            Err(err) => {
                log::error!("could not load {}: {err}", tuning_path.display());
                std::process::exit(1);
            }
        }
    } else {
        Tuning::default()
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Toro Blast demo starting, seed {seed}");

    let mut state = GameState::with_tuning(seed, tuning);

    while state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        if state.phase == GamePhase::GameOver {
            break;
        }

        // One status line per simulated second
        if state.time_ticks % 60 == 0 {
            let scene = state.scene();
            log::info!(
                "t={:>4}s lives={} ship=({:6.1},{:6.1}) asteroids={} bullets={}",
                state.time_ticks / 60,
                state.lives,
                scene.ship.position.x,
                scene.ship.position.y,
                scene.asteroids.len(),
                scene.bullets.len(),
            );
        }
    }

    match state.phase {
        GamePhase::GameOver => log::info!(
            "game over after {:.1}s",
            state.time_ticks as f32 * SIM_DT
        ),
        GamePhase::Running => log::info!("demo tick cap reached, exiting"),
    }
}
