//! Fixed timestep simulation tick
//!
//! Advances the game deterministically. The adapter samples held keys into
//! a [`TickInput`] and calls [`tick`] once per timer step; control input is
//! applied before integration so it is visible to the same tick.

use super::collision::{bullet_hits_asteroid, ship_hits_asteroid};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
///
/// An explicit value instead of a process-wide keyboard snapshot, so the
/// sim has no lifetime coupling to any windowing library.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Turn counter-clockwise
    pub rotate_left: bool,
    /// Turn clockwise
    pub rotate_right: bool,
    /// Thrust along the heading
    pub thrust: bool,
    /// Retro-thrust against the heading
    pub retro: bool,
    /// Fire (rate-limited; holding is fine)
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
///
/// Order matters and defines the tie-breaks:
/// controls, integration, bullet hits, ship hits, cull, repopulate,
/// game-over check.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Controls mutate immediately so this tick's integration sees them
    if input.rotate_left {
        state.rotate_ship_left(dt);
    }
    if input.rotate_right {
        state.rotate_ship_right(dt);
    }
    if input.thrust {
        state.accelerate_ship(dt);
    }
    if input.retro {
        state.decelerate_ship(dt);
    }
    if input.fire {
        state.shoot_bullet();
    }

    // Integrate and wrap everything
    state.ship.integrate(dt, state.size);
    state.asteroids.step_all(dt, state.size);
    state.bullets.step_all(dt, state.size);

    resolve_bullet_hits(state);
    resolve_ship_hit(state);

    // Compact after resolution; nothing holds an index past this point
    state.asteroids.cull();
    state.bullets.cull();

    // Keep the field populated
    if state.asteroids.is_cleared() {
        state.spawn_asteroid();
    }

    if state.lives < 0 {
        log::info!("game over after {} ticks", state.time_ticks);
        state.phase = GamePhase::GameOver;
    }
}

/// Bullet-asteroid resolution
///
/// Each bullet destroys at most one asteroid; a dead asteroid is skipped,
/// so a second overlapping bullet the same tick is a no-op against it.
fn resolve_bullet_hits(state: &mut GameState) {
    for bullet in state.bullets.entries_mut() {
        if !bullet.alive {
            continue;
        }
        for asteroid in state.asteroids.entries_mut() {
            if !asteroid.alive {
                continue;
            }
            if bullet_hits_asteroid(bullet.position, asteroid.position, asteroid.radius) {
                bullet.alive = false;
                asteroid.alive = false;
                log::debug!(
                    "asteroid destroyed at ({:.1}, {:.1})",
                    asteroid.position.x,
                    asteroid.position.y
                );
                break;
            }
        }
    }
}

/// Ship-asteroid resolution: at most one hit per tick
///
/// A hit costs a life, destroys the asteroid, and respawns the ship at the
/// world center with zero velocity (heading kept).
fn resolve_ship_hit(state: &mut GameState) {
    let ship_radius = state.tuning.ship_radius;
    for asteroid in state.asteroids.entries_mut() {
        if !asteroid.alive {
            continue;
        }
        if ship_hits_asteroid(
            state.ship.position,
            ship_radius,
            asteroid.position,
            asteroid.radius,
        ) {
            asteroid.alive = false;
            state.lives -= 1;
            state.ship.respawn(state.size);
            log::info!("ship hit, {} lives remaining", state.lives);
            break;
        }
    }
}
