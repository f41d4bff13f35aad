//! Game state and core simulation types
//!
//! All state needed to advance or draw a game lives here. Spatial state is
//! `Vec3` with z carried but unused by the 2D gameplay.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::manager::{AsteroidField, BulletManager};
use crate::tuning::Tuning;
use crate::{heading_vector, wrap_position};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; ticks are no-ops
    GameOver,
}

/// The player's ship
///
/// Exactly one per game, owned by [`GameState`]. Collisions cost lives and
/// respawn the ship; the entity itself is never destroyed.
#[derive(Debug, Clone)]
pub struct Ship {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Heading in radians; 0 points along +x
    pub angle: f32,
}

impl Ship {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
        }
    }

    pub fn rotate_left(&mut self, turn_rate: f32, dt: f32) {
        self.angle += turn_rate * dt;
    }

    pub fn rotate_right(&mut self, turn_rate: f32, dt: f32) {
        self.angle -= turn_rate * dt;
    }

    /// Add thrust along the current heading, clamped to `max_speed`
    pub fn accelerate(&mut self, thrust: f32, max_speed: f32, dt: f32) {
        self.velocity += heading_vector(self.angle) * thrust * dt;
        self.clamp_speed(max_speed);
    }

    /// Retro-thrust against the current heading, clamped to `max_speed`
    pub fn decelerate(&mut self, thrust: f32, max_speed: f32, dt: f32) {
        self.velocity -= heading_vector(self.angle) * thrust * dt;
        self.clamp_speed(max_speed);
    }

    fn clamp_speed(&mut self, max_speed: f32) {
        let speed_sq = self.velocity.length_squared();
        if speed_sq > max_speed * max_speed {
            self.velocity *= max_speed / speed_sq.sqrt();
        }
    }

    /// Advance position by one step and wrap into the world rectangle
    pub fn integrate(&mut self, dt: f32, size: Vec3) {
        self.position = wrap_position(self.position + self.velocity * dt, size);
    }

    /// Put the ship back at the world center, dead in space
    pub fn respawn(&mut self, size: Vec3) {
        self.position = Vec3::new(size.x / 2.0, size.y / 2.0, 0.0);
        self.velocity = Vec3::ZERO;
    }
}

/// A drifting asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Collision and drawing radius
    pub radius: f32,
    /// Visual rotation (radians)
    pub angle: f32,
    /// Visual rotation rate (radians per second)
    pub spin: f32,
    /// Cleared during resolution, compacted by the field afterwards
    pub alive: bool,
}

impl Asteroid {
    pub fn new(position: Vec3, velocity: Vec3, radius: f32, spin: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            angle: 0.0,
            spin,
            alive: true,
        }
    }

    pub fn integrate(&mut self, dt: f32, size: Vec3) {
        self.position = wrap_position(self.position + self.velocity * dt, size);
        self.angle += self.spin * dt;
    }
}

/// A fired projectile
#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining lifetime; the bullet dies when this reaches zero
    pub ttl_ticks: u32,
    pub alive: bool,
}

impl Bullet {
    pub fn new(position: Vec3, velocity: Vec3, ttl_ticks: u32) -> Self {
        Self {
            position,
            velocity,
            ttl_ticks,
            alive: true,
        }
    }

    pub fn integrate(&mut self, dt: f32, size: Vec3) {
        self.position = wrap_position(self.position + self.velocity * dt, size);
        self.ttl_ticks = self.ttl_ticks.saturating_sub(1);
        if self.ttl_ticks == 0 {
            self.alive = false;
        }
    }
}

/// Read-only drawing data for the presentation adapter
#[derive(Debug, Clone)]
pub struct Scene {
    pub ship: ShipPose,
    pub asteroids: Vec<AsteroidPose>,
    pub bullets: Vec<BulletPose>,
}

#[derive(Debug, Clone, Copy)]
pub struct ShipPose {
    pub position: Vec3,
    pub angle: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct AsteroidPose {
    pub position: Vec3,
    pub angle: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct BulletPose {
    pub position: Vec3,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// World extents; edges are identified (the playfield is a torus)
    pub size: Vec3,
    pub ship: Ship,
    pub asteroids: AsteroidField,
    pub bullets: BulletManager,
    /// Goes below zero exactly once, ending the run
    pub lives: i32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with default tuning: ship centered, one asteroid
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let size = Vec3::new(tuning.world_width, tuning.world_height, 0.0);
        let center = Vec3::new(size.x / 2.0, size.y / 2.0, 0.0);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.start_lives,
            tuning,
            size,
            ship: Ship::new(center, Vec3::ZERO),
            asteroids: AsteroidField::default(),
            bullets: BulletManager::default(),
            phase: GamePhase::Running,
            time_ticks: 0,
        };
        state.spawn_asteroid();
        state
    }

    /// Seed a fresh asteroid away from the ship
    pub fn spawn_asteroid(&mut self) {
        self.asteroids.spawn(
            &mut self.rng,
            self.size,
            self.ship.position,
            &self.tuning,
        );
    }

    pub fn rotate_ship_left(&mut self, dt: f32) {
        self.ship.rotate_left(self.tuning.ship_turn_rate, dt);
    }

    pub fn rotate_ship_right(&mut self, dt: f32) {
        self.ship.rotate_right(self.tuning.ship_turn_rate, dt);
    }

    pub fn accelerate_ship(&mut self, dt: f32) {
        self.ship
            .accelerate(self.tuning.ship_thrust, self.tuning.ship_max_speed, dt);
    }

    pub fn decelerate_ship(&mut self, dt: f32) {
        self.ship
            .decelerate(self.tuning.ship_thrust, self.tuning.ship_max_speed, dt);
    }

    /// Attempt to fire; silently no-ops while rate-limited
    pub fn shoot_bullet(&mut self) {
        self.bullets.shoot(&self.ship, &self.tuning);
    }

    /// Snapshot the poses the renderer needs; never mutates
    pub fn scene(&self) -> Scene {
        Scene {
            ship: ShipPose {
                position: self.ship.position,
                angle: self.ship.angle,
                radius: self.tuning.ship_radius,
            },
            asteroids: self
                .asteroids
                .iter_live()
                .map(|a| AsteroidPose {
                    position: a.position,
                    angle: a.angle,
                    radius: a.radius,
                })
                .collect(),
            bullets: self
                .bullets
                .iter_live()
                .map(|b| BulletPose {
                    position: b.position,
                })
                .collect(),
        }
    }
}
