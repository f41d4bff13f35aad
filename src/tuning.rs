//! Data-driven game balance
//!
//! Every gameplay constant the sim reads lives in [`Tuning`], so tests and
//! adapters can override values without recompiling. Defaults mirror
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants consumed by the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width in pixels
    pub world_width: f32,
    /// Playfield height in pixels
    pub world_height: f32,

    /// Ship collision radius (also the bullet nose offset)
    pub ship_radius: f32,
    /// Turn rate in radians per second
    pub ship_turn_rate: f32,
    /// Thrust acceleration in pixels per second squared
    pub ship_thrust: f32,
    /// Speed clamp applied after thrust
    pub ship_max_speed: f32,

    /// Speed added to a bullet along the ship's heading
    pub bullet_muzzle_speed: f32,
    /// Bullet lifetime in ticks
    pub bullet_lifetime_ticks: u32,
    /// Minimum ticks between shots
    pub fire_cooldown_ticks: u32,
    /// In-flight bullet cap
    pub max_bullets: usize,

    /// Size-tiered asteroid radii, drawn uniformly on spawn
    pub asteroid_radii: Vec<f32>,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    /// Minimum spawn distance from the ship
    pub spawn_clearance: f32,

    /// Starting lives; game over when lives goes below zero
    pub start_lives: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ship_radius: SHIP_RADIUS,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_thrust: SHIP_THRUST,
            ship_max_speed: SHIP_MAX_SPEED,
            bullet_muzzle_speed: BULLET_MUZZLE_SPEED,
            bullet_lifetime_ticks: BULLET_LIFETIME_TICKS,
            fire_cooldown_ticks: FIRE_COOLDOWN_TICKS,
            max_bullets: MAX_BULLETS,
            asteroid_radii: ASTEROID_RADII.to_vec(),
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            spawn_clearance: SPAWN_CLEARANCE,
            start_lives: START_LIVES,
        }
    }
}

/// Failure while loading a tuning override
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

impl Tuning {
    /// Parse a JSON override; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a JSON override from disk
    pub fn load(path: &std::path::Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(TuningError::Invalid("world dimensions must be positive"));
        }
        if self.asteroid_radii.is_empty() {
            return Err(TuningError::Invalid("asteroid_radii must be non-empty"));
        }
        if self.asteroid_min_speed > self.asteroid_max_speed {
            return Err(TuningError::Invalid(
                "asteroid_min_speed exceeds asteroid_max_speed",
            ));
        }
        if self.max_bullets == 0 {
            return Err(TuningError::Invalid("max_bullets must be at least one"));
        }
        // The farthest any spawn candidate can be from a centered ship is
        // half the world diagonal; a larger clearance leaves nowhere to spawn
        let half_diagonal = (self.world_width * self.world_width
            + self.world_height * self.world_height)
            .sqrt()
            / 2.0;
        if self.spawn_clearance > half_diagonal {
            return Err(TuningError::Invalid(
                "spawn_clearance exceeds the reachable distance from the ship",
            ));
        }
        Ok(())
    }
}
