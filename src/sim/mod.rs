//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; `dt` is always an explicit parameter
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The playfield is a torus: positions wrap modulo the world extents, there
//! is no boundary collision.

pub mod collision;
pub mod manager;
pub mod state;
pub mod tick;

pub use collision::{bullet_hits_asteroid, circles_overlap, ship_hits_asteroid};
pub use manager::{AsteroidField, BulletManager};
pub use state::{
    Asteroid, AsteroidPose, Bullet, BulletPose, GamePhase, GameState, Scene, Ship, ShipPose,
};
pub use tick::{TickInput, tick};
