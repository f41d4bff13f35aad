//! Toro Blast - an asteroid shooter on a toroidal playfield
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! The presentation adapter (window, keyboard, frame pacing) is a thin
//! external collaborator: it samples input into a [`sim::TickInput`], calls
//! [`sim::tick`] once per fixed step, and reads [`sim::GameState::scene`]
//! to draw. The shipped binary is a headless demo adapter.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the frame timer)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions (a torus: edges are identified)
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 10.0;
    /// Turn rate in radians per second
    pub const SHIP_TURN_RATE: f32 = 3.5;
    /// Thrust acceleration in pixels per second squared
    pub const SHIP_THRUST: f32 = 180.0;
    /// Speed clamp so thrust-holding stays controllable
    pub const SHIP_MAX_SPEED: f32 = 260.0;

    /// Bullet defaults
    ///
    /// Muzzle speed is added to the ship's velocity along its heading.
    pub const BULLET_MUZZLE_SPEED: f32 = 320.0;
    /// Bullet lifetime in ticks (~1.2 s at 60 Hz)
    pub const BULLET_LIFETIME_TICKS: u32 = 72;
    /// Minimum ticks between shots
    pub const FIRE_COOLDOWN_TICKS: u32 = 12;
    /// In-flight bullet cap
    pub const MAX_BULLETS: usize = 4;

    /// Asteroid defaults
    pub const ASTEROID_RADII: [f32; 3] = [12.0, 20.0, 32.0];
    pub const ASTEROID_MIN_SPEED: f32 = 20.0;
    pub const ASTEROID_MAX_SPEED: f32 = 70.0;
    /// Minimum spawn distance from the ship (no spawn-kills)
    pub const SPAWN_CLEARANCE: f32 = 120.0;

    /// Starting lives; the game ends when lives goes below zero
    pub const START_LIVES: i32 = 3;
}

/// Unit heading vector in the XY plane for the given angle (radians)
///
/// Spatial state is `Vec3` with z carried but unused by the 2D gameplay,
/// which keeps `cross`/`dot` available for a 3D extension.
#[inline]
pub fn heading_vector(angle: f32) -> Vec3 {
    Vec3::new(angle.cos(), angle.sin(), 0.0)
}

/// Wrap a coordinate into `[0, extent)` (Euclidean modulo)
///
/// Total for any finite input, including values more than one extent
/// outside the range.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can return `extent` itself when value is a tiny negative
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a position's x and y into the world rectangle; z passes through
#[inline]
pub fn wrap_position(pos: Vec3, size: Vec3) -> Vec3 {
    Vec3::new(
        wrap_coordinate(pos.x, size.x),
        wrap_coordinate(pos.y, size.y),
        pos.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_coordinate_range() {
        assert_relative_eq!(wrap_coordinate(0.0, 500.0), 0.0);
        assert_relative_eq!(wrap_coordinate(499.9, 500.0), 499.9);
        assert_relative_eq!(wrap_coordinate(500.0, 500.0), 0.0);
        assert_relative_eq!(wrap_coordinate(512.5, 500.0), 12.5);
        assert_relative_eq!(wrap_coordinate(-10.0, 500.0), 490.0);
        assert_relative_eq!(wrap_coordinate(-1010.0, 500.0), 490.0);
    }

    #[test]
    fn test_heading_vector_is_planar_unit() {
        use std::f32::consts::FRAC_PI_2;

        let east = heading_vector(0.0);
        assert_relative_eq!(east.x, 1.0);
        assert_relative_eq!(east.y, 0.0);
        assert_relative_eq!(east.z, 0.0);

        let north = heading_vector(FRAC_PI_2);
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(north.y, 1.0);
        assert_relative_eq!(north.length(), 1.0, epsilon = 1e-6);
    }

    /// Componentwise add/subtract must be independent in x and y.
    ///
    /// Guards against the classic copy-paste slip where the y term is
    /// computed from the wrong operand.
    #[test]
    fn test_vector_componentwise_contract() {
        let a = Vec3::new(3.0, 5.0, 7.0);
        let b = Vec3::new(11.0, 13.0, 17.0);

        assert_eq!(a + b, Vec3::new(14.0, 18.0, 24.0));
        assert_eq!(a - b, Vec3::new(-8.0, -8.0, -10.0));

        // y result depends on b.y, not a.y
        let b2 = Vec3::new(11.0, 100.0, 17.0);
        assert_ne!((a + b).y, (a + b2).y);
    }

    #[test]
    fn test_squared_magnitude_avoids_sqrt() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(v.length_squared(), 25.0);
        // dot with self is the same quantity
        assert_relative_eq!(v.dot(v), v.length_squared());
    }

    #[test]
    fn test_cross_product_definition() {
        let x = Vec3::X;
        let y = Vec3::Y;
        assert_eq!(x.cross(y), Vec3::Z);
        assert_eq!(y.cross(x), -Vec3::Z);
    }
}
