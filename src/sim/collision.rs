//! Collision detection for circular entities
//!
//! Everything is a circle, so overlap tests compare squared center distance
//! against squared combined radius. No square root on the hot path.

use glam::Vec3;

/// True when two circles at `a` and `b` overlap
///
/// `combined_radius` is the sum of both radii (a bullet is a point, so for
/// bullet-asteroid checks it is just the asteroid's radius).
#[inline]
pub fn circles_overlap(a: Vec3, b: Vec3, combined_radius: f32) -> bool {
    (a - b).length_squared() <= combined_radius * combined_radius
}

/// True when a point-sized bullet overlaps an asteroid of `radius`
#[inline]
pub fn bullet_hits_asteroid(bullet: Vec3, asteroid: Vec3, radius: f32) -> bool {
    circles_overlap(bullet, asteroid, radius)
}

/// True when the ship's hull overlaps an asteroid
#[inline]
pub fn ship_hits_asteroid(ship: Vec3, ship_radius: f32, asteroid: Vec3, radius: f32) -> bool {
    circles_overlap(ship, asteroid, ship_radius + radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_threshold() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(20.0, 0.0, 0.0);
        // Touching counts as a hit
        assert!(circles_overlap(a, b, 20.0));
        assert!(!circles_overlap(a, b, 19.9));
    }

    #[test]
    fn test_overlap_commutative() {
        let a = Vec3::new(3.0, 4.0, 0.0);
        let b = Vec3::new(-1.0, 7.5, 0.0);
        assert_eq!(circles_overlap(a, b, 6.0), circles_overlap(b, a, 6.0));
        assert_eq!(
            ship_hits_asteroid(a, 10.0, b, 20.0),
            ship_hits_asteroid(b, 10.0, a, 20.0)
        );
    }

    #[test]
    fn test_bullet_hit_uses_asteroid_radius_only() {
        let asteroid = Vec3::new(100.0, 100.0, 0.0);
        let inside = Vec3::new(100.0, 119.0, 0.0);
        let outside = Vec3::new(100.0, 121.0, 0.0);
        assert!(bullet_hits_asteroid(inside, asteroid, 20.0));
        assert!(!bullet_hits_asteroid(outside, asteroid, 20.0));
    }

    #[test]
    fn test_ship_hit_uses_combined_radius() {
        let ship = Vec3::new(0.0, 0.0, 0.0);
        let asteroid = Vec3::new(29.0, 0.0, 0.0);
        assert!(ship_hits_asteroid(ship, 10.0, asteroid, 20.0));
        let far = Vec3::new(31.0, 0.0, 0.0);
        assert!(!ship_hits_asteroid(ship, 10.0, far, 20.0));
    }
}
