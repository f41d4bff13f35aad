//! Entity collections
//!
//! Each manager exclusively owns the live entities of one kind. Collision
//! resolution clears `alive` flags; `cull` compacts afterwards, so no index
//! dangles mid-tick.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::{Asteroid, Bullet, Ship};
use crate::tuning::Tuning;
use crate::{heading_vector, wrap_position};

/// Position samples per spawn before settling for the farthest candidate
const MAX_SPAWN_ATTEMPTS: usize = 32;

/// The set of drifting asteroids
#[derive(Debug, Clone, Default)]
pub struct AsteroidField {
    asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    /// Place a new asteroid at a random position clear of the ship
    ///
    /// Heading and speed are randomized; radius is drawn uniformly from the
    /// tiered set. Positions are resampled until they are at least
    /// `spawn_clearance` from the ship, so a spawn can never be an instant
    /// kill. Sampling is bounded: if the clearance is unsatisfiable (a
    /// hand-built tuning can make it so), the farthest candidate seen wins
    /// rather than looping forever.
    pub fn spawn(&mut self, rng: &mut Pcg32, size: Vec3, ship_pos: Vec3, tuning: &Tuning) {
        let clearance_sq = tuning.spawn_clearance * tuning.spawn_clearance;
        let sample = |rng: &mut Pcg32| {
            Vec3::new(
                rng.random_range(0.0..size.x),
                rng.random_range(0.0..size.y),
                0.0,
            )
        };

        let mut position = sample(rng);
        let mut dist_sq = (position - ship_pos).length_squared();
        for _ in 1..MAX_SPAWN_ATTEMPTS {
            if dist_sq >= clearance_sq {
                break;
            }
            let candidate = sample(rng);
            let candidate_dist_sq = (candidate - ship_pos).length_squared();
            if candidate_dist_sq > dist_sq {
                position = candidate;
                dist_sq = candidate_dist_sq;
            }
        }

        let heading = rng.random_range(0.0..TAU);
        let speed = rng.random_range(tuning.asteroid_min_speed..=tuning.asteroid_max_speed);
        let radius = tuning.asteroid_radii[rng.random_range(0..tuning.asteroid_radii.len())];
        let spin = rng.random_range(-2.0..2.0);

        log::debug!(
            "spawning asteroid at ({:.1}, {:.1}) r={} speed={:.1}",
            position.x,
            position.y,
            radius,
            speed
        );
        self.asteroids
            .push(Asteroid::new(position, heading_vector(heading) * speed, radius, spin));
    }

    /// Integrate every live asteroid; order is irrelevant (asteroids don't
    /// interact with each other)
    pub fn step_all(&mut self, dt: f32, size: Vec3) {
        for asteroid in self.asteroids.iter_mut().filter(|a| a.alive) {
            asteroid.integrate(dt, size);
        }
    }

    /// Compact dead entries after collision resolution
    pub fn cull(&mut self) {
        self.asteroids.retain(|a| a.alive);
    }

    /// Stage a pre-built asteroid (scenario setup in adapters and tests)
    pub fn push(&mut self, asteroid: Asteroid) {
        self.asteroids.push(asteroid);
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| a.alive)
    }

    pub fn entries_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    pub fn live_count(&self) -> usize {
        self.asteroids.iter().filter(|a| a.alive).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.live_count() == 0
    }
}

/// The set of in-flight bullets, plus the fire-rate gate
#[derive(Debug, Clone, Default)]
pub struct BulletManager {
    bullets: Vec<Bullet>,
    /// Ticks until the next shot is allowed
    cooldown_ticks: u32,
}

impl BulletManager {
    /// Fire from the ship's nose; no-ops while rate-limited
    ///
    /// The bullet starts one ship radius ahead of the ship along its
    /// heading, wrapped in case the nose pokes past an edge, with velocity =
    /// ship velocity + muzzle speed along the heading.
    pub fn shoot(&mut self, ship: &Ship, tuning: &Tuning) {
        if self.cooldown_ticks > 0 || self.live_count() >= tuning.max_bullets {
            return;
        }

        let heading = heading_vector(ship.angle);
        // The nose can poke past an edge; wrap it like any other position
        let size = Vec3::new(tuning.world_width, tuning.world_height, 0.0);
        let nose = wrap_position(ship.position + heading * tuning.ship_radius, size);
        let velocity = ship.velocity + heading * tuning.bullet_muzzle_speed;
        self.bullets
            .push(Bullet::new(nose, velocity, tuning.bullet_lifetime_ticks));
        self.cooldown_ticks = tuning.fire_cooldown_ticks;
        log::trace!("bullet away at ({:.1}, {:.1})", nose.x, nose.y);
    }

    /// Integrate, wrap, and age every live bullet; tick down the cooldown
    pub fn step_all(&mut self, dt: f32, size: Vec3) {
        self.cooldown_ticks = self.cooldown_ticks.saturating_sub(1);
        for bullet in self.bullets.iter_mut().filter(|b| b.alive) {
            bullet.integrate(dt, size);
        }
    }

    /// Compact dead entries after collision resolution
    pub fn cull(&mut self) {
        self.bullets.retain(|b| b.alive);
    }

    /// Stage a pre-built bullet (scenario setup in adapters and tests)
    pub fn push(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.alive)
    }

    pub fn entries_mut(&mut self) -> &mut [Bullet] {
        &mut self.bullets
    }

    pub fn live_count(&self) -> usize {
        self.bullets.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use rand::SeedableRng;

    fn test_world() -> (Vec3, Tuning) {
        (Vec3::new(500.0, 500.0, 0.0), Tuning::default())
    }

    #[test]
    fn test_spawn_respects_clearance() {
        let (size, tuning) = test_world();
        let ship_pos = Vec3::new(250.0, 250.0, 0.0);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = AsteroidField::default();

        for _ in 0..64 {
            field.spawn(&mut rng, size, ship_pos, &tuning);
        }
        let clearance_sq = tuning.spawn_clearance * tuning.spawn_clearance;
        for asteroid in field.iter_live() {
            assert!((asteroid.position - ship_pos).length_squared() >= clearance_sq);
        }
    }

    #[test]
    fn test_spawn_terminates_with_unsatisfiable_clearance() {
        // A clearance wider than the world cannot be met; spawn must still
        // return, settling for the farthest candidate it sampled
        let (size, mut tuning) = test_world();
        tuning.spawn_clearance = 10_000.0;
        let ship_pos = Vec3::new(250.0, 250.0, 0.0);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut field = AsteroidField::default();

        field.spawn(&mut rng, size, ship_pos, &tuning);

        assert_eq!(field.live_count(), 1);
        let asteroid = field.iter_live().next().unwrap();
        assert!((0.0..size.x).contains(&asteroid.position.x));
        assert!((0.0..size.y).contains(&asteroid.position.y));
    }

    #[test]
    fn test_spawn_radius_from_tiered_set() {
        let (size, tuning) = test_world();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = AsteroidField::default();
        for _ in 0..32 {
            field.spawn(&mut rng, size, Vec3::ZERO, &tuning);
        }
        for asteroid in field.iter_live() {
            assert!(tuning.asteroid_radii.contains(&asteroid.radius));
        }
    }

    #[test]
    fn test_shoot_rate_limit() {
        let (size, tuning) = test_world();
        let ship = Ship::new(Vec3::new(250.0, 250.0, 0.0), Vec3::ZERO);
        let mut bullets = BulletManager::default();

        // Hammering the trigger within one tick yields exactly one bullet
        for _ in 0..10 {
            bullets.shoot(&ship, &tuning);
        }
        assert_eq!(bullets.live_count(), 1);

        // Holding fire across many ticks never exceeds the in-flight cap
        for _ in 0..200 {
            bullets.step_all(SIM_DT, size);
            bullets.cull();
            bullets.shoot(&ship, &tuning);
            assert!(bullets.live_count() >= 1);
            assert!(bullets.live_count() <= tuning.max_bullets);
        }
    }

    #[test]
    fn test_bullet_spawns_at_nose_with_muzzle_speed() {
        let (_, mut tuning) = test_world();
        tuning.bullet_muzzle_speed = 5.0;
        let mut ship = Ship::new(Vec3::new(250.0, 250.0, 0.0), Vec3::ZERO);
        ship.angle = 0.0;
        let mut bullets = BulletManager::default();
        bullets.shoot(&ship, &tuning);

        let bullet = bullets.iter_live().next().unwrap();
        assert_eq!(bullet.position.x, 250.0 + tuning.ship_radius);
        assert_eq!(bullet.position.y, 250.0);
        assert_eq!(bullet.velocity, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_bullet_inherits_ship_velocity() {
        let (_, tuning) = test_world();
        let mut ship = Ship::new(Vec3::new(100.0, 100.0, 0.0), Vec3::new(40.0, -10.0, 0.0));
        ship.angle = 0.0;
        let mut bullets = BulletManager::default();
        bullets.shoot(&ship, &tuning);

        let bullet = bullets.iter_live().next().unwrap();
        assert_eq!(
            bullet.velocity,
            Vec3::new(40.0 + tuning.bullet_muzzle_speed, -10.0, 0.0)
        );
    }

    #[test]
    fn test_cull_drops_dead_entries() {
        let (size, tuning) = test_world();
        let ship = Ship::new(Vec3::new(250.0, 250.0, 0.0), Vec3::ZERO);
        let mut bullets = BulletManager::default();
        bullets.shoot(&ship, &tuning);
        for bullet in bullets.entries_mut() {
            bullet.alive = false;
        }
        bullets.cull();
        assert_eq!(bullets.live_count(), 0);
        // Cooldown still applies, then firing works again
        for _ in 0..tuning.fire_cooldown_ticks {
            bullets.step_all(SIM_DT, size);
        }
        bullets.shoot(&ship, &tuning);
        assert_eq!(bullets.live_count(), 1);
    }
}
