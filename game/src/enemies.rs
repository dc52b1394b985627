//! Fixed-capacity enemy pool with linear-scan spawn and recycle.
//!
//! No slot is ever allocated or freed after startup: spawning claims the
//! first parked slot, and an enemy leaving the bottom of the screen parks
//! its slot again.

use glam::Vec3;
use rand::Rng;

use crate::consts::*;
use crate::sprite::Sprite;

/// One pool slot. The `active` flag mirrors the positional predicate: a
/// slot is active iff its y-coordinate is strictly above DESPAWN_Y.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySlot {
    pub sprite: Sprite,
    /// Index into the car texture set, rolled at spawn
    pub variant: usize,
    pub active: bool,
}

impl EnemySlot {
    fn parked() -> Self {
        Self {
            sprite: Sprite::new(INACTIVE_POS, SPRITE_SIZE, ENEMY_BASE_SPEED),
            variant: 0,
            active: false,
        }
    }

    fn deactivate(&mut self) {
        self.sprite.pos = INACTIVE_POS;
        self.active = false;
    }
}

/// Difficulty-scaled enemy speed after `t` seconds of play.
/// Monotonically non-decreasing and clamped to ENEMY_MAX_SPEED.
pub fn speed_at(t: f32) -> f32 {
    (ENEMY_BASE_SPEED + t * DIFFICULTY_RATE).min(ENEMY_MAX_SPEED)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyPool {
    pub slots: Vec<EnemySlot>,
    pub spawn_timer: f32,
    /// Accumulated playing time; drives the difficulty ramp
    pub play_time: f32,
}

impl EnemyPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![EnemySlot::parked(); capacity],
            spawn_timer: 0.0,
            play_time: 0.0,
        }
    }

    /// Parks every slot and zeroes the timers.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
        self.spawn_timer = 0.0;
        self.play_time = 0.0;
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &EnemySlot> {
        self.slots.iter().filter(|s| s.active)
    }

    /// One simulation step: accumulate the timers, spawn when the interval
    /// elapses, then march every active enemy down by its frozen speed.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.spawn_timer += dt;
        self.play_time += dt;

        if self.spawn_timer >= SPAWN_INTERVAL {
            self.spawn_timer = 0.0;
            self.spawn(rng);
        }

        for slot in &mut self.slots {
            if !slot.active {
                continue;
            }
            slot.sprite.pos.y -= slot.sprite.speed;
            if slot.sprite.pos.y < DESPAWN_Y {
                slot.deactivate();
            }
        }
    }

    /// Claims the first parked slot, if any. A full pool skips the spawn.
    fn spawn(&mut self, rng: &mut impl Rng) {
        let speed = speed_at(self.play_time);
        if let Some(slot) = self.slots.iter_mut().find(|s| !s.active) {
            slot.sprite.pos = Vec3::new(
                SPAWN_BAND_MIN + rng.gen_range(0.0..SPAWN_BAND_WIDTH),
                SPAWN_Y,
                0.0,
            );
            slot.sprite.speed = speed;
            slot.variant = rng.gen_range(0..NUM_CAR_TEXTURES);
            slot.active = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn speed_ramp_is_clamped() {
        assert_eq!(speed_at(0.0), 2.0);
        assert_eq!(speed_at(5.0), 5.0);
        assert_eq!(speed_at(10.0), 7.0);
    }

    #[test]
    fn speed_ramp_is_monotonic() {
        let mut last = speed_at(0.0);
        for i in 1..100 {
            let next = speed_at(i as f32 * 0.25);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn one_spawn_per_interval() {
        let mut pool = EnemyPool::new(8);
        let mut rng = StdRng::seed_from_u64(7);
        // two 0.15 s frames sum to exactly one spawn interval
        pool.update(0.15, &mut rng);
        assert_eq!(pool.active_count(), 0);
        pool.update(0.15, &mut rng);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn full_pool_skips_the_spawn() {
        let mut pool = EnemyPool::new(4);
        let mut rng = StdRng::seed_from_u64(7);
        for slot in &mut pool.slots {
            slot.active = true;
            slot.sprite.pos = Vec3::new(400.0, 400.0, 0.0);
        }
        let before = pool.slots.clone();
        pool.update(SPAWN_INTERVAL, &mut rng);
        // no crash, no new activations; the existing enemies just moved
        assert_eq!(pool.active_count(), 4);
        for (b, a) in before.iter().zip(&pool.slots) {
            assert_eq!(a.sprite.pos.y, b.sprite.pos.y - b.sprite.speed);
        }
    }

    #[test]
    fn enemies_below_the_threshold_are_recycled() {
        let mut pool = EnemyPool::new(2);
        let mut rng = StdRng::seed_from_u64(7);
        pool.slots[0].active = true;
        pool.slots[0].sprite.pos = Vec3::new(400.0, DESPAWN_Y + 1.0, 0.0);
        pool.slots[0].sprite.speed = 5.0;
        pool.update(0.01, &mut rng);
        assert!(!pool.slots[0].active);
        assert_eq!(pool.slots[0].sprite.pos, INACTIVE_POS);
    }

    #[test]
    fn active_flag_matches_positional_predicate() {
        let mut pool = EnemyPool::new(16);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            pool.update(0.05, &mut rng);
            for slot in &pool.slots {
                assert_eq!(slot.active, slot.sprite.pos.y > DESPAWN_Y);
            }
        }
    }

    #[test]
    fn spawned_enemies_land_in_the_safe_band() {
        let mut pool = EnemyPool::new(1);
        let mut rng = StdRng::seed_from_u64(1);
        pool.update(SPAWN_INTERVAL, &mut rng);
        let slot = &pool.slots[0];
        assert!(slot.active);
        assert!(slot.sprite.pos.x >= SPAWN_BAND_MIN);
        assert!(slot.sprite.pos.x < SPAWN_BAND_MIN + SPAWN_BAND_WIDTH);
    }

    #[test]
    fn spawn_speed_follows_the_ramp() {
        let mut pool = EnemyPool::new(4);
        let mut rng = StdRng::seed_from_u64(9);
        pool.play_time = 4.0;
        pool.update(SPAWN_INTERVAL, &mut rng);
        let slot = pool.slots.iter().find(|s| s.active).unwrap();
        // the spawn freezes the ramp value at its moment in time
        assert_eq!(slot.sprite.speed, speed_at(pool.play_time));
        assert!(slot.sprite.speed > ENEMY_BASE_SPEED);
        assert!(slot.sprite.speed < ENEMY_MAX_SPEED);
    }
}
