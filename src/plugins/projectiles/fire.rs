//! Fire controller: rate gate, level/rate adjustment, volley dispatch.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::kinematics::Position;
use crate::common::tunables::Tunables;
use crate::plugins::emitter::Emitter;

use super::components::PooledProjectile;
use super::messages::FireCommand;
use super::pattern::{self, fire_pattern};
use super::pool::{self, ProjectilePool, SlotQuery};

pub const RATE_MIN: f32 = 1.0;
pub const RATE_MAX: f32 = 8.0;

/// Fire gate state. Written only by `fire_control`; everything else reads.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FireControl {
    level: u8,
    rate: f32,
    interval: f32,
    timer: f32,
    ready: bool,
}

impl Default for FireControl {
    fn default() -> Self {
        Self::new(1, 2.0)
    }
}

impl FireControl {
    pub fn new(level: u8, rate: f32) -> Self {
        let mut control = Self {
            level: level.clamp(pattern::LEVEL_MIN, pattern::LEVEL_MAX),
            rate: RATE_MIN,
            interval: 1.0 / RATE_MIN,
            timer: 0.0,
            ready: false,
        };
        control.set_rate(rate);
        control
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    #[inline]
    pub fn interval(&self) -> f32 {
        self.interval
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Advance the gate timer by one frame. Opens the gate and rewinds the
    /// timer once a full interval has accumulated.
    pub fn tick(&mut self, dt: f32) {
        if self.timer >= self.interval {
            self.timer = 0.0;
            self.ready = true;
        } else {
            self.timer += dt;
        }
    }

    /// Consume the gate for one volley. Returns false while the gate is
    /// shut; the request is dropped, not queued.
    pub fn try_consume(&mut self) -> bool {
        if self.ready {
            self.ready = false;
            true
        } else {
            false
        }
    }

    /// Nudge the rate by one shot per second, clamped to `[1, 8]`. The
    /// interval is recomputed immediately; the running timer is left alone,
    /// so a rate drop can open the gate sooner than a full new interval.
    pub fn adjust_rate(&mut self, up: bool) {
        let next = if up { self.rate + 1.0 } else { self.rate - 1.0 };
        self.set_rate(next);
    }

    fn set_rate(&mut self, rate: f32) {
        self.rate = rate.clamp(RATE_MIN, RATE_MAX);
        self.interval = 1.0 / self.rate;
    }

    /// Nudge the level, clamped to `[1, 5]`. Takes effect on the next
    /// volley.
    pub fn adjust_level(&mut self, up: bool) {
        let next = if up {
            self.level.saturating_add(1)
        } else {
            self.level.saturating_sub(1)
        };
        self.level = next.clamp(pattern::LEVEL_MIN, pattern::LEVEL_MAX);
    }
}

/// Producer: translate pressed keys into `FireCommand` messages.
///
/// Headless worlds have no keyboard; tests write messages directly.
pub fn gather_fire_commands(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut writer: MessageWriter<FireCommand>,
) {
    let Some(keys) = keys else {
        return;
    };

    if keys.just_pressed(KeyCode::Space) {
        writer.write(FireCommand::Fire);
    }
    if keys.just_pressed(KeyCode::KeyZ) {
        writer.write(FireCommand::RateUp);
    }
    if keys.just_pressed(KeyCode::KeyX) {
        writer.write(FireCommand::RateDown);
    }
    if keys.just_pressed(KeyCode::KeyQ) {
        writer.write(FireCommand::LevelUp);
    }
    if keys.just_pressed(KeyCode::KeyE) {
        writer.write(FireCommand::LevelDown);
    }
}

/// Consumer: apply adjustments, advance the gate, dispatch a volley.
///
/// Adjustments land before the gate ticks, so a rate change made this frame
/// is already in force when the timer is compared against the interval.
/// The emitter read and the slot writes are disjoint queries: slots also
/// carry `Position`, so the emitter query excludes pooled entities.
pub fn fire_control(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut control: ResMut<FireControl>,
    mut reader: MessageReader<FireCommand>,
    pool: Res<ProjectilePool>,
    q_emitter: Query<&Position, (With<Emitter>, Without<PooledProjectile>)>,
    mut q_slots: SlotQuery,
) {
    let mut fire_requested = false;

    for cmd in reader.read() {
        match cmd {
            FireCommand::RateUp => control.adjust_rate(true),
            FireCommand::RateDown => control.adjust_rate(false),
            FireCommand::LevelUp => control.adjust_level(true),
            FireCommand::LevelDown => control.adjust_level(false),
            FireCommand::Fire => fire_requested = true,
        }
    }

    control.tick(time.delta_secs());

    if !fire_requested || !control.try_consume() {
        return;
    }

    let Ok(origin) = q_emitter.single() else {
        debug!("fire request with no single emitter; volley dropped");
        return;
    };

    match fire_pattern(
        control.level(),
        tunables.emitter_size,
        tunables.projectile_speed,
    ) {
        Ok(pattern) => {
            // The volley may get fewer slots than the pattern wants; the
            // gate is spent either way.
            pool::allocate(&pool, &mut q_slots, origin.0, &pattern);
        }
        Err(e) => error!("volley dropped: {e}"),
    }
}
