//! Direct and panic-delayed movement input.
//!
//! While calm, movement input moves the character immediately. Under panic,
//! commands are buffered and replayed on a fixed cadence to simulate
//! disorientation. The first impulse after an idle period still applies
//! immediately so controls never feel dead at the first keypress; sustained
//! input is what gets smeared out.

use std::collections::VecDeque;

use hecs::{Entity, World};

use crate::components::Pose;
use crate::constants::*;
use crate::systems::panic::PanicState;
use crate::time_system::{GameClock, RepeatingTimer};

/// Movement axis a command applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Right,
}

impl MoveDirection {
    /// The other axis (used for same-tick diagonal merging)
    pub fn orthogonal(self) -> Self {
        match self {
            MoveDirection::Forward => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Forward,
        }
    }
}

/// A buffered movement impulse, already scaled by the speed divisor
#[derive(Debug, Clone, Copy)]
pub struct MovementCommand {
    pub direction: MoveDirection,
    pub value: f32,
}

/// FIFO buffer of movement commands plus the replay timer that drains it.
///
/// Commands are enqueued only while an input delay is active, drained in
/// insertion order, and removed as soon as they are applied - never replayed.
#[derive(Debug, Default)]
pub struct DelayedMovement {
    queue: VecDeque<MovementCommand>,
    replay_timer: RepeatingTimer,
}

impl DelayedMovement {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            replay_timer: RepeatingTimer::new(),
        }
    }

    /// Handle one axis input event.
    ///
    /// Zero input means no movement was intended and touches nothing. With no
    /// delay active the scaled value applies directly, bypassing the queue.
    /// Under delay the command is buffered; if the replay timer is idle the
    /// command also applies right away (consuming it) and the timer starts at
    /// the current cadence.
    pub fn submit(
        &mut self,
        world: &mut World,
        player: Entity,
        panic: &PanicState,
        clock: &GameClock,
        direction: MoveDirection,
        raw: f32,
    ) {
        if raw == 0.0 {
            return;
        }

        let value = raw / panic.movement_speed_divisor();
        let delay = panic.movement_time_delay();

        if delay <= 0.0 {
            apply_movement(world, player, direction, value);
            return;
        }

        self.queue.push_back(MovementCommand { direction, value });
        if !self.replay_timer.is_active() {
            // First impulse after idle: apply now, smooth the rest
            self.replay_step(world, player);
            self.replay_timer.start(delay, clock.time);
        }
    }

    /// Poll the replay timer; called once per tick after perception.
    ///
    /// A due timer replays the front command (plus an orthogonal partner for
    /// diagonal strafing). Draining the queue stops the timer. If the delay
    /// was lifted while commands were still buffered, they flush immediately
    /// rather than lingering.
    pub fn service(
        &mut self,
        world: &mut World,
        player: Entity,
        panic: &PanicState,
        clock: &GameClock,
    ) {
        if !self.replay_timer.is_active() {
            return;
        }

        let delay = panic.movement_time_delay();
        if delay <= 0.0 {
            while !self.queue.is_empty() {
                self.replay_step(world, player);
            }
            self.replay_timer.stop();
            return;
        }

        if self.replay_timer.fire_if_due(clock.time) {
            self.replay_step(world, player);
            if self.queue.is_empty() {
                self.replay_timer.stop();
            } else {
                // Cadence tracks the current panic level
                self.replay_timer.start(delay, clock.time);
            }
        }
    }

    /// Apply the front command; merge in an orthogonal follower so diagonal
    /// strafing doesn't pay the delay twice.
    fn replay_step(&mut self, world: &mut World, player: Entity) {
        let Some(command) = self.queue.pop_front() else {
            return;
        };
        apply_movement(world, player, command.direction, command.value);

        if let Some(&next) = self.queue.front() {
            if next.direction == command.direction.orthogonal() {
                self.queue.pop_front();
                apply_movement(world, player, next.direction, next.value);
            }
        }
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_replaying(&self) -> bool {
        self.replay_timer.is_active()
    }
}

/// Translate the player along its facing axis by a (scaled) input value
pub fn apply_movement(world: &mut World, player: Entity, direction: MoveDirection, value: f32) {
    let Ok(mut pose) = world.get::<&mut Pose>(player) else {
        log::warn!("movement skipped: player has no pose");
        return;
    };
    let axis = match direction {
        MoveDirection::Forward => pose.planar_forward(),
        MoveDirection::Right => pose.planar_right(),
    };
    pose.position += axis * value * MOVE_UNITS_PER_INPUT;
}
