//! Panic-level state machine.
//!
//! The character's panic level is an integer from 0 (calm) to
//! [`MAX_PANIC_LEVEL`]; every presentation parameter is a pure function of
//! that level. Transitions always reset to baseline before applying the new
//! row, so effects never stack across repeated or out-of-order triggers.

use crate::constants::*;
use crate::events::{EventQueue, PresentationEvent};

/// Presentation parameters derived from a panic level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanicEffects {
    /// Camera blur intensity step
    pub blur: i32,
    /// Depth-of-field restriction step
    pub depth_of_field: i32,
    /// Heartbeat volume, or `None` when the heartbeat is silent
    pub heartbeat: Option<f32>,
    /// Denominator applied to movement and look input
    pub movement_speed_divisor: f32,
    /// Replay cadence for queued movement, 0 = no delay
    pub movement_time_delay: f32,
}

impl PanicEffects {
    /// The calm state: no blur, no heartbeat, unimpaired movement
    pub const fn baseline() -> Self {
        Self {
            blur: 0,
            depth_of_field: 0,
            heartbeat: None,
            movement_speed_divisor: 1.0,
            movement_time_delay: 0.0,
        }
    }
}

/// Effects row for a panic level. Levels outside the table map to baseline.
pub fn effects_for_level(level: i32) -> PanicEffects {
    match level {
        1 => PanicEffects {
            blur: 1,
            depth_of_field: 0,
            heartbeat: Some(0.5),
            movement_speed_divisor: 1.0,
            movement_time_delay: 0.0,
        },
        2 => PanicEffects {
            blur: 1,
            depth_of_field: 1,
            heartbeat: Some(0.5),
            movement_speed_divisor: STAGE_ONE_MOVEMENT_SPEED_DIVISOR,
            movement_time_delay: STAGE_ONE_MOVEMENT_TIME_DELAY,
        },
        3 => PanicEffects {
            blur: 2,
            depth_of_field: 2,
            heartbeat: Some(1.5),
            movement_speed_divisor: STAGE_TWO_MOVEMENT_SPEED_DIVISOR,
            movement_time_delay: STAGE_TWO_MOVEMENT_TIME_DELAY,
        },
        4 => PanicEffects {
            blur: 3,
            depth_of_field: 2,
            heartbeat: Some(2.0),
            movement_speed_divisor: STAGE_TWO_MOVEMENT_SPEED_DIVISOR,
            movement_time_delay: STAGE_TWO_MOVEMENT_TIME_DELAY,
        },
        5 => PanicEffects {
            blur: 3,
            depth_of_field: 3,
            heartbeat: Some(3.0),
            movement_speed_divisor: STAGE_THREE_MOVEMENT_SPEED_DIVISOR,
            movement_time_delay: STAGE_THREE_MOVEMENT_TIME_DELAY,
        },
        _ => PanicEffects::baseline(),
    }
}

/// The character's current panic level and derived effects
#[derive(Debug, Clone)]
pub struct PanicState {
    level: i32,
    effects: PanicEffects,
}

impl PanicState {
    pub fn new() -> Self {
        Self {
            level: 0,
            effects: PanicEffects::baseline(),
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn effects(&self) -> &PanicEffects {
        &self.effects
    }

    pub fn movement_speed_divisor(&self) -> f32 {
        self.effects.movement_speed_divisor
    }

    pub fn movement_time_delay(&self) -> f32 {
        self.effects.movement_time_delay
    }

    /// Enter a panic level, recomputing all presentation parameters.
    ///
    /// Resets to baseline first so nothing lingers from the previous level;
    /// unknown levels stay at the baseline the reset produced.
    pub fn start_panic(&mut self, level: i32, events: &mut EventQueue) {
        self.stop_panic(events);

        if !(1..=MAX_PANIC_LEVEL).contains(&level) {
            log::debug!("ignoring out-of-range panic level {level}");
            return;
        }

        self.level = level;
        self.effects = effects_for_level(level);
        log::info!("panic level {level}");

        events.push(PresentationEvent::BlurChanged {
            level: self.effects.blur,
        });
        events.push(PresentationEvent::DepthOfFieldChanged {
            level: self.effects.depth_of_field,
        });
        if let Some(intensity) = self.effects.heartbeat {
            events.push(PresentationEvent::HeartbeatStarted { intensity });
        }
    }

    /// Reset every panic symptom to the calm baseline
    pub fn stop_panic(&mut self, events: &mut EventQueue) {
        self.level = 0;
        self.effects = PanicEffects::baseline();

        events.push(PresentationEvent::BlurChanged { level: 0 });
        events.push(PresentationEvent::HeartbeatStopped);
        events.push(PresentationEvent::DepthOfFieldChanged { level: 0 });
    }
}

impl Default for PanicState {
    fn default() -> Self {
        Self::new()
    }
}
