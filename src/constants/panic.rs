//! Panic escalation tuning.

/// Highest panic level with a defined effects row
pub const MAX_PANIC_LEVEL: i32 = 5;

/// Replay cadence in seconds for the mild delay stage (panic level 2)
pub const STAGE_ONE_MOVEMENT_TIME_DELAY: f32 = 0.5;
/// Replay cadence for the moderate delay stage (panic levels 3-4)
pub const STAGE_TWO_MOVEMENT_TIME_DELAY: f32 = 0.75;
/// Replay cadence for the severe delay stage (panic level 5)
pub const STAGE_THREE_MOVEMENT_TIME_DELAY: f32 = 1.0;

/// Denominator applied to movement input at the mild stage (1/1.5 speed)
pub const STAGE_ONE_MOVEMENT_SPEED_DIVISOR: f32 = 1.5;
/// Denominator at the moderate stage (half speed)
pub const STAGE_TWO_MOVEMENT_SPEED_DIVISOR: f32 = 2.0;
/// Denominator at the severe stage (a third of normal speed)
pub const STAGE_THREE_MOVEMENT_SPEED_DIVISOR: f32 = 3.0;
