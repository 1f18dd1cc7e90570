//! Sight ray tuning.

/// Length of the center gaze ray, in world units
pub const CENTER_SIGHT_RANGE: f32 = 500.0;
/// Length of each peripheral ray, in world units
pub const PERIPHERAL_SIGHT_RANGE: f32 = 1000.0;
/// Angle of the peripheral rays off the gaze direction, in degrees
pub const PERIPHERAL_ANGLE_DEGREES: f32 = 35.0;

/// Eye height above the character's ground position
pub const EYE_HEIGHT: f32 = 64.0;
