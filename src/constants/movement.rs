//! Movement and look input tuning.

/// World units travelled per unit of applied movement input
pub const MOVE_UNITS_PER_INPUT: f32 = 12.0;

/// Radians of view rotation per unit of look input
pub const LOOK_RADIANS_PER_INPUT: f32 = 0.0175;

/// Pitch clamp so the view can't flip over the vertical
pub const MAX_LOOK_PITCH: f32 = 1.55;
