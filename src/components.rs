use crate::geometry::Aabb;
use glam::Vec3;

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Pose component - world position plus view angles.
///
/// Z is up; yaw rotates about Z, pitch tilts the view. Movement stays on
/// the ground plane, so only the view direction carries pitch.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub position: Vec3,
    /// Yaw in radians, 0 = facing +X
    pub yaw: f32,
    /// Pitch in radians, positive = looking up
    pub pitch: f32,
}

impl Pose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: 0.0,
        }
    }

    /// View direction including pitch (for the center sight ray)
    pub fn view_forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_yaw * cos_pitch, sin_yaw * cos_pitch, sin_pitch)
    }

    /// Facing direction projected on the ground plane
    pub fn planar_forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, sin_yaw, 0.0)
    }

    /// Strafe direction (90 degrees clockwise from planar forward)
    pub fn planar_right(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(sin_yaw, -cos_yaw, 0.0)
    }
}

/// Panic trigger component - a world-placed zone that escalates panic
/// when perceived while visible and active.
#[derive(Debug, Clone, Copy)]
pub struct PanicTrigger {
    /// Severity this trigger escalates to; also the registry sort key
    pub panic_level: i32,
    /// Whether the trigger participates in collision/visibility
    pub is_visible: bool,
    /// Whether the trigger may currently fire
    pub is_active: bool,
}

impl PanicTrigger {
    pub fn new(panic_level: i32, is_visible: bool) -> Self {
        Self {
            panic_level,
            is_visible,
            is_active: false,
        }
    }

    /// True if a perception hit on this trigger should fire
    pub fn can_fire(&self) -> bool {
        self.is_visible && self.is_active
    }
}

/// Volume component - collision extent for perception rays
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    pub aabb: Aabb,
}

impl Volume {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }
}

/// Marker for opaque geometry that occludes sight rays (walls, props)
#[derive(Debug, Clone, Copy)]
pub struct SightBlocker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_right_orthogonal() {
        let pose = Pose::new(Vec3::ZERO, 0.7);
        assert!(pose.planar_forward().dot(pose.planar_right()).abs() < 1e-6);
    }

    #[test]
    fn test_view_forward_matches_planar_at_zero_pitch() {
        let pose = Pose::new(Vec3::ZERO, 1.2);
        assert!((pose.view_forward() - pose.planar_forward()).length() < 1e-6);
    }

    #[test]
    fn test_trigger_fires_only_when_visible_and_active() {
        let mut trigger = PanicTrigger::new(2, false);
        assert!(!trigger.can_fire());
        trigger.is_visible = true;
        assert!(!trigger.can_fire());
        trigger.is_active = true;
        assert!(trigger.can_fire());
    }
}
