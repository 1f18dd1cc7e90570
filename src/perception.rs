//! Per-tick sight probing.
//!
//! The character "sees" through three rays cast from eye height: a short
//! center ray along the gaze and two longer peripheral rays swept 35 degrees
//! to either side. Each ray reports the nearest volume it strikes, so opaque
//! geometry occludes triggers behind it. Invisible triggers do not
//! participate in collision at all.

use crate::components::{PanicTrigger, Pose, Volume};
use crate::constants::*;
use glam::Vec3;
use hecs::{Entity, World};

/// A single sight probe
#[derive(Debug, Clone, Copy)]
pub struct SightRay {
    pub origin: Vec3,
    pub dir: Vec3,
    pub length: f32,
}

/// Build the frame's sight rays from the character pose.
///
/// Peripheral rays are checked first; they ignore pitch (swept on the
/// ground plane), while the center ray follows the full view direction.
pub fn sight_rays(pose: &Pose) -> [SightRay; 3] {
    let origin = pose.position + Vec3::new(0.0, 0.0, EYE_HEIGHT);
    let spread = PERIPHERAL_ANGLE_DEGREES.to_radians();

    let peripheral = |yaw: f32| {
        let (sin, cos) = yaw.sin_cos();
        SightRay {
            origin,
            dir: Vec3::new(cos, sin, 0.0),
            length: PERIPHERAL_SIGHT_RANGE,
        }
    };

    [
        peripheral(pose.yaw + spread),
        peripheral(pose.yaw - spread),
        SightRay {
            origin,
            dir: pose.view_forward(),
            length: CENTER_SIGHT_RANGE,
        },
    ]
}

/// Cast one ray against every collidable volume, returning the nearest hit.
///
/// Triggers that are not visible are skipped (they are "hidden in game"), and
/// the excluded entity (the caster) never blocks its own sight.
pub fn cast_ray(world: &World, ray: &SightRay, exclude: Option<Entity>) -> Option<(Entity, f32)> {
    let mut nearest: Option<(Entity, f32)> = None;

    for (entity, (volume, trigger)) in world.query::<(&Volume, Option<&PanicTrigger>)>().iter() {
        if exclude == Some(entity) {
            continue;
        }
        if let Some(trigger) = trigger {
            if !trigger.is_visible {
                continue;
            }
        }
        if let Some(distance) = volume.aabb.ray_intersection(ray.origin, ray.dir, ray.length) {
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((entity, distance));
            }
        }
    }

    nearest
}

/// Run the perception step for the player, returning every distinct trigger
/// struck this frame (peripheral hits first, then center).
pub fn perceive_triggers(world: &World, player: Entity) -> Vec<Entity> {
    let Ok(pose) = world.get::<&Pose>(player) else {
        log::warn!("perception skipped: player has no pose");
        return Vec::new();
    };

    let mut seen = Vec::new();
    for ray in sight_rays(&pose) {
        let Some((entity, _)) = cast_ray(world, &ray, Some(player)) else {
            continue;
        };
        // Only triggers are reported; blockers merely occlude
        if world.get::<&PanicTrigger>(entity).is_err() {
            continue;
        }
        if !seen.contains(&entity) {
            seen.push(entity);
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Player, SightBlocker};
    use crate::geometry::Aabb;

    fn spawn_player(world: &mut World, yaw: f32) -> Entity {
        world.spawn((Player, Pose::new(Vec3::ZERO, yaw)))
    }

    fn trigger_box(x: f32) -> Volume {
        Volume::new(Aabb::new(
            Vec3::new(x, -50.0, 0.0),
            Vec3::new(x + 40.0, 50.0, 150.0),
        ))
    }

    fn visible_trigger(level: i32) -> PanicTrigger {
        let mut t = PanicTrigger::new(level, true);
        t.is_active = true;
        t
    }

    #[test]
    fn test_center_ray_sees_trigger_ahead() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0);
        let trigger = world.spawn((visible_trigger(1), trigger_box(300.0)));

        assert_eq!(perceive_triggers(&world, player), vec![trigger]);
    }

    #[test]
    fn test_center_ray_range_limit() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0);
        // Beyond the 500-unit center ray but inside no peripheral cone
        world.spawn((visible_trigger(1), trigger_box(700.0)));

        assert!(perceive_triggers(&world, player).is_empty());
    }

    #[test]
    fn test_invisible_trigger_not_perceived() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0);
        world.spawn((PanicTrigger::new(1, false), trigger_box(300.0)));

        assert!(perceive_triggers(&world, player).is_empty());
    }

    #[test]
    fn test_blocker_occludes_trigger() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0);
        world.spawn((visible_trigger(1), trigger_box(300.0)));
        // Wall between player and trigger
        world.spawn((
            SightBlocker,
            Volume::new(Aabb::new(
                Vec3::new(100.0, -200.0, 0.0),
                Vec3::new(110.0, 200.0, 300.0),
            )),
        ));

        assert!(perceive_triggers(&world, player).is_empty());
    }

    #[test]
    fn test_peripheral_ray_sees_offset_trigger() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0);
        // 35 degrees left at 600 units, outside the center ray's cone/range
        let angle = PERIPHERAL_ANGLE_DEGREES.to_radians();
        let center = Vec3::new(angle.cos(), angle.sin(), 0.0) * 600.0;
        let trigger = world.spawn((
            visible_trigger(2),
            Volume::new(Aabb::from_center_half_extents(
                center + Vec3::new(0.0, 0.0, 75.0),
                Vec3::new(40.0, 40.0, 75.0),
            )),
        ));

        assert_eq!(perceive_triggers(&world, player), vec![trigger]);
    }

    #[test]
    fn test_same_trigger_reported_once_per_tick() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0);
        // Huge box straddling all three rays
        let trigger = world.spawn((
            visible_trigger(3),
            Volume::new(Aabb::new(
                Vec3::new(100.0, -800.0, 0.0),
                Vec3::new(140.0, 800.0, 300.0),
            )),
        ));

        assert_eq!(perceive_triggers(&world, player), vec![trigger]);
    }

    #[test]
    fn test_missing_pose_is_quiet_noop() {
        let mut world = World::new();
        let bare = world.spawn((Player,));
        assert!(perceive_triggers(&world, bare).is_empty());
    }
}
