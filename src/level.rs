//! Authored level layouts.
//!
//! Trigger zones, sight blockers and the player start are data, not code:
//! a level is a small JSON document deserialized with serde and spawned into
//! the ECS world. The binary embeds a demo layout and accepts a path
//! override.

use hecs::{Entity, World};
use serde::Deserialize;

use crate::components::{PanicTrigger, Player, Pose, SightBlocker, Volume};
use crate::geometry::Aabb;
use glam::Vec3;

/// Where the player character starts
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStartDef {
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw_degrees: f32,
}

/// An authored panic trigger zone
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerDef {
    pub panic_level: i32,
    /// Authoring default; the sequencer flips this on activation
    #[serde(default)]
    pub visible: bool,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// An opaque box that occludes sight rays
#[derive(Debug, Clone, Deserialize)]
pub struct BlockerDef {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// A complete authored level
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub player: PlayerStartDef,
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
    #[serde(default)]
    pub blockers: Vec<BlockerDef>,
}

impl LevelDef {
    /// Parse a level from JSON text
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level: {e}"))
    }

    /// Load a level from a JSON file on disk
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    /// Spawn the level's entities into the world, returning the player
    pub fn spawn(&self, world: &mut World) -> Entity {
        for def in &self.triggers {
            world.spawn((
                PanicTrigger::new(def.panic_level, def.visible),
                Volume::new(Aabb::new(Vec3::from(def.min), Vec3::from(def.max))),
            ));
        }
        for def in &self.blockers {
            world.spawn((
                SightBlocker,
                Volume::new(Aabb::new(Vec3::from(def.min), Vec3::from(def.max))),
            ));
        }

        world.spawn((
            Player,
            Pose::new(
                Vec3::from(self.player.position),
                self.player.yaw_degrees.to_radians(),
            ),
        ))
    }
}
