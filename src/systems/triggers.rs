//! Trigger registry and sequencer.
//!
//! Holds the backlog of not-yet-activated panic triggers in ascending
//! panic-level order and advances it one trigger per successful detection.
//! Escalation order is enforced here, not by level layout: whichever zone
//! the player happens to look at first, the backlog only ever activates the
//! lowest remaining level.

use std::collections::VecDeque;

use hecs::{Entity, World};

use crate::components::PanicTrigger;
use crate::events::{EventQueue, PresentationEvent};
use crate::systems::panic::PanicState;

/// Ordered backlog of triggers waiting to be activated.
///
/// Holds non-owning entity ids only; trigger lifetime belongs to the world.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    backlog: VecDeque<Entity>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self {
            backlog: VecDeque::new(),
        }
    }

    /// Collect every trigger in the world, sorted ascending by panic level.
    ///
    /// Called once at scene start. Repopulating replaces the backlog.
    pub fn populate(&mut self, world: &World) {
        let mut found: Vec<(Entity, i32)> = world
            .query::<&PanicTrigger>()
            .iter()
            .map(|(entity, trigger)| (entity, trigger.panic_level))
            .collect();
        found.sort_by_key(|&(_, level)| level);

        self.backlog = found.into_iter().map(|(entity, _)| entity).collect();
        if self.backlog.is_empty() {
            log::debug!("no panic triggers found in world");
        } else {
            log::debug!("found {} panic triggers", self.backlog.len());
        }
    }

    /// Activate and return the next trigger in the backlog, if any.
    ///
    /// The trigger becomes visible and armed; it leaves the backlog for good,
    /// so no trigger is ever activated twice. Empty backlog is a no-op.
    pub fn activate_next(&mut self, world: &mut World) -> Option<Entity> {
        while let Some(entity) = self.backlog.pop_front() {
            let Ok(mut trigger) = world.get::<&mut PanicTrigger>(entity) else {
                log::warn!("skipping despawned trigger {entity:?}");
                continue;
            };
            trigger.is_visible = true;
            trigger.is_active = true;
            log::info!(
                "activated trigger for panic level {} ({} left in backlog)",
                trigger.panic_level,
                self.backlog.len()
            );
            return Some(entity);
        }
        None
    }

    pub fn remaining(&self) -> usize {
        self.backlog.len()
    }
}

/// Handle a perception ray striking an entity.
///
/// The common case - the entity is not a trigger, or not yet visible and
/// armed - is a quiet no-op. A real detection escalates panic, notifies the
/// presentation layer exactly once, then advances the backlog.
pub fn on_perception_hit(
    world: &mut World,
    registry: &mut TriggerRegistry,
    panic: &mut PanicState,
    events: &mut EventQueue,
    entity: Entity,
) {
    let Ok(trigger) = world.get::<&PanicTrigger>(entity).map(|t| *t) else {
        return;
    };
    if !trigger.can_fire() {
        return;
    }

    panic.start_panic(trigger.panic_level, events);
    events.push(PresentationEvent::TriggerFired {
        trigger: entity,
        panic_level: trigger.panic_level,
    });
    registry.activate_next(world);
}
