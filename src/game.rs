//! Core game state and the input surface the host shell drives.
//!
//! `Game` bundles the ECS world with the panic mechanics. The host calls the
//! axis methods as input arrives and `tick` once per frame; everything else
//! happens inside the frame.

use hecs::{Entity, World};

use crate::components::Pose;
use crate::constants::*;
use crate::events::{EventQueue, PresentationEvent, Presenter};
use crate::game_loop;
use crate::level::LevelDef;
use crate::systems::{DelayedMovement, MoveDirection, PanicState, TriggerRegistry};
use crate::time_system::GameClock;

pub struct Game {
    pub world: World,
    pub player: Entity,
    pub registry: TriggerRegistry,
    pub panic: PanicState,
    pub movement: DelayedMovement,
    pub clock: GameClock,
    pub events: EventQueue,
}

impl Game {
    /// Build the world from an authored level and run scene start:
    /// silence the heartbeat, collect the trigger backlog, arm the first
    /// trigger.
    pub fn new(level: &LevelDef) -> Self {
        let mut world = World::new();
        let player = level.spawn(&mut world);

        let mut events = EventQueue::new();
        events.push(PresentationEvent::HeartbeatStopped);

        let mut registry = TriggerRegistry::new();
        registry.populate(&world);
        registry.activate_next(&mut world);

        Self {
            world,
            player,
            registry,
            panic: PanicState::new(),
            movement: DelayedMovement::new(),
            clock: GameClock::new(),
            events,
        }
    }

    /// Advance the simulation one frame
    pub fn tick(&mut self, dt: f32, presenter: &mut dyn Presenter) {
        game_loop::tick(self, dt, presenter);
    }

    /// Forward/backward movement axis
    pub fn move_forward(&mut self, value: f32) {
        self.movement.submit(
            &mut self.world,
            self.player,
            &self.panic,
            &self.clock,
            MoveDirection::Forward,
            value,
        );
    }

    /// Strafe movement axis
    pub fn move_right(&mut self, value: f32) {
        self.movement.submit(
            &mut self.world,
            self.player,
            &self.panic,
            &self.clock,
            MoveDirection::Right,
            value,
        );
    }

    /// Yaw look axis. Panic slows the look rate but never delays it.
    pub fn look_right(&mut self, value: f32) {
        let divisor = self.panic.movement_speed_divisor();
        if let Ok(mut pose) = self.world.get::<&mut Pose>(self.player) {
            pose.yaw -= value / divisor * LOOK_RADIANS_PER_INPUT;
        }
    }

    /// Pitch look axis, clamped short of the vertical
    pub fn look_up(&mut self, value: f32) {
        let divisor = self.panic.movement_speed_divisor();
        if let Ok(mut pose) = self.world.get::<&mut Pose>(self.player) {
            pose.pitch = (pose.pitch + value / divisor * LOOK_RADIANS_PER_INPUT)
                .clamp(-MAX_LOOK_PITCH, MAX_LOOK_PITCH);
        }
    }

    /// Point the view at an absolute yaw (in radians)
    pub fn set_yaw(&mut self, yaw: f32) {
        if let Ok(mut pose) = self.world.get::<&mut Pose>(self.player) {
            pose.yaw = yaw;
        }
    }
}
