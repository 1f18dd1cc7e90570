//! Presentation event system for decoupled communication with the host layer.
//!
//! Game systems emit events while they run; the game loop drains them at the
//! end of the frame into an injected [`Presenter`]. Blur, depth-of-field and
//! heartbeat playback live entirely on the other side of that seam.

use hecs::Entity;

/// Events the core emits for the presentation layer to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresentationEvent {
    /// Camera blur intensity changed
    BlurChanged { level: i32 },
    /// Depth-of-field restriction changed
    DepthOfFieldChanged { level: i32 },
    /// Heartbeat audio should (re)start at the given volume
    HeartbeatStarted { intensity: f32 },
    /// Heartbeat audio should stop
    HeartbeatStopped,
    /// A panic trigger fired; emitted exactly once per successful detection,
    /// after the panic-state transition
    TriggerFired { trigger: Entity, panic_level: i32 },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<PresentationEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: PresentationEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = PresentationEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Presentation capability injected by the host layer.
///
/// Methods default to no-ops so a host only implements the reactions it
/// cares about.
pub trait Presenter {
    fn update_blur(&mut self, _level: i32) {}
    fn update_depth_of_field(&mut self, _level: i32) {}
    fn play_heartbeat(&mut self, _intensity: f32) {}
    fn stop_heartbeat(&mut self) {}
    fn trigger_fired(&mut self, _trigger: Entity, _panic_level: i32) {}
}

/// Presenter that ignores everything (headless tests)
pub struct NullPresenter;

impl Presenter for NullPresenter {}
