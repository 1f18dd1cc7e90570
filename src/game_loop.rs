//! Per-tick orchestration.
//!
//! Fixed dispatch order within a frame: advance the clock, run perception,
//! resolve trigger detections, service the movement replay timer, then drain
//! presentation events into the injected presenter. Perception-driven
//! activation therefore always precedes any movement replay scheduled for
//! the same tick boundary.

use crate::events::{EventQueue, PresentationEvent, Presenter};
use crate::game::Game;
use crate::perception;
use crate::systems::triggers;

/// Advance the simulation one frame
pub fn tick(game: &mut Game, dt: f32, presenter: &mut dyn Presenter) {
    game.clock.advance_by(dt);

    // Perception step: feed each distinct struck trigger to the sequencer
    let hits = perception::perceive_triggers(&game.world, game.player);
    for hit in hits {
        triggers::on_perception_hit(
            &mut game.world,
            &mut game.registry,
            &mut game.panic,
            &mut game.events,
            hit,
        );
    }

    // Pending timers run after the tick's perception work
    game.movement
        .service(&mut game.world, game.player, &game.panic, &game.clock);

    process_events(&mut game.events, presenter);
}

/// Drain queued presentation events into the host's presenter
pub fn process_events(events: &mut EventQueue, presenter: &mut dyn Presenter) {
    for event in events.drain() {
        match event {
            PresentationEvent::BlurChanged { level } => presenter.update_blur(level),
            PresentationEvent::DepthOfFieldChanged { level } => {
                presenter.update_depth_of_field(level)
            }
            PresentationEvent::HeartbeatStarted { intensity } => {
                presenter.play_heartbeat(intensity)
            }
            PresentationEvent::HeartbeatStopped => presenter.stop_heartbeat(),
            PresentationEvent::TriggerFired {
                trigger,
                panic_level,
            } => presenter.trigger_fired(trigger, panic_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PanicTrigger;
    use crate::level::LevelDef;
    use crate::systems::PanicEffects;

    /// Presenter that records everything it is told
    #[derive(Default)]
    struct RecordingPresenter {
        blur: Vec<i32>,
        depth: Vec<i32>,
        heartbeat: Vec<Option<f32>>,
        fired: Vec<i32>,
    }

    impl Presenter for RecordingPresenter {
        fn update_blur(&mut self, level: i32) {
            self.blur.push(level);
        }
        fn update_depth_of_field(&mut self, level: i32) {
            self.depth.push(level);
        }
        fn play_heartbeat(&mut self, intensity: f32) {
            self.heartbeat.push(Some(intensity));
        }
        fn stop_heartbeat(&mut self) {
            self.heartbeat.push(None);
        }
        fn trigger_fired(&mut self, _trigger: hecs::Entity, panic_level: i32) {
            self.fired.push(panic_level);
        }
    }

    /// Triggers authored out of order in three different directions so the
    /// view can be pointed at exactly one of them at a time.
    fn three_way_level() -> LevelDef {
        LevelDef::from_json(
            r#"{
                "player": { "position": [0, 0, 0] },
                "triggers": [
                    { "panic_level": 3, "min": [-340, -50, 0], "max": [-300, 50, 150] },
                    { "panic_level": 1, "min": [300, -50, 0], "max": [340, 50, 150] },
                    { "panic_level": 2, "min": [-50, 300, 0], "max": [50, 340, 150] }
                ]
            }"#,
        )
        .unwrap()
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_escalation_follows_backlog_order_not_gaze_order() {
        let mut game = Game::new(&three_way_level());
        let mut presenter = RecordingPresenter::default();

        // Stare at the level-2 and level-3 zones first: they are not yet
        // visible, so nothing fires
        game.set_yaw(std::f32::consts::FRAC_PI_2);
        game.tick(DT, &mut presenter);
        game.set_yaw(std::f32::consts::PI);
        game.tick(DT, &mut presenter);
        assert!(presenter.fired.is_empty());
        assert_eq!(game.panic.level(), 0);

        // Level 1 (ahead at +X) is the armed one
        game.set_yaw(0.0);
        game.tick(DT, &mut presenter);
        assert_eq!(presenter.fired, vec![1]);
        assert_eq!(game.panic.level(), 1);

        // Its detection armed level 2 (at +Y)
        game.set_yaw(std::f32::consts::FRAC_PI_2);
        game.tick(DT, &mut presenter);
        assert_eq!(presenter.fired, vec![1, 2]);
        assert_eq!(game.panic.level(), 2);

        // And that armed level 3 (at -X)
        game.set_yaw(std::f32::consts::PI);
        game.tick(DT, &mut presenter);
        assert_eq!(presenter.fired, vec![1, 2, 3]);
        assert_eq!(game.panic.level(), 3);
        assert_eq!(game.registry.remaining(), 0);
    }

    #[test]
    fn test_detection_reaches_presenter_with_effects_row() {
        let mut game = Game::new(&three_way_level());
        let mut presenter = RecordingPresenter::default();

        game.tick(DT, &mut presenter);

        // Scene-start silence, reset, then the level-1 row
        assert_eq!(presenter.heartbeat.last(), Some(&Some(0.5)));
        assert_eq!(presenter.blur.last(), Some(&1));
        assert_eq!(presenter.depth.last(), Some(&0));
    }

    #[test]
    fn test_staring_at_a_fired_trigger_keeps_refiring() {
        let mut game = Game::new(&three_way_level());
        let mut presenter = RecordingPresenter::default();

        // The fired trigger stays visible and armed, so continued gaze
        // keeps re-entering its level while the backlog drains
        for _ in 0..3 {
            game.tick(DT, &mut presenter);
        }
        assert_eq!(presenter.fired, vec![1, 1, 1]);
        assert_eq!(game.panic.level(), 1);
        assert_eq!(game.registry.remaining(), 0);
    }

    #[test]
    fn test_stop_panic_returns_presentation_to_baseline() {
        let mut game = Game::new(&three_way_level());
        let mut presenter = RecordingPresenter::default();

        game.tick(DT, &mut presenter);
        assert_eq!(game.panic.level(), 1);

        game.panic.stop_panic(&mut game.events);
        game.set_yaw(-std::f32::consts::FRAC_PI_2); // look away from every zone
        game.tick(DT, &mut presenter);

        assert_eq!(*game.panic.effects(), PanicEffects::baseline());
        assert_eq!(presenter.blur.last(), Some(&0));
        assert_eq!(presenter.depth.last(), Some(&0));
        assert_eq!(presenter.heartbeat.last(), Some(&None));
    }

    #[test]
    fn test_walking_under_panic_delay_is_smoothed() {
        let mut game = Game::new(&three_way_level());
        let mut presenter = RecordingPresenter::default();

        // Escalate to level 2 to get an input delay, then look away
        game.tick(DT, &mut presenter);
        game.set_yaw(std::f32::consts::FRAC_PI_2);
        game.tick(DT, &mut presenter);
        assert!(game.panic.movement_time_delay() > 0.0);
        game.set_yaw(-std::f32::consts::FRAC_PI_2);

        // Hold forward for a quarter second of frames
        for _ in 0..15 {
            game.move_forward(1.0);
            game.tick(DT, &mut presenter);
        }
        // First impulse applied directly, the rest still buffered
        assert!(game.movement.queued() > 0);
        assert!(game.movement.is_replaying());
    }

    #[test]
    fn test_perception_respects_trigger_visibility_per_tick() {
        let mut game = Game::new(&three_way_level());
        let mut presenter = RecordingPresenter::default();
        game.tick(DT, &mut presenter);

        // One detection occurred, so exactly two triggers are visible:
        // the fired one and the newly armed one
        let visible = game
            .world
            .query::<&PanicTrigger>()
            .iter()
            .filter(|(_, t)| t.is_visible)
            .count();
        assert_eq!(visible, 2);
    }
}
