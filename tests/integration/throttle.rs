use approx::assert_relative_eq;
use guidance_core::{
    plugins::ThrottleCommandEvent,
    resources::{InputSource, ThrottleInputController, ThrottleReadings},
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::common::{
    create_additive_input_config, create_test_input_config, random_throttle_readings, TestApp,
    TestAppBuilder, TEST_TICK,
};

/// Ticks the joystick cooldown lasts at the test rate (0.25 s / (1/64) s)
const COOLDOWN_TICKS: usize = 16;

fn priority_app() -> TestApp {
    TestAppBuilder::new()
        .with_input(create_test_input_config())
        .with_time_step(TEST_TICK)
        .build()
}

fn throttle(app: &TestApp) -> &ThrottleInputController {
    app.resource::<ThrottleInputController>()
}

#[test]
fn test_trigger_sets_level_directly() {
    let mut app = priority_app();
    app.set_throttle(ThrottleReadings::trigger(0.75));
    app.run_ticks(4);

    let values: Vec<f64> = app
        .drain_events::<ThrottleCommandEvent>()
        .iter()
        .map(|e| e.command.value)
        .collect();
    // Only the change is published
    assert_eq!(values, vec![0.75]);
    assert_eq!(throttle(&app).active_source(), InputSource::Joystick);
}

#[test]
fn test_cooldown_holds_then_releases_to_zero() {
    let mut app = priority_app();
    app.set_throttle(ThrottleReadings::trigger(0.75));
    app.run_tick();
    app.drain_events::<ThrottleCommandEvent>();

    app.set_throttle(ThrottleReadings::default());
    app.run_ticks(COOLDOWN_TICKS - 1);
    assert_eq!(throttle(&app).get_throttle(), 0.75);
    assert!(throttle(&app).cooldown_active());
    assert!(app.drain_events::<ThrottleCommandEvent>().is_empty());

    app.run_tick();
    assert_eq!(throttle(&app).get_throttle(), 0.0);
    assert!(!throttle(&app).cooldown_active());
    let events = app.drain_events::<ThrottleCommandEvent>();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].command.value, 0.0);
}

#[test]
fn test_keyboard_locked_out_during_cooldown() {
    let mut app = priority_app();
    app.set_throttle(ThrottleReadings::trigger(0.5));
    app.run_tick();

    app.set_throttle(ThrottleReadings::keys(true, false));
    app.run_ticks(COOLDOWN_TICKS);
    assert_eq!(throttle(&app).get_throttle(), 0.0);

    // First tick after the cooldown the keys take effect
    app.run_tick();
    assert_relative_eq!(throttle(&app).get_throttle(), TEST_TICK, epsilon = 1e-12);
    assert_eq!(throttle(&app).active_source(), InputSource::Keyboard);
}

#[test]
fn test_keyboard_ramps_and_clamps() {
    let mut app = priority_app();
    app.set_throttle(ThrottleReadings::keys(true, false));
    // 1.0/s for 80 ticks of 1/64 s overshoots max
    app.run_ticks(80);
    assert_eq!(throttle(&app).get_throttle(), 1.0);

    app.set_throttle(ThrottleReadings::keys(false, true));
    app.run_ticks(32);
    assert_relative_eq!(throttle(&app).get_throttle(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_additive_blend_sums_sources() {
    let mut app = TestAppBuilder::new()
        .with_input(create_additive_input_config())
        .with_time_step(TEST_TICK)
        .build();

    app.set_throttle(ThrottleReadings {
        increase_axis: 0.5,
        increase_key: true,
        ..Default::default()
    });
    app.run_ticks(8);

    // (0.5 + 1.0) * 1.0/s * 8/64 s
    assert_relative_eq!(throttle(&app).get_throttle(), 0.1875, epsilon = 1e-12);
    assert!(!throttle(&app).cooldown_active());

    // Releasing everything leaves the value where it is
    app.set_throttle(ThrottleReadings::default());
    app.run_ticks(COOLDOWN_TICKS * 2);
    assert_relative_eq!(throttle(&app).get_throttle(), 0.1875, epsilon = 1e-12);
}

#[test]
fn test_random_input_stays_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for config in [create_test_input_config(), create_additive_input_config()] {
        let mut app = TestAppBuilder::new()
            .with_input(config)
            .with_time_step(TEST_TICK)
            .build();
        for _ in 0..1000 {
            app.set_throttle(random_throttle_readings(&mut rng));
            app.run_tick();
            let value = throttle(&app).get_throttle();
            assert!((0.0..=1.0).contains(&value), "throttle {value} out of range");
        }
        for event in app.drain_events::<ThrottleCommandEvent>() {
            assert!((0.0..=1.0).contains(&event.command.value));
        }
    }
}

#[test]
fn test_session_end_restores_default() {
    let mut app = priority_app();
    app.set_throttle(ThrottleReadings::trigger(0.9));
    app.run_tick();
    app.drain_events::<ThrottleCommandEvent>();

    app.end_session();
    app.run_tick();

    assert_eq!(throttle(&app).get_throttle(), 0.0);
    assert!(!throttle(&app).cooldown_active());
    assert!(app.drain_events::<ThrottleCommandEvent>().is_empty());
}
