use approx::assert_relative_eq;
use guidance_core::{
    plugins::GimbalCommandEvent,
    resources::{
        GimbalActions, GimbalInputController, GimbalReadings, GimbalState, InputSource,
        PointerEvent,
    },
};
use nalgebra::Vector2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::{
    assert_gimbal_in_unit_circle, assert_non_increasing, create_test_input_config,
    random_gimbal_readings, TestApp, TestAppBuilder, TEST_TICK,
};

/// Ticks the return animation takes at the test rate (0.25 s / (1/64) s)
const RETURN_TICKS: usize = 16;

fn input_app() -> TestApp {
    TestAppBuilder::new()
        .with_input(create_test_input_config())
        .with_time_step(TEST_TICK)
        .build()
}

fn controller(app: &TestApp) -> &GimbalInputController {
    app.resource::<GimbalInputController>()
}

#[test]
fn test_joystick_commands_stream_every_tick() {
    let mut app = input_app();
    app.set_gimbal(GimbalReadings::from_axis(0.6, 0.8));
    app.run_ticks(5);

    let events = app.drain_events::<GimbalCommandEvent>();
    assert_eq!(events.len(), 5, "held input notifies on every tick");
    for event in &events {
        assert!(event.handled);
        assert_eq!(event.source, InputSource::Joystick);
        assert_relative_eq!(event.command.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(event.command.y, 0.8, epsilon = 1e-12);
    }
    assert_eq!(controller(&app).state(), GimbalState::JoystickActive);
}

#[test]
fn test_joystick_release_returns_to_center_within_duration() {
    let mut app = input_app();
    app.set_gimbal(GimbalReadings::from_axis(0.0, 1.0));
    app.run_ticks(3);
    app.drain_events::<GimbalCommandEvent>();

    app.set_gimbal(GimbalReadings::default());
    app.run_ticks(RETURN_TICKS);

    let events = app.drain_events::<GimbalCommandEvent>();
    assert_eq!(events.len(), RETURN_TICKS);
    assert!(events.iter().all(|e| e.animating && !e.handled));

    let magnitudes: Vec<f64> = events.iter().map(|e| e.command.magnitude()).collect();
    assert_non_increasing(&magnitudes);
    assert_eq!(events.last().map(|e| e.command.magnitude()), Some(0.0));

    assert_eq!(controller(&app).state(), GimbalState::Idle);
    assert_eq!(controller(&app).active_source(), InputSource::None);

    // Idle ticks are silent
    app.run_ticks(4);
    assert!(app.drain_events::<GimbalCommandEvent>().is_empty());
}

#[test]
fn test_keyboard_diagonal_is_normalized() {
    let mut app = input_app();
    app.set_gimbal(GimbalReadings {
        up: true,
        right: true,
        ..Default::default()
    });
    app.run_tick();

    let command = controller(&app).get_gimbal();
    let expected = std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(command.x, expected, epsilon = 1e-12);
    assert_relative_eq!(command.y, expected, epsilon = 1e-12);
    assert_eq!(controller(&app).active_source(), InputSource::Keyboard);
}

#[test]
fn test_key_release_returns_to_center_within_duration() {
    let mut app = input_app();
    app.set_gimbal(GimbalReadings {
        left: true,
        down: true,
        ..Default::default()
    });
    app.run_ticks(3);
    assert_eq!(controller(&app).state(), GimbalState::KeyboardActive);
    app.drain_events::<GimbalCommandEvent>();

    app.set_gimbal(GimbalReadings::default());
    app.run_tick();
    assert_eq!(controller(&app).state(), GimbalState::Returning);
    app.run_ticks(RETURN_TICKS - 1);

    let events = app.drain_events::<GimbalCommandEvent>();
    assert_eq!(events.len(), RETURN_TICKS);
    assert!(events.iter().all(|e| e.animating));
    let magnitudes: Vec<f64> = events.iter().map(|e| e.command.magnitude()).collect();
    assert_non_increasing(&magnitudes);

    assert_eq!(controller(&app).get_gimbal().magnitude(), 0.0);
    assert_eq!(controller(&app).state(), GimbalState::Idle);
}

#[test]
fn test_joystick_outranks_keyboard() {
    let mut app = input_app();
    app.set_gimbal(GimbalReadings {
        axis: Vector2::new(-0.5, 0.0),
        up: true,
        ..Default::default()
    });
    app.run_tick();

    let command = controller(&app).get_gimbal();
    assert_relative_eq!(command.x, -0.5, epsilon = 1e-12);
    assert_relative_eq!(command.y, 0.0, epsilon = 1e-12);
    assert_eq!(controller(&app).active_source(), InputSource::Joystick);
}

#[test]
fn test_pointer_drag_and_release() {
    let mut app = input_app();

    // Centre of the control at (200, 200) with a 50 px radius
    app.push_pointer(PointerEvent::Pressed(Vector2::new(200.0, 200.0)));
    app.push_pointer(PointerEvent::Moved(Vector2::new(225.0, 175.0)));
    app.run_tick();

    let events = app.drain_events::<GimbalCommandEvent>();
    assert_eq!(events.len(), 1);
    assert!(events[0].handled);
    assert_eq!(events[0].source, InputSource::Mouse);
    assert_relative_eq!(events[0].command.x, 0.5, epsilon = 1e-12);
    assert_relative_eq!(events[0].command.y, 0.5, epsilon = 1e-12);
    assert_eq!(controller(&app).state(), GimbalState::MouseDragging);

    // Dragging past the rim saturates
    app.push_pointer(PointerEvent::Moved(Vector2::new(400.0, 200.0)));
    app.run_tick();
    let command = controller(&app).get_gimbal();
    assert_relative_eq!(command.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(command.y, 0.0, epsilon = 1e-12);

    app.push_pointer(PointerEvent::Released);
    app.run_ticks(RETURN_TICKS);
    assert_eq!(controller(&app).get_gimbal().magnitude(), 0.0);
    assert_eq!(controller(&app).state(), GimbalState::Idle);
}

#[test]
fn test_pointer_press_outside_control_is_ignored() {
    let mut app = input_app();
    app.push_pointer(PointerEvent::Pressed(Vector2::new(20.0, 20.0)));
    app.push_pointer(PointerEvent::Moved(Vector2::new(210.0, 200.0)));
    app.run_tick();

    assert!(app.drain_events::<GimbalCommandEvent>().is_empty());
    assert_eq!(controller(&app).state(), GimbalState::Idle);
}

#[test]
fn test_random_input_stays_in_unit_circle() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut app = input_app();

    for _ in 0..2000 {
        app.set_gimbal(random_gimbal_readings(&mut rng));
        match rng.gen_range(0..10) {
            0 => app.push_pointer(PointerEvent::Pressed(Vector2::new(
                rng.gen_range(100.0..300.0),
                rng.gen_range(100.0..300.0),
            ))),
            1 | 2 => app.push_pointer(PointerEvent::Moved(Vector2::new(
                rng.gen_range(-500.0..900.0),
                rng.gen_range(-500.0..900.0),
            ))),
            3 => app.push_pointer(PointerEvent::Released),
            _ => {}
        }
        app.run_tick();

        assert_gimbal_in_unit_circle(&controller(&app).get_gimbal());
        assert_gimbal_in_unit_circle(&controller(&app).get_display());
        for event in app.drain_events::<GimbalCommandEvent>() {
            assert_gimbal_in_unit_circle(&event.command);
        }
    }
}

#[test]
fn test_session_end_resets_gimbal() {
    let mut app = input_app();
    app.set_gimbal(GimbalReadings::from_axis(1.0, 0.0));
    app.push_pointer(PointerEvent::Pressed(Vector2::new(210.0, 210.0)));
    app.run_tick();
    assert!(controller(&app).get_gimbal().magnitude() > 0.0);

    app.end_session();
    app.run_tick();

    // Readings were cleared along with the controller, so nothing is handled
    assert_eq!(controller(&app).get_gimbal().magnitude(), 0.0);
    assert_eq!(controller(&app).state(), GimbalState::Idle);
    assert_eq!(app.resource::<GimbalActions>().readings, GimbalReadings::default());
}
