use bevy::prelude::*;

use crate::plugins::{GimbalCommandEvent, InputSessionEnded, ThrottleCommandEvent};
use crate::resources::{
    GimbalActions, GimbalInputController, InputTick, PointerEvent, ThrottleActions,
    ThrottleInputController,
};

/// Applies queued pointer events, ticks the gimbal controller and publishes
/// its command on every handled or animating tick.
pub fn gimbal_input_system(
    tick: Res<InputTick>,
    mut actions: ResMut<GimbalActions>,
    mut controller: ResMut<GimbalInputController>,
    mut commands_out: EventWriter<GimbalCommandEvent>,
) {
    for event in actions.pointer_events.drain(..) {
        match event {
            PointerEvent::Pressed(position) => {
                controller.pointer_pressed(position);
            }
            PointerEvent::Moved(position) => {
                controller.pointer_moved(position);
            }
            PointerEvent::Released => controller.pointer_released(),
        }
    }

    let result = controller.tick(&actions.readings, tick.dt);
    if result.should_notify() {
        commands_out.send(GimbalCommandEvent::from(result));
    }
}

/// Ticks the throttle controller and publishes changes.
pub fn throttle_input_system(
    tick: Res<InputTick>,
    actions: Res<ThrottleActions>,
    mut controller: ResMut<ThrottleInputController>,
    mut commands_out: EventWriter<ThrottleCommandEvent>,
) {
    if let Some(command) = controller.tick(&actions.readings, tick.dt) {
        commands_out.send(ThrottleCommandEvent { command });
    }
}

/// Counts completed input ticks.
pub fn advance_input_tick(mut tick: ResMut<InputTick>) {
    tick.count += 1;
}

/// Resets both controllers and pending actions when the session ends.
pub fn reset_input_on_session_end(
    mut session_events: EventReader<InputSessionEnded>,
    mut tick: ResMut<InputTick>,
    mut gimbal_actions: ResMut<GimbalActions>,
    mut throttle_actions: ResMut<ThrottleActions>,
    mut gimbal: ResMut<GimbalInputController>,
    mut throttle: ResMut<ThrottleInputController>,
) {
    if session_events.read().count() == 0 {
        return;
    }

    info!("Input session ended after {} ticks, resetting controllers", tick.count);
    gimbal.reset();
    throttle.reset();
    gimbal_actions.clear();
    *throttle_actions = ThrottleActions::default();
    tick.count = 0;
}
