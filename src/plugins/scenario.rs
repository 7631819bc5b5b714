use bevy::prelude::*;

use super::events::ScenarioResolvedEvent;
use crate::resources::{ScenarioConfig, ScenarioState};

/// Resolves the scenario's initial state once at startup.
///
/// Inserts [`ScenarioState`] (which also answers wind queries) and
/// [`ScenarioInitialState`](crate::resources::ScenarioInitialState), and
/// sends a single [`ScenarioResolvedEvent`].
pub struct ScenarioPlugin {
    pub config: ScenarioConfig,
}

impl ScenarioPlugin {
    pub fn with_config(config: ScenarioConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .add_event::<ScenarioResolvedEvent>()
            .add_systems(Startup, resolve_scenario);
    }
}

fn resolve_scenario(
    mut commands: Commands,
    config: Res<ScenarioConfig>,
    mut resolved: EventWriter<ScenarioResolvedEvent>,
) {
    let state = ScenarioState::new(&config);
    let initial_state = state.resolve();
    info!(
        "Scenario resolved: position {:?}, velocity {:?}, wind {}",
        initial_state.position.as_slice(),
        initial_state.velocity.as_slice(),
        state.environment().kind()
    );

    commands.insert_resource(initial_state.clone());
    commands.insert_resource(state);
    resolved.send(ScenarioResolvedEvent { initial_state });
}
