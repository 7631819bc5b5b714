use bevy::prelude::*;

use crate::resources::{EnvironmentConfig, EnvironmentModel};

/// Builds the session's wind field at startup.
#[derive(Default)]
pub struct EnvironmentPlugin {
    pub config: Option<EnvironmentConfig>,
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: EnvironmentConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    fn setup_model(mut commands: Commands, config: Res<EnvironmentConfig>) {
        let environment = EnvironmentModel::new(&config);
        info!("Wind model ready: {}", environment.kind());
        commands.insert_resource(environment);
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        // Without an explicit config, one already inserted by the host is kept.
        if let Some(config) = &self.config {
            app.insert_resource(config.clone());
        } else {
            app.init_resource::<EnvironmentConfig>();
        }
        app.add_systems(Startup, Self::setup_model);
    }
}
