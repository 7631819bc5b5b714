use std::env;

use guidance_core::resources::{ScenarioConfig, ScenarioState};
use guidance_core::utils::math::rad_to_deg;
use nalgebra::Vector3;

/// Resolve a scenario file and print its initial state and a wind profile
/// sampled straight up from the launch point.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or("usage: resolve_scenario <scenario.yaml> [altitude_step_m]")?;
    let step: f64 = match args.next() {
        Some(value) => value.parse()?,
        None => 250.0,
    };

    let config = ScenarioConfig::from_file(&path)?;
    let state = ScenarioState::new(&config);
    let initial = state.resolve();

    println!("scenario: {}", path);
    println!(
        "position  [m]   : ({:.3}, {:.3}, {:.3})",
        initial.position.x, initial.position.y, initial.position.z
    );
    println!(
        "velocity  [m/s] : ({:.3}, {:.3}, {:.3}) |v| = {:.3}",
        initial.velocity.x,
        initial.velocity.y,
        initial.velocity.z,
        initial.velocity.norm()
    );
    println!(
        "attitude  [deg] : pitch {:.2}, yaw {:.2}, roll {:.2}{}",
        rad_to_deg(initial.angles.pitch),
        rad_to_deg(initial.angles.yaw),
        rad_to_deg(initial.angles.roll),
        if state.is_world_frame() {
            " (world-frame velocity)"
        } else {
            ""
        }
    );

    println!("wind ({}):", state.environment().kind());
    for i in 0..=8 {
        let position = initial.position + Vector3::new(0.0, step * i as f64, 0.0);
        let wind = state.sample_wind(&position);
        println!(
            "  alt {:>9.1} m -> ({:>8.3}, {:>8.3}, {:>8.3})",
            position.y, wind.x, wind.y, wind.z
        );
    }

    Ok(())
}
