//! Swag Dash entry point
//!
//! Runs a short headless session: the simulation is driven at the fixed
//! timestep with a scripted jumper standing in for the input layer, then
//! the final snapshot is printed as JSON. Rendering front-ends embed the
//! library the same way and draw the snapshot each frame.

use swag_dash::consts::SIM_DT;
use swag_dash::sim::{GameEngine, GamePhase};

/// How many simulated seconds the demo session runs
const DEMO_SECONDS: f32 = 30.0;

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("Swag Dash (headless) starting with seed {seed}");

    let mut engine = GameEngine::new(seed);
    engine.initialize_character(400.0, 800.0);
    engine.start_game();

    let frames = (DEMO_SECONDS / SIM_DT) as u32;
    for _ in 0..frames {
        if engine.phase() != GamePhase::Playing {
            break;
        }

        // Jump when something is closing in from the right
        let player = engine.player();
        let window = player.pos.x + player.width..player.pos.x + 160.0;
        let incoming = engine
            .active_items()
            .iter()
            .map(|item| item.pos.x)
            .chain(engine.active_obstacles().iter().map(|o| o.pos.x))
            .any(|x| window.contains(&x));
        if incoming {
            engine.trigger_jump();
        }

        engine.advance(SIM_DT);
    }

    engine.end_game();

    let snapshot = engine.snapshot();
    log::info!(
        "session finished in phase {:?} with score {}",
        snapshot.phase,
        snapshot.score
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
