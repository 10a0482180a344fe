/*
 * Flocking Simulation
 *
 * A flock of boids steering by separation, alignment and cohesion while
 * seeking the mouse pointer and turning away from the window edges.
 * The mouse wheel zooms the camera; the control panel toggles behaviors.
 *
 * Set RUST_LOG to change the log level (defaults to info).
 */

use flocking::app::{exit, model, update};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Flocking simulation starting...");

    nannou::app(model).update(update).exit(exit).run();
}
