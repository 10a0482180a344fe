/*
 * Application Module
 *
 * This module defines the nannou model for the flocking simulation and wires
 * the window, the frame clock, input and rendering together.
 *
 * nannou calls `update` once per display refresh; the frame clock turns that
 * into simulation ticks with millisecond timestamps. When the app exits the
 * clock is stopped, which delivers the close notification exactly once.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::clock::FrameClock;
use crate::debug::DebugInfo;
use crate::input::{mouse_moved, mouse_wheel, raw_window_event};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::simulation::Simulation;
use crate::ui;

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub clock: FrameClock,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    /// Last pointer position in surface pixels.
    pub pointer: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    let window_id = match app
        .new_window()
        .title("Flocking")
        .size(params.bounds.width as u32, params.bounds.height as u32)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_wheel(mouse_wheel)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => {
            log::error!("failed to create window: {:?}", err);
            std::process::exit(1);
        }
    };

    let Some(window) = app.window(window_id) else {
        log::error!("window {:?} disappeared after creation", window_id);
        std::process::exit(1);
    };
    let egui = Egui::from_window(&window);

    let mut rng = rand::thread_rng();
    let simulation = Simulation::new(params, &mut rng);
    log::info!(
        "created flock of {} boids in a {}x{} world",
        simulation.boids.len(),
        simulation.params.bounds.width,
        simulation.params.bounds.height
    );

    let mut clock = FrameClock::new();
    clock.start();

    Model {
        simulation,
        clock,
        egui,
        debug_info: DebugInfo::default(),
        pointer: Vec2::ZERO,
    }
}

// Update the model
pub fn update(_app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.simulation.params,
        &model.debug_info,
        model.simulation.camera.zoom(),
    );

    if actions.reset_boids || model.simulation.boids.len() != model.simulation.params.num_boids {
        model.simulation.reset(&mut rand::thread_rng());
    } else if actions.limits_changed {
        model.simulation.apply_limits();
    }

    let timestamp_ms = update.since_start.as_secs_f64() * 1000.0;
    model.clock.frame(timestamp_ms, &mut model.simulation);
    model.debug_info.record_frame(model.simulation.stats.last_delta_ms);
}

// Stop the clock so the simulation receives its close notification
pub fn exit(_app: &App, mut model: Model) {
    model.clock.stop(&mut model.simulation);
}
