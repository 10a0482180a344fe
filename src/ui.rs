/*
 * UI Module
 *
 * Control panel built with nannou_egui: toggles for each steering behavior,
 * flock parameters, and the current frame statistics.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::physics::Behavior;

/// What the panel asked the app to do this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub reset_boids: bool,
    pub limits_changed: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    zoom: f32,
) -> UiActions {
    let mut actions = UiActions::default();
    let previous_limits = (params.max_speed, params.max_force);

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Behaviors", |ui| {
                for behavior in Behavior::ALL {
                    let mut enabled = params.behaviors.contains(behavior);
                    if ui.checkbox(&mut enabled, behavior.label()).changed() {
                        params.behaviors.set(behavior, enabled);
                        log::info!("{} {}", behavior.label(), if enabled { "enabled" } else { "disabled" });
                    }
                }
            });

            ui.collapsing("Boid Parameters", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));

                if ui.button("Reset Boids").clicked() {
                    actions.reset_boids = true;
                }

                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.max_force, SimulationParams::get_max_force_range()).text("Max Force"));
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Visible Boids: {}", debug_info.visible_count()));
            ui.label(format!("Zoom: {:.2}x (mouse wheel)", zoom));

            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    actions.limits_changed = previous_limits != (params.max_speed, params.max_force);
    actions
}
