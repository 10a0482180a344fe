/*
 * Input Module
 *
 * This module handles user input events for the flocking simulation.
 * The pointer position becomes the seek target and the mouse wheel zooms
 * the camera. Window events are first translated into surface pixel
 * coordinates (origin top-left, y down), the same space the renderer draws in.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseScrollDelta, TouchPhase};

use crate::app::Model;
use crate::simulation::Simulation;

/// Moves the seek target under the pointer.
pub fn pointer_moved(simulation: &mut Simulation, offset: Vec2, screen_width: f32, screen_height: f32) {
    let transform = simulation.camera.screen_transform(screen_width, screen_height);
    simulation.set_target(transform.to_world(offset));
}

/// Applies a wheel delta to the camera zoom.
pub fn wheel(simulation: &mut Simulation, delta: f32) {
    simulation.camera.zoom_by(delta);
    log::debug!("camera zoom {:.2}", simulation.camera.zoom());
}

/// Converts a nannou window point into surface pixel coordinates.
pub fn window_to_surface(point: Vec2, window_rect: Rect) -> Vec2 {
    vec2(point.x - window_rect.left(), window_rect.top() - point.y)
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let window_rect = app.window_rect();
    let offset = window_to_surface(pos, window_rect);
    model.pointer = offset;
    pointer_moved(&mut model.simulation, offset, window_rect.w(), window_rect.h());
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    let amount = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
    };
    wheel(&mut model.simulation, amount);

    // The world point under the pointer moved with the zoom
    let window_rect = app.window_rect();
    pointer_moved(&mut model.simulation, model.pointer, window_rect.w(), window_rect.h());
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;

    #[test]
    fn test_window_to_surface() {
        let rect = Rect::from_w_h(600.0, 400.0);
        assert_eq!(window_to_surface(pt2(0.0, 0.0), rect), vec2(300.0, 200.0));
        assert_eq!(window_to_surface(pt2(-300.0, 200.0), rect), vec2(0.0, 0.0));
        assert_eq!(window_to_surface(pt2(300.0, -200.0), rect), vec2(600.0, 400.0));
    }

    #[test]
    fn test_pointer_sets_world_target() {
        let mut sim = Simulation::from_boids(Vec::new(), SimulationParams::default());

        pointer_moved(&mut sim, vec2(150.0, 50.0), 600.0, 400.0);
        assert_eq!(sim.target, vec2(150.0, 50.0));

        // Zoomed in twice around the world centre
        sim.camera.set_zoom(2.0);
        pointer_moved(&mut sim, vec2(0.0, 0.0), 600.0, 400.0);
        assert_eq!(sim.target, vec2(150.0, 100.0));
    }

    #[test]
    fn test_wheel_zoom_is_clamped() {
        let mut sim = Simulation::from_boids(Vec::new(), SimulationParams::default());
        for _ in 0..50 {
            wheel(&mut sim, 1.0);
        }
        assert_eq!(sim.camera.zoom(), 2.0);

        wheel(&mut sim, -50.0);
        assert_eq!(sim.camera.zoom(), 1.0);
    }
}
