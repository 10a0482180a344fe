/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the tunable
 * values of the flocking simulation: flock size, per-agent defaults, the
 * wall-turning band and the set of enabled steering behaviors. The behavior
 * set can be modified through the UI.
 */

use nannou::prelude::*;

use crate::physics::BehaviorSet;
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Width and height of the world, with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn dimensions(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.dimensions() / 2.0
    }

    /// True when `point` lies within `margin` of any of the four edges.
    pub fn is_near_edge(&self, point: Vec2, margin: f32) -> bool {
        point.x < margin
            || point.x > self.width - margin
            || point.y < margin
            || point.y > self.height - margin
    }
}

#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub bounds: WorldBounds,
    pub boid_size: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub wall_margin: f32,
    pub wall_turn_degrees: f32,
    pub behaviors: BehaviorSet,
    pub pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 20,
            bounds: WorldBounds::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            boid_size: 10.0,
            max_speed: 100.0,
            max_force: 50.0,
            wall_margin: 20.0,
            wall_turn_degrees: -1.0,
            behaviors: BehaviorSet::all(),
            pause_simulation: false,
        }
    }
}

impl SimulationParams {
    /// Neighbourhood radius multiplier applied to an agent's size.
    pub const NEIGHBOR_RADIUS_FACTOR: f32 = 5.0;

    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=200
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        10.0..=400.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        1.0..=200.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_band() {
        let bounds = WorldBounds::new(600.0, 400.0);
        assert!(bounds.is_near_edge(vec2(10.0, 200.0), 20.0));
        assert!(bounds.is_near_edge(vec2(300.0, 390.0), 20.0));
        assert!(bounds.is_near_edge(vec2(585.0, 200.0), 20.0));
        assert!(!bounds.is_near_edge(vec2(300.0, 200.0), 20.0));
        assert!(!bounds.is_near_edge(vec2(20.0, 20.0), 20.0));
    }

    #[test]
    fn test_defaults() {
        let params = SimulationParams::default();
        assert_eq!(params.num_boids, 20);
        assert_eq!(params.wall_margin, 20.0);
        assert_eq!(params.wall_turn_degrees, -1.0);
        assert_eq!(params.behaviors, BehaviorSet::all());
        assert_eq!(params.bounds.center(), vec2(300.0, 200.0));
    }
}
