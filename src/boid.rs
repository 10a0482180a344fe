/*
 * Boid Module
 *
 * This module defines the Boid struct, one agent of the flock.
 * Behaviors never touch a boid's motion state directly: they push steering
 * forces through `apply_force`, and `integrate` turns the accumulated
 * acceleration into velocity and position once per tick.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationParams;
use crate::vector::VectorMath;

#[derive(Debug, Clone)]
pub struct Boid {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    size: f32,
    max_speed: f32,
    max_force: f32,
    color: Rgb<u8>,
}

impl Boid {
    pub fn new(position: Vec2, size: f32, max_speed: f32, max_force: f32, color: Rgb<u8>) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            size,
            max_speed,
            max_force,
            color,
        }
    }

    /// A boid at rest somewhere inside the world, with a random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &SimulationParams) -> Self {
        let x = rng.gen_range(0.0..params.bounds.width);
        let y = rng.gen_range(0.0..params.bounds.height);
        let color = rgb(rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());

        Self::new(vec2(x, y), params.boid_size, params.max_speed, params.max_force, color)
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Diameter.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn set_limits(&mut self, max_speed: f32, max_force: f32) {
        self.max_speed = max_speed;
        self.max_force = max_force;
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Deflects the heading without changing speed.
    pub fn rotate_velocity(&mut self, degrees: f32) {
        self.velocity.rotate_degrees_in_place(degrees);
    }

    /// Semi-implicit Euler step over `delta_ms` milliseconds.
    pub fn integrate(&mut self, delta_ms: f32) {
        let elapsed_seconds = delta_ms / 1000.0;

        self.velocity += self.acceleration * elapsed_seconds;
        self.position += self.velocity * elapsed_seconds;

        // Forces only live for one tick
        self.acceleration = Vec2::ZERO;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
