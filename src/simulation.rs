/*
 * Simulation Module
 *
 * The simulation context owns everything a tick touches: the flock, the
 * pointer target and the camera. It is passed explicitly to the engine, the
 * renderer and the input handlers.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::boid::Boid;
use crate::camera::Camera;
use crate::clock::FrameHandler;
use crate::error::{Result, SimulationError};
use crate::params::SimulationParams;
use crate::physics;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationStats {
    pub ticks: u64,
    pub simulated_ms: f64,
    pub last_delta_ms: f64,
}

pub struct Simulation {
    pub boids: Vec<Boid>,
    pub target: Vec2,
    pub camera: Camera,
    pub params: SimulationParams,
    pub stats: SimulationStats,
}

impl Simulation {
    /// A flock of `params.num_boids` randomly placed boids.
    pub fn new<R: Rng + ?Sized>(params: SimulationParams, rng: &mut R) -> Self {
        let boids = (0..params.num_boids)
            .map(|_| Boid::random(&mut *rng, &params))
            .collect();
        Self::from_boids(boids, params)
    }

    pub fn from_boids(boids: Vec<Boid>, params: SimulationParams) -> Self {
        Self {
            boids,
            target: params.bounds.center(),
            camera: Camera::framing(params.bounds),
            params,
            stats: SimulationStats::default(),
        }
    }

    /// Replaces the flock with `params.num_boids` fresh boids.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let params = &self.params;
        self.boids = (0..params.num_boids)
            .map(|_| Boid::random(&mut *rng, params))
            .collect();
        log::info!("flock reset with {} boids", self.boids.len());
    }

    /// Pushes the speed and force caps from the params onto every boid.
    pub fn apply_limits(&mut self) {
        for boid in &mut self.boids {
            boid.set_limits(self.params.max_speed, self.params.max_force);
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Force phase of a tick.
    pub fn steer(&mut self) {
        physics::steer_flock(&mut self.boids, self.target, &self.params);
    }

    /// Integration phase of a tick.
    pub fn integrate(&mut self, delta_ms: f32) {
        physics::integrate_flock(&mut self.boids, delta_ms);
    }

    /// One full step: steering, then integration.
    pub fn tick(&mut self, delta_ms: f64) -> Result<()> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(SimulationError::InvalidDeltaTime(delta_ms));
        }

        if !self.params.pause_simulation {
            self.steer();
            self.integrate(delta_ms as f32);

            for (i, boid) in self.boids.iter().enumerate() {
                if !boid.is_finite() {
                    log::warn!("boid {} has a non-finite position or velocity", i);
                }
            }

            self.stats.simulated_ms += delta_ms;
        }

        self.stats.ticks += 1;
        self.stats.last_delta_ms = delta_ms;
        Ok(())
    }
}

impl FrameHandler for Simulation {
    fn tick(&mut self, _timestamp_ms: f64, delta_ms: f64) -> Result<()> {
        Simulation::tick(self, delta_ms)
    }

    fn close(&mut self, timestamp_ms: f64, _delta_ms: f64) -> Result<()> {
        log::info!(
            "simulation closed at {:.0} ms after {} ticks ({:.0} ms simulated)",
            timestamp_ms,
            self.stats.ticks,
            self.stats.simulated_ms
        );
        Ok(())
    }
}
