/*
 * Physics Module
 *
 * This module holds the flocking engine. Every tick it walks the flock once
 * and, for each boid, evaluates the enabled steering behaviors in a fixed
 * order:
 * 1. Separation: steer away from crowding neighbors
 * 2. Alignment: steer towards the average heading of neighbors
 * 3. Cohesion: seek the average position of neighbors
 * 4. Seek: steer towards the pointer target
 * 5. Wall turning: nudge the heading while inside the edge band
 *
 * Forces add up on the boid's acceleration; `integrate_flock` consumes them.
 * Neighbor lookup is a plain O(n²) scan.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::vector::VectorMath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Separation,
    Alignment,
    Cohesion,
    Seek,
    WallTurn,
}

impl Behavior {
    /// Evaluation order within a tick.
    pub const ALL: [Behavior; 5] = [
        Behavior::Separation,
        Behavior::Alignment,
        Behavior::Cohesion,
        Behavior::Seek,
        Behavior::WallTurn,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Behavior::Separation => "Separation",
            Behavior::Alignment => "Alignment",
            Behavior::Cohesion => "Cohesion",
            Behavior::Seek => "Seek",
            Behavior::WallTurn => "Wall turning",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of enabled behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BehaviorSet(u8);

impl BehaviorSet {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Behavior::ALL.iter().fold(Self::none(), |set, &b| set.with(b))
    }

    pub fn only(behavior: Behavior) -> Self {
        Self::none().with(behavior)
    }

    pub fn with(self, behavior: Behavior) -> Self {
        Self(self.0 | behavior.bit())
    }

    pub fn without(self, behavior: Behavior) -> Self {
        Self(self.0 & !behavior.bit())
    }

    pub fn contains(&self, behavior: Behavior) -> bool {
        self.0 & behavior.bit() != 0
    }

    pub fn toggle(&mut self, behavior: Behavior) {
        self.0 ^= behavior.bit();
    }

    pub fn set(&mut self, behavior: Behavior, enabled: bool) {
        *self = if enabled { self.with(behavior) } else { self.without(behavior) };
    }
}

#[inline]
fn neighbor_radius(boid: &Boid) -> f32 {
    boid.size() * SimulationParams::NEIGHBOR_RADIUS_FACTOR
}

// Reynolds steering: desired velocity minus current velocity, capped
fn steer_towards(boid: &Boid, desired: Vec2) -> Vec2 {
    (desired - boid.velocity()).limited(boid.max_force())
}

/// Seek force towards `target`.
pub fn seek(boid: &Boid, target: Vec2) -> Vec2 {
    let desired = (target - boid.position()).normalized() * boid.max_speed();
    steer_towards(boid, desired)
}

/// Separation force, or `None` when no other boid is close enough.
pub fn separation(boid: &Boid, boids: &[Boid]) -> Option<Vec2> {
    let radius = neighbor_radius(boid);
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    for other in boids {
        let d = boid.position().dist(other.position());

        // Excludes the boid itself and coincident points
        if d > 0.0 && d < radius {
            sum += (boid.position() - other.position()).normalized() / d;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let average = (sum / count as f32).with_magnitude(boid.max_speed());
    Some(steer_towards(boid, average))
}

/// Alignment force. The boid's own velocity takes part in the average.
pub fn alignment(boid: &Boid, boids: &[Boid]) -> Option<Vec2> {
    let radius = neighbor_radius(boid);
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    for other in boids {
        if boid.position().dist(other.position()) < radius {
            sum += other.velocity();
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let average = (sum / count as f32).with_magnitude(boid.max_speed());
    Some(steer_towards(boid, average))
}

/// Centroid of the neighborhood, the boid's own position included.
pub fn centroid(boid: &Boid, boids: &[Boid]) -> Option<Vec2> {
    let radius = neighbor_radius(boid);
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    for other in boids {
        if boid.position().dist(other.position()) < radius {
            sum += other.position();
            count += 1;
        }
    }

    if count == 0 {
        None
    } else {
        Some(sum / count as f32)
    }
}

/// Cohesion delegates to `seek` towards the centroid.
pub fn cohesion(boid: &Boid, boids: &[Boid]) -> Option<Vec2> {
    centroid(boid, boids).map(|center| seek(boid, center))
}

/// Rotates the boid's heading while it is inside the edge band.
pub fn turn_at_walls(boid: &mut Boid, params: &SimulationParams) {
    if params.bounds.is_near_edge(boid.position(), params.wall_margin) {
        boid.rotate_velocity(params.wall_turn_degrees);
    }
}

/// Applies every enabled steering behavior to every boid.
///
/// Boids are visited in index order and each one's forces are applied before
/// the next is evaluated, so a wall turn on boid `i` is already visible to
/// the alignment scan of boid `i + 1`.
pub fn steer_flock(boids: &mut [Boid], target: Vec2, params: &SimulationParams) {
    let behaviors = params.behaviors;

    for i in 0..boids.len() {
        if behaviors.contains(Behavior::Separation) {
            if let Some(force) = separation(&boids[i], &*boids) {
                boids[i].apply_force(force);
            }
        }

        if behaviors.contains(Behavior::Alignment) {
            if let Some(force) = alignment(&boids[i], &*boids) {
                boids[i].apply_force(force);
            }
        }

        if behaviors.contains(Behavior::Cohesion) {
            if let Some(force) = cohesion(&boids[i], &*boids) {
                boids[i].apply_force(force);
            }
        }

        if behaviors.contains(Behavior::Seek) {
            let force = seek(&boids[i], target);
            boids[i].apply_force(force);
        }

        if behaviors.contains(Behavior::WallTurn) {
            turn_at_walls(&mut boids[i], params);
        }
    }
}

/// Advances every boid by `delta_ms` and clears its acceleration.
pub fn integrate_flock(boids: &mut [Boid], delta_ms: f32) {
    for boid in boids {
        boid.integrate(delta_ms);
    }
}
