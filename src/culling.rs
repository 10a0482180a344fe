/*
 * Culling Module
 *
 * Determines which boids, and whether the pointer target, fall inside the
 * camera's visible range and should be rendered.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::camera::Camera;

/// Radius of the target marker in world units.
pub const TARGET_MARKER_RADIUS: f32 = 4.0;

/// Indices of boids whose body overlaps the visible range.
pub fn visible_boids(boids: &[Boid], camera: &Camera) -> Vec<usize> {
    boids
        .iter()
        .enumerate()
        .filter(|(_, boid)| camera.is_point_inside_visible_range(boid.position(), boid.size() / 2.0))
        .map(|(i, _)| i)
        .collect()
}

pub fn is_target_visible(target: Vec2, camera: &Camera) -> bool {
    camera.is_point_inside_visible_range(target, TARGET_MARKER_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid_at(x: f32, y: f32) -> Boid {
        Boid::new(vec2(x, y), 10.0, 50.0, 10.0, rgb(0, 0, 0))
    }

    #[test]
    fn test_culls_offscreen_boids() {
        let camera = Camera::new(vec2(100.0, 100.0), vec2(50.0, 50.0));
        let boids = vec![
            boid_at(100.0, 100.0),
            boid_at(200.0, 200.0),
            // Centre outside, body overlapping the edge
            boid_at(128.0, 100.0),
            boid_at(131.0, 100.0),
        ];

        assert_eq!(visible_boids(&boids, &camera), vec![0, 2]);
    }

    #[test]
    fn test_target_visibility() {
        let camera = Camera::new(vec2(100.0, 100.0), vec2(50.0, 50.0));
        assert!(is_target_visible(vec2(90.0, 110.0), &camera));
        assert!(!is_target_visible(vec2(-50.0, 110.0), &camera));
    }
}
