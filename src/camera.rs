/*
 * Camera Module
 *
 * This module defines the Camera struct: a world-space center plus the size
 * of the visible window. It provides the visibility test used for culling and
 * the world-to-screen transform used for drawing, and handles wheel zoom.
 */

use nannou::prelude::*;

use crate::params::WorldBounds;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub dimensions: Vec2,
    base_dimensions: Vec2,
    zoom: f32,
}

impl Camera {
    pub const MIN_ZOOM: f32 = 1.0;
    pub const MAX_ZOOM: f32 = 2.0;
    /// Zoom change per wheel line.
    pub const ZOOM_STEP: f32 = 0.1;

    pub fn new(position: Vec2, dimensions: Vec2) -> Self {
        Self {
            position,
            dimensions,
            base_dimensions: dimensions,
            zoom: Self::MIN_ZOOM,
        }
    }

    /// A camera showing the whole world.
    pub fn framing(bounds: WorldBounds) -> Self {
        Self::new(bounds.center(), bounds.dimensions())
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Adjusts the zoom by a wheel delta, positive zooming in.
    pub fn zoom_by(&mut self, scroll_delta: f32) {
        self.set_zoom(self.zoom + scroll_delta * Self::ZOOM_STEP);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        self.dimensions = self.base_dimensions / self.zoom;
    }

    /// World-space corner with the smallest coordinates.
    pub fn min_corner(&self) -> Vec2 {
        self.position - self.dimensions / 2.0
    }

    pub fn max_corner(&self) -> Vec2 {
        self.position + self.dimensions / 2.0
    }

    /// Whether a circle of `radius` around `point` overlaps the visible range.
    pub fn is_point_inside_visible_range(&self, point: Vec2, radius: f32) -> bool {
        let min = self.min_corner();
        let max = self.max_corner();

        point.x + radius >= min.x
            && point.x - radius <= max.x
            && point.y + radius >= min.y
            && point.y - radius <= max.y
    }

    pub fn screen_transform(&self, screen_width: f32, screen_height: f32) -> ScreenTransform {
        let scale_vector = vec2(
            screen_width / self.dimensions.x,
            screen_height / self.dimensions.y,
        );

        ScreenTransform {
            scale: (scale_vector.x + scale_vector.y) / 2.0,
            scale_vector,
            origin: self.min_corner(),
        }
    }
}

/// World-to-screen mapping for one frame.
///
/// Points use the per-axis `scale_vector`; lengths (radii, line widths) use the
/// averaged `scale`, so a camera whose aspect ratio differs from the screen's
/// draws circles at a different scale than positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub scale: f32,
    pub scale_vector: Vec2,
    origin: Vec2,
}

impl ScreenTransform {
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        -self.origin * self.scale_vector + world * self.scale_vector
    }

    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.scale_vector + self.origin
    }

    pub fn length(&self, world_length: f32) -> f32 {
        world_length * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        let camera = Camera::new(vec2(100.0, 100.0), vec2(50.0, 50.0));
        assert!(camera.is_point_inside_visible_range(vec2(100.0, 100.0), 0.0));
        assert!(!camera.is_point_inside_visible_range(vec2(200.0, 200.0), 0.0));
        assert!(camera.is_point_inside_visible_range(vec2(75.0, 125.0), 0.0));
        assert!(!camera.is_point_inside_visible_range(vec2(130.0, 100.0), 0.0));
        // The radius widens the test
        assert!(camera.is_point_inside_visible_range(vec2(130.0, 100.0), 5.0));
    }

    #[test]
    fn test_framing_camera_is_identity() {
        let camera = Camera::framing(WorldBounds::new(600.0, 400.0));
        let transform = camera.screen_transform(600.0, 400.0);

        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.to_screen(vec2(10.0, 20.0)), vec2(10.0, 20.0));
        assert_eq!(transform.to_world(vec2(599.0, 1.0)), vec2(599.0, 1.0));
    }

    #[test]
    fn test_transform_scales_around_visible_origin() {
        let camera = Camera::new(vec2(100.0, 100.0), vec2(50.0, 50.0));
        let transform = camera.screen_transform(500.0, 500.0);

        assert_eq!(transform.scale, 10.0);
        assert_eq!(transform.to_screen(vec2(75.0, 75.0)), Vec2::ZERO);
        assert_eq!(transform.to_screen(vec2(100.0, 100.0)), vec2(250.0, 250.0));
        assert_eq!(transform.to_world(vec2(250.0, 250.0)), vec2(100.0, 100.0));
        assert_eq!(transform.length(2.0), 20.0);
    }

    #[test]
    fn test_mismatched_aspect_uses_averaged_scale_for_lengths() {
        let camera = Camera::new(vec2(50.0, 50.0), vec2(100.0, 100.0));
        let transform = camera.screen_transform(200.0, 100.0);

        assert_eq!(transform.scale_vector, vec2(2.0, 1.0));
        assert_eq!(transform.scale, 1.5);
        assert_eq!(transform.to_screen(vec2(100.0, 100.0)), vec2(200.0, 100.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::framing(WorldBounds::new(600.0, 400.0));

        camera.zoom_by(5.0);
        assert_eq!(camera.zoom(), 1.5);
        assert_eq!(camera.dimensions, vec2(400.0, 400.0 / 1.5));

        camera.zoom_by(100.0);
        assert_eq!(camera.zoom(), Camera::MAX_ZOOM);
        assert_eq!(camera.dimensions, vec2(300.0, 200.0));
        assert_eq!(camera.position, vec2(300.0, 200.0));

        camera.zoom_by(-100.0);
        assert_eq!(camera.zoom(), Camera::MIN_ZOOM);
        assert_eq!(camera.dimensions, vec2(600.0, 400.0));
    }
}
