/*
 * Renderer Module
 *
 * This module handles the rendering of the flocking simulation.
 * Scene drawing goes through the `RenderSurface` trait, which works in
 * surface pixels (origin top-left, y pointing down); `DrawSurface` adapts it
 * to a nannou `Draw` whose origin is the window centre with y pointing up.
 *
 * Only boids and the target marker inside the camera's visible range are
 * drawn. Positions go through the camera's per-axis scale while radii and
 * line widths use the averaged scale.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::culling::{self, TARGET_MARKER_RADIUS};
use crate::error::{Result, SimulationError};
use crate::simulation::Simulation;
use crate::vector::VectorMath;

pub trait RenderSurface {
    fn clear(&mut self);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>);

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgb<u8>, width: f32);

    fn draw_rect(&mut self, origin: Vec2, width: f32, height: f32, color: Rgb<u8>);
}

/// Draws the world backdrop, visible boids and the target marker.
///
/// Returns the number of boids drawn.
pub fn render_scene<S: RenderSurface + ?Sized>(
    surface: &mut S,
    simulation: &Simulation,
    screen_width: f32,
    screen_height: f32,
) -> usize {
    let camera = &simulation.camera;
    let transform = camera.screen_transform(screen_width, screen_height);

    surface.clear();

    // World backdrop, so the edges of the world stay visible when zoomed out of the canvas
    let bounds = simulation.params.bounds;
    let extent = bounds.dimensions() * transform.scale_vector;
    surface.draw_rect(transform.to_screen(Vec2::ZERO), extent.x, extent.y, rgb(20, 20, 28));

    let visible = culling::visible_boids(&simulation.boids, camera);
    for &i in &visible {
        let boid = &simulation.boids[i];
        let center = transform.to_screen(boid.position());
        let radius = boid.size() / 2.0;

        surface.draw_circle(center, transform.length(radius), boid.color());

        // Heading indicator
        let heading = boid.position() + boid.velocity().normalized() * radius * 1.5;
        surface.draw_line(
            center,
            transform.to_screen(heading),
            rgb(255, 255, 255),
            transform.length(1.0),
        );
    }

    if culling::is_target_visible(simulation.target, camera) {
        surface.draw_circle(
            transform.to_screen(simulation.target),
            transform.length(TARGET_MARKER_RADIUS),
            rgb(255, 60, 60),
        );
    }

    visible.len()
}

/// `RenderSurface` over a nannou `Draw` covering `window_rect`.
pub struct DrawSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> DrawSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    #[inline]
    fn to_window(&self, point: Vec2) -> Vec2 {
        vec2(self.window_rect.left() + point.x, self.window_rect.top() - point.y)
    }
}

impl RenderSurface for DrawSurface<'_> {
    fn clear(&mut self) {
        self.draw.background().color(BLACK);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb<u8>) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgb<u8>, width: f32) {
        self.draw
            .line()
            .start(self.to_window(start))
            .end(self.to_window(end))
            .weight(width)
            .color(color);
    }

    fn draw_rect(&mut self, origin: Vec2, width: f32, height: f32, color: Rgb<u8>) {
        let center = origin + vec2(width, height) / 2.0;
        self.draw
            .rect()
            .xy(self.to_window(center))
            .w_h(width, height)
            .color(color);
    }
}

fn render_error(stage: &str, err: impl std::fmt::Debug) -> SimulationError {
    SimulationError::Render(format!("{}: {:?}", stage, err))
}

/// Draws the scene, then the egui overlay, into `frame`.
pub fn render_frame(app: &App, model: &Model, frame: &Frame) -> Result<()> {
    let draw = app.draw();
    let window_rect = app.window_rect();

    let mut surface = DrawSurface::new(&draw, window_rect);
    let visible = render_scene(&mut surface, &model.simulation, window_rect.w(), window_rect.h());

    if let Ok(mut count) = model.debug_info.visible_boids.lock() {
        *count = visible;
    }

    draw.to_frame(app, frame)
        .map_err(|err| render_error("scene", err))?;
    model
        .egui
        .draw_to_frame(frame)
        .map_err(|err| render_error("ui", err))?;

    Ok(())
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(err) = render_frame(app, model, &frame) {
        log::error!("{}", err);
    }
}
