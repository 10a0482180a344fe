/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (vector math, boids, flocking engine, camera and frame
 * clock) has no dependency on the window; `app`, `input`, `renderer` and `ui`
 * connect it to nannou.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use camera::{Camera, ScreenTransform};
pub use clock::{FrameClock, FrameHandler};
pub use error::{SimulationError, VectorError};
pub use params::{SimulationParams, WorldBounds};
pub use physics::{Behavior, BehaviorSet};
pub use renderer::RenderSurface;
pub use simulation::Simulation;
pub use vector::VectorMath;

// Define modules
pub mod app;
pub mod boid;
pub mod camera;
pub mod clock;
pub mod culling;
pub mod debug;
pub mod error;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod simulation;
pub mod ui;
pub mod vector;

// Constants
pub const CANVAS_WIDTH: f32 = 600.0;
pub const CANVAS_HEIGHT: f32 = 400.0;
