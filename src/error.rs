/*
 * Error Module
 *
 * Error types shared by the vector math, the simulation tick, the frame clock
 * and the renderer.
 */

use thiserror::Error;

/// Failures of the checked vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Failures reported from a simulation tick, a close callback or a frame render.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid delta time: {0} ms")]
    InvalidDeltaTime(f64),

    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
