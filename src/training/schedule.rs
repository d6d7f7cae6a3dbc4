//! Step size schedules.
//!
//! A [`Schedule`] maps the zero-based iteration index to a step size
//! (learning rate). Schedules may carry decay parameters set at construction
//! but never depend on other mutable state.

use super::error::CollaboratorError;

/// Learning rate as a function of iteration.
pub trait Schedule {
    /// Step size for iteration `iteration` (zero-based).
    fn step_size(&self, iteration: usize) -> Result<f64, CollaboratorError>;
}

impl<T: Schedule + ?Sized> Schedule for &T {
    fn step_size(&self, iteration: usize) -> Result<f64, CollaboratorError> {
        (**self).step_size(iteration)
    }
}

impl<T: Schedule + ?Sized> Schedule for Box<T> {
    fn step_size(&self, iteration: usize) -> Result<f64, CollaboratorError> {
        (**self).step_size(iteration)
    }
}

/// Constant step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed {
    step_size: f64,
}

impl Fixed {
    pub fn new(step_size: f64) -> Self {
        Self { step_size }
    }
}

impl Schedule for Fixed {
    fn step_size(&self, _iteration: usize) -> Result<f64, CollaboratorError> {
        Ok(self.step_size)
    }
}

/// Inverse time decay: η / (1 + d·t).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseTimeDecay {
    initial: f64,
    decay: f64,
}

impl InverseTimeDecay {
    /// Create a schedule starting at `initial` with decay rate `decay` (≥ 0).
    pub fn new(initial: f64, decay: f64) -> Self {
        Self { initial, decay }
    }
}

impl Schedule for InverseTimeDecay {
    fn step_size(&self, iteration: usize) -> Result<f64, CollaboratorError> {
        Ok(self.initial / (1.0 + self.decay * iteration as f64))
    }
}

/// Exponential decay: η·rᵗ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    initial: f64,
    rate: f64,
}

impl ExponentialDecay {
    /// Create a schedule starting at `initial`, multiplied by `rate` (in (0, 1])
    /// every iteration.
    pub fn new(initial: f64, rate: f64) -> Self {
        Self { initial, rate }
    }
}

impl Schedule for ExponentialDecay {
    fn step_size(&self, iteration: usize) -> Result<f64, CollaboratorError> {
        // powi takes i32; saturate instead of wrapping for very long runs.
        let t = i32::try_from(iteration).unwrap_or(i32::MAX);
        Ok(self.initial * self.rate.powi(t))
    }
}
