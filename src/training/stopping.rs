//! Stopping criteria for the descent loop.
//!
//! The loop asks its [`StoppingCriteria`] after every update whether to stop.
//! It is the only component that decides termination, so any bound on run
//! time (an iteration ceiling) lives here.
//!
//! # Example
//!
//! ```
//! use regressors::training::{GradientNorm, MaxIterations, StoppingCriteria, StoppingCriteriaExt};
//!
//! // Stop on convergence, but never run more than 500 iterations.
//! let mut stop = MaxIterations::new(500).or(GradientNorm::new(1e-6));
//!
//! assert!(!stop.should_stop(1, &[0.0], &[1.0]).unwrap());
//! assert!(stop.should_stop(2, &[0.0], &[1e-9]).unwrap());
//! assert!(stop.should_stop(500, &[0.0], &[1.0]).unwrap());
//! ```

use super::error::CollaboratorError;

/// Termination predicate.
pub trait StoppingCriteria {
    /// Decide whether to stop.
    ///
    /// `iteration` is the number of completed iterations (1 after the first
    /// update); `coefficients` are the values after that update and `gradient`
    /// is the estimate used for it.
    fn should_stop(
        &mut self,
        iteration: usize,
        coefficients: &[f64],
        gradient: &[f64],
    ) -> Result<bool, CollaboratorError>;
}

impl<T: StoppingCriteria + ?Sized> StoppingCriteria for &mut T {
    fn should_stop(
        &mut self,
        iteration: usize,
        coefficients: &[f64],
        gradient: &[f64],
    ) -> Result<bool, CollaboratorError> {
        (**self).should_stop(iteration, coefficients, gradient)
    }
}

impl<T: StoppingCriteria + ?Sized> StoppingCriteria for Box<T> {
    fn should_stop(
        &mut self,
        iteration: usize,
        coefficients: &[f64],
        gradient: &[f64],
    ) -> Result<bool, CollaboratorError> {
        (**self).should_stop(iteration, coefficients, gradient)
    }
}

/// Combinators for stopping criteria.
pub trait StoppingCriteriaExt: StoppingCriteria + Sized {
    /// Stop as soon as either criterion says so.
    fn or<O: StoppingCriteria>(self, other: O) -> AnyOf<Self, O> {
        AnyOf {
            first: self,
            second: other,
        }
    }
}

impl<T: StoppingCriteria> StoppingCriteriaExt for T {}

/// Euclidean norm of a vector.
#[inline]
pub fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

// =============================================================================
// MaxIterations
// =============================================================================

/// Stop once a fixed number of iterations has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIterations {
    max: usize,
}

impl MaxIterations {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// Iteration ceiling.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl StoppingCriteria for MaxIterations {
    fn should_stop(
        &mut self,
        iteration: usize,
        _coefficients: &[f64],
        _gradient: &[f64],
    ) -> Result<bool, CollaboratorError> {
        Ok(iteration >= self.max)
    }
}

// =============================================================================
// GradientNorm
// =============================================================================

/// Stop when the L2 norm of the gradient estimate drops below a tolerance.
///
/// With stochastic estimators the estimate is noisy, so pair this with
/// [`MaxIterations`] via [`StoppingCriteriaExt::or`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientNorm {
    tolerance: f64,
}

impl GradientNorm {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl StoppingCriteria for GradientNorm {
    fn should_stop(
        &mut self,
        _iteration: usize,
        _coefficients: &[f64],
        gradient: &[f64],
    ) -> Result<bool, CollaboratorError> {
        Ok(l2_norm(gradient) < self.tolerance)
    }
}

// =============================================================================
// AnyOf
// =============================================================================

/// Stops when either inner criterion stops. Both are always evaluated so
/// stateful criteria see every iteration.
#[derive(Debug, Clone)]
pub struct AnyOf<A, B> {
    first: A,
    second: B,
}

impl<A: StoppingCriteria, B: StoppingCriteria> StoppingCriteria for AnyOf<A, B> {
    fn should_stop(
        &mut self,
        iteration: usize,
        coefficients: &[f64],
        gradient: &[f64],
    ) -> Result<bool, CollaboratorError> {
        let first = self.first.should_stop(iteration, coefficients, gradient)?;
        let second = self.second.should_stop(iteration, coefficients, gradient)?;
        Ok(first || second)
    }
}
