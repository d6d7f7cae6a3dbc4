//! Per-observation loss gradients.
//!
//! A [`Gradient`] returns ∂L/∂c for a single observation: the direction of
//! steepest *ascent* of the loss with respect to the coefficients. The descent
//! loop subtracts it.
//!
//! - [`LeastSquares`]: L = (c·x − y)²
//! - [`Logistic`]: binary cross-entropy on σ(c·x)

use super::error::CollaboratorError;

/// Gradient of a loss for one observation.
///
/// Implementations must be pure: the same inputs always give the same output,
/// and the returned vector has the same length as `coefficients`.
pub trait Gradient {
    /// Compute the loss gradient at `coefficients` for one observation.
    fn gradient(
        &self,
        coefficients: &[f64],
        features: &[f64],
        outcome: f64,
    ) -> Result<Vec<f64>, CollaboratorError>;
}

impl<T: Gradient + ?Sized> Gradient for &T {
    fn gradient(
        &self,
        coefficients: &[f64],
        features: &[f64],
        outcome: f64,
    ) -> Result<Vec<f64>, CollaboratorError> {
        (**self).gradient(coefficients, features, outcome)
    }
}

impl<T: Gradient + ?Sized> Gradient for Box<T> {
    fn gradient(
        &self,
        coefficients: &[f64],
        features: &[f64],
        outcome: f64,
    ) -> Result<Vec<f64>, CollaboratorError> {
        (**self).gradient(coefficients, features, outcome)
    }
}

/// Linear prediction c·x.
#[inline]
pub fn dot(coefficients: &[f64], features: &[f64]) -> f64 {
    debug_assert_eq!(coefficients.len(), features.len());
    coefficients
        .iter()
        .zip(features)
        .map(|(c, x)| c * x)
        .sum()
}

/// Logistic sigmoid 1 / (1 + e^(−z)).
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// =============================================================================
// Least Squares
// =============================================================================

/// Squared error loss: L = (c·x − y)²
///
/// - grad_i = 2 (c·x − y) x_i
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquares;

impl Gradient for LeastSquares {
    fn gradient(
        &self,
        coefficients: &[f64],
        features: &[f64],
        outcome: f64,
    ) -> Result<Vec<f64>, CollaboratorError> {
        let residual = dot(coefficients, features) - outcome;
        Ok(features.iter().map(|x| 2.0 * residual * x).collect())
    }
}

// =============================================================================
// Logistic
// =============================================================================

/// Binary cross-entropy on p = σ(c·x), outcome in {0, 1}.
///
/// - grad_i = (p − y) x_i
#[derive(Debug, Clone, Copy, Default)]
pub struct Logistic;

impl Gradient for Logistic {
    fn gradient(
        &self,
        coefficients: &[f64],
        features: &[f64],
        outcome: f64,
    ) -> Result<Vec<f64>, CollaboratorError> {
        let error = sigmoid(dot(coefficients, features)) - outcome;
        Ok(features.iter().map(|x| error * x).collect())
    }
}
