//! regressors: linear model fitting by gradient descent.
//!
//! This crate fits linear model coefficients by iterating
//! `c -= step_size * gradient` until a stopping criterion fires. The gradient
//! can be estimated from every observation, a single random one, or a random
//! mini-batch drawn without replacement.
//!
//! # Key Types
//!
//! - [`Observations`] - Arity-checked feature/outcome pairs
//! - [`GradientDescent`] - The optimization loop
//! - [`MiniBatch`] / [`FullBatch`] / [`Stochastic`] - Gradient estimators
//! - [`LinearRegression`] / [`DescentConfig`] - High-level training API
//!
//! # Example
//!
//! ```
//! use regressors::data::Observations;
//! use regressors::training::{Fixed, GradientDescent, LeastSquares, MaxIterations};
//!
//! let obs = Observations::from_pairs(
//!     vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
//!     vec![2.0, 4.0, 6.0, 8.0],
//! ).unwrap();
//!
//! let mut gd = GradientDescent::mini_batch(
//!     LeastSquares,
//!     Fixed::new(0.01),
//!     MaxIterations::new(2000),
//!     2,
//!     42,
//! ).unwrap();
//!
//! let coefficients = gd.optimize(&obs).unwrap();
//! assert!((coefficients[0] - 2.0).abs() < 1e-3);
//! ```

// Re-export approx traits for users who want to compare coefficients
pub use approx;

pub mod data;
pub mod error;
pub mod model;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use error::ErrorKind;

// Data types
pub use data::{DatasetError, Observation, Observations};

// Optimizer and strategies
pub use training::{
    FullBatch, Gradient, GradientDescent, GradientEstimator, MiniBatch, OptimizeError, Schedule,
    Stochastic, StoppingCriteria, Verbosity,
};

// High-level API
pub use model::{DescentConfig, LinearModel, LinearRegression};
