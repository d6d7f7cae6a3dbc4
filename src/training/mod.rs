//! Gradient descent training.
//!
//! The optimizer is assembled from four strategies:
//!
//! - [`Gradient`]: per-observation loss gradient ([`LeastSquares`], [`Logistic`])
//! - [`Schedule`]: step size per iteration ([`Fixed`], [`InverseTimeDecay`],
//!   [`ExponentialDecay`])
//! - [`StoppingCriteria`]: when to stop ([`MaxIterations`], [`GradientNorm`],
//!   combined with [`StoppingCriteriaExt::or`])
//! - [`GradientEstimator`]: which observations each estimate averages over
//!   ([`FullBatch`], [`Stochastic`], [`MiniBatch`])
//!
//! [`GradientDescent`] runs the loop; [`TrainingLogger`] reports progress
//! through the `log` facade according to [`Verbosity`].

mod descent;
mod error;
mod estimator;
mod gradient;
mod logger;
mod sampling;
mod schedule;
mod stopping;

pub use descent::GradientDescent;
pub use error::{CollaboratorError, OptimizeError};
pub use estimator::{FullBatch, GradientEstimator, MiniBatch, Stochastic};
pub use gradient::{dot, sigmoid, Gradient, LeastSquares, Logistic};
pub use logger::{TrainingLogger, Verbosity};
pub use sampling::sample_without_replacement;
pub use schedule::{ExponentialDecay, Fixed, InverseTimeDecay, Schedule};
pub use stopping::{l2_norm, AnyOf, GradientNorm, MaxIterations, StoppingCriteria, StoppingCriteriaExt};
