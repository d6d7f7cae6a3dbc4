//! The gradient descent loop.
//!
//! Each iteration:
//!
//! 1. estimate the gradient with the [`GradientEstimator`]
//! 2. ask the [`Schedule`] for the step size of this iteration
//! 3. update `c[i] -= step_size * g[i]`
//! 4. ask the [`StoppingCriteria`] whether to stop
//!
//! The loop ends only when the stopping criterion says so. Convergence and an
//! exhausted iteration budget are not distinguished: both return the current
//! coefficients.
//!
//! # Example
//!
//! ```
//! use regressors::data::Observations;
//! use regressors::training::{Fixed, FullBatch, GradientDescent, LeastSquares, MaxIterations};
//!
//! let obs = Observations::from_pairs(
//!     vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
//!     vec![2.0, 4.0, 6.0, 8.0],
//! ).unwrap();
//!
//! let mut gd = GradientDescent::new(LeastSquares, Fixed::new(0.01), MaxIterations::new(1000), FullBatch);
//! let coefficients = gd.optimize(&obs).unwrap();
//! assert!((coefficients[0] - 2.0).abs() < 1e-3);
//! ```

use crate::data::Observations;

use super::error::OptimizeError;
use super::estimator::{FullBatch, GradientEstimator, MiniBatch, Stochastic};
use super::gradient::Gradient;
use super::logger::{TrainingLogger, Verbosity};
use super::schedule::Schedule;
use super::stopping::{l2_norm, StoppingCriteria};

/// Gradient descent optimizer.
///
/// Generic over the loss gradient `G`, step size schedule `S`, stopping
/// criterion `C` and gradient estimator `E`. All four are fixed at
/// construction. Use boxed trait objects to choose them at run time.
///
/// One instance must not be driven from several threads at once; the
/// observations it reads may be shared freely.
#[derive(Debug, Clone)]
pub struct GradientDescent<G, S, C, E = FullBatch> {
    gradient: G,
    schedule: S,
    stopping: C,
    estimator: E,
    verbosity: Verbosity,
}

impl<G, S, C, E> GradientDescent<G, S, C, E>
where
    G: Gradient,
    S: Schedule,
    C: StoppingCriteria,
    E: GradientEstimator,
{
    /// Create an optimizer from its four strategies.
    pub fn new(gradient: G, schedule: S, stopping: C, estimator: E) -> Self {
        Self {
            gradient,
            schedule,
            stopping,
            estimator,
            verbosity: Verbosity::Silent,
        }
    }

    /// Set the logging verbosity. Default: `Silent`.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// The gradient estimator.
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Estimate the gradient at `coefficients` with this optimizer's
    /// estimator and loss gradient.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::CoefficientArity`] if `coefficients` does not have one
    /// value per feature, plus any estimator or collaborator error.
    pub fn calculate_gradient(
        &mut self,
        observations: &Observations,
        coefficients: &[f64],
    ) -> Result<Vec<f64>, OptimizeError> {
        self.estimator
            .calculate_gradient(&self.gradient, observations, coefficients)
    }

    /// Fit coefficients starting from the zero vector.
    ///
    /// # Errors
    ///
    /// - [`OptimizeError::EmptyObservations`] if `observations` is empty.
    /// - Any estimator error, e.g. [`OptimizeError::BatchTooLarge`].
    /// - [`OptimizeError::Collaborator`] carrying the unchanged error of a
    ///   failing gradient, schedule or stopping criterion.
    pub fn optimize(&mut self, observations: &Observations) -> Result<Vec<f64>, OptimizeError> {
        let initial = vec![0.0; observations.feature_count()];
        self.optimize_from(observations, initial)
    }

    /// Fit coefficients starting from `initial`.
    ///
    /// # Errors
    ///
    /// As [`optimize`](Self::optimize), plus
    /// [`OptimizeError::CoefficientArity`] if `initial` does not have one value
    /// per feature.
    pub fn optimize_from(
        &mut self,
        observations: &Observations,
        initial: Vec<f64>,
    ) -> Result<Vec<f64>, OptimizeError> {
        if observations.is_empty() {
            return Err(OptimizeError::EmptyObservations);
        }

        let n_features = observations.feature_count();
        if initial.len() != n_features {
            return Err(OptimizeError::CoefficientArity {
                expected: n_features,
                got: initial.len(),
            });
        }

        let mut logger = TrainingLogger::new(self.verbosity);
        logger.start_training(observations.len(), n_features);

        let mut coefficients = initial;
        let mut iteration = 0;

        loop {
            let gradient = self.calculate_gradient(observations, &coefficients)?;
            let step_size = self.schedule.step_size(iteration)?;

            for (c, g) in coefficients.iter_mut().zip(&gradient) {
                *c -= step_size * g;
            }
            iteration += 1;

            let norm = l2_norm(&gradient);
            if !norm.is_finite() {
                logger.log_non_finite_gradient(iteration);
            }
            logger.log_iteration(iteration, step_size, norm);

            if self
                .stopping
                .should_stop(iteration, &coefficients, &gradient)?
            {
                break;
            }
        }

        logger.finish_training(iteration);
        Ok(coefficients)
    }
}

impl<G, S, C> GradientDescent<G, S, C, Stochastic>
where
    G: Gradient,
    S: Schedule,
    C: StoppingCriteria,
{
    /// Stochastic gradient descent: one random observation per iteration.
    pub fn stochastic(gradient: G, schedule: S, stopping: C, seed: u64) -> Self {
        Self::new(gradient, schedule, stopping, Stochastic::new(seed))
    }
}

impl<G, S, C> GradientDescent<G, S, C, MiniBatch>
where
    G: Gradient,
    S: Schedule,
    C: StoppingCriteria,
{
    /// Mini-batch gradient descent over `batch_size` observations per
    /// iteration.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::ZeroBatchSize`] if `batch_size == 0`.
    pub fn mini_batch(
        gradient: G,
        schedule: S,
        stopping: C,
        batch_size: usize,
        seed: u64,
    ) -> Result<Self, OptimizeError> {
        Ok(Self::new(
            gradient,
            schedule,
            stopping,
            MiniBatch::new(batch_size, seed)?,
        ))
    }
}
