//! Gradient estimation strategies.
//!
//! The descent loop delegates "what is the gradient at these coefficients?"
//! to a [`GradientEstimator`]. Strategies differ only in which observations
//! they average over:
//!
//! | Estimator | Observations per estimate |
//! |-----------|---------------------------|
//! | [`FullBatch`] | all `n` |
//! | [`Stochastic`] | 1, drawn uniformly |
//! | [`MiniBatch`] | `batch_size`, drawn without replacement |
//!
//! All estimates are the unweighted mean of per-observation gradients.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::Observations;

use super::error::OptimizeError;
use super::gradient::Gradient;
use super::sampling::sample_without_replacement;

/// Strategy for estimating the full-dataset gradient.
pub trait GradientEstimator {
    /// Estimate the loss gradient at `coefficients`.
    ///
    /// The result has length `observations.feature_count()`. Fails with
    /// [`OptimizeError::CoefficientArity`] if `coefficients` does not have that
    /// length.
    fn calculate_gradient(
        &mut self,
        gradient: &dyn Gradient,
        observations: &Observations,
        coefficients: &[f64],
    ) -> Result<Vec<f64>, OptimizeError>;
}

impl<T: GradientEstimator + ?Sized> GradientEstimator for Box<T> {
    fn calculate_gradient(
        &mut self,
        gradient: &dyn Gradient,
        observations: &Observations,
        coefficients: &[f64],
    ) -> Result<Vec<f64>, OptimizeError> {
        (**self).calculate_gradient(gradient, observations, coefficients)
    }
}

/// Average per-observation gradients over `indices`, dividing each
/// contribution by `batch_size` as it is accumulated.
fn mean_gradient(
    gradient: &dyn Gradient,
    observations: &Observations,
    coefficients: &[f64],
    indices: impl IntoIterator<Item = usize>,
    batch_size: usize,
) -> Result<Vec<f64>, OptimizeError> {
    let n_features = observations.feature_count();
    let scale = batch_size as f64;
    let mut total = vec![0.0; n_features];

    for index in indices {
        let observation = observations.get(index)?;
        let contribution =
            gradient.gradient(coefficients, observation.features(), observation.outcome())?;

        if contribution.len() != n_features {
            return Err(OptimizeError::GradientArity {
                index,
                expected: n_features,
                got: contribution.len(),
            });
        }

        for (acc, slope) in total.iter_mut().zip(&contribution) {
            *acc += slope / scale;
        }
    }

    Ok(total)
}

/// Check that there is something to average over and that `coefficients`
/// has one value per feature. Returns the number of observations.
fn validate_inputs(
    observations: &Observations,
    coefficients: &[f64],
) -> Result<usize, OptimizeError> {
    if observations.is_empty() {
        return Err(OptimizeError::EmptyObservations);
    }

    let n_features = observations.feature_count();
    if coefficients.len() != n_features {
        return Err(OptimizeError::CoefficientArity {
            expected: n_features,
            got: coefficients.len(),
        });
    }

    Ok(observations.len())
}

// =============================================================================
// FullBatch
// =============================================================================

/// Exact gradient: mean over every observation, in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullBatch;

impl GradientEstimator for FullBatch {
    fn calculate_gradient(
        &mut self,
        gradient: &dyn Gradient,
        observations: &Observations,
        coefficients: &[f64],
    ) -> Result<Vec<f64>, OptimizeError> {
        let n = validate_inputs(observations, coefficients)?;
        mean_gradient(gradient, observations, coefficients, 0..n, n)
    }
}

// =============================================================================
// Stochastic
// =============================================================================

/// Single-sample estimate: one uniformly drawn observation per call.
#[derive(Debug, Clone)]
pub struct Stochastic {
    rng: Xoshiro256PlusPlus,
}

impl Stochastic {
    /// Create a seeded stochastic estimator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl GradientEstimator for Stochastic {
    fn calculate_gradient(
        &mut self,
        gradient: &dyn Gradient,
        observations: &Observations,
        coefficients: &[f64],
    ) -> Result<Vec<f64>, OptimizeError> {
        let n = validate_inputs(observations, coefficients)?;
        let index = self.rng.gen_range(0..n);
        mean_gradient(gradient, observations, coefficients, [index], 1)
    }
}

// =============================================================================
// MiniBatch
// =============================================================================

/// Mini-batch estimate: mean over `batch_size` observations sampled without
/// replacement.
///
/// `batch_size == 1` behaves like [`Stochastic`]; `batch_size == n` samples
/// every observation and yields exactly the [`FullBatch`] estimate.
///
/// # Example
///
/// ```
/// use regressors::data::Observations;
/// use regressors::training::{GradientEstimator, LeastSquares, MiniBatch};
///
/// let obs = Observations::from_pairs(
///     vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
///     vec![2.0, 4.0, 6.0, 8.0],
/// ).unwrap();
///
/// let mut estimator = MiniBatch::new(2, 42).unwrap();
/// let g = estimator.calculate_gradient(&LeastSquares, &obs, &[0.0]).unwrap();
/// assert_eq!(g.len(), 1);
/// assert!(g[0] < 0.0); // coefficient is below the optimum
/// ```
#[derive(Debug, Clone)]
pub struct MiniBatch {
    batch_size: usize,
    rng: Xoshiro256PlusPlus,
}

impl MiniBatch {
    /// Create a seeded mini-batch estimator.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::ZeroBatchSize`] if `batch_size == 0`.
    pub fn new(batch_size: usize, seed: u64) -> Result<Self, OptimizeError> {
        if batch_size == 0 {
            return Err(OptimizeError::ZeroBatchSize);
        }
        Ok(Self {
            batch_size,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        })
    }

    /// Number of observations per estimate.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl GradientEstimator for MiniBatch {
    /// # Errors
    ///
    /// [`OptimizeError::BatchTooLarge`] if the batch size exceeds the number of
    /// observations. The batch is never silently shrunk.
    fn calculate_gradient(
        &mut self,
        gradient: &dyn Gradient,
        observations: &Observations,
        coefficients: &[f64],
    ) -> Result<Vec<f64>, OptimizeError> {
        let n = validate_inputs(observations, coefficients)?;
        if self.batch_size > n {
            return Err(OptimizeError::BatchTooLarge {
                batch_size: self.batch_size,
                n_observations: n,
            });
        }

        let batch = sample_without_replacement(&mut self.rng, n, self.batch_size);
        mean_gradient(gradient, observations, coefficients, batch, self.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::doubling_observations;
    use crate::training::LeastSquares;

    /// Returns the observation's features as its gradient, so the estimate
    /// reveals which rows were sampled.
    struct Echo;

    impl Gradient for Echo {
        fn gradient(
            &self,
            _coefficients: &[f64],
            features: &[f64],
            _outcome: f64,
        ) -> Result<Vec<f64>, crate::training::CollaboratorError> {
            Ok(features.to_vec())
        }
    }

    #[test]
    fn full_batch_is_mean_gradient() {
        let obs = doubling_observations();
        // 2 (c x - 2x) x at c = 0: -4x², mean over x = 1..4 is -4 * 7.5
        let g = FullBatch
            .calculate_gradient(&LeastSquares, &obs, &[0.0])
            .unwrap();
        assert_eq!(g, vec![-30.0]);
    }

    #[test]
    fn mini_batch_of_n_equals_full_batch() {
        let obs = doubling_observations();
        let coefficients = [0.37];
        let full = FullBatch
            .calculate_gradient(&LeastSquares, &obs, &coefficients)
            .unwrap();

        let mut mini = MiniBatch::new(obs.len(), 11).unwrap();
        for _ in 0..5 {
            let g = mini
                .calculate_gradient(&LeastSquares, &obs, &coefficients)
                .unwrap();
            assert_eq!(g, full);
        }
    }

    #[test]
    fn mini_batch_of_one_returns_a_single_sample_gradient() {
        let obs = doubling_observations();
        let per_sample: Vec<Vec<f64>> = obs
            .iter()
            .map(|o| LeastSquares.gradient(&[0.5], o.features(), o.outcome()).unwrap())
            .collect();

        let mut mini = MiniBatch::new(1, 5).unwrap();
        for _ in 0..20 {
            let g = mini.calculate_gradient(&LeastSquares, &obs, &[0.5]).unwrap();
            assert!(per_sample.contains(&g), "{:?} is not a per-sample gradient", g);
        }
    }

    #[test]
    fn mini_batch_samples_without_replacement() {
        // Features 1, 10, 100: any two distinct rows give a sum that is not 2x a row.
        let obs =
            Observations::from_pairs(vec![vec![1.0], vec![10.0], vec![100.0]], vec![0.0; 3])
                .unwrap();
        let mut mini = MiniBatch::new(2, 9).unwrap();
        for _ in 0..30 {
            let g = mini.calculate_gradient(&Echo, &obs, &[0.0]).unwrap();
            let sum = g[0] * 2.0;
            assert!([11.0, 101.0, 110.0].contains(&sum), "sum {}", sum);
        }
    }

    #[test]
    fn mini_batch_is_reproducible_per_seed() {
        let obs = doubling_observations();
        let mut a = MiniBatch::new(2, 123).unwrap();
        let mut b = MiniBatch::new(2, 123).unwrap();
        for _ in 0..10 {
            assert_eq!(
                a.calculate_gradient(&Echo, &obs, &[0.0]).unwrap(),
                b.calculate_gradient(&Echo, &obs, &[0.0]).unwrap()
            );
        }
    }

    #[test]
    fn mini_batch_rejects_oversized_batch() {
        let obs = doubling_observations();
        let mut mini = MiniBatch::new(5, 0).unwrap();
        let err = mini.calculate_gradient(&Echo, &obs, &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::BatchTooLarge {
                batch_size: 5,
                n_observations: 4
            }
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn zero_batch_size_rejected() {
        assert!(matches!(
            MiniBatch::new(0, 0),
            Err(OptimizeError::ZeroBatchSize)
        ));
    }

    #[test]
    fn empty_observations_rejected() {
        let obs = Observations::new();
        for estimator in [
            &mut FullBatch as &mut dyn GradientEstimator,
            &mut Stochastic::new(0),
            &mut MiniBatch::new(1, 0).unwrap(),
        ] {
            let err = estimator.calculate_gradient(&Echo, &obs, &[]).unwrap_err();
            assert!(matches!(err, OptimizeError::EmptyObservations));
        }
    }

    #[test]
    fn coefficient_length_must_match_features() {
        let obs = doubling_observations();
        for coefficients in [&[] as &[f64], &[0.0, 5.0]] {
            for estimator in [
                &mut FullBatch as &mut dyn GradientEstimator,
                &mut Stochastic::new(0),
                &mut MiniBatch::new(2, 0).unwrap(),
            ] {
                let err = estimator
                    .calculate_gradient(&LeastSquares, &obs, coefficients)
                    .unwrap_err();
                assert!(matches!(
                    err,
                    OptimizeError::CoefficientArity { expected: 1, got } if got == coefficients.len()
                ));
                assert_eq!(err.kind(), ErrorKind::InvalidInput);
            }
        }
    }

    #[test]
    fn stochastic_picks_one_row() {
        let obs = doubling_observations();
        let mut sgd = Stochastic::new(3);
        for _ in 0..20 {
            let g = sgd.calculate_gradient(&Echo, &obs, &[0.0]).unwrap();
            assert!([1.0, 2.0, 3.0, 4.0].contains(&g[0]));
        }
    }

    #[test]
    fn gradient_arity_is_checked() {
        struct TooLong;
        impl Gradient for TooLong {
            fn gradient(
                &self,
                _: &[f64],
                _: &[f64],
                _: f64,
            ) -> Result<Vec<f64>, crate::training::CollaboratorError> {
                Ok(vec![0.0, 0.0])
            }
        }

        let obs = doubling_observations();
        let err = FullBatch
            .calculate_gradient(&TooLong, &obs, &[0.0])
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::GradientArity {
                index: 0,
                expected: 1,
                got: 2
            }
        ));
    }
}
