//! High-level linear regression trained by gradient descent.
//!
//! Wraps [`GradientDescent`] with strategies chosen from a
//! [`DescentConfig`], and returns a [`LinearModel`] ready for prediction.

use crate::data::{DatasetError, Observations};
use crate::training::{GradientDescent, OptimizeError};

use super::config::{DescentConfig, LossKind};
use super::linear::{Link, LinearModel};

/// Linear (least squares) or logistic regression fitted by gradient descent.
///
/// # Example
///
/// ```
/// use regressors::data::Observations;
/// use regressors::model::{DescentConfig, LinearRegression};
///
/// let obs = Observations::from_pairs(
///     vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
///     vec![2.0, 4.0, 6.0, 8.0],
/// ).unwrap();
///
/// let config = DescentConfig::builder().build().unwrap();
/// let fitted = LinearRegression::train(&obs, config).unwrap();
/// let y = fitted.predict(&[5.0]).unwrap();
/// assert!((y - 10.0).abs() < 1e-2);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    model: LinearModel,
    config: DescentConfig,
}

impl LinearRegression {
    /// Fit a model on `observations`.
    ///
    /// # Errors
    ///
    /// Any [`OptimizeError`] raised by the descent loop, e.g. an empty
    /// dataset or a mini-batch larger than the dataset.
    pub fn train(observations: &Observations, config: DescentConfig) -> Result<Self, OptimizeError> {
        let mut optimizer = GradientDescent::new(
            config.build_gradient(),
            config.build_schedule(),
            config.build_stopping(),
            config.build_estimator()?,
        )
        .with_verbosity(config.verbosity);

        let coefficients = optimizer.optimize(observations)?;
        let link = match config.loss {
            LossKind::LeastSquares => Link::Identity,
            LossKind::Logistic => Link::Logistic,
        };

        Ok(Self {
            model: LinearModel::new(coefficients, link),
            config,
        })
    }

    /// The fitted linear model.
    pub fn linear(&self) -> &LinearModel {
        &self.model
    }

    /// Configuration used for training.
    pub fn config(&self) -> &DescentConfig {
        &self.config
    }

    /// Fitted coefficients.
    pub fn coefficients(&self) -> &[f64] {
        self.model.coefficients()
    }

    /// Predict one feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, DatasetError> {
        self.model.predict(features)
    }

    /// Predict every observation.
    pub fn predict_all(&self, observations: &Observations) -> Result<Vec<f64>, DatasetError> {
        self.model.predict_all(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::model::Strategy;
    use crate::testing::doubling_observations;

    #[test]
    fn trains_least_squares() {
        let obs = doubling_observations();
        let fitted = LinearRegression::train(&obs, DescentConfig::default()).unwrap();
        assert_eq!(fitted.linear().link(), Link::Identity);
        assert_approx_eq!(fitted.coefficients()[0], 2.0, 1e-3);
        assert_eq!(fitted.config().max_iterations, 1000);
    }

    #[test]
    fn oversized_batch_fails() {
        let obs = doubling_observations();
        let config = DescentConfig::builder()
            .strategy(Strategy::MiniBatch { batch_size: 10 })
            .build()
            .unwrap();
        let err = LinearRegression::train(&obs, config).unwrap_err();
        assert!(matches!(err, OptimizeError::BatchTooLarge { .. }));
    }
}
