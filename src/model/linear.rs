//! Fitted linear model representation.

use crate::data::{DatasetError, Observations};
use crate::training::{dot, sigmoid};

/// Output transform applied to the linear score c·x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Link {
    /// Prediction is the score itself.
    #[default]
    Identity,
    /// Prediction is σ(score), a probability in (0, 1).
    Logistic,
}

impl Link {
    #[inline]
    fn apply(self, score: f64) -> f64 {
        match self {
            Link::Identity => score,
            Link::Logistic => sigmoid(score),
        }
    }
}

/// Coefficients plus the link used to turn scores into predictions.
///
/// No intercept is stored; include a constant feature to fit one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    link: Link,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, link: Link) -> Self {
        Self { coefficients, link }
    }

    /// Fitted coefficients, one per feature.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn link(&self) -> Link {
        self.link
    }

    /// Number of features the model expects.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict one feature vector.
    ///
    /// # Errors
    ///
    /// [`DatasetError::FeatureCountMismatch`] if `features` has the wrong length.
    pub fn predict(&self, features: &[f64]) -> Result<f64, DatasetError> {
        if features.len() != self.coefficients.len() {
            return Err(DatasetError::FeatureCountMismatch {
                index: 0,
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        Ok(self.link.apply(dot(&self.coefficients, features)))
    }

    /// Predict every observation, in insertion order.
    pub fn predict_all(&self, observations: &Observations) -> Result<Vec<f64>, DatasetError> {
        observations
            .iter()
            .enumerate()
            .map(|(index, o)| {
                self.predict(o.features()).map_err(|e| match e {
                    DatasetError::FeatureCountMismatch { expected, got, .. } => {
                        DatasetError::FeatureCountMismatch {
                            index,
                            expected,
                            got,
                        }
                    }
                    other => other,
                })
            })
            .collect()
    }
}
