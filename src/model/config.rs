//! Regression training configuration with builder pattern.
//!
//! [`DescentConfig`] selects the loss, gradient estimator, step size schedule
//! and stopping rule used by [`LinearRegression`](super::LinearRegression).
//! The builder is generated by `bon` and validated at build time.
//!
//! # Example
//!
//! ```
//! use regressors::model::{DescentConfig, LossKind, ScheduleKind, Strategy};
//!
//! // All defaults: least squares, full batch, fixed 0.01 step, 1000 iterations
//! let config = DescentConfig::builder().build().unwrap();
//!
//! let config = DescentConfig::builder()
//!     .loss(LossKind::Logistic)
//!     .strategy(Strategy::MiniBatch { batch_size: 32 })
//!     .learning_rate(0.1)
//!     .schedule(ScheduleKind::InverseTime { decay: 0.01 })
//!     .max_iterations(5_000)
//!     .tolerance(1e-6)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::training::{
    ExponentialDecay, Fixed, FullBatch, Gradient, GradientEstimator, GradientNorm,
    InverseTimeDecay, LeastSquares, Logistic, MaxIterations, MiniBatch, OptimizeError, Schedule,
    StoppingCriteria, StoppingCriteriaExt, Stochastic, Verbosity,
};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Learning rate must be finite and positive.
    InvalidLearningRate(f64),
    /// At least one iteration is required.
    InvalidMaxIterations,
    /// Mini-batch size must be at least 1.
    InvalidBatchSize,
    /// Gradient-norm tolerance must be finite and positive.
    InvalidTolerance(f64),
    /// Invalid schedule parameter.
    InvalidSchedule { field: &'static str, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLearningRate(v) => {
                write!(f, "learning_rate must be positive, got {}", v)
            }
            Self::InvalidMaxIterations => write!(f, "max_iterations must be at least 1"),
            Self::InvalidBatchSize => write!(f, "batch_size must be at least 1"),
            Self::InvalidTolerance(v) => write!(f, "tolerance must be positive, got {}", v),
            Self::InvalidSchedule { field, value } => {
                write!(f, "{} is out of range, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// Parameter enums
// =============================================================================

/// Loss to minimize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LossKind {
    /// Squared error; predictions are c·x.
    #[default]
    LeastSquares,
    /// Binary cross-entropy; predictions are σ(c·x).
    Logistic,
}

/// Which observations each gradient estimate averages over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Every observation.
    #[default]
    FullBatch,
    /// One observation per iteration.
    Stochastic,
    /// `batch_size` observations per iteration, without replacement.
    MiniBatch { batch_size: usize },
}

/// How the step size evolves from `learning_rate`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ScheduleKind {
    /// Constant `learning_rate`.
    #[default]
    Fixed,
    /// `learning_rate / (1 + decay * t)`.
    InverseTime { decay: f64 },
    /// `learning_rate * rate^t`.
    Exponential { rate: f64 },
}

// =============================================================================
// DescentConfig
// =============================================================================

/// Configuration for fitting a linear model by gradient descent.
#[derive(Debug, Clone, Builder)]
#[builder(derive(Clone, Debug), finish_fn(vis = "", name = __build_internal))]
pub struct DescentConfig {
    /// Loss function. Default: least squares.
    #[builder(default)]
    pub loss: LossKind,

    /// Gradient estimation strategy. Default: full batch.
    #[builder(default)]
    pub strategy: Strategy,

    /// Initial step size. Default: 0.01.
    #[builder(default = 0.01)]
    pub learning_rate: f64,

    /// Step size schedule. Default: fixed.
    #[builder(default)]
    pub schedule: ScheduleKind,

    /// Iteration ceiling. Default: 1000.
    #[builder(default = 1000)]
    pub max_iterations: usize,

    /// Stop early once the gradient norm drops below this value.
    /// `None` runs until `max_iterations`.
    pub tolerance: Option<f64>,

    /// Seed for stochastic and mini-batch sampling. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: descent_config_builder::IsComplete> DescentConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is out of range.
    pub fn build(self) -> Result<DescentConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl DescentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations);
        }

        if let Strategy::MiniBatch { batch_size: 0 } = self.strategy {
            return Err(ConfigError::InvalidBatchSize);
        }

        if let Some(tol) = self.tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(ConfigError::InvalidTolerance(tol));
            }
        }

        match self.schedule {
            ScheduleKind::Fixed => {}
            ScheduleKind::InverseTime { decay } => {
                if !(decay.is_finite() && decay >= 0.0) {
                    return Err(ConfigError::InvalidSchedule {
                        field: "decay",
                        value: decay,
                    });
                }
            }
            ScheduleKind::Exponential { rate } => {
                if !(rate > 0.0 && rate <= 1.0) {
                    return Err(ConfigError::InvalidSchedule {
                        field: "rate",
                        value: rate,
                    });
                }
            }
        }

        Ok(())
    }

    pub(crate) fn build_gradient(&self) -> Box<dyn Gradient> {
        match self.loss {
            LossKind::LeastSquares => Box::new(LeastSquares),
            LossKind::Logistic => Box::new(Logistic),
        }
    }

    pub(crate) fn build_schedule(&self) -> Box<dyn Schedule> {
        match self.schedule {
            ScheduleKind::Fixed => Box::new(Fixed::new(self.learning_rate)),
            ScheduleKind::InverseTime { decay } => {
                Box::new(InverseTimeDecay::new(self.learning_rate, decay))
            }
            ScheduleKind::Exponential { rate } => {
                Box::new(ExponentialDecay::new(self.learning_rate, rate))
            }
        }
    }

    pub(crate) fn build_stopping(&self) -> Box<dyn StoppingCriteria> {
        let max = MaxIterations::new(self.max_iterations);
        match self.tolerance {
            None => Box::new(max),
            Some(tol) => Box::new(max.or(GradientNorm::new(tol))),
        }
    }

    pub(crate) fn build_estimator(&self) -> Result<Box<dyn GradientEstimator>, OptimizeError> {
        Ok(match self.strategy {
            Strategy::FullBatch => Box::new(FullBatch),
            Strategy::Stochastic => Box::new(Stochastic::new(self.seed)),
            Strategy::MiniBatch { batch_size } => Box::new(MiniBatch::new(batch_size, self.seed)?),
        })
    }
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            loss: LossKind::default(),
            strategy: Strategy::default(),
            learning_rate: 0.01,
            schedule: ScheduleKind::default(),
            max_iterations: 1000,
            tolerance: None,
            seed: 42,
            verbosity: Verbosity::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DescentConfig::builder().build().unwrap();
        assert_eq!(config.loss, LossKind::LeastSquares);
        assert_eq!(config.strategy, Strategy::FullBatch);
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.schedule, ScheduleKind::Fixed);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tolerance, None);
        assert_eq!(config.seed, 42);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }

    #[test]
    fn default_matches_builder() {
        let built = DescentConfig::builder().build().unwrap();
        let default = DescentConfig::default();
        assert_eq!(built.learning_rate, default.learning_rate);
        assert_eq!(built.max_iterations, default.max_iterations);
        assert_eq!(built.seed, default.seed);
    }

    #[test]
    fn rejects_bad_learning_rate() {
        for lr in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = DescentConfig::builder().learning_rate(lr).build().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidLearningRate(_)));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = DescentConfig::builder().max_iterations(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxIterations);
    }

    #[test]
    fn rejects_zero_batch() {
        let err = DescentConfig::builder()
            .strategy(Strategy::MiniBatch { batch_size: 0 })
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidBatchSize);
    }

    #[test]
    fn rejects_bad_tolerance_and_schedule() {
        assert!(matches!(
            DescentConfig::builder().tolerance(-1.0).build(),
            Err(ConfigError::InvalidTolerance(_))
        ));
        assert!(matches!(
            DescentConfig::builder()
                .schedule(ScheduleKind::Exponential { rate: 1.5 })
                .build(),
            Err(ConfigError::InvalidSchedule { field: "rate", .. })
        ));
        assert!(matches!(
            DescentConfig::builder()
                .schedule(ScheduleKind::InverseTime { decay: -0.1 })
                .build(),
            Err(ConfigError::InvalidSchedule { field: "decay", .. })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::InvalidLearningRate(0.0).to_string(),
            "learning_rate must be positive, got 0"
        );
        assert_eq!(
            ConfigError::InvalidMaxIterations.to_string(),
            "max_iterations must be at least 1"
        );
    }
}
