//! Training progress logging.
//!
//! [`TrainingLogger`] gates records by [`Verbosity`] and forwards them to the
//! [`log`] facade, so output goes wherever the application installed a logger.

use std::time::Instant;

/// How much the optimizer reports while running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Only problems (e.g. non-finite gradients).
    Warning,
    /// Start and end of a run.
    Info,
    /// Every iteration.
    Debug,
}

/// Logger for a single optimization run.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            started: None,
        }
    }

    /// Verbosity this logger was created with.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn start_training(&mut self, n_observations: usize, n_features: usize) {
        self.started = Some(Instant::now());
        if self.verbosity >= Verbosity::Info {
            log::info!(
                "starting gradient descent: {} observations, {} features",
                n_observations,
                n_features
            );
        }
    }

    pub fn log_iteration(&self, iteration: usize, step_size: f64, gradient_norm: f64) {
        if self.verbosity >= Verbosity::Debug {
            log::debug!(
                "[{}] step_size={:.6e} gradient_norm={:.6e}",
                iteration,
                step_size,
                gradient_norm
            );
        }
    }

    /// Warn that the gradient estimate contains NaN or infinite values.
    pub fn log_non_finite_gradient(&self, iteration: usize) {
        if self.verbosity >= Verbosity::Warning {
            log::warn!(
                "[{}] gradient estimate is not finite; check the step size schedule",
                iteration
            );
        }
    }

    pub fn finish_training(&self, iterations: usize) {
        if self.verbosity >= Verbosity::Info {
            let elapsed = self.started.map(|t| t.elapsed().as_secs_f64()).unwrap_or(0.0);
            log::info!(
                "gradient descent stopped after {} iterations ({:.3}s)",
                iterations,
                elapsed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Silent);
    }

    #[test]
    fn logger_runs_at_every_level() {
        for verbosity in [
            Verbosity::Silent,
            Verbosity::Warning,
            Verbosity::Info,
            Verbosity::Debug,
        ] {
            let mut logger = TrainingLogger::new(verbosity);
            logger.start_training(4, 1);
            logger.log_iteration(0, 0.01, 1.0);
            logger.log_non_finite_gradient(0);
            logger.finish_training(1);
            assert_eq!(logger.verbosity(), verbosity);
        }
    }
}
