//! Training data containers.
//!
//! - [`Observation`]: one feature vector with its outcome
//! - [`Observations`]: ordered, arity-checked collection of observations
//!
//! Optimizers only ever read from [`Observations`]; the same collection can be
//! shared by several independent optimizer runs.

mod error;
mod observations;

pub use error::DatasetError;
pub use observations::{Observation, Observations};
