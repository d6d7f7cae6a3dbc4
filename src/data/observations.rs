//! Feature/outcome pairs used as training input.
//!
//! [`Observations`] is the only data container the optimizers read from. It
//! enforces that every stored [`Observation`] has the same number of features,
//! fixed by the first insertion.

use std::slice;

use super::error::DatasetError;

// =============================================================================
// Observation
// =============================================================================

/// A single training pair: feature vector and outcome.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    features: Vec<f64>,
    outcome: f64,
}

impl Observation {
    /// Create an observation from its feature vector and outcome.
    pub fn new(features: Vec<f64>, outcome: f64) -> Self {
        Self { features, outcome }
    }

    /// Feature values.
    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Outcome (target) value.
    #[inline]
    pub fn outcome(&self) -> f64 {
        self.outcome
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}

// =============================================================================
// Observations
// =============================================================================

/// Ordered collection of observations sharing one feature count.
///
/// Insertion order is preserved and defines indexing order.
///
/// # Example
///
/// ```
/// use regressors::data::Observations;
///
/// let obs = Observations::from_pairs(
///     vec![vec![1.0, 0.5], vec![2.0, 1.5]],
///     vec![3.0, 4.0],
/// ).unwrap();
///
/// assert_eq!(obs.len(), 2);
/// assert_eq!(obs.feature_count(), 2);
/// assert_eq!(obs.outcomes(), vec![3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observations {
    observations: Vec<Observation>,
    feature_count: usize,
}

impl Observations {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from parallel feature and outcome sequences.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::OutcomeCountMismatch`] if the sequences differ in length.
    /// - [`DatasetError::FeatureCountMismatch`] if the feature vectors do not
    ///   all have the same length.
    pub fn from_pairs(features: Vec<Vec<f64>>, outcomes: Vec<f64>) -> Result<Self, DatasetError> {
        if features.len() != outcomes.len() {
            return Err(DatasetError::OutcomeCountMismatch {
                features: features.len(),
                outcomes: outcomes.len(),
            });
        }

        let mut observations = Self {
            observations: Vec::with_capacity(outcomes.len()),
            feature_count: 0,
        };
        for (row, outcome) in features.into_iter().zip(outcomes) {
            observations.add(row, outcome)?;
        }

        Ok(observations)
    }

    /// Append one feature/outcome pair.
    ///
    /// # Errors
    ///
    /// Fails if the feature vector is empty or its length differs from
    /// previously added observations.
    pub fn add(&mut self, features: Vec<f64>, outcome: f64) -> Result<(), DatasetError> {
        self.add_observation(Observation::new(features, outcome))
    }

    /// Append a prebuilt observation. Same checks as [`add`](Self::add).
    pub fn add_observation(&mut self, observation: Observation) -> Result<(), DatasetError> {
        let got = observation.n_features();

        if got == 0 {
            return Err(DatasetError::EmptyFeatures {
                index: self.observations.len(),
            });
        }

        if self.observations.is_empty() {
            self.feature_count = got;
        } else if got != self.feature_count {
            return Err(DatasetError::FeatureCountMismatch {
                index: self.observations.len(),
                expected: self.feature_count,
                got,
            });
        }

        self.observations.push(observation);
        Ok(())
    }

    /// Feature vectors, in insertion order.
    pub fn features(&self) -> Vec<&[f64]> {
        self.observations.iter().map(Observation::features).collect()
    }

    /// Outcomes, in insertion order.
    pub fn outcomes(&self) -> Vec<f64> {
        self.observations.iter().map(Observation::outcome).collect()
    }

    /// Number of stored observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if no observations are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Feature count shared by all observations (0 when empty).
    #[inline]
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Observation at `index`.
    ///
    /// # Errors
    ///
    /// [`DatasetError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Observation, DatasetError> {
        self.observations
            .get(index)
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.observations.len(),
            })
    }

    /// Iterate observations in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a Observations {
    type Item = &'a Observation;
    type IntoIter = slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
