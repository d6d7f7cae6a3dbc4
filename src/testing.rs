//! Testing utilities for regressors.
//!
//! Assertion helpers and small datasets shared by unit tests, integration
//! tests and benchmarks.
//!
//! ```
//! use regressors::assert_approx_eq;
//! use regressors::testing::doubling_observations;
//!
//! let obs = doubling_observations();
//! assert_approx_eq!(obs.outcomes()[3], 8.0, 1e-12);
//! ```

use approx::AbsDiffEq;

use crate::data::Observations;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for coefficient comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Floating Point Assertions
// =============================================================================

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance. A NaN on
/// either side fails, since the check is written as `!(diff <= tol)`.
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        // NaN compares false, so it fails here
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that two coefficient slices are approximately equal element-wise.
///
/// # Panics
///
/// Panics if lengths differ or any element differs by more than tolerance.
pub fn assert_slice_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            a.abs_diff_eq(e, tolerance),
            "{context}[{i}]: {a} ≠ {e} (diff={}, tolerance={tolerance})",
            (a - e).abs()
        );
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Four single-feature observations with outcome = 2 × feature:
/// `(1, 2), (2, 4), (3, 6), (4, 8)`.
pub fn doubling_observations() -> Observations {
    Observations::from_pairs(
        vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
        vec![2.0, 4.0, 6.0, 8.0],
    )
    .expect("fixture is well-formed")
}

/// Noise-free observations `y = c·x` on a deterministic grid.
///
/// Feature `j` of row `i` is `((i * (j + 3) + j) % 7) / 3.5 - 1`, so values lie
/// in `[-1, 1)` and columns are not collinear.
pub fn linear_observations(coefficients: &[f64], n_rows: usize) -> Observations {
    let mut observations = Observations::new();
    for i in 0..n_rows {
        let features: Vec<f64> = (0..coefficients.len())
            .map(|j| ((i * (j + 3) + j) % 7) as f64 / 3.5 - 1.0)
            .collect();
        let outcome: f64 = features.iter().zip(coefficients).map(|(x, c)| x * c).sum();
        observations
            .add(features, outcome)
            .expect("rows share one feature count");
    }
    observations
}
