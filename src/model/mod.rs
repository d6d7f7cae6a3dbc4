//! High-level regression models.
//!
//! - [`LinearRegression`]: train from [`Observations`](crate::data::Observations)
//!   with a [`DescentConfig`], then predict
//! - [`LinearModel`]: fitted coefficients and output [`Link`]
//!
//! # Example
//!
//! ```
//! use regressors::data::Observations;
//! use regressors::model::{DescentConfig, LinearRegression, LossKind};
//!
//! // Constant feature first so the model can fit an intercept.
//! let obs = Observations::from_pairs(
//!     vec![vec![1.0, -2.0], vec![1.0, -1.0], vec![1.0, 1.0], vec![1.0, 2.0]],
//!     vec![0.0, 0.0, 1.0, 1.0],
//! ).unwrap();
//!
//! let config = DescentConfig::builder()
//!     .loss(LossKind::Logistic)
//!     .learning_rate(0.5)
//!     .build()
//!     .unwrap();
//!
//! let fitted = LinearRegression::train(&obs, config).unwrap();
//! assert!(fitted.predict(&[1.0, 2.0]).unwrap() > 0.5);
//! ```

mod config;
mod linear;
mod regression;

pub use config::{ConfigError, DescentConfig, DescentConfigBuilder, LossKind, ScheduleKind, Strategy};
pub use linear::{Link, LinearModel};
pub use regression::LinearRegression;
