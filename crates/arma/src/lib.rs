//! # kairos-arma
//!
//! Fixed-order AR(p) and MA(q) forecasting with recursive multi-step
//! prediction over a circular window.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArModel::new(weights, c)"] -->|".forecast(&last_p, h)?"| B["Vec&lt;f64&gt;"]
//!     C["MaModel::new(weights, c)"] -->|".forecast(&last_q, h)?"| B
//!     C -->|".with_variance(v).simulate(h, &mut rng)?"| B
//! ```
//!
//! ## Three Forecast Modes
//!
//! **AR** (predictions re-enter the window as observations):
//! ```
//! # use kairos_arma::ArModel;
//! let model = ArModel::new(vec![0.5, 0.3], 1.0);
//! let path = model.forecast(&[2.0, 4.0], 3)?;
//! # Ok::<(), kairos_arma::ForecastError>(())
//! ```
//!
//! **MA, residual-driven** (stateful: remembers its one-step predictions):
//! ```
//! # use kairos_arma::MaModel;
//! let mut model = MaModel::new(vec![0.4], 0.0);
//! let path = model.forecast(&[1.2], 3)?;
//! # Ok::<(), kairos_arma::ForecastError>(())
//! ```
//!
//! **MA, simulated** (innovations drawn from `N(0, variance)`):
//! ```
//! # use kairos_arma::MaModel;
//! # use rand::SeedableRng;
//! let model = MaModel::new(vec![0.4], 0.0).with_variance(1.0);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let path = model.simulate(3, &mut rng)?;
//! # Ok::<(), kairos_arma::ForecastError>(())
//! ```
//!
//! ## Glossary
//!
//! | Term | Accessor | Meaning |
//! |------|----------|---------|
//! | weights | [`ArModel::weights()`], [`MaModel::weights()`] | lag coefficients, index 0 = most recent lag |
//! | constant | [`ArModel::constant()`], [`MaModel::constant()`] | intercept added to every forecast |
//! | variance | [`MaModel::variance()`] | innovation variance for simulation |
//! | horizon | | number of steps forecast in one call |
//! | residual | | observation minus the model's earlier forecast for it |

mod ar;
mod error;
mod ma;
mod sampler;

mod validate;
mod window;

pub use ar::ArModel;
pub use error::{ErrorKind, ForecastError};
pub use ma::MaModel;
pub use sampler::{GaussianSampler, Sampler};
