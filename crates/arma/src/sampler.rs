//! Innovation sources for the stochastic MA forecast.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::ForecastError;
use crate::validate::check_variance;

/// A source of independent scalar draws.
///
/// [`MaModel::simulate_into_with()`](crate::MaModel::simulate_into_with)
/// only ever calls [`Sampler::sample()`], so any correctly distributed
/// generator (or a scripted one in tests) can drive the recursion.
pub trait Sampler {
    /// Draws one value.
    fn sample(&mut self) -> f64;
}

impl<F: FnMut() -> f64> Sampler for F {
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Gaussian sampler parameterised by mean and **variance**, borrowing an RNG.
///
/// # Example
///
/// ```
/// use kairos_arma::{GaussianSampler, Sampler};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut sampler = GaussianSampler::new(0.0, 4.0, &mut rng).unwrap();
/// assert!(sampler.sample().is_finite());
/// ```
#[derive(Debug)]
pub struct GaussianSampler<'a, R: Rng + ?Sized> {
    normal: Normal<f64>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> GaussianSampler<'a, R> {
    /// Creates a sampler for `N(mean, variance)`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::InvalidVariance`] | `variance` is negative or non-finite |
    /// | [`ForecastError::InvalidMean`] | `mean` is non-finite |
    pub fn new(mean: f64, variance: f64, rng: &'a mut R) -> Result<Self, ForecastError> {
        check_variance(variance)?;
        if !mean.is_finite() {
            return Err(ForecastError::InvalidMean { mean });
        }
        let normal = Normal::new(mean, variance.sqrt())
            .map_err(|_| ForecastError::InvalidVariance { variance })?;
        Ok(Self { normal, rng })
    }

    /// Returns the mean of the distribution.
    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    /// Returns the variance of the distribution.
    pub fn variance(&self) -> f64 {
        self.normal.std_dev().powi(2)
    }
}

impl<R: Rng + ?Sized> Sampler for GaussianSampler<'_, R> {
    fn sample(&mut self) -> f64 {
        self.normal.sample(&mut *self.rng)
    }
}
