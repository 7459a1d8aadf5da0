//! Moving-average MA(q) forecaster.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::ForecastError;
use crate::sampler::{GaussianSampler, Sampler};
use crate::validate::{check_history, check_output, check_variance, check_weights};
use crate::window::Window;

/// An MA(q) model with fixed order `q`.
///
/// The forecast for the next step is
///
/// ```text
/// y[t+1] = constant + weights[0] * e[t] + weights[1] * e[t-1] + ... + weights[q-1] * e[t-q+1]
/// ```
///
/// where `e` are residuals (observed minus previously forecast) or simulated
/// innovations. Two forecasting modes are provided:
///
/// * [`MaModel::forecast()`] converts the last `q` observations into
///   residuals against the model's own earlier one-step predictions. The
///   model remembers each call's one-step prediction, so this mode takes
///   `&mut self`.
/// * [`MaModel::simulate()`] draws the innovations from `N(0, variance)` and
///   returns one stochastic path. It does not touch the prediction history.
///
/// # Concurrency
///
/// The prediction history makes [`MaModel::forecast()`] stateful across
/// calls. Share a model between threads only behind a lock, or give each
/// thread its own clone.
///
/// # Example
///
/// ```
/// use kairos_arma::MaModel;
///
/// let mut model = MaModel::new(vec![0.5], 1.0);
/// // First call: no prior predictions, residual == observation.
/// let first = model.forecast(&[2.0], 1).unwrap();
/// assert_eq!(first, vec![2.0]);
/// // Second call: residual is 2.0 - 2.0 == 0.
/// let second = model.forecast(&[2.0], 1).unwrap();
/// assert_eq!(second, vec![1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct MaModel {
    weights: Vec<f64>,
    constant: f64,
    variance: f64,
    residuals: Vec<f64>,
    predictions: Vec<f64>,
    offset: usize,
}

impl MaModel {
    /// Creates an MA model of order `weights.len()` with zero innovation variance.
    pub fn new(weights: impl Into<Vec<f64>>, constant: f64) -> Self {
        let weights = weights.into();
        let q = weights.len();
        Self {
            weights,
            constant,
            variance: 0.0,
            residuals: vec![0.0; q],
            predictions: vec![0.0; q],
            offset: 0,
        }
    }

    /// Creates an MA(q) model with all weights, the constant and the variance set to zero.
    pub fn zeros(q: usize) -> Self {
        Self::new(vec![0.0; q], 0.0)
    }

    /// Sets the innovation variance used by [`MaModel::simulate()`].
    ///
    /// The value is checked when it is used, not here.
    pub fn with_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }

    /// Returns the model order `q`.
    pub fn order(&self) -> usize {
        self.weights.len()
    }

    /// Returns the lag weights, most recent lag first.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the intercept.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Returns the innovation variance.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Replaces the lag weights.
    ///
    /// # Errors
    ///
    /// [`ForecastError::WeightsLength`] if `weights.len() != self.order()`.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<(), ForecastError> {
        check_weights(weights, self.order())?;
        self.weights.copy_from_slice(weights);
        Ok(())
    }

    /// Replaces the intercept.
    pub fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
    }

    /// Replaces the innovation variance.
    pub fn set_variance(&mut self, variance: f64) {
        self.variance = variance;
    }

    /// Checks that the stored variance is finite and non-negative.
    pub fn validate(&self) -> Result<(), ForecastError> {
        check_variance(self.variance)
    }

    /// Returns the retained one-step predictions as a raw ring of length `q`.
    ///
    /// The next prediction is written at [`MaModel::prediction_offset()`].
    pub fn predictions(&self) -> &[f64] {
        &self.predictions
    }

    /// Returns the ring slot the next one-step prediction will be written to.
    pub fn prediction_offset(&self) -> usize {
        self.offset
    }

    /// Forgets all retained predictions, as if the model were freshly built.
    pub fn reset(&mut self) {
        self.predictions.fill(0.0);
        self.offset = 0;
    }

    /// Forecasts `horizon` steps ahead from the last `q` observations.
    ///
    /// # Errors
    ///
    /// See [`MaModel::forecast_into()`].
    pub fn forecast(&mut self, data: &[f64], horizon: usize) -> Result<Vec<f64>, ForecastError> {
        let mut out = vec![0.0; horizon];
        self.forecast_into(data, horizon, &mut out)?;
        Ok(out)
    }

    /// Writes a `horizon`-step forecast into `out[..horizon]` from the last
    /// `q` observations.
    ///
    /// Each observation `data[i]` (oldest first) becomes the residual
    /// `data[i] - predictions[(i + offset) % q]`, i.e. it is compared with the
    /// one-step prediction this model emitted for the same time index on an
    /// earlier call. Before any call the predictions are zero, so residuals
    /// equal the observations.
    ///
    /// The first-step prediction is stored for the next call and also re-enters
    /// the window in place of the oldest residual, as in the AR recursion.
    /// Residuals after that are unknown and enter the recursion as zero, so the
    /// fed-back value drops out after `q` more steps and from step `q + 1` the
    /// forecast settles on `constant`.
    ///
    /// A horizon of zero writes nothing and leaves the prediction history
    /// unchanged.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::DataLength`] | `data.len() != q` |
    /// | [`ForecastError::NonFiniteData`] | any element of `data` is NaN or infinite |
    /// | [`ForecastError::OutputTooShort`] | `out.len() < horizon` |
    pub fn forecast_into(
        &mut self,
        data: &[f64],
        horizon: usize,
        out: &mut [f64],
    ) -> Result<(), ForecastError> {
        let q = self.order();
        check_history(data, q)?;
        check_output(out, horizon)?;
        debug!(order = q, horizon, "ma forecast");
        if horizon == 0 {
            return Ok(());
        }

        for (i, (residual, observed)) in self.residuals.iter_mut().zip(data).enumerate() {
            *residual = observed - self.predictions[(i + self.offset) % q];
        }

        let mut window = Window::new(&mut self.residuals);
        for (i, slot) in out[..horizon].iter_mut().enumerate() {
            let prediction = window.predict(&self.weights, self.constant);
            *slot = prediction;
            if i == 0 && q > 0 {
                self.predictions[self.offset] = prediction;
                self.offset = (self.offset + 1) % q;
                trace!(offset = self.offset, prediction, "stored one-step prediction");
            }
            window.advance(if i == 0 { prediction } else { 0.0 });
        }
        Ok(())
    }

    /// Simulates one `horizon`-step path driven by `N(0, variance)` innovations.
    ///
    /// Repeated calls return different paths. With zero variance every value
    /// equals [`MaModel::constant()`].
    ///
    /// # Errors
    ///
    /// See [`MaModel::simulate_into()`].
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        horizon: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, ForecastError> {
        let mut out = vec![0.0; horizon];
        self.simulate_into(horizon, &mut out, rng)?;
        Ok(out)
    }

    /// Writes one simulated path into `out[..horizon]` using a Gaussian
    /// sampler built from the stored variance.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::InvalidVariance`] | stored variance is negative or non-finite |
    /// | [`ForecastError::OutputTooShort`] | `out.len() < horizon` |
    pub fn simulate_into<R: Rng + ?Sized>(
        &self,
        horizon: usize,
        out: &mut [f64],
        rng: &mut R,
    ) -> Result<(), ForecastError> {
        let mut sampler = GaussianSampler::new(0.0, self.variance, rng)?;
        self.simulate_into_with(horizon, out, &mut sampler)
    }

    /// Writes one simulated path into `out[..horizon]`, drawing innovations
    /// from `sampler`.
    ///
    /// The window is seeded with `q` draws (oldest first). After every step
    /// the oldest innovation is replaced by a fresh draw, so a full call
    /// consumes `q + horizon` samples. Order-0 models and a zero horizon draw
    /// nothing.
    ///
    /// # Errors
    ///
    /// Same as [`MaModel::simulate_into()`]; the variance is checked even
    /// though `sampler` may ignore it.
    pub fn simulate_into_with<S: Sampler + ?Sized>(
        &self,
        horizon: usize,
        out: &mut [f64],
        sampler: &mut S,
    ) -> Result<(), ForecastError> {
        self.validate()?;
        check_output(out, horizon)?;
        let q = self.order();
        debug!(order = q, horizon, variance = self.variance, "ma simulate");
        if horizon == 0 {
            return Ok(());
        }
        if q == 0 {
            out[..horizon].fill(self.constant);
            return Ok(());
        }

        let mut innovations: Vec<f64> = (0..q).map(|_| sampler.sample()).collect();
        let mut window = Window::new(&mut innovations);
        for slot in &mut out[..horizon] {
            *slot = window.predict(&self.weights, self.constant);
            window.advance(sampler.sample());
        }
        Ok(())
    }
}

impl Default for MaModel {
    /// An MA(0) model that always predicts zero.
    fn default() -> Self {
        Self::zeros(0)
    }
}
