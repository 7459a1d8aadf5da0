//! Autoregressive AR(p) forecaster.

use tracing::debug;

use crate::error::ForecastError;
use crate::validate::{check_history, check_output, check_weights};
use crate::window::Window;

/// An AR(p) model with fixed order `p`.
///
/// The forecast for the next step is
///
/// ```text
/// y[t+1] = constant + weights[0] * y[t] + weights[1] * y[t-1] + ... + weights[p-1] * y[t-p+1]
/// ```
///
/// so `weights[0]` pairs with the most recent value. Multi-step forecasts feed
/// each prediction back into the window as if it had been observed.
///
/// The order is fixed at construction; [`ArModel::set_weights()`] rejects a
/// replacement of a different length.
///
/// # Example
///
/// ```
/// use kairos_arma::ArModel;
///
/// let model = ArModel::new(vec![0.5, 0.3], 1.0);
/// let forecast = model.forecast(&[2.0, 4.0], 1).unwrap();
/// assert!((forecast[0] - 3.6).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArModel {
    weights: Vec<f64>,
    constant: f64,
}

impl ArModel {
    /// Creates an AR model of order `weights.len()`.
    pub fn new(weights: impl Into<Vec<f64>>, constant: f64) -> Self {
        Self {
            weights: weights.into(),
            constant,
        }
    }

    /// Creates an AR(p) model with all weights and the constant set to zero.
    pub fn zeros(p: usize) -> Self {
        Self::new(vec![0.0; p], 0.0)
    }

    /// Returns the model order `p`.
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

    /// Forecasts `horizon` steps ahead from the last `p` observations.
    ///
    /// `data` holds exactly `p` values, oldest first. A horizon of zero yields
    /// an empty vector.
    ///
    /// # Errors
    ///
    /// See [`ArModel::forecast_into()`].
    pub fn forecast(&self, data: &[f64], horizon: usize) -> Result<Vec<f64>, ForecastError> {
        let mut out = vec![0.0; horizon];
        self.forecast_into(data, horizon, &mut out)?;
        Ok(out)
    }

    /// Writes a `horizon`-step forecast into `out[..horizon]`.
    ///
    /// The first `horizon` slots of `out` are overwritten starting at index 0;
    /// anything beyond them is left untouched.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::DataLength`] | `data.len() != p` |
    /// | [`ForecastError::NonFiniteData`] | any element of `data` is NaN or infinite |
    /// | [`ForecastError::OutputTooShort`] | `out.len() < horizon` |
    pub fn forecast_into(
        &self,
        data: &[f64],
        horizon: usize,
        out: &mut [f64],
    ) -> Result<(), ForecastError> {
        check_history(data, self.order())?;
        check_output(out, horizon)?;
        debug!(order = self.order(), horizon, "ar forecast");

        let mut slots = data.to_vec();
        let mut window = Window::new(&mut slots);
        for slot in &mut out[..horizon] {
            debug_assert_eq!(window.end() - window.start(), window.len());
            let prediction = window.predict(&self.weights, self.constant);
            *slot = prediction;
            window.advance(prediction);
        }
        Ok(())
    }
}

impl Default for ArModel {
    /// An AR(0) model that always predicts zero.
    fn default() -> Self {
        Self::zeros(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-12, "step {i}: expected {e}, got {a}");
        }
    }

    #[test]
    fn one_step_example() {
        let model = ArModel::new(vec![0.5, 0.3], 1.0);
        let out = model.forecast(&[2.0, 4.0], 1).unwrap();
        assert_close(&out, &[3.6]);
    }

    #[test]
    fn multi_step_feeds_back_predictions() {
        let model = ArModel::new(vec![0.5, 0.3], 1.0);
        let out = model.forecast(&[2.0, 4.0], 3).unwrap();
        // y2 = 0.5*3.6 + 0.3*4.0 + 1 = 4.0
        // y3 = 0.5*4.0 + 0.3*3.6 + 1 = 4.08
        assert_close(&out, &[3.6, 4.0, 4.08]);
    }

    #[test]
    fn ar1_geometric_decay() {
        let model = ArModel::new(vec![0.5], 0.0);
        let out = model.forecast(&[8.0], 4).unwrap();
        assert_close(&out, &[4.0, 2.0, 1.0, 0.5]);
    }

    #[test]
    fn horizon_longer_than_order_wraps() {
        // Pure lag-3 model repeats the seed with period 3.
        let model = ArModel::new(vec![0.0, 0.0, 1.0], 0.0);
        let out = model.forecast(&[1.0, 2.0, 3.0], 7).unwrap();
        assert_close(&out, &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn zero_horizon_is_empty() {
        let model = ArModel::new(vec![0.5], 1.0);
        assert!(model.forecast(&[1.0], 0).unwrap().is_empty());
    }

    #[test]
    fn zero_horizon_still_validates() {
        let model = ArModel::new(vec![0.5], 1.0);
        assert!(model.forecast(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn order_zero_is_constant() {
        let model = ArModel::new(Vec::<f64>::new(), 2.5);
        let out = model.forecast(&[], 3).unwrap();
        assert_close(&out, &[2.5, 2.5, 2.5]);
    }

    #[test]
    fn forecast_into_overwrites_prefix_only() {
        let model = ArModel::new(vec![1.0], 0.0);
        let mut out = [f64::NAN, f64::NAN, 99.0];
        model.forecast_into(&[5.0], 2, &mut out).unwrap();
        assert_eq!(out, [5.0, 5.0, 99.0]);
    }

    #[test]
    fn stale_output_does_not_leak() {
        let model = ArModel::new(vec![0.5, 0.3], 1.0);
        let mut out = vec![1e9; 4];
        model.forecast_into(&[2.0, 4.0], 4, &mut out).unwrap();
        let fresh = model.forecast(&[2.0, 4.0], 4).unwrap();
        assert_eq!(out, fresh);
    }

    #[test]
    fn wrong_data_length() {
        let model = ArModel::new(vec![0.5, 0.3], 1.0);
        let err = model.forecast(&[1.0], 1).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::DataLength {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn non_finite_data() {
        let model = ArModel::new(vec![0.5], 0.0);
        let err = model.forecast(&[f64::NAN], 1).unwrap_err();
        assert!(matches!(err, ForecastError::NonFiniteData));
    }

    #[test]
    fn output_too_short() {
        let model = ArModel::new(vec![0.5], 0.0);
        let mut out = [0.0; 2];
        let err = model.forecast_into(&[1.0], 3, &mut out).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::OutputTooShort { horizon: 3, len: 2 }
        ));
    }

    #[test]
    fn accessors_round_trip() {
        let mut model = ArModel::zeros(2);
        assert_eq!(model.order(), 2);
        assert_eq!(model.weights(), &[0.0, 0.0]);
        assert_eq!(model.constant(), 0.0);

        model.set_weights(&[0.1, 0.2]).unwrap();
        model.set_constant(-3.0);
        assert_eq!(model.weights(), &[0.1, 0.2]);
        assert_eq!(model.weights(), model.weights());
        assert_eq!(model.constant(), -3.0);
        assert_eq!(model.constant(), model.constant());
    }

    #[test]
    fn set_weights_keeps_order() {
        let mut model = ArModel::zeros(2);
        let err = model.set_weights(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::WeightsLength {
                expected: 2,
                got: 3
            }
        ));
        assert_eq!(model.weights(), &[0.0, 0.0]);
    }

    #[test]
    fn default_is_order_zero() {
        let model = ArModel::default();
        assert_eq!(model.order(), 0);
        assert_eq!(model.forecast(&[], 2).unwrap(), vec![0.0, 0.0]);
    }
}
