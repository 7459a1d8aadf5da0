//! Argument checks shared by the forecasters.

use crate::error::ForecastError;

/// Checks that `data` holds exactly `order` finite values.
pub(crate) fn check_history(data: &[f64], order: usize) -> Result<(), ForecastError> {
    if data.len() != order {
        return Err(ForecastError::DataLength {
            expected: order,
            got: data.len(),
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ForecastError::NonFiniteData);
    }
    Ok(())
}

/// Checks that `out` can hold `horizon` values.
pub(crate) fn check_output(out: &[f64], horizon: usize) -> Result<(), ForecastError> {
    if out.len() < horizon {
        return Err(ForecastError::OutputTooShort {
            horizon,
            len: out.len(),
        });
    }
    Ok(())
}

/// Checks that replacement weights keep the model order.
pub(crate) fn check_weights(weights: &[f64], order: usize) -> Result<(), ForecastError> {
    if weights.len() != order {
        return Err(ForecastError::WeightsLength {
            expected: order,
            got: weights.len(),
        });
    }
    Ok(())
}

/// Checks that `variance` is a usable Gaussian variance (finite, `>= 0`).
pub(crate) fn check_variance(variance: f64) -> Result<(), ForecastError> {
    if !variance.is_finite() || variance < 0.0 {
        return Err(ForecastError::InvalidVariance { variance });
    }
    Ok(())
}
