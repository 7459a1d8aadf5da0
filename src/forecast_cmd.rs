//! Forecast command: point forecasts from the configured history.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use crate::cli::ForecastArgs;
use crate::config::KairosConfig;
use crate::convert::{self, Model};
use crate::output;

/// Run the forecast command.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let config = KairosConfig::load(&args.config)?;
    let horizon = args.horizon.unwrap_or(config.horizon);
    let model = convert::build_model(&config.model)?;
    info!(
        kind = %config.model.kind,
        order = model.order(),
        n_history = config.data.history.len(),
        horizon,
        "model loaded"
    );

    let path = forecast_history(model, &config.data.history, horizon)?;
    output::write_rows(&mut std::io::stdout().lock(), &[path])
}

/// Forecasts `horizon` steps past the end of `history`.
///
/// AR models use the trailing `p` values. MA models first replay every
/// earlier length-`q` window as a one-step forecast so that the residuals of
/// the final window are measured against the model's own predictions.
pub fn forecast_history(model: Model, history: &[f64], horizon: usize) -> Result<Vec<f64>> {
    match model {
        Model::Ar(m) => {
            let window = convert::last_window(history, m.order())?;
            m.forecast(window, horizon).context("AR forecast failed")
        }
        Model::Ma(mut m) => {
            let q = m.order();
            let window = convert::last_window(history, q)?;
            let n_warm = history.len() - q;
            for (start, past) in history.windows(q.max(1)).take(n_warm).enumerate() {
                let past = &past[..q];
                m.forecast(past, 1)
                    .with_context(|| format!("MA warm-up failed at offset {start}"))?;
            }
            debug!(n_warm, "replayed history");
            m.forecast(window, horizon).context("MA forecast failed")
        }
    }
}
