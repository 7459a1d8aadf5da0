//! Simulate command: stochastic MA paths.

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, warn};

use kairos_arma::MaModel;

use crate::cli::SimulateArgs;
use crate::config::KairosConfig;
use crate::convert::{self, Model};
use crate::output;

/// Run the simulate command.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();
    let config = KairosConfig::load(&args.config)?;
    let horizon = args.horizon.unwrap_or(config.horizon);

    let model = match convert::build_model(&config.model)? {
        Model::Ma(m) => m,
        Model::Ar(_) => bail!("simulate requires an ma model, config has kind = \"ar\""),
    };
    if config.model.variance.is_none() {
        warn!("no variance configured, simulated paths will be constant");
    }
    if !config.data.history.is_empty() {
        warn!("[data].history is ignored by simulate");
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    info!(order = model.order(), horizon, n_paths = args.paths, "simulating");

    let paths = simulate_paths(&model, horizon, args.paths, &mut rng)?;
    output::write_rows(&mut std::io::stdout().lock(), &paths)
}

/// Draws `n_paths` independent simulated paths of length `horizon`.
pub fn simulate_paths(
    model: &MaModel,
    horizon: usize,
    n_paths: usize,
    rng: &mut StdRng,
) -> Result<Vec<Vec<f64>>> {
    (0..n_paths)
        .map(|i| {
            model
                .simulate(horizon, &mut *rng)
                .with_context(|| format!("simulation failed for path {i}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_have_requested_shape() {
        let model = MaModel::new(vec![0.5, 0.2], 0.0).with_variance(1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let paths = simulate_paths(&model, 5, 3, &mut rng).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.len() == 5));
        assert_ne!(paths[0], paths[1]);
    }

    #[test]
    fn seeded_runs_repeat() {
        let model = MaModel::new(vec![0.5], 1.0).with_variance(0.5);
        let a = simulate_paths(&model, 4, 2, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = simulate_paths(&model, 4, 2, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_variance_propagates() {
        let model = MaModel::new(vec![0.5], 1.0).with_variance(-2.0);
        let mut rng = StdRng::seed_from_u64(1);
        let err = simulate_paths(&model, 4, 1, &mut rng).unwrap_err();
        assert!(format!("{err:#}").contains("invalid innovation variance"));
    }
}
