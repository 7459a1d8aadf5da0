//! Pure conversion functions: TOML config structs -> kernel model types.

use anyhow::{Result, bail};

use kairos_arma::{ArModel, MaModel};

use crate::config::ModelToml;

/// Model family named in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Ar,
    Ma,
}

/// A configured model of either family.
#[derive(Debug, Clone)]
pub enum Model {
    Ar(ArModel),
    Ma(MaModel),
}

impl Model {
    /// Returns the model order.
    pub fn order(&self) -> usize {
        match self {
            Model::Ar(m) => m.order(),
            Model::Ma(m) => m.order(),
        }
    }
}

/// Parses a model kind name string into the corresponding enum variant.
pub fn parse_kind(s: &str) -> Result<ModelKind> {
    match s.to_lowercase().as_str() {
        "ar" => Ok(ModelKind::Ar),
        "ma" => Ok(ModelKind::Ma),
        other => bail!("unknown model kind: {other:?}"),
    }
}

/// Builds a kernel model from the TOML model section.
pub fn build_model(m: &ModelToml) -> Result<Model> {
    match parse_kind(&m.kind)? {
        ModelKind::Ar => {
            if m.variance.is_some() {
                bail!("variance only applies to ma models");
            }
            Ok(Model::Ar(ArModel::new(m.weights.clone(), m.constant)))
        }
        ModelKind::Ma => {
            let model = MaModel::new(m.weights.clone(), m.constant)
                .with_variance(m.variance.unwrap_or(0.0));
            model.validate()?;
            Ok(Model::Ma(model))
        }
    }
}

/// Returns the trailing `order` values of `history`.
pub fn last_window(history: &[f64], order: usize) -> Result<&[f64]> {
    if history.len() < order {
        bail!(
            "history has {} values, model order {} needs at least that many",
            history.len(),
            order
        );
    }
    Ok(&history[history.len() - order..])
}
