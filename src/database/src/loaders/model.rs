use crate::error::StoreError;
use crate::loaders::file::{read_json, write_json};
use log::{debug, warn};
use ranking::{FEATURE_COUNT, FeatureVector, LinearModel};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MODEL_FORMAT_VERSION: u32 = 1;

/// On-disk form of a trained model. Coefficients are in feature order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub version: u32,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub trained_on: usize,
}

impl ModelSnapshot {
    pub fn from_model(model: &LinearModel) -> Self {
        ModelSnapshot {
            version: MODEL_FORMAT_VERSION,
            coefficients: model.coefficients().to_vec(),
            intercept: model.intercept(),
            trained_on: model.trained_on(),
        }
    }

    pub fn into_model(self, path: &Path) -> Result<LinearModel, StoreError> {
        if self.version != MODEL_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: path.to_path_buf(),
                version: self.version,
            });
        }

        let coefficients: FeatureVector = self.coefficients.try_into().map_err(|rejected: Vec<f64>| {
            StoreError::invalid(
                path,
                format!("expected {} coefficients, found {}", FEATURE_COUNT, rejected.len()),
            )
        })?;

        if !self.intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(StoreError::invalid(path, "non-finite model parameter"));
        }

        Ok(LinearModel::new(coefficients, self.intercept, self.trained_on))
    }
}

pub struct ModelLoader;

impl ModelLoader {
    /// The saved model, or `None` when there is none yet or it cannot be used.
    pub fn load(path: &Path) -> Option<LinearModel> {
        match Self::try_load(path) {
            Ok(model) => Some(model),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                warn!("could not load previous model, rules will be used: {}", e);
                None
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<LinearModel, StoreError> {
        let snapshot: ModelSnapshot = read_json(path)?;
        let model = snapshot.into_model(path)?;

        debug!("read model trained on {} ratings from {}", model.trained_on(), path.display());

        Ok(model)
    }

    pub fn save(path: &Path, model: &LinearModel) -> Result<(), StoreError> {
        write_json(path, &ModelSnapshot::from_model(model))
    }
}
