//! Inference - ONNX Runtime Integration
//!
//! Loads the three per-organ binary classifiers and exposes a pure
//! probability lookup per organ. The models are opaque artifacts: each is
//! an ONNX graph whose float32 probabilities row ends with the
//! positive-class probability (the `predict_proba[:, 1]` equivalent).

use std::collections::BTreeMap;
use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use thiserror::Error;

use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use crate::models::{Organ, OrganPrediction};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    ArtifactMissing(String),
    #[error("failed to load {organ} model: {message}")]
    Load { organ: Organ, message: String },
    #[error("{organ} inference failed: {message}")]
    Inference { organ: Organ, message: String },
}

/// Artifact file for an organ's classifier. Basenames follow the
/// training pipeline's naming (booster type is part of the name).
pub fn artifact_file(organ: Organ) -> &'static str {
    match organ {
        Organ::Liver => "liver_lightgbm.onnx",
        Organ::Kidney => "kidney_xgboost.onnx",
        Organ::Lung => "lung_xgboost.onnx",
    }
}

/// One loaded classifier. The session lock exists only because ONNX
/// Runtime's `run` takes `&mut`; the model itself is never mutated.
#[derive(Debug)]
pub struct OrganModel {
    organ: Organ,
    session: Mutex<Session>,
}

impl OrganModel {
    pub fn load(organ: Organ, dir: &Path) -> Result<Self, ModelError> {
        let path = dir.join(artifact_file(organ));
        if !path.exists() {
            return Err(ModelError::ArtifactMissing(path.display().to_string()));
        }

        tracing::info!("Loading {} model from {}", organ, path.display());

        let session = Session::builder()
            .map_err(|e| ModelError::Load {
                organ,
                message: format!("session builder: {e}"),
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load {
                organ,
                message: format!("optimization level: {e}"),
            })?
            .commit_from_file(&path)
            .map_err(|e| ModelError::Load {
                organ,
                message: e.to_string(),
            })?;

        Ok(Self {
            organ,
            session: Mutex::new(session),
        })
    }

    pub fn organ(&self) -> Organ {
        self.organ
    }

    /// Positive-class probability for one feature vector.
    pub fn predict_probability(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let organ = self.organ;
        let err = |message: String| ModelError::Inference { organ, message };

        let input = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_slice().to_vec(),
        )
        .map_err(|e| err(format!("array error: {e}")))?;

        let mut session = self.session.lock();

        // Probabilities are the model's final output
        let output_name = session
            .outputs()
            .last()
            .map(|o| o.name().to_string())
            .ok_or_else(|| err("model defines no outputs".to_string()))?;

        let input_tensor =
            Value::from_array(input).map_err(|e| err(format!("tensor error: {e}")))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| err(e.to_string()))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| err(format!("missing output {output_name}")))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| err(format!("extract error: {e}")))?;

        let prob = data
            .last()
            .copied()
            .ok_or_else(|| err("empty probability tensor".to_string()))?;

        Ok((prob as f64).clamp(0.0, 1.0))
    }

    /// Probability (4-decimal rounding) plus the discretized risk level.
    pub fn predict(&self, features: &FeatureVector) -> Result<OrganPrediction, ModelError> {
        let probability = round4(self.predict_probability(features)?);
        Ok(OrganPrediction::from_probability(probability))
    }
}

/// All three classifiers, loaded once at startup and read-only afterwards.
#[derive(Debug)]
pub struct ModelRegistry {
    models: Vec<OrganModel>,
}

impl ModelRegistry {
    /// Load every organ model from the artifacts directory.
    /// Any missing or unloadable artifact is fatal.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let models = Organ::ALL
            .iter()
            .map(|&organ| OrganModel::load(organ, dir))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { models })
    }

    /// Run the vector through each classifier. Organs are independent;
    /// the map is keyed in fixed organ order.
    pub fn predict_all(
        &self,
        features: &FeatureVector,
    ) -> Result<BTreeMap<Organ, OrganPrediction>, ModelError> {
        self.models
            .iter()
            .map(|model| Ok((model.organ(), model.predict(features)?)))
            .collect()
    }

    pub fn organ_count(&self) -> usize {
        self.models.len()
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_names() {
        assert_eq!(artifact_file(Organ::Liver), "liver_lightgbm.onnx");
        assert_eq!(artifact_file(Organ::Kidney), "kidney_xgboost.onnx");
        assert_eq!(artifact_file(Organ::Lung), "lung_xgboost.onnx");
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.9), 0.9);
        assert_eq!(round4(0.00004), 0.0);
    }

    #[test]
    fn test_missing_artifact_refuses_to_load() {
        let err = ModelRegistry::load(Path::new("/nonexistent-artifacts")).unwrap_err();
        match err {
            ModelError::ArtifactMissing(path) => {
                assert!(path.contains("liver_lightgbm.onnx"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
