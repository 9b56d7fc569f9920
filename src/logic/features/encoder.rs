//! Label encoders and request encoding
//!
//! The encoders are fit offline against the FAERS training data and
//! shipped as `label_encoders.json`: a map of column name to the ordered
//! class list, where a class's position is its integer code. A value the
//! encoder has never seen encodes to 0 without raising; callers never
//! observe an encoding failure.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::PredictionRequest;

use super::layout::ENCODED_COLUMNS;
use super::vector::FeatureVector;

/// Artifact file holding the fitted class lists, one per categorical column.
pub const ENCODER_ARTIFACT: &str = "label_encoders.json";

/// A single fitted label encoder: class string -> integer code.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Build from the ordered class list the encoder was fit with.
    /// Classes are normalized to upper case so matching is case-insensitive.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = classes
            .into_iter()
            .enumerate()
            .map(|(i, class)| (class.as_ref().trim().to_uppercase(), i))
            .collect();
        Self { index }
    }

    /// Encode a raw value. Unseen values map to 0, silently.
    pub fn transform(&self, value: &str) -> f32 {
        let key = value.trim().to_uppercase();
        self.index.get(&key).copied().unwrap_or(0) as f32
    }
}

#[derive(Debug, Deserialize)]
struct EncoderArtifact(HashMap<String, Vec<String>>);

/// The full set of per-column encoders loaded at startup.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    encoders: HashMap<String, LabelEncoder>,
}

impl EncoderSet {
    /// Load the encoder artifact from the artifacts directory.
    /// A missing or malformed file is fatal at startup.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(ENCODER_ARTIFACT);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let artifact: EncoderArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Self::from_classes(artifact.0))
    }

    pub fn from_classes(classes: HashMap<String, Vec<String>>) -> Self {
        let encoders = classes
            .into_iter()
            .map(|(column, classes)| (column, LabelEncoder::new(classes)))
            .collect();
        Self { encoders }
    }

    /// Encode one column value; a column with no fitted encoder also
    /// falls back to 0.
    pub fn transform(&self, column: &str, value: &str) -> f32 {
        self.encoders
            .get(column)
            .map(|enc| enc.transform(value))
            .unwrap_or(0.0)
    }

    /// Map a raw request into the fixed-order feature vector.
    pub fn encode(&self, req: &PredictionRequest) -> FeatureVector {
        let categorical: [&str; 7] = [
            age_bucket(req.age),
            &req.sex,
            &req.reporter_type,
            &req.route,
            &req.dose_bin,
            &req.indication,
            &req.active_ingredient,
        ];

        let mut values = [0.0f32; super::layout::FEATURE_COUNT];
        for (i, (column, value)) in ENCODED_COLUMNS.iter().zip(categorical).enumerate() {
            values[i] = self.transform(column, value);
        }
        values[7] = req.drug_count as f32;
        values[8] = req.reaction_count as f32;
        values[9] = req.serious_outcome as f32;
        values[10] = req.polypharmacy as f32;

        FeatureVector::from_values(values)
    }

    pub fn columns(&self) -> usize {
        self.encoders.len()
    }
}

/// Age band used both as a model feature and in the composed prompts.
pub fn age_bucket(age: Option<i32>) -> &'static str {
    match age {
        None => "Unknown",
        Some(a) if a <= 18 => "0-18",
        Some(a) if a <= 45 => "19-45",
        Some(a) if a <= 65 => "46-65",
        Some(_) => "65+",
    }
}
