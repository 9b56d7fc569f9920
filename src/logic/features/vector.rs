//! Feature Vector - the fixed-order numeric input to the classifiers

use serde::{Deserialize, Serialize};

use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};

/// Ordered feature values in the layout defined by `FEATURE_LAYOUT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Named values for structured logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!(FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (name.to_string(), *value))
            .collect::<std::collections::BTreeMap<_, _>>())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let vector = FeatureVector::new();
        assert_eq!(vector.values, [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn test_get_by_name() {
        let mut values = [0.0; FEATURE_COUNT];
        values[7] = 3.0; // drug_count
        let vector = FeatureVector::from_values(values);

        assert_eq!(vector.get_by_name("drug_count"), Some(3.0));
        assert_eq!(vector.get_by_name("age_bucket_le"), Some(0.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);
    }

    #[test]
    fn test_to_log_entry_names_every_feature() {
        let log = FeatureVector::new().to_log_entry();
        let map = log.as_object().unwrap();
        assert_eq!(map.len(), FEATURE_COUNT);
        assert!(map.contains_key("polypharmacy"));
    }
}
