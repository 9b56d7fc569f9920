//! Feature Layout - Centralized Feature Definition
//!
//! The column order below is the single source of truth: it must match
//! the order the classifiers were trained with. Changing it silently
//! breaks every loaded model.

/// Feature names in the exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Label-encoded categoricals (0-6) ===
    "age_bucket_le",        // 0: age band code
    "sex_clean_le",         // 1
    "reporter_type_le",     // 2
    "route_clean_le",       // 3
    "dose_bin_le",          // 4
    "indication_clean_le",  // 5
    "active_ingredient_le", // 6

    // === Raw numerics, passed through unencoded (7-10) ===
    "drug_count",           // 7
    "reaction_count",       // 8
    "serious_outcome",      // 9
    "polypharmacy",         // 10
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 11;

/// Categorical columns that run through a pre-fit label encoder,
/// keyed exactly as they appear in the encoder artifact.
pub const ENCODED_COLUMNS: &[&str] = &[
    "age_bucket",
    "sex_clean",
    "reporter_type",
    "route_clean",
    "dose_bin",
    "indication_clean",
    "active_ingredient",
];

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 11);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_encoded_columns_prefix_layout() {
        // The seven encoded columns come first, with the "_le" suffix
        for (i, col) in ENCODED_COLUMNS.iter().enumerate() {
            assert_eq!(FEATURE_LAYOUT[i], format!("{}_le", col));
        }
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("age_bucket_le"), Some(0));
        assert_eq!(feature_index("active_ingredient_le"), Some(6));
        assert_eq!(feature_index("polypharmacy"), Some(10));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("age_bucket_le"));
        assert_eq!(feature_name(10), Some("polypharmacy"));
        assert_eq!(feature_name(100), None);
    }
}
