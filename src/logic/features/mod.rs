//! Features Module - request encoding into the model input vector

pub mod encoder;
pub mod layout;
pub mod vector;

pub use encoder::{age_bucket, EncoderSet, LabelEncoder};
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
