//! Model Module - loading and running the organ classifiers

pub mod inference;

pub use inference::{artifact_file, ModelError, ModelRegistry, OrganModel};
