//! Builder patterns and serializable configs for activation layers

pub mod activation;

pub use activation::{ActivationBuilder, ActivationConfig};
