use serde::{Deserialize, Serialize};

use crate::activations::{registry, Activate, Activation};
use crate::error::{ActivationError, Result};

/// Serializable description of an activation layer position.
///
/// ```json
/// { "activation": "hard_sigmoid", "input_shape": [32, 10] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivationConfig {
    pub activation: String,
    pub input_shape: Vec<usize>,
}

impl ActivationConfig {
    pub fn new<S: Into<String>>(activation: S, input_shape: &[usize]) -> Self {
        ActivationConfig {
            activation: activation.into(),
            input_shape: input_shape.to_vec(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Build the unit through the dispatch table
    pub fn build(&self) -> Result<Activate> {
        registry::make(&self.activation, &self.input_shape)
    }
}

/// Builder for Activate
pub struct ActivationBuilder {
    activation: Option<Activation>,
    input_shape: Option<Vec<usize>>,
}

impl ActivationBuilder {
    /// Create a new activation builder
    pub fn new() -> Self {
        ActivationBuilder {
            activation: None,
            input_shape: None,
        }
    }

    /// Set activation function
    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    /// Set activation function by registered name
    pub fn activation_name(mut self, name: &str) -> Result<Self> {
        self.activation = Some(name.parse()?);
        Ok(self)
    }

    /// Set input shape
    pub fn input_shape(mut self, shape: &[usize]) -> Self {
        self.input_shape = Some(shape.to_vec());
        self
    }

    /// Build the activation unit
    pub fn build(self) -> Result<Activate> {
        let activation = self.activation.ok_or_else(|| {
            ActivationError::invalid_parameter("activation", "Activation not specified")
        })?;

        let input_shape = self.input_shape.ok_or_else(|| {
            ActivationError::invalid_parameter("input_shape", "Input shape not specified")
        })?;

        if input_shape.is_empty() {
            return Err(ActivationError::invalid_parameter(
                "input_shape",
                "Input shape must have at least one dimension",
            ));
        }

        Ok(Activate::new(activation, &input_shape))
    }
}

impl Default for ActivationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
