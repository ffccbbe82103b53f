use ndarray::{ArrayD, ArrayViewD};

use super::functions::Activation;
use crate::error::{ActivationError, Result};

/// Trait defining the forward/backward contract shared by every activation layer
pub trait ActivationUnit: Send + Sync {
    /// Which activation this unit applies
    fn kind(&self) -> Activation;

    /// Output shape declared at construction. Advisory only; never checked against inputs.
    fn output_shape(&self) -> &[usize];

    /// Compute the activation for `x` and cache it, replacing any previous result
    fn transform(&mut self, x: ArrayViewD<f32>) -> Result<()>;

    /// The activation cached by the most recent `transform`, if any
    fn activation(&self) -> Option<&ArrayD<f32>>;

    /// Gradient with respect to the input, computed from the cached activation
    fn backward(&self, grad: ArrayViewD<f32>) -> Result<ArrayD<f32>>;

    /// Run `transform` and return a borrow of the cached activation.
    ///
    /// The returned array is overwritten by the next forward call; clone it to keep it.
    fn forward(&mut self, x: ArrayViewD<f32>) -> Result<&ArrayD<f32>> {
        self.transform(x)?;
        self.activation().ok_or(ActivationError::NotComputed)
    }
}

/// An activation layer instance: the activation kind plus its cached output.
#[derive(Clone, Debug)]
pub struct Activate {
    kind: Activation,
    activation: Option<ArrayD<f32>>,
    out_shape: Vec<usize>,
}

impl Activate {
    /// Create a unit for `kind` placed after a layer producing `input_shape`.
    pub fn new(kind: Activation, input_shape: &[usize]) -> Self {
        Activate {
            kind,
            activation: None,
            out_shape: input_shape.to_vec(),
        }
    }

    /// Whether a forward pass has run since construction
    pub fn is_computed(&self) -> bool {
        self.activation.is_some()
    }
}

impl ActivationUnit for Activate {
    fn kind(&self) -> Activation {
        self.kind
    }

    fn output_shape(&self) -> &[usize] {
        &self.out_shape
    }

    fn transform(&mut self, x: ArrayViewD<f32>) -> Result<()> {
        self.activation = Some(self.kind.transform(x)?);
        Ok(())
    }

    fn activation(&self) -> Option<&ArrayD<f32>> {
        self.activation.as_ref()
    }

    fn backward(&self, grad: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
        let activation = self.activation.as_ref().ok_or_else(|| {
            log::warn!("{} backward called before forward", self.kind);
            ActivationError::NotComputed
        })?;
        self.kind.backward(activation.view(), grad)
    }
}
