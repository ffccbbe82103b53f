//! Name to constructor lookup used by layer-construction code.

use super::functions::Activation;
use super::unit::Activate;
use crate::error::{ActivationError, Result};

/// Builds an activation unit for the given input shape.
pub type Constructor = fn(&[usize]) -> Activate;

macro_rules! constructor {
    ($fn_name:ident, $variant:ident) => {
        fn $fn_name(input_shape: &[usize]) -> Activate {
            Activate::new(Activation::$variant, input_shape)
        }
    };
}

constructor!(tanh, Tanh);
constructor!(softplus, Softplus);
constructor!(softmax, Softmax);
constructor!(linear, Linear);
constructor!(relu, Relu);
constructor!(sigmoid, Sigmoid);
constructor!(hard_sigmoid, HardSigmoid);

/// The registered activations, keyed by `Activation::name`. Fixed at compile time.
pub static ACTIVATIONS: [(&str, Constructor); 7] = [
    (Activation::Tanh.name(), tanh),
    (Activation::Softplus.name(), softplus),
    (Activation::Softmax.name(), softmax),
    (Activation::Linear.name(), linear),
    (Activation::Relu.name(), relu),
    (Activation::Sigmoid.name(), sigmoid),
    (Activation::HardSigmoid.name(), hard_sigmoid),
];

/// Find the constructor registered under `name`.
pub fn lookup(name: &str) -> Result<Constructor> {
    ACTIVATIONS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|&(_, constructor)| constructor)
        .ok_or_else(|| {
            log::warn!("unknown activation '{}' requested", name);
            ActivationError::unknown_activation(name)
        })
}

/// Construct the activation unit registered under `name`.
pub fn make(name: &str, input_shape: &[usize]) -> Result<Activate> {
    let constructor = lookup(name)?;
    log::debug!("constructing {} activation for input shape {:?}", name, input_shape);
    Ok(constructor(input_shape))
}

/// Registered names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ACTIVATIONS.iter().map(|&(name, _)| name)
}
