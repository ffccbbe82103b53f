use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayD, ArrayView2, ArrayViewD, Axis, Ix2, Zip};
use serde::{Deserialize, Serialize};

use super::registry;
use super::unit::ActivationUnit;
use crate::error::{ActivationError, Result};

/// Slope of the hard sigmoid inside its linear region.
pub const HARD_SIGMOID_SLOPE: f32 = 0.2;

/// An enumeration of the activation functions a layer can apply.
///
/// The serialized form of each variant is its registered name, so layer
/// descriptions can refer to activations as plain strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Tanh,
    Softplus,
    Sigmoid,
    Linear,
    Relu,
    Softmax,
    HardSigmoid,
}

impl Activation {
    /// Every activation, in dispatch-table order.
    pub const ALL: [Activation; 7] = [
        Activation::Tanh,
        Activation::Softplus,
        Activation::Softmax,
        Activation::Linear,
        Activation::Relu,
        Activation::Sigmoid,
        Activation::HardSigmoid,
    ];

    /// The name this activation is registered under.
    pub const fn name(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Softplus => "softplus",
            Activation::Sigmoid => "sigmoid",
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::Softmax => "softmax",
            Activation::HardSigmoid => "hard_sigmoid",
        }
    }

    /// Whether the backward rule is a pure elementwise function of the activation.
    ///
    /// Softmax is the only variant that needs a row reduction.
    pub fn is_elementwise(&self) -> bool {
        !matches!(self, Activation::Softmax)
    }

    /// Apply the activation function to an input array.
    ///
    /// Softmax expects a rank-2 `(samples, features)` array and normalizes
    /// each row; every other variant accepts any rank.
    pub fn transform(&self, x: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
        let output = match self {
            Activation::Tanh => x.mapv(|v| v.tanh()),
            Activation::Softplus => x.mapv(|v| (1.0 + (-v).exp()).ln()),
            Activation::Sigmoid => x.mapv(|v| 1.0 / (1.0 + (-v).exp())),
            Activation::Linear => x.to_owned(),
            // x * [x > 0]; NaN and -inf stay NaN
            Activation::Relu => x.mapv(|v| v * if v > 0.0 { 1.0 } else { 0.0 }),
            Activation::Softmax => softmax(as_rows(x, "input")?).into_dyn(),
            Activation::HardSigmoid => {
                x.mapv(|v| (v * HARD_SIGMOID_SLOPE + 0.5).clamp(0.0, 1.0))
            }
        };
        Ok(output)
    }

    /// Local derivative of the activation, expressed through its output `a`.
    ///
    /// Only defined for elementwise variants; softmax has a full Jacobian per row.
    pub fn derivative(&self, activation: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
        let derivative = match self {
            Activation::Tanh => activation.mapv(|a| 1.0 - a * a),
            // Matches the historical rule: 1 - e^(-a), not sigmoid(x).
            Activation::Softplus => activation.mapv(|a| 1.0 - (-a).exp()),
            Activation::Sigmoid => activation.mapv(|a| a * (1.0 - a)),
            Activation::Linear => ArrayD::ones(activation.raw_dim()),
            Activation::Relu => activation.mapv(|a| if a > 0.0 { 1.0 } else { 0.0 }),
            Activation::HardSigmoid => activation.mapv(|a| {
                if a > 0.0 && a < 1.0 {
                    HARD_SIGMOID_SLOPE
                } else {
                    0.0
                }
            }),
            Activation::Softmax => {
                return Err(ActivationError::invalid_parameter(
                    "activation",
                    "softmax has no elementwise derivative; use backward",
                ))
            }
        };
        Ok(derivative)
    }

    /// Compute the gradient with respect to the input, given the cached
    /// activation `a` and the upstream gradient `grad`.
    pub fn backward(&self, activation: ArrayViewD<f32>, grad: ArrayViewD<f32>) -> Result<ArrayD<f32>> {
        if activation.shape() != grad.shape() {
            return Err(ActivationError::dimension_mismatch(
                format!("gradient of shape {:?}", activation.shape()),
                format!("{:?}", grad.shape()),
            ));
        }

        let downstream = match self {
            Activation::Linear => grad.to_owned(),
            Activation::Softmax => {
                softmax_backward(as_rows(activation, "activation")?, as_rows(grad, "gradient")?)
                    .into_dyn()
            }
            _ => {
                let derivative = self.derivative(activation)?;
                Zip::from(&grad)
                    .and(&derivative)
                    .map_collect(|&g, &d| g * d)
            }
        };
        Ok(downstream)
    }
}

fn as_rows<'a>(array: ArrayViewD<'a, f32>, what: &str) -> Result<ArrayView2<'a, f32>> {
    let ndim = array.ndim();
    array.into_dimensionality::<Ix2>().map_err(|_| {
        ActivationError::dimension_mismatch(
            format!("rank-2 softmax {} (samples, features)", what),
            format!("rank-{}", ndim),
        )
    })
}

/// Row-wise softmax with the row maximum subtracted for stability.
fn softmax(x: ArrayView2<f32>) -> Array2<f32> {
    let row_max = x
        .fold_axis(Axis(1), f32::NEG_INFINITY, |&m, &v| m.max(v))
        .insert_axis(Axis(1));
    let mut exp = &x - &row_max;
    exp.mapv_inplace(f32::exp);
    let row_sum = exp.sum_axis(Axis(1)).insert_axis(Axis(1));
    exp /= &row_sum;
    exp
}

/// Softmax Jacobian-vector product per row: (g - sum_row(g * a)) * a.
fn softmax_backward(a: ArrayView2<f32>, grad: ArrayView2<f32>) -> Array2<f32> {
    let weighted = (&grad * &a).sum_axis(Axis(1)).insert_axis(Axis(1));
    let centered = &grad - &weighted;
    centered * &a
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = ActivationError;

    fn from_str(name: &str) -> Result<Self> {
        registry::lookup(name).map(|constructor| constructor(&[]).kind())
    }
}
