use ndarray::{ArrayD, ArrayViewD, Zip};

use crate::activations::{Activate, Activation, ActivationUnit};
use crate::error::{ActivationError, Result};

/// Analytic vs. finite-difference gradients for one activation
#[derive(Debug, Clone)]
pub struct GradientCheckReport {
    pub analytic: ArrayD<f32>,
    pub numerical: ArrayD<f32>,
    pub max_abs_error: f32,
    pub max_relative_error: f32,
}

impl GradientCheckReport {
    pub fn passes(&self, tolerance: f32) -> bool {
        self.max_abs_error <= tolerance
    }
}

/// Scalar probe `L(x) = sum(f(x) * W)`, accumulated in f64
pub fn weighted_sum(kind: Activation, x: ArrayViewD<f32>, weights: ArrayViewD<f32>) -> Result<f64> {
    let output = kind.transform(x)?;
    if output.shape() != weights.shape() {
        return Err(ActivationError::dimension_mismatch(
            format!("weights of shape {:?}", output.shape()),
            format!("{:?}", weights.shape()),
        ));
    }
    Ok(output
        .iter()
        .zip(weights.iter())
        .map(|(&a, &w)| a as f64 * w as f64)
        .sum())
}

/// Central-difference estimate of dL/dx for `L(x) = sum(f(x) * W)`
pub fn numerical_gradient(
    kind: Activation,
    x: ArrayViewD<f32>,
    weights: ArrayViewD<f32>,
    epsilon: f32,
) -> Result<ArrayD<f32>> {
    if epsilon <= 0.0 {
        return Err(ActivationError::invalid_parameter("epsilon", "must be positive"));
    }

    let mut probe = x.to_owned();
    let mut gradient = ArrayD::zeros(x.raw_dim());

    for (index, &original) in x.indexed_iter() {
        let (plus, minus) = (original + epsilon, original - epsilon);

        probe[index.clone()] = plus;
        let loss_plus = weighted_sum(kind, probe.view(), weights.view())?;

        probe[index.clone()] = minus;
        let loss_minus = weighted_sum(kind, probe.view(), weights.view())?;

        probe[index.clone()] = original;
        // Divide by the step actually taken; x + eps rounds for large |x|
        let step = plus as f64 - minus as f64;
        gradient[index] = ((loss_plus - loss_minus) / step) as f32;
    }

    Ok(gradient)
}

/// Compare a unit's backward pass against the finite-difference estimate.
///
/// `weights` doubles as the upstream gradient, since dL/da = W.
pub fn check_unit_gradient(
    kind: Activation,
    x: ArrayViewD<f32>,
    weights: ArrayViewD<f32>,
    epsilon: f32,
) -> Result<GradientCheckReport> {
    let mut unit = Activate::new(kind, x.shape());
    unit.forward(x.view())?;
    let analytic = unit.backward(weights.view())?;
    let numerical = numerical_gradient(kind, x, weights, epsilon)?;

    let mut max_abs_error = 0.0f32;
    let mut max_relative_error = 0.0f32;
    Zip::from(&analytic).and(&numerical).for_each(|&a, &n| {
        let abs_error = (a - n).abs();
        let scale = a.abs().max(n.abs()).max(1e-8);
        max_abs_error = max_abs_error.max(abs_error);
        max_relative_error = max_relative_error.max(abs_error / scale);
    });

    log::debug!(
        "{} gradient check: max abs error {:.3e}, max relative error {:.3e}",
        kind,
        max_abs_error,
        max_relative_error
    );

    Ok(GradientCheckReport {
        analytic,
        numerical,
        max_abs_error,
        max_relative_error,
    })
}
