use ndarray::{ArrayD, ArrayViewD};

use crate::activations::{Activation, ActivationUnit};
use crate::error::{ActivationError, Result};

/// Local derivatives below this magnitude count as saturated
pub const SATURATION_THRESHOLD: f32 = 1e-3;

/// Types of numerical issues
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalIssue {
    NaN { count: usize },
    Infinity { count: usize },
    Saturation { count: usize },
}

/// Check an array for NaN and infinite values
pub fn check_array(values: ArrayViewD<f32>) -> Vec<NumericalIssue> {
    let mut issues = Vec::new();
    let nan_count = values.iter().filter(|v| v.is_nan()).count();
    let inf_count = values.iter().filter(|v| v.is_infinite()).count();

    if nan_count > 0 {
        log::warn!("Found {} NaN values", nan_count);
        issues.push(NumericalIssue::NaN { count: nan_count });
    }
    if inf_count > 0 {
        log::warn!("Found {} infinite values", inf_count);
        issues.push(NumericalIssue::Infinity { count: inf_count });
    }

    issues
}

/// Check the cached activation of a unit, including saturated entries for elementwise kinds
pub fn check_unit<U: ActivationUnit + ?Sized>(unit: &U) -> Result<Vec<NumericalIssue>> {
    let activation = unit.activation().ok_or(ActivationError::NotComputed)?;
    let mut issues = check_array(activation.view());

    if unit.kind().is_elementwise() {
        let saturated = count_saturated(unit.kind(), activation.view())?;
        if saturated > 0 {
            log::warn!("{} activation: {} saturated values", unit.kind(), saturated);
            issues.push(NumericalIssue::Saturation { count: saturated });
        }
    }

    Ok(issues)
}

/// Fraction of cached entries whose local derivative has vanished.
///
/// Linear never saturates. Softmax has no elementwise derivative and yields an error.
pub fn saturation_rate<U: ActivationUnit + ?Sized>(unit: &U) -> Result<f32> {
    let activation = unit.activation().ok_or(ActivationError::NotComputed)?;
    if activation.is_empty() {
        return Ok(0.0);
    }
    let saturated = count_saturated(unit.kind(), activation.view())?;
    Ok(saturated as f32 / activation.len() as f32)
}

fn count_saturated(kind: Activation, activation: ArrayViewD<f32>) -> Result<usize> {
    let derivative = kind.derivative(activation)?;
    Ok(derivative.iter().filter(|d| d.abs() < SATURATION_THRESHOLD).count())
}

/// Sanitize an array by replacing NaN and Inf values
pub fn sanitize_array(array: &mut ArrayD<f32>, nan_replacement: f32, inf_replacement: f32) {
    array.mapv_inplace(|x| {
        if x.is_nan() {
            nan_replacement
        } else if x.is_infinite() {
            if x.is_sign_positive() {
                inf_replacement
            } else {
                -inf_replacement
            }
        } else {
            x
        }
    });
}
