use ndarray::array;
use crate::activations::{Activate, Activation, ActivationUnit};
use crate::debug::numerical_check::{check_array, check_unit, sanitize_array, saturation_rate, NumericalIssue};
use crate::error::ActivationError;

#[test]
fn test_check_array_counts_nan_and_inf() {
    let values = array![f32::NAN, 1.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN].into_dyn();
    let issues = check_array(values.view());
    assert_eq!(
        issues,
        vec![NumericalIssue::NaN { count: 2 }, NumericalIssue::Infinity { count: 2 }]
    );

    assert!(check_array(array![0.0f32, 1.0].into_dyn().view()).is_empty());
}

#[test]
fn test_check_unit_requires_forward() {
    let unit = Activate::new(Activation::Sigmoid, &[2]);
    assert_eq!(check_unit(&unit).unwrap_err(), ActivationError::NotComputed);
    assert!(saturation_rate(&unit).is_err());
}

#[test]
fn test_check_unit_reports_saturation() {
    let mut unit = Activate::new(Activation::HardSigmoid, &[4]);
    unit.forward(array![10.0f32, -10.0, 0.0, 1.0].into_dyn().view()).unwrap();

    let issues = check_unit(&unit).unwrap();
    assert_eq!(issues, vec![NumericalIssue::Saturation { count: 2 }]);
    assert_eq!(saturation_rate(&unit).unwrap(), 0.5);
}

#[test]
fn test_linear_never_saturates() {
    let mut unit = Activate::new(Activation::Linear, &[3]);
    unit.forward(array![-1e6f32, 0.0, 1e6].into_dyn().view()).unwrap();
    assert_eq!(saturation_rate(&unit).unwrap(), 0.0);
}

#[test]
fn test_softmax_skips_saturation_check() {
    let mut unit = Activate::new(Activation::Softmax, &[1, 2]);
    unit.forward(array![[0.0f32, 0.0]].into_dyn().view()).unwrap();
    assert!(check_unit(&unit).unwrap().is_empty());
    assert!(saturation_rate(&unit).is_err());
}

#[test]
fn test_sanitize_array() {
    let mut values = array![f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 2.0].into_dyn();
    sanitize_array(&mut values, 0.0, 1e6);
    assert_eq!(values, array![0.0f32, 1e6, -1e6, 2.0].into_dyn());
}
