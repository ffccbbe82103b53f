use ndarray::array;
use crate::activations::{Activate, Activation, ActivationUnit};
use crate::error::ActivationError;

#[test]
fn test_new_unit_has_no_activation() {
    let unit = Activate::new(Activation::Tanh, &[4]);
    assert!(!unit.is_computed());
    assert!(unit.activation().is_none());
    assert_eq!(unit.kind(), Activation::Tanh);
    assert_eq!(unit.output_shape(), &[4]);
}

#[test]
fn test_backward_before_forward_fails() {
    let unit = Activate::new(Activation::Sigmoid, &[1]);
    let err = unit.backward(array![1.0f32].into_dyn().view()).unwrap_err();
    assert_eq!(err, ActivationError::NotComputed);
    assert!(err.is_logic_error());
    assert!(!err.is_configuration_error());
    assert_eq!(err.to_string(), "Activation not yet computed");
}

#[test]
fn test_forward_caches_activation() {
    let mut unit = Activate::new(Activation::Relu, &[2]);
    let output = unit.forward(array![-2.0f32, 3.0].into_dyn().view()).unwrap().clone();
    assert_eq!(output, array![0.0f32, 3.0].into_dyn());
    assert!(unit.is_computed());
    assert_eq!(unit.activation(), Some(&output));

    let grad = unit.backward(array![1.0f32, 1.0].into_dyn().view()).unwrap();
    assert_eq!(grad, array![0.0f32, 1.0].into_dyn());
}

#[test]
fn test_forward_is_idempotent_for_backward() {
    let x = array![[0.4f32, -1.3, 2.2], [1.0, 0.0, -0.7]].into_dyn();
    let g = array![[0.5f32, -0.5, 1.5], [2.0, 1.0, -1.0]].into_dyn();

    for activation in Activation::ALL {
        let mut unit = Activate::new(activation, x.shape());
        let first = unit.forward(x.view()).unwrap().clone();
        let grad_first = unit.backward(g.view()).unwrap();

        let second = unit.forward(x.view()).unwrap().clone();
        let grad_second = unit.backward(g.view()).unwrap();

        assert_eq!(first, second, "{} forward not repeatable", activation);
        assert_eq!(grad_first, grad_second, "{} backward changed after re-forward", activation);
    }
}

#[test]
fn test_forward_overwrites_cache() {
    let mut unit = Activate::new(Activation::Sigmoid, &[1]);
    unit.forward(array![10.0f32].into_dyn().view()).unwrap();
    unit.forward(array![0.0f32].into_dyn().view()).unwrap();

    // Uses the latest activation (0.5), not the saturated one
    let grad = unit.backward(array![1.0f32].into_dyn().view()).unwrap();
    assert_eq!(grad, array![0.25f32].into_dyn());
}

#[test]
fn test_backward_uses_cached_output_not_input() {
    // For relu, a negative input becomes 0 so the mask must come from the output
    let mut unit = Activate::new(Activation::Relu, &[3]);
    unit.forward(array![-1.0f32, 0.0, 1.0].into_dyn().view()).unwrap();
    let grad = unit.backward(array![3.0f32, 3.0, 3.0].into_dyn().view()).unwrap();
    assert_eq!(grad, array![0.0f32, 0.0, 3.0].into_dyn());
}

#[test]
fn test_output_shape_is_advisory() {
    let mut unit = Activate::new(Activation::Tanh, &[3]);
    let output = unit.forward(array![[0.0f32, 1.0], [2.0, 3.0]].into_dyn().view()).unwrap();
    assert_eq!(output.shape(), &[2, 2]);
    assert_eq!(unit.output_shape(), &[3]);
}

#[test]
fn test_gradient_shape_mismatch_is_reported() {
    let mut unit = Activate::new(Activation::Tanh, &[3]);
    unit.forward(array![0.0f32, 1.0, 2.0].into_dyn().view()).unwrap();
    let err = unit.backward(array![1.0f32, 1.0].into_dyn().view()).unwrap_err();
    assert!(matches!(err, ActivationError::DimensionMismatch { .. }));
}

#[test]
fn test_failed_forward_keeps_previous_activation() {
    let mut unit = Activate::new(Activation::Softmax, &[1, 2]);
    unit.forward(array![[0.0f32, 0.0]].into_dyn().view()).unwrap();

    let err = unit.forward(array![1.0f32, 2.0].into_dyn().view()).unwrap_err();
    assert!(matches!(err, ActivationError::DimensionMismatch { .. }));
    assert_eq!(unit.activation(), Some(&array![[0.5f32, 0.5]].into_dyn()));
}

#[test]
fn test_units_as_trait_objects() {
    let mut units: Vec<Box<dyn ActivationUnit>> = Activation::ALL
        .iter()
        .map(|&kind| Box::new(Activate::new(kind, &[1, 3])) as Box<dyn ActivationUnit>)
        .collect();

    let x = array![[0.5f32, -0.5, 1.5]].into_dyn();
    for unit in units.iter_mut() {
        let output = unit.forward(x.view()).unwrap().clone();
        assert_eq!(output, unit.kind().transform(x.view()).unwrap());
    }
}

#[test]
fn test_distinct_units_run_on_separate_threads() {
    let handles: Vec<_> = Activation::ALL
        .iter()
        .map(|&kind| {
            std::thread::spawn(move || {
                let mut unit = Activate::new(kind, &[2, 2]);
                let x = array![[1.0f32, -1.0], [0.5, 2.0]].into_dyn();
                unit.forward(x.view()).unwrap();
                unit.backward(array![[1.0f32, 1.0], [1.0, 1.0]].into_dyn().view()).unwrap()
            })
        })
        .collect();

    for (handle, kind) in handles.into_iter().zip(Activation::ALL) {
        let grad = handle.join().unwrap();
        let a = kind.transform(array![[1.0f32, -1.0], [0.5, 2.0]].into_dyn().view()).unwrap();
        let expected = kind.backward(a.view(), array![[1.0f32, 1.0], [1.0, 1.0]].into_dyn().view()).unwrap();
        assert_eq!(grad, expected);
    }
}
