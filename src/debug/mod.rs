pub mod gradient_check;
pub mod numerical_check;

pub use gradient_check::{check_unit_gradient, numerical_gradient, GradientCheckReport};
pub use numerical_check::{check_array, check_unit, saturation_rate, NumericalIssue};
