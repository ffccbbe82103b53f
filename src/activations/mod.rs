//! # Activation Functions Module
//!
//! Activation layers for a neural network layer stack. Each activation has a
//! forward transform and a hand-derived backward rule; an [`Activate`] unit
//! caches the forward output so the backward pass can be computed from it.
//!
//! ## Available Activations
//!
//! | Name | Forward `a = f(x)` | Backward |
//! |---|---|---|
//! | `tanh` | `tanh(x)` | `g * (1 - a^2)` |
//! | `softplus` | `ln(1 + e^(-x))` | `g * (1 - e^(-a))` |
//! | `sigmoid` | `1 / (1 + e^(-x))` | `g * a * (1 - a)` |
//! | `linear` | `x` | `g` |
//! | `relu` | `max(0, x)` | `g * [a > 0]` |
//! | `softmax` | row-wise `e^(x - max) / sum` | `(g - sum_row(g * a)) * a` |
//! | `hard_sigmoid` | `clip(0.2x + 0.5, 0, 1)` | `g * 0.2 * [0 < a < 1]` |
//!
//! ## Usage Example
//!
//! ```rust
//! use athena_activations::activations::{registry, ActivationUnit};
//! use ndarray::array;
//!
//! let mut unit = registry::make("sigmoid", &[1]).unwrap();
//! let output = unit.forward(array![0.0f32].into_dyn().view()).unwrap();
//! assert!((output[[0]] - 0.5).abs() < 1e-6);
//!
//! let grad = unit.backward(array![1.0f32].into_dyn().view()).unwrap();
//! assert!((grad[[0]] - 0.25).abs() < 1e-6);
//! ```
//!
//! ## Notes
//!
//! - Backward uses only the cached activation, never the original input.
//! - Softmax works on rank-2 `(samples, features)` arrays and reduces over axis 1.
//! - The softplus backward rule `1 - e^(-a)` is kept as-is even though it is
//!   not the textbook softplus gradient.

pub mod functions;
pub mod registry;
pub mod unit;

pub use functions::Activation;
pub use registry::{make, Constructor, ACTIVATIONS};
pub use unit::{Activate, ActivationUnit};
