//! # Athena Activations - Activation Layers with Hand-Derived Gradients
//!
//! The activation family used by Athena's layer stack. Every activation
//! provides a forward transform and the matching backward rule for
//! reverse-mode training; an activation unit caches its forward output and
//! computes the backward pass from that cache alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use athena_activations::activations::{registry, ActivationUnit};
//! use ndarray::array;
//!
//! let mut softmax = registry::make("softmax", &[1, 2]).unwrap();
//! let probs = softmax.forward(array![[0.0f32, 0.0]].into_dyn().view()).unwrap();
//! assert!((probs[[0, 0]] - 0.5).abs() < 1e-6);
//!
//! let grad = softmax.backward(array![[1.0f32, 0.0]].into_dyn().view()).unwrap();
//! assert!((grad[[0, 0]] - 0.25).abs() < 1e-6);
//! assert!((grad[[0, 1]] + 0.25).abs() < 1e-6);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation kinds, units and the name dispatch table
//! - [`builders`] - Builder and serializable config for activation layers
//! - [`debug`] - Gradient checking and numerical diagnostics
//! - [`error`] - Error types and result handling

pub mod activations;
pub mod builders;
pub mod debug;
pub mod error;

pub use activations::{Activate, Activation, ActivationUnit};
pub use error::{ActivationError, Result};

#[cfg(test)]
mod tests;
