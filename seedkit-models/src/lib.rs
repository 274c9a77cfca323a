//! Library defining the illustrative models optimized in the demos and tests
#![warn(missing_docs, unused)]

#[macro_use]
extern crate serde_derive;
use seed_core;
use seed_data;

/// Defines linear regression
pub mod linear;
/// Defines a single layer softmax network
pub mod nn;
/// Defines synthetic datasets standing in for an external data provider
pub mod synthetic;

use self::seed_core::error::EvalError;
use self::seed_core::params::ParamStore;
use self::seed_data::datatypes::{Element, Tensor};

// A missing parameter is reported as an evaluator failure rather than a panic
// inside an external call
pub(crate) fn require_param<'a, E: Element>(
    params: &'a ParamStore<E>,
    name: &str,
) -> Result<&'a Tensor<E>, EvalError> {
    params
        .get(name)
        .ok_or_else(|| EvalError::Evaluator(format!("missing parameter: {}", name)))
}
