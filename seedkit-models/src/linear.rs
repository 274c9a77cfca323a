//! Defines a linear regression model for use within Seedkit
use seed_core;

use self::seed_core::error::EvalError;
use self::seed_core::params::{ParamDef, ParamStore};
use self::seed_core::search::LossEvaluator;

use super::*;

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Fits `y = w * x + b` against a fixed dataset with summed squared error
pub struct LinearRegression {
    /// Input points
    xs: Vec<f32>,
    /// Target outputs
    ys: Vec<f32>,
}

impl LinearRegression {
    /// Returns a new model over the given points
    pub fn new(xs: Vec<f32>, ys: Vec<f32>) -> Self {
        assert_eq!(xs.len(), ys.len());
        LinearRegression { xs: xs, ys: ys }
    }

    /// The two scalar parameters the model optimizes
    pub fn param_defs() -> Vec<ParamDef> {
        vec![ParamDef::scalar("weight"), ParamDef::scalar("bias")]
    }
}

impl LossEvaluator<f32> for LinearRegression {
    fn loss(&self, params: &ParamStore<f32>) -> Result<f32, EvalError> {
        let w = require_param(params, "weight")?.scalar();
        let b = require_param(params, "bias")?.scalar();

        let mut loss = 0f32;
        for i in 0..self.xs.len() {
            let actual = b + w * self.xs[i];
            let diff = self.ys[i] - actual;
            loss += diff * diff;
        }
        Ok(loss)
    }
}
