//! Example loss surfaces
//!
//! Closed-form two-parameter surfaces for exercising the optimizer without a
//! model or data.  The engine always starts at zero, so each surface takes
//! the coordinates of its minimum.
use seed_core;

use self::seed_core::error::EvalError;
use self::seed_core::params::{ParamDef, ParamStore};
use self::seed_core::search::LossEvaluator;

/// The two scalar parameters every surface optimizes
pub fn surface_params() -> Vec<ParamDef> {
    vec![ParamDef::scalar("x"), ParamDef::scalar("y")]
}

fn read_xy(params: &ParamStore<f32>) -> Result<(f32, f32), EvalError> {
    let x = params
        .get("x")
        .ok_or_else(|| EvalError::Evaluator("missing parameter: x".to_string()))?
        .scalar();
    let y = params
        .get("y")
        .ok_or_else(|| EvalError::Evaluator("missing parameter: y".to_string()))?
        .scalar();
    Ok((x, y))
}

/// Sphere surface with its minimum at `(cx, cy)`
pub struct SphereSurface {
    /// x coordinate of the minimum
    pub cx: f32,
    /// y coordinate of the minimum
    pub cy: f32,
}

impl LossEvaluator<f32> for SphereSurface {
    fn loss(&self, params: &ParamStore<f32>) -> Result<f32, EvalError> {
        let (x, y) = read_xy(params)?;
        let u = x - self.cx;
        let v = y - self.cy;
        Ok(u * u + v * v)
    }
}

/// Matyas surface translated so its minimum sits at `(cx, cy)`
pub struct MatyasSurface {
    /// x coordinate of the minimum
    pub cx: f32,
    /// y coordinate of the minimum
    pub cy: f32,
}

impl LossEvaluator<f32> for MatyasSurface {
    fn loss(&self, params: &ParamStore<f32>) -> Result<f32, EvalError> {
        let (x, y) = read_xy(params)?;
        let u = x - self.cx;
        let v = y - self.cy;
        Ok(0.26 * (u.powi(2) + v.powi(2)) - 0.48 * u * v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::engine::SeedEngine;
    use seed_core::search::best_seed;

    #[test]
    fn test_minima() {
        let mut engine: SeedEngine<f32> = SeedEngine::new(surface_params(), 0.05, 5).unwrap();
        let sphere = SphereSurface { cx: 0., cy: 0. };
        let matyas = MatyasSurface { cx: 0., cy: 0. };
        assert_eq!(sphere.loss(engine.params()).unwrap(), 0f32);
        assert_eq!(matyas.loss(engine.params()).unwrap(), 0f32);

        engine.step(1);
        assert!(sphere.loss(engine.params()).unwrap() > 0f32);
        assert!(matyas.loss(engine.params()).unwrap() >= 0f32);
    }

    #[test]
    fn test_sphere_descent() {
        let env = SphereSurface { cx: 0.8, cy: -0.4 };
        let mut engine: SeedEngine<f32> = SeedEngine::new(surface_params(), 0.01, 10).unwrap();
        for _ in 0..400 {
            let seed = best_seed(&engine, &env).unwrap();
            engine.step(seed);
        }
        assert!(env.loss(engine.params()).unwrap() < 0.01);
    }
}
