//! Candidate evaluation and the selection policies
//!
//! A search scores N prospective perturbations of the current parameters
//! against an external loss evaluator and reduces the losses to the input of
//! exactly one engine update: a winning seed for `step`, or a weight vector
//! for `weighted_step`.  Searches never mutate the store, so a result is
//! only valid until the next update advances the generation.
extern crate float_ord;
extern crate rayon;
extern crate seed_data;

use self::float_ord::FloatOrd;
use self::rayon::prelude::*;

use self::seed_data::datatypes::Element;
use self::seed_data::intrinsics::inplace_sum;

use engine::SeedEngine;
use error::EvalError;
use noise::NoiseSource;
use params::ParamStore;

/// External capability computing a scalar loss for a parameter set.  Lower is
/// better.  Calls are blocking and non-cancellable; the core never retries
pub trait LossEvaluator<E: Element>: Send + Sync {
    /// Scores the given parameters
    fn loss(&self, params: &ParamStore<E>) -> Result<f32, EvalError>;
}

/// External capability reporting held-out accuracy in `[0, 1]`
pub trait AccuracyEvaluator<E: Element> {
    /// Fraction of held-out examples predicted correctly
    fn accuracy(&self, params: &ParamStore<E>) -> Result<f32, EvalError>;
}

/// Clones the store and applies candidate `index`'s noise for `generation`.
/// This is the same keying `SeedEngine::step` would use, so stepping by the
/// chosen index reproduces the winning candidate exactly
pub fn perturbed_candidate<E: Element>(
    params: &ParamStore<E>,
    noise: &NoiseSource,
    generation: u64,
    index: usize,
) -> ParamStore<E> {
    let mut candidate = params.clone();
    for k in 0..candidate.len() {
        let shape = candidate.defs()[k].shape.clone();
        let n = noise.tensor(&shape, index as i64 + k as i64, generation);
        inplace_sum(candidate.tensors_mut()[k].values_mut(), n.values());
    }
    candidate
}

// Scores the N candidates of the next generation in parallel.  Read-only over
// the store; any evaluator failure surfaces without touching the engine.
fn score_candidates<E, L>(engine: &SeedEngine<E>, env: &L) -> Result<Vec<f32>, EvalError>
where
    E: Element,
    L: LossEvaluator<E>,
{
    let generation = engine.generation() + 1;
    let losses: Vec<Result<f32, EvalError>> = (0..engine.candidates())
        .into_par_iter()
        .map(|i| {
            let candidate = perturbed_candidate(engine.params(), engine.noise(), generation, i);
            env.loss(&candidate)
        })
        .collect();
    losses.into_iter().collect()
}

/// Index of the lowest loss.  Ties break to the first occurrence
pub fn best_index(losses: &[f32]) -> usize {
    assert!(losses.len() > 0);
    let mut best = 0;
    for i in 1..losses.len() {
        if FloatOrd(losses[i]) < FloatOrd(losses[best]) {
            best = i;
        }
    }
    best
}

/// Converts candidate losses into update weights: each candidate's signed
/// improvement over the baseline, scaled.  Candidates that worsened the loss
/// get negative weights, pushing the parameters away from them
pub fn weights_from_losses(baseline: f32, losses: &[f32], scale: f32) -> Vec<f32> {
    losses.iter().map(|l| (baseline - l) * scale).collect()
}

/// Scores the engine's N candidates and returns the winning seed for
/// `SeedEngine::step`.  Calling this again without an intervening step
/// returns the same seed; after a step the result is stale and must not be
/// reused
pub fn best_seed<E, L>(engine: &SeedEngine<E>, env: &L) -> Result<i64, EvalError>
where
    E: Element,
    L: LossEvaluator<E>,
{
    let losses = score_candidates(engine, env)?;
    Ok(best_index(&losses) as i64)
}

/// Scores the engine's N candidates plus the unperturbed baseline and returns
/// the weight vector for `SeedEngine::weighted_step`.  This is a
/// finite-difference estimate of the descent direction
pub fn seed_weights<E, L>(engine: &SeedEngine<E>, env: &L, scale: f32) -> Result<Vec<f32>, EvalError>
where
    E: Element,
    L: LossEvaluator<E>,
{
    let baseline = env.loss(engine.params())?;
    let losses = score_candidates(engine, env)?;
    Ok(weights_from_losses(baseline, &losses, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use params::ParamDef;

    // Deterministic toy evaluator: the summed squared parameter values
    struct SquareSum;

    impl LossEvaluator<f32> for SquareSum {
        fn loss(&self, params: &ParamStore<f32>) -> Result<f32, EvalError> {
            let mut total = 0f32;
            for t in params.tensors() {
                for v in t.values() {
                    total += v * v;
                }
            }
            Ok(total)
        }
    }

    struct AlwaysFails;

    impl LossEvaluator<f32> for AlwaysFails {
        fn loss(&self, _params: &ParamStore<f32>) -> Result<f32, EvalError> {
            Err(EvalError::Evaluator("substrate unavailable".to_string()))
        }
    }

    fn engine() -> SeedEngine<f32> {
        SeedEngine::new(
            vec![ParamDef::new("w", &[2, 2]), ParamDef::scalar("b")],
            0.01,
            6,
        )
        .unwrap()
    }

    #[test]
    fn test_tie_breaks_to_first() {
        assert_eq!(best_index(&[5f32, 3., 3., 8.]), 1);
        assert_eq!(best_index(&[1f32]), 0);
        assert_eq!(best_index(&[2f32, 2., 2.]), 0);
    }

    #[test]
    fn test_weight_sign() {
        assert_eq!(weights_from_losses(10f32, &[4f32], 2.), vec![12f32]);
        // Worse-than-baseline candidates weigh negative
        assert_eq!(
            weights_from_losses(1f32, &[0.5, 1.0, 3.0], 2.),
            vec![1f32, 0., -4.]
        );
    }

    #[test]
    fn test_best_seed_idempotent() {
        let engine = engine();
        let env = SquareSum;
        let first = best_seed(&engine, &env).unwrap();
        let second = best_seed(&engine, &env).unwrap();
        assert_eq!(first, second);
        assert!(first >= 0 && (first as usize) < engine.candidates());
    }

    #[test]
    fn test_candidate_matches_step() {
        // The winning candidate and the step it selects are the same point
        let mut engine = engine();
        let env = SquareSum;
        let seed = best_seed(&engine, &env).unwrap();
        let candidate = perturbed_candidate(
            engine.params(),
            engine.noise(),
            engine.generation() + 1,
            seed as usize,
        );
        engine.step(seed);
        assert_eq!(engine.params().tensors(), candidate.tensors());
    }

    #[test]
    fn test_search_leaves_store_untouched() {
        let engine = engine();
        let before = engine.params().tensors().to_vec();
        best_seed(&engine, &SquareSum).unwrap();
        seed_weights(&engine, &SquareSum, 10.).unwrap();
        assert_eq!(engine.params().tensors(), &before[..]);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_eval_errors_surface() {
        let engine = engine();
        assert!(best_seed(&engine, &AlwaysFails).is_err());
        assert!(seed_weights(&engine, &AlwaysFails, 1.).is_err());
    }

    #[test]
    fn test_seed_weights_length() {
        let engine = engine();
        let weights = seed_weights(&engine, &SquareSum, 100.).unwrap();
        assert_eq!(weights.len(), engine.candidates());
    }
}
