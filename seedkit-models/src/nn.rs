//! Defines a single layer softmax network for use within Seedkit
use seed_core;
use seed_data;

use self::seed_core::error::EvalError;
use self::seed_core::params::{ParamDef, ParamStore};
use self::seed_core::search::{AccuracyEvaluator, LossEvaluator};
use self::seed_data::intrinsics::dot;

use super::*;

// Softmax with the usual max shift to keep the exponentials bounded
fn softmax(logits: &mut [f32]) -> () {
    let mut max = logits[0];
    for l in logits.iter() {
        if *l > max {
            max = *l;
        }
    }
    let mut total = 0f32;
    for l in logits.iter_mut() {
        *l = (*l - max).exp();
        total += *l;
    }
    for l in logits.iter_mut() {
        *l = *l / total;
    }
}

// Index of the largest value, first occurrence on ties
fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for i in 1..values.len() {
        if values[i] > values[best] {
            best = i;
        }
    }
    best
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// A single dense layer scored through softmax squared error on a training
/// batch, with argmax-match accuracy on a held-out set.  Weights are stored
/// one row per output class so every logit is a plain dot product
pub struct SingleLayerNN {
    /// Training inputs, one row per example
    train_inputs: Vec<Vec<f32>>,
    /// One-hot training targets
    train_targets: Vec<Vec<f32>>,
    /// Held-out inputs
    test_inputs: Vec<Vec<f32>>,
    /// Held-out class indexes
    test_labels: Vec<usize>,
    /// Input dimension
    input_dim: usize,
    /// Number of output classes
    classes: usize,
}

impl SingleLayerNN {
    /// Returns a new model over the given training batch and held-out set
    pub fn new(
        train_inputs: Vec<Vec<f32>>,
        train_targets: Vec<Vec<f32>>,
        test_inputs: Vec<Vec<f32>>,
        test_labels: Vec<usize>,
    ) -> Self {
        assert!(train_inputs.len() > 0);
        assert_eq!(train_inputs.len(), train_targets.len());
        assert_eq!(test_inputs.len(), test_labels.len());

        let input_dim = train_inputs[0].len();
        let classes = train_targets[0].len();
        train_inputs.iter().for_each(|x| assert_eq!(x.len(), input_dim));
        train_targets.iter().for_each(|t| assert_eq!(t.len(), classes));
        test_inputs.iter().for_each(|x| assert_eq!(x.len(), input_dim));
        test_labels.iter().for_each(|l| assert!(*l < classes));

        SingleLayerNN {
            train_inputs: train_inputs,
            train_targets: train_targets,
            test_inputs: test_inputs,
            test_labels: test_labels,
            input_dim: input_dim,
            classes: classes,
        }
    }

    /// The layer's parameters: weights `[classes, input_dim]` and biases
    /// `[classes]`
    pub fn param_defs(&self) -> Vec<ParamDef> {
        vec![
            ParamDef::new("weights", &[self.classes, self.input_dim]),
            ParamDef::new("biases", &[self.classes]),
        ]
    }

    fn logits(&self, weights: &[f32], biases: &[f32], x: &[f32], out: &mut [f32]) -> () {
        for j in 0..self.classes {
            let row = &weights[j * self.input_dim..(j + 1) * self.input_dim];
            out[j] = dot(row, x) + biases[j];
        }
    }
}

impl LossEvaluator<f32> for SingleLayerNN {
    fn loss(&self, params: &ParamStore<f32>) -> Result<f32, EvalError> {
        let weights = require_param(params, "weights")?;
        let biases = require_param(params, "biases")?;

        let mut total = 0f32;
        let mut out = vec![0f32; self.classes];
        for (x, target) in self.train_inputs.iter().zip(self.train_targets.iter()) {
            self.logits(weights.values(), biases.values(), x, &mut out);
            softmax(&mut out);
            for j in 0..self.classes {
                let diff = out[j] - target[j];
                total += diff * diff;
            }
        }
        Ok(total / self.train_inputs.len() as f32)
    }
}

impl AccuracyEvaluator<f32> for SingleLayerNN {
    fn accuracy(&self, params: &ParamStore<f32>) -> Result<f32, EvalError> {
        let weights = require_param(params, "weights")?;
        let biases = require_param(params, "biases")?;

        let mut correct = 0usize;
        let mut out = vec![0f32; self.classes];
        for (x, label) in self.test_inputs.iter().zip(self.test_labels.iter()) {
            self.logits(weights.values(), biases.values(), x, &mut out);
            if argmax(&out) == *label {
                correct += 1;
            }
        }
        Ok(correct as f32 / self.test_inputs.len() as f32)
    }
}

#[cfg(test)]
mod test_nn {
    use super::*;
    use crate::synthetic::gaussian_blobs;
    use seed_core::engine::SeedEngine;
    use seed_core::search::best_seed;

    #[test]
    fn test_softmax_argmax() {
        let mut out = vec![0f32, 0., 2.];
        softmax(&mut out);
        let total: f32 = out.iter().sum();
        assert!((total - 1.).abs() < 1e-6);
        assert_eq!(argmax(&out), 2);
        assert_eq!(argmax(&[1f32, 1., 0.]), 0);
    }

    #[test]
    fn test_uniform_prediction_at_zero() {
        let data = gaussian_blobs(2, 5, 2, 0.1, 7);
        let env = SingleLayerNN::new(
            data.inputs.clone(),
            data.targets.clone(),
            data.inputs,
            data.labels,
        );
        let engine: SeedEngine<f32> = SeedEngine::new(env.param_defs(), 0.01, 5).unwrap();

        // Zero parameters predict the uniform distribution over both classes,
        // so each example contributes 2 * 0.5^2
        let loss = env.loss(engine.params()).unwrap();
        assert!((loss - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_blob_train() {
        let train = gaussian_blobs(3, 30, 3, 0.3, 42);
        let test = gaussian_blobs(3, 30, 3, 0.3, 43);
        let env = SingleLayerNN::new(
            train.inputs,
            train.targets,
            test.inputs,
            test.labels,
        );
        let mut engine: SeedEngine<f32> = SeedEngine::new(env.param_defs(), 0.02, 20).unwrap();

        let start_loss = env.loss(engine.params()).unwrap();
        for _ in 0..400 {
            let seed = best_seed(&engine, &env).unwrap();
            engine.step(seed);
        }
        let end_loss = env.loss(engine.params()).unwrap();
        assert!(end_loss < start_loss);

        let acc = env.accuracy(engine.params()).unwrap();
        assert!(acc >= 0.7, "accuracy too low: {}", acc);
    }
}
