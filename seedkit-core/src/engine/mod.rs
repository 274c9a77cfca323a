//! The seed-stepping perturbation engine
//!
//! The engine moves its parameters through their space one generation at a
//! time.  Each update is described entirely by the integers that key its
//! noise, so the history holds seeds and weight vectors rather than tensors,
//! and rewinding regenerates the exact noise it needs to subtract.
extern crate seed_data;

use self::seed_data::datatypes::{Element, Tensor};
use self::seed_data::intrinsics::{axpy, inplace_sub, inplace_sum};

use error::{ConfigError, StateError};
use noise::NoiseSource;
use params::{ParamDef, ParamStore};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// One applied update, as retained by the history
pub enum Update {
    /// A single-seed step
    Seed(i64),
    /// A weighted combination step, one weight per candidate index
    Weights(Vec<f32>),
}

/// State machine owning a parameter store, a generation counter, and the
/// history of applied updates.  Mutations are serialized by `&mut self`;
/// everything else reads the store through `params()`
#[derive(Debug)]
pub struct SeedEngine<E> {
    params: ParamStore<E>,
    noise: NoiseSource,
    candidates: usize,
    generation: u64,
    history: Vec<Update>,
}

impl<E: Element> SeedEngine<E> {
    /// Builds an engine with all-zero parameters at generation 0
    pub fn new(
        defs: Vec<ParamDef>,
        stdev: f64,
        candidates: usize,
    ) -> Result<Self, ConfigError> {
        if candidates == 0 {
            return Err(ConfigError::NoCandidates);
        }
        let params = ParamStore::from_defs(defs)?;
        Ok(SeedEngine {
            params: params,
            noise: NoiseSource::new(stdev),
            candidates: candidates,
            generation: 0,
            history: Vec::new(),
        })
    }

    /// Read access to the owned parameters
    #[inline]
    pub fn params(&self) -> &ParamStore<E> {
        &self.params
    }

    /// The noise source shared with candidate construction
    #[inline]
    pub fn noise(&self) -> &NoiseSource {
        &self.noise
    }

    /// The configured candidate count
    #[inline]
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// The current generation
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The applied updates, oldest first
    #[inline]
    pub fn history(&self) -> &[Update] {
        &self.history
    }

    // Noise for a single-seed update at `generation`, one buffer per parameter.
    // Parameter k perturbs with seed + k so equal-shaped parameters differ.
    fn seed_buffers(&self, seed: i64, generation: u64) -> Vec<Tensor<E>> {
        self.params
            .defs()
            .iter()
            .enumerate()
            .map(|(k, def)| self.noise.tensor(&def.shape, seed + k as i64, generation))
            .collect()
    }

    // Noise for a weighted update: the per-candidate tensors blended by weight
    fn weighted_buffers(&self, weights: &[f32], generation: u64) -> Vec<Tensor<E>> {
        self.params
            .defs()
            .iter()
            .enumerate()
            .map(|(k, def)| {
                let mut buf = Tensor::zeros(&def.shape);
                for (i, w) in weights.iter().enumerate() {
                    let n: Tensor<E> =
                        self.noise
                            .tensor(&def.shape, i as i64 + k as i64, generation);
                    axpy(E::from_f64(*w as f64), n.values(), buf.values_mut());
                }
                buf
            })
            .collect()
    }

    /// Moves the parameters through parameter space by one seed.  Every noise
    /// buffer is materialized before the store is touched, so the store is
    /// never left partially updated
    pub fn step(&mut self, seed: i64) -> () {
        let next = self.generation + 1;
        let buffers = self.seed_buffers(seed, next);
        for (t, b) in self.params.tensors_mut().iter_mut().zip(buffers.iter()) {
            inplace_sum(t.values_mut(), b.values());
        }
        self.generation = next;
        self.history.push(Update::Seed(seed));
    }

    /// Moves the parameters by a weighted combination of every candidate's
    /// noise.  The weight vector must be one entry per candidate index
    pub fn weighted_step(&mut self, weights: &[f32]) -> Result<(), StateError> {
        if weights.len() != self.candidates {
            return Err(StateError::WeightCount {
                expected: self.candidates,
                actual: weights.len(),
            });
        }
        let next = self.generation + 1;
        let buffers = self.weighted_buffers(weights, next);
        for (t, b) in self.params.tensors_mut().iter_mut().zip(buffers.iter()) {
            inplace_sum(t.values_mut(), b.values());
        }
        self.generation = next;
        self.history.push(Update::Weights(weights.to_vec()));
        Ok(())
    }

    /// Steps back by one update.  The noise of the popped update is
    /// regenerated for the current generation and subtracted, which is its
    /// exact algebraic inverse
    pub fn rewind(&mut self) -> Result<(), StateError> {
        let last = match self.history.pop() {
            Some(update) => update,
            None => return Err(StateError::EmptyHistory),
        };
        let buffers = match last {
            Update::Seed(seed) => self.seed_buffers(seed, self.generation),
            Update::Weights(ref weights) => self.weighted_buffers(weights, self.generation),
        };
        for (t, b) in self.params.tensors_mut().iter_mut().zip(buffers.iter()) {
            inplace_sub(t.values_mut(), b.values());
        }
        self.generation -= 1;
        Ok(())
    }
}
