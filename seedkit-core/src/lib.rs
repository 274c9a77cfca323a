//! Seedkit-Core
//! ===
//!
//! This library contains the components for optimizing the continuous parameters
//! of an opaque computation with seed-compressed Evolution Strategies.  No
//! gradients are ever computed; the engine perturbs parameters with
//! deterministic pseudorandom noise, an external evaluator scores the
//! perturbations, and a selection policy turns the scores into the next update.
//!
//! Seed compression
//! ---
//! Noise is keyed purely on the `(generation, seed)` pair, so an applied
//! perturbation is fully described by two integers.  The engine's history
//! stores those integers instead of noise tensors, which is what makes exact
//! rewinds and O(1) per-generation storage possible.
//!
//! Selection policies
//! ---
//! Two policies reduce the candidate losses of a generation to an update:
//! best-of-N picks the argmin seed for a plain step, and the reward-weighted
//! combiner turns every candidate's improvement over the baseline into a
//! weight vector for a blended step.

#![warn(missing_docs, unused)]

#[macro_use]
extern crate serde_derive;

/// Defines the error conditions for construction, state transitions, and evaluation
pub mod error;

/// Defines the deterministic noise source
pub mod noise;

/// Defines parameter declarations and the engine-owned parameter store
pub mod params;

/// Defines the seed-stepping perturbation engine
pub mod engine;

/// Defines candidate evaluation and the selection policies
pub mod search;
