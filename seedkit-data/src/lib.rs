//! Library for the numeric datatypes shared across Seedkit
#![warn(missing_docs, unused)]

#[macro_use]
extern crate serde_derive;

/// Definitions of tensor elements and tensors
pub mod datatypes;
/// Helper methods for elementwise slice arithmetic
pub mod intrinsics;
