//! Seedkit
//!
//! Seedkit is a library and an executable to optimize continuous parameters
//! with seed-compressed evolutionary strategies.
#![warn(missing_docs, unused)]

#[macro_use]
extern crate clap;

/// Tools for binaries
pub mod bin_utils;
/// Example loss surfaces
pub mod example;
/// Sinks for reporting optimization progress
pub mod telemetry;
