//! Error conditions surfaced by the engine and the search policies
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// Construction-time failures.  When one of these is returned the engine is
/// never built
pub enum ConfigError {
    /// A parameter shape contains a zero dimension
    ZeroDim {
        /// Name of the offending parameter
        name: String,
        /// The rejected shape
        shape: Vec<usize>,
    },

    /// Two parameters share a name
    DuplicateParam(String),

    /// The candidate count is zero
    NoCandidates,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroDim { name, shape } => {
                write!(f, "parameter {} has a zero dimension: {:?}", name, shape)
            }
            ConfigError::DuplicateParam(name) => write!(f, "duplicate parameter name: {}", name),
            ConfigError::NoCandidates => write!(f, "candidate count must be positive"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
/// Usage errors in the engine's state transitions.  These are never retried
pub enum StateError {
    /// Rewind was called with nothing left to undo
    EmptyHistory,

    /// A weight vector's length does not match the configured candidate count
    WeightCount {
        /// The configured candidate count
        expected: usize,
        /// The length actually supplied
        actual: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StateError::EmptyHistory => write!(f, "rewind called at generation 0"),
            StateError::WeightCount { expected, actual } => write!(
                f,
                "expected {} seed weights, received {}",
                expected, actual
            ),
        }
    }
}

impl Error for StateError {}

#[derive(Debug, Clone, PartialEq)]
/// Failure inside the external loss evaluator.  Surfaced to the caller without
/// committing any parameter mutation
pub enum EvalError {
    /// The evaluator reported an error
    Evaluator(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::Evaluator(msg) => write!(f, "loss evaluation failed: {}", msg),
        }
    }
}

impl Error for EvalError {}
