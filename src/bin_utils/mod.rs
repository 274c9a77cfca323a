//! Defines methods that can be shared by the Seedkit binaries

/// Methods for reading arguments
pub mod args;
