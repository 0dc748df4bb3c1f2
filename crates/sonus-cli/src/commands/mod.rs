//! CLI command implementations
//!
//! Each command is a thin wrapper around one library operation and returns a
//! [`CommandOutput`](crate::output::CommandOutput) for the shared adapter.

pub mod convert;
pub mod details;
pub mod split;
pub mod wer;
