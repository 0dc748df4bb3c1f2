//! Sonus CLI library.
//!
//! This crate provides the argument definitions, command handlers and the
//! output adapter behind the `sonus` binary.

pub mod cli_args;
pub mod commands;
pub mod logging;
pub mod output;
