//! Sonus End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the audio and text utilities:
//!
//! - Conversion: WAV in -> re-encoded file out
//! - Details: metadata derived from real decodes
//! - Splitting: chunk naming, coverage and sizing
//! - WER: scoring properties
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sonus-tests
//! ```

pub mod fixtures;

pub use fixtures::{AudioFixture, WavLayout};
