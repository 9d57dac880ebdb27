//! Random graph generator and benchmark utilities for `cyclebasis-core`.
//!
//! This crate provides deterministic generation of sparse simple graphs with
//! a known cycle-space dimension, plus invariant checkers shared by the
//! integration tests and the criterion benches.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_graph, to_petgraph};
