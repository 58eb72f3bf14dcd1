//! Graph-colouring benchmark engine: a family of heuristic, metaheuristic
//! and exact strategies that assign non-negative integer colours to the
//! vertices of an undirected graph, driving the colour count toward the
//! chromatic number.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

/// crate-wide error type
pub mod error;

/// graph model: adjacency representation and builder
pub mod graph;

/// the colouring value type and its invariant queries
pub mod coloring;

/// greedy repair, used by the metaheuristics to legalise a random seed
pub mod repair;

/// per-strategy configuration and validation
pub mod config;

/// per-step snapshot channel
pub mod snapshot;

/// read/write DIMACS graph and colouring formats
pub mod dimacs;

/// metrics CSV appender
pub mod metrics;

/// strategy name resolution, timed dispatch, result validation
pub mod dispatcher;

/// the six colouring strategies
pub mod strategies;
