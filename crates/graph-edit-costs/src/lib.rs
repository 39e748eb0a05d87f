//! Graph Edit Costs Library
//!
//! Pluggable edit-cost models for graph-edit-distance computation. A cost
//! model prices the elementary edit operations (node/edge insertion,
//! deletion, relabeling) that an external edit-distance engine minimizes,
//! and aggregates label collections into representative ("median") labels
//! when the engine synthesizes a consensus graph.
//!
//! # Architecture
//!
//! This crate defines:
//! - Label types (`Label`, `AttributeVector`) and their encode/decode helpers
//! - The `EditCostModel` trait and two concrete models
//!   (`PlanarCostModel`, `VectorCostModel`)
//! - A standalone Weiszfeld geometric-median solver
//!   (`GeometricMedianSolver`)
//! - Error types and result aliases
//!
//! Everything is a pure, synchronous computation: no I/O, no hidden
//! state. Models are immutable after construction and safe to share
//! across threads.
//!
//! # Example
//!
//! ```
//! use graph_edit_costs::{EditCostModel, Label, PlanarCostModel};
//!
//! let model = PlanarCostModel::default();
//! let a = Label::from_pairs([("x", "0"), ("y", "0")]);
//! let b = Label::from_pairs([("x", "3"), ("y", "4")]);
//!
//! assert_eq!(model.node_ins_cost(&a), 0.675);
//! let relabel = model.node_rel_cost(&a, &b).unwrap();
//! assert!((relabel - 3.75).abs() < 1e-12);
//!
//! let median = model.median_node_label(&[a, b]).unwrap();
//! assert!((median.numeric("x").unwrap() - 1.5).abs() < 1e-6);
//! ```

pub mod costs;
pub mod error;
pub mod label;
pub mod median;

// Re-exports for convenience
pub use costs::{EditCostModel, PlanarCostModel, VectorCostModel};
pub use error::{CostModelError, CostResult};
pub use label::{AttributeVector, Label};
pub use median::{GeometricMedianSolver, MedianConfig, MedianEstimate};
