//! Edit-cost models consumed by a graph-edit-distance engine.
//!
//! An edit-cost model prices the elementary graph edit operations (node
//! and edge insertion, deletion, relabeling) and aggregates label
//! collections into representative median labels when the engine
//! synthesizes a consensus graph. The engine depends only on the
//! [`EditCostModel`] trait; which concrete model backs it is a dataset
//! decision.
//!
//! Two models are provided:
//! - [`PlanarCostModel`]: tuned for datasets whose nodes carry 2-D
//!   Euclidean coordinates and whose edges are unattributed.
//! - [`VectorCostModel`]: arbitrary numeric attribute sets on both nodes
//!   and edges, with relabel pricing that can be disabled per dimension.
//!
//! # Module Structure
//!
//! - `planar`: [`PlanarCostModel`]
//! - `vector`: [`VectorCostModel`]

mod planar;
mod vector;

pub use planar::PlanarCostModel;
pub use vector::VectorCostModel;

use crate::error::CostResult;
use crate::label::Label;

/// Capability set an edit-distance engine needs from a cost model.
///
/// Insertion and deletion costs are constants fixed at construction and
/// never inspect the label; they cannot fail. Relabel costs compare two
/// labels attribute-by-attribute and fail on malformed input. The median
/// queries aggregate a label collection into one representative label and
/// return the empty label for an empty collection.
///
/// Implementations are immutable after construction, so a single model is
/// safe to share across concurrently running cost queries.
pub trait EditCostModel: Send + Sync {
    /// Cost of inserting a node carrying `label`.
    fn node_ins_cost(&self, label: &Label) -> f64;

    /// Cost of deleting a node carrying `label`.
    fn node_del_cost(&self, label: &Label) -> f64;

    /// Cost of relabeling a node from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`CostModelError`] when a compared attribute is missing or does
    /// not parse as a real number.
    ///
    /// [`CostModelError`]: crate::error::CostModelError
    fn node_rel_cost(&self, from: &Label, to: &Label) -> CostResult<f64>;

    /// Cost of inserting an edge carrying `label`.
    fn edge_ins_cost(&self, label: &Label) -> f64;

    /// Cost of deleting an edge carrying `label`.
    fn edge_del_cost(&self, label: &Label) -> f64;

    /// Cost of relabeling an edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// As for [`node_rel_cost`](Self::node_rel_cost).
    fn edge_rel_cost(&self, from: &Label, to: &Label) -> CostResult<f64>;

    /// Representative label for a collection of node labels.
    ///
    /// Returns the empty label for an empty collection.
    ///
    /// # Errors
    ///
    /// [`CostModelError`] when a label omits a required attribute or a
    /// value does not parse as a real number.
    ///
    /// [`CostModelError`]: crate::error::CostModelError
    fn median_node_label(&self, labels: &[Label]) -> CostResult<Label>;

    /// Representative label for a collection of edge labels.
    ///
    /// Returns the empty label for an empty collection.
    ///
    /// # Errors
    ///
    /// As for [`median_node_label`](Self::median_node_label).
    fn median_edge_label(&self, labels: &[Label]) -> CostResult<Label>;
}
