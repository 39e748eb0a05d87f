//! Edit costs for graphs with arbitrary numeric attribute sets.

use super::EditCostModel;
use crate::error::CostResult;
use crate::label::{AttributeVector, Label};
use crate::median::{GeometricMedianSolver, MedianConfig};

/// Edit-cost model for graphs whose nodes and edges carry open sets of
/// numeric attributes.
///
/// Relabeling is priced as the Euclidean distance between the two labels'
/// attribute vectors, scaled by the configured relabel cost. A relabel
/// cost of exactly `0.0` disables that comparison entirely: the labels are
/// never inspected, so datasets without node (or edge) attributes skip
/// lookup and parsing altogether.
///
/// # Example
///
/// ```
/// use graph_edit_costs::{EditCostModel, Label, VectorCostModel};
///
/// let model = VectorCostModel::default();
/// let a = Label::from_pairs([("charge", "0"), ("mass", "0")]);
/// let b = Label::from_pairs([("charge", "3"), ("mass", "4")]);
///
/// assert_eq!(model.node_rel_cost(&a, &b).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct VectorCostModel {
    node_ins_cost: f64,
    node_del_cost: f64,
    node_rel_cost: f64,
    edge_ins_cost: f64,
    edge_del_cost: f64,
    edge_rel_cost: f64,
    solver: GeometricMedianSolver,
}

impl Default for VectorCostModel {
    /// Unit cost for every edit operation.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0)
    }
}

impl VectorCostModel {
    /// Creates a model with explicit cost constants.
    ///
    /// Pass `node_rel_cost = 0.0` and/or `edge_rel_cost = 0.0` for
    /// datasets whose nodes/edges carry no attributes; the corresponding
    /// relabel query then returns `0.0` without touching the labels.
    pub fn new(
        node_ins_cost: f64,
        node_del_cost: f64,
        node_rel_cost: f64,
        edge_ins_cost: f64,
        edge_del_cost: f64,
        edge_rel_cost: f64,
    ) -> Self {
        Self {
            node_ins_cost,
            node_del_cost,
            node_rel_cost,
            edge_ins_cost,
            edge_del_cost,
            edge_rel_cost,
            solver: GeometricMedianSolver::default(),
        }
    }

    /// Replaces the convergence settings used for median computation.
    pub fn with_median_config(mut self, config: MedianConfig) -> Self {
        self.solver = GeometricMedianSolver::new(config);
        self
    }

    /// Euclidean distance between two labels' attribute vectors, scaled
    /// by `weight`.
    ///
    /// The key set is driven by `from`: every key of `from` must be
    /// present in `to`. A zero weight short-circuits before any lookup.
    fn weighted_distance(weight: f64, from: &Label, to: &Label) -> CostResult<f64> {
        if weight == 0.0 {
            return Ok(0.0);
        }
        let mut sum_of_squares = 0.0;
        for (key, raw) in from.iter() {
            let value_from = crate::label::parse_attribute(key, raw)?;
            let value_to = to.numeric(key)?;
            let diff = value_from - value_to;
            sum_of_squares += diff * diff;
        }
        Ok(weight * sum_of_squares.sqrt())
    }

    /// Aggregates a label collection into its geometric-median label.
    ///
    /// The first label fixes the attribute key set; every other label must
    /// expose it.
    fn median_label(&self, labels: &[Label]) -> CostResult<Label> {
        let Some(first) = labels.first() else {
            return Ok(Label::new());
        };
        let mut points = Vec::with_capacity(labels.len());
        for label in labels {
            let mut point = AttributeVector::new();
            for key in first.keys() {
                point.insert(key.to_string(), label.numeric(key)?);
            }
            points.push(point);
        }
        Ok(Label::from_attribute_vector(&self.solver.solve(&points).point))
    }
}

impl EditCostModel for VectorCostModel {
    fn node_ins_cost(&self, _label: &Label) -> f64 {
        self.node_ins_cost
    }

    fn node_del_cost(&self, _label: &Label) -> f64 {
        self.node_del_cost
    }

    fn node_rel_cost(&self, from: &Label, to: &Label) -> CostResult<f64> {
        Self::weighted_distance(self.node_rel_cost, from, to)
    }

    fn edge_ins_cost(&self, _label: &Label) -> f64 {
        self.edge_ins_cost
    }

    fn edge_del_cost(&self, _label: &Label) -> f64 {
        self.edge_del_cost
    }

    fn edge_rel_cost(&self, from: &Label, to: &Label) -> CostResult<f64> {
        Self::weighted_distance(self.edge_rel_cost, from, to)
    }

    fn median_node_label(&self, labels: &[Label]) -> CostResult<Label> {
        self.median_label(labels)
    }

    fn median_edge_label(&self, labels: &[Label]) -> CostResult<Label> {
        self.median_label(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostModelError;

    #[test]
    fn test_default_cost_constants() {
        let model = VectorCostModel::default();
        let label = Label::from_pairs([("a", "1")]);
        assert_eq!(model.node_ins_cost(&label), 1.0);
        assert_eq!(model.node_del_cost(&label), 1.0);
        assert_eq!(model.edge_ins_cost(&label), 1.0);
        assert_eq!(model.edge_del_cost(&label), 1.0);
    }

    #[test]
    fn test_ins_del_ignore_label_content() {
        let model = VectorCostModel::new(2.0, 3.0, 1.0, 4.0, 5.0, 1.0);
        let empty = Label::new();
        let junk = Label::from_pairs([("k", "not numeric")]);
        assert_eq!(model.node_ins_cost(&junk), 2.0);
        assert_eq!(model.node_del_cost(&empty), 3.0);
        assert_eq!(model.edge_ins_cost(&junk), 4.0);
        assert_eq!(model.edge_del_cost(&empty), 5.0);
    }

    #[test]
    fn test_node_rel_cost_euclidean_over_all_attributes() {
        let model = VectorCostModel::default();
        let a = Label::from_pairs([("u", "0"), ("v", "0")]);
        let b = Label::from_pairs([("u", "3"), ("v", "4")]);
        assert_eq!(model.node_rel_cost(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn test_node_rel_cost_applies_weight() {
        let model = VectorCostModel::new(1.0, 1.0, 2.5, 1.0, 1.0, 1.0);
        let a = Label::from_pairs([("u", "0"), ("v", "0")]);
        let b = Label::from_pairs([("u", "3"), ("v", "4")]);
        assert!((model.node_rel_cost(&a, &b).unwrap() - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_relabel_cost_short_circuits() {
        // With the sentinel set, mismatched keys and unparseable values
        // must not be noticed at all.
        let model = VectorCostModel::new(1.0, 1.0, 0.0, 1.0, 1.0, 0.0);
        let a = Label::from_pairs([("only_in_a", "abc")]);
        let b = Label::from_pairs([("only_in_b", "xyz")]);
        assert_eq!(model.node_rel_cost(&a, &b).unwrap(), 0.0);
        assert_eq!(model.edge_rel_cost(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_node_rel_cost_missing_key() {
        let model = VectorCostModel::default();
        let a = Label::from_pairs([("u", "1"), ("v", "2")]);
        let b = Label::from_pairs([("u", "1")]);
        assert!(matches!(
            model.node_rel_cost(&a, &b),
            Err(CostModelError::MissingAttribute { key }) if key == "v"
        ));
    }

    #[test]
    fn test_node_rel_cost_ignores_extra_keys_in_target() {
        // The first label drives the key set.
        let model = VectorCostModel::default();
        let a = Label::from_pairs([("u", "0")]);
        let b = Label::from_pairs([("u", "2"), ("extra", "9")]);
        assert_eq!(model.node_rel_cost(&a, &b).unwrap(), 2.0);
    }

    #[test]
    fn test_node_rel_cost_non_numeric_value() {
        let model = VectorCostModel::default();
        let a = Label::from_pairs([("u", "1")]);
        let b = Label::from_pairs([("u", "abc")]);
        assert!(matches!(
            model.node_rel_cost(&a, &b),
            Err(CostModelError::NonNumericAttribute { key, value, .. })
                if key == "u" && value == "abc"
        ));
    }

    #[test]
    fn test_edge_rel_cost_mirrors_node_algorithm() {
        let model = VectorCostModel::new(1.0, 1.0, 1.0, 1.0, 1.0, 0.5);
        let a = Label::from_pairs([("weight", "0")]);
        let b = Label::from_pairs([("weight", "8")]);
        assert!((model.edge_rel_cost(&a, &b).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_node_label_arbitrary_keys() {
        let model = VectorCostModel::default();
        let labels = vec![
            Label::from_pairs([("charge", "0")]),
            Label::from_pairs([("charge", "10")]),
        ];
        let median = model.median_node_label(&labels).unwrap();
        assert!((median.numeric("charge").unwrap() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_median_edge_label_arbitrary_keys() {
        let model = VectorCostModel::default();
        let labels = vec![
            Label::from_pairs([("weight", "1"), ("length", "2")]),
            Label::from_pairs([("weight", "1"), ("length", "2")]),
            Label::from_pairs([("weight", "1"), ("length", "2")]),
        ];
        let median = model.median_edge_label(&labels).unwrap();
        assert_eq!(median.numeric("weight").unwrap(), 1.0);
        assert_eq!(median.numeric("length").unwrap(), 2.0);
    }

    #[test]
    fn test_median_empty_collection_is_empty_label() {
        let model = VectorCostModel::default();
        assert!(model.median_node_label(&[]).unwrap().is_empty());
        assert!(model.median_edge_label(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_median_detects_missing_keys() {
        let model = VectorCostModel::default();
        let labels = vec![
            Label::from_pairs([("u", "1"), ("v", "2")]),
            Label::from_pairs([("u", "3")]),
        ];
        assert!(matches!(
            model.median_node_label(&labels),
            Err(CostModelError::MissingAttribute { key }) if key == "v"
        ));
    }

    #[test]
    fn test_median_detects_non_numeric_values() {
        let model = VectorCostModel::default();
        let labels = vec![
            Label::from_pairs([("u", "1")]),
            Label::from_pairs([("u", "abc")]),
        ];
        assert!(matches!(
            model.median_node_label(&labels),
            Err(CostModelError::NonNumericAttribute { key, .. }) if key == "u"
        ));
    }
}
