use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The encoded form of one molecule.
///
/// Serializes with the field names downstream consumers expect:
/// `x` (node features, one row per atom), `edge_index` (`[sources, targets]`),
/// `edge_attr` (one row per directed edge) and `y` (the caller's label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraphRecord")]
pub struct GraphRecord {
    x: Vec<Vec<f64>>,
    edge_index: [Vec<usize>; 2],
    edge_attr: Vec<Vec<f64>>,
    y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphShapeError {
    #[error(
        "edge index and edge features disagree: {sources} sources, {targets} targets, {features} feature rows"
    )]
    EdgeLengthMismatch {
        sources: usize,
        targets: usize,
        features: usize,
    },

    #[error("edge {edge} references node {node} but the graph has {nodes} nodes")]
    NodeOutOfRange {
        edge: usize,
        node: usize,
        nodes: usize,
    },
}

#[derive(Deserialize)]
struct RawGraphRecord {
    x: Vec<Vec<f64>>,
    edge_index: [Vec<usize>; 2],
    edge_attr: Vec<Vec<f64>>,
    y: f64,
}

impl TryFrom<RawGraphRecord> for GraphRecord {
    type Error = GraphShapeError;

    fn try_from(raw: RawGraphRecord) -> Result<Self, Self::Error> {
        let [sources, targets] = &raw.edge_index;
        if sources.len() != targets.len() || sources.len() != raw.edge_attr.len() {
            return Err(GraphShapeError::EdgeLengthMismatch {
                sources: sources.len(),
                targets: targets.len(),
                features: raw.edge_attr.len(),
            });
        }

        let nodes = raw.x.len();
        for (edge, (&s, &t)) in sources.iter().zip(targets).enumerate() {
            if let Some(node) = [s, t].into_iter().find(|&n| n >= nodes) {
                return Err(GraphShapeError::NodeOutOfRange { edge, node, nodes });
            }
        }

        Ok(Self {
            x: raw.x,
            edge_index: raw.edge_index,
            edge_attr: raw.edge_attr,
            y: raw.y,
        })
    }
}

impl GraphRecord {
    pub(crate) fn from_parts(
        x: Vec<Vec<f64>>,
        sources: Vec<usize>,
        targets: Vec<usize>,
        edge_attr: Vec<Vec<f64>>,
        y: f64,
    ) -> Self {
        debug_assert_eq!(sources.len(), targets.len());
        debug_assert_eq!(sources.len(), edge_attr.len());
        Self {
            x,
            edge_index: [sources, targets],
            edge_attr,
            y,
        }
    }

    /// Node feature matrix, one row per atom in structure order.
    pub fn node_features(&self) -> &[Vec<f64>] {
        &self.x
    }

    pub fn sources(&self) -> &[usize] {
        &self.edge_index[0]
    }

    pub fn targets(&self) -> &[usize] {
        &self.edge_index[1]
    }

    /// Edge feature matrix, aligned with [`sources`](Self::sources) and
    /// [`targets`](Self::targets).
    pub fn edge_features(&self) -> &[Vec<f64>] {
        &self.edge_attr
    }

    pub fn label(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.x.len()
    }

    /// Number of directed edges (twice the bond count).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_attr.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sources()
            .iter()
            .copied()
            .zip(self.targets().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> GraphRecord {
        GraphRecord::from_parts(
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![0, 1],
            vec![1, 0],
            vec![vec![1.0], vec![1.0]],
            2.0,
        )
    }

    #[test]
    fn accessors_expose_parts() {
        let g = pair();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.sources(), &[0, 1]);
        assert_eq!(g.targets(), &[1, 0]);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(g.label(), 2.0);
    }

    #[test]
    fn serializes_with_downstream_field_names() {
        let json = serde_json::to_value(pair()).unwrap();
        assert_eq!(json["edge_index"], serde_json::json!([[0, 1], [1, 0]]));
        assert_eq!(json["y"], serde_json::json!(2.0));
        assert_eq!(json["x"].as_array().unwrap().len(), 2);
        assert_eq!(json["edge_attr"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn deserialize_accepts_consistent_record() {
        let text = serde_json::to_string(&pair()).unwrap();
        let back: GraphRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, pair());
    }

    #[test]
    fn deserialize_rejects_mismatched_edges() {
        let text = r#"{"x":[[1.0]],"edge_index":[[0],[]],"edge_attr":[[1.0]],"y":0}"#;
        let err = serde_json::from_str::<GraphRecord>(text).unwrap_err();
        assert!(err.to_string().contains("edge index and edge features disagree"));
    }

    #[test]
    fn deserialize_rejects_dangling_node() {
        let text = r#"{"x":[[1.0]],"edge_index":[[0],[3]],"edge_attr":[[1.0]],"y":0}"#;
        let err = serde_json::from_str::<GraphRecord>(text).unwrap_err();
        assert!(err.to_string().contains("references node 3"));
    }
}
