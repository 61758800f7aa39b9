//! Aggregate statistics over a batch of encoded graphs.

use serde::{Deserialize, Serialize};

use crate::model::graph::GraphRecord;

/// Totals of a graph batch.
///
/// Serializes as `{"status":"ok","graphCount":..,"nodes":..,"edges":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub status: String,
    pub graph_count: usize,
    /// Sum of node rows over all graphs.
    pub nodes: usize,
    /// Sum of edge feature rows (directed edges) over all graphs.
    pub edges: usize,
}

impl Summary {
    pub fn from_graphs(graphs: &[GraphRecord]) -> Self {
        Self {
            status: "ok".to_owned(),
            graph_count: graphs.len(),
            nodes: graphs.iter().map(GraphRecord::node_count).sum(),
            edges: graphs.iter().map(GraphRecord::edge_count).sum(),
        }
    }
}
