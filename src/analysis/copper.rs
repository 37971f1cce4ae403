//! Whether a network can run on copper cables alone.

use std::fmt;

use serde_derive::Serialize;

use crate::{
    error::Result,
    graphs::Graph,
    search::collections::union_find::UnionFind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopperConnectivity {
    /// Every cable is copper.
    CopperOnly,
    /// Optical cables exist, but every vertex has an outgoing copper cable.
    CopperConnectable,
    Neither,
}

/// Classifies the graph by its copper cables.
///
/// `CopperConnectable` only checks that each vertex has at least one outgoing
/// copper cable. It does not check that the copper cables form a single
/// connected component; see [`copper_subgraph_is_connected`] for that.
pub fn copper_connectivity(graph: &dyn Graph) -> Result<CopperConnectivity> {
    if graph.is_copper_only() {
        return Ok(CopperConnectivity::CopperOnly);
    }

    for vertex in graph.vertices() {
        if !graph.edges(vertex)?.any(|edge| edge.is_copper()) {
            return Ok(CopperConnectivity::Neither);
        }
    }

    Ok(CopperConnectivity::CopperConnectable)
}

/// True iff all vertices are connected using copper cables only, ignoring
/// cable direction.
pub fn copper_subgraph_is_connected(graph: &dyn Graph) -> bool {
    let mut components = UnionFind::new(graph.number_of_vertices());
    graph
        .all_edges()
        .filter(|edge| edge.is_copper())
        .for_each(|edge| {
            components.union(edge.tail(), edge.head());
        });

    components.number_of_sets() <= 1
}

impl fmt::Display for CopperConnectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopperConnectivity::CopperOnly => write!(
                f,
                "-- This graph consists of only copper wires, it is copper-connected."
            ),
            CopperConnectivity::CopperConnectable => write!(
                f,
                "-- This graph has optical wires but can be connected with only copper wires."
            ),
            CopperConnectivity::Neither => write!(
                f,
                "-- This graph is not copper-only and cannot be connected with only copper wires."
            ),
        }
    }
}
