use std::fmt;

use itertools::Itertools;
use log::{debug, warn};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::collections::union_find::UnionFind;
use crate::graphs::{edge::Cable, Graph, Latency};

/// Minimum-latency spanning forest chosen by Kruskal's algorithm.
///
/// Both directions of a cable are offered to the greedy selection, but once
/// one of them has joined its endpoints the other closes a cycle and is
/// skipped, so each physical cable is selected at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    number_of_vertices: u32,
    edges: Vec<Cable>,
    total_latency: Latency,
}

impl SpanningTree {
    pub fn new(graph: &dyn Graph) -> SpanningTree {
        let number_of_vertices = graph.number_of_vertices();
        let target_size = number_of_vertices.saturating_sub(1) as usize;

        let mut components = UnionFind::new(number_of_vertices);
        let mut edges = Vec::with_capacity(target_size);

        // Stable sort, ties keep the adjacency order.
        for edge in graph.all_edges().sorted_by(|a, b| a.cmp_latency(b)) {
            if edges.len() == target_size {
                break;
            }
            if components.union(edge.tail(), edge.head()) {
                edges.push(edge.clone());
            }
        }

        let total_latency: Latency = edges.iter().map(Cable::latency).sum();
        debug!(
            "spanning tree with {} edges and total latency {:.3}",
            edges.len(),
            total_latency
        );
        if edges.len() < target_size {
            warn!(
                "graph is disconnected, spanning forest has {} of {} edges",
                edges.len(),
                target_size
            );
        }

        SpanningTree {
            number_of_vertices,
            edges,
            total_latency,
        }
    }

    pub fn edges(&self) -> &[Cable] {
        &self.edges
    }

    pub fn total_latency(&self) -> Latency {
        self.total_latency
    }

    /// True if the selected edges connect every vertex.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.number_of_vertices.saturating_sub(1) as usize
    }

    /// Mean latency per selected edge, none if no edge was selected.
    pub fn average_latency(&self) -> Option<Latency> {
        if self.edges.is_empty() {
            return None;
        }
        Some(self.total_latency / self.edges.len() as Latency)
    }
}

impl Serialize for SpanningTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SpanningTree", 5)?;
        state.serialize_field("number_of_vertices", &self.number_of_vertices)?;
        state.serialize_field("spanning", &self.is_spanning())?;
        state.serialize_field("total_latency", &self.total_latency)?;
        state.serialize_field("average_latency", &self.average_latency())?;
        state.serialize_field("edges", &self.edges)?;
        state.end()
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lowest average latency spanning tree for the graph:")?;
        writeln!(f)?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        if !self.is_spanning() {
            writeln!(
                f,
                "The graph is disconnected, only {} of {} edges could be selected.",
                self.edges.len(),
                self.number_of_vertices.saturating_sub(1)
            )?;
        }
        match self.average_latency() {
            Some(average) => write!(
                f,
                "The average latency of this spanning tree is {:.3} nanoseconds.",
                average
            ),
            None => write!(f, "The spanning tree has no edges, there is no average latency."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{edge::Material, vec_vec_graph::VecVecGraph};

    fn add(graph: &mut VecVecGraph, tail: u32, head: u32, length: f64) {
        graph
            .add_cable(Cable::new(tail, head, Material::Optical, length, 1).unwrap())
            .unwrap();
    }

    #[test]
    fn picks_cheapest_edges() {
        // Square with one diagonal.
        let mut graph = VecVecGraph::new(4);
        add(&mut graph, 0, 1, 1.0);
        add(&mut graph, 1, 2, 2.0);
        add(&mut graph, 2, 3, 3.0);
        add(&mut graph, 3, 0, 4.0);
        add(&mut graph, 0, 2, 10.0);

        let tree = SpanningTree::new(&graph);

        assert!(tree.is_spanning());
        assert_eq!(tree.edges().len(), 3);
        // Latency is 5 ns per meter on fiber.
        assert_eq!(tree.total_latency(), 30.0);
        assert_eq!(tree.average_latency(), Some(10.0));
    }

    #[test]
    fn each_cable_selected_once() {
        let mut graph = VecVecGraph::new(2);
        add(&mut graph, 0, 1, 1.0);

        let tree = SpanningTree::new(&graph);

        assert_eq!(tree.edges().len(), 1);
        assert_eq!(tree.total_latency(), 5.0);
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let mut graph = VecVecGraph::new(4);
        add(&mut graph, 0, 1, 1.0);
        add(&mut graph, 2, 3, 1.0);

        let tree = SpanningTree::new(&graph);

        assert!(!tree.is_spanning());
        assert_eq!(tree.edges().len(), 2);
        assert!(tree.to_string().contains("only 2 of 3 edges"));
    }

    #[test]
    fn no_edges() {
        let tree = SpanningTree::new(&VecVecGraph::new(1));

        assert!(tree.is_spanning());
        assert_eq!(tree.average_latency(), None);
        assert!(tree.to_string().ends_with("there is no average latency."));

        let tree = SpanningTree::new(&VecVecGraph::new(0));
        assert!(tree.edges().is_empty());
        assert_eq!(tree.average_latency(), None);
        assert!(serde_json::to_value(&tree).unwrap()["average_latency"].is_null());
    }

    #[test]
    fn json_has_average_latency() {
        let mut graph = VecVecGraph::new(3);
        add(&mut graph, 0, 1, 1.0);
        add(&mut graph, 1, 2, 3.0);

        let json = serde_json::to_value(SpanningTree::new(&graph)).unwrap();

        assert_eq!(json["total_latency"], 20.0);
        assert_eq!(json["average_latency"], 10.0);
        assert_eq!(json["spanning"], true);
        assert_eq!(json["edges"].as_array().unwrap().len(), 2);
    }
}
