use log::debug;

use super::{
    collections::vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueKeyed},
    path::Path,
};
use crate::{
    error::{NetworkError, Result},
    graphs::{edge::Cable, Graph, Latency, Vertex},
};

/// Lowest-latency paths from one source to every vertex of a graph.
///
/// Unreachable vertices keep an infinite distance and no back edge. The tree
/// owns copies of the cables it records, so it stays valid independent of the
/// graph it was computed on.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathTree {
    source: Vertex,
    distances: Vec<Latency>,
    back_edges: Vec<Option<Cable>>,
}

impl ShortestPathTree {
    pub fn new(graph: &dyn Graph, source: Vertex) -> Result<Self> {
        graph.validate_vertex(source)?;
        if let Some(edge) = graph.all_edges().find(|edge| edge.latency() < 0.0) {
            return Err(NetworkError::InvalidWeight {
                tail: edge.tail(),
                head: edge.head(),
                latency: edge.latency(),
            });
        }

        let mut queue = VertexDistanceQueueKeyed::new();
        let tree = dijkstra_single_source(graph, &mut queue, source)?;

        debug_assert!(tree.is_optimal(graph));
        debug!(
            "shortest path tree from {} reaches {} of {} vertices",
            source,
            tree.distances.iter().filter(|d| d.is_finite()).count(),
            graph.number_of_vertices()
        );

        Ok(tree)
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Infinite if `vertex` is unreachable.
    pub fn distance_to(&self, vertex: Vertex) -> Result<Latency> {
        self.validate_vertex(vertex)?;
        Ok(self.distances[vertex as usize])
    }

    pub fn has_path_to(&self, vertex: Vertex) -> Result<bool> {
        Ok(self.distance_to(vertex)?.is_finite())
    }

    /// Follows back edges from `target` towards the source.
    pub fn path_to(&self, target: Vertex) -> Result<Option<Path>> {
        let latency = self.distance_to(target)?;
        if latency.is_infinite() {
            return Ok(None);
        }

        let mut edges = Vec::new();
        let mut current = target;
        while let Some(edge) = &self.back_edges[current as usize] {
            edges.push(edge.clone());
            current = edge.tail();
        }
        edges.reverse();

        Ok(Some(Path {
            source: self.source,
            target,
            latency,
            edges,
        }))
    }

    /// Checks the optimality conditions: no edge can be relaxed any further
    /// and every back edge is tight.
    pub fn is_optimal(&self, graph: &dyn Graph) -> bool {
        if self.distances.len() != graph.number_of_vertices() as usize {
            return false;
        }
        if self.distances[self.source as usize] != 0.0
            || self.back_edges[self.source as usize].is_some()
        {
            return false;
        }

        for vertex in graph.vertices() {
            if vertex == self.source {
                continue;
            }
            let reached = self.distances[vertex as usize].is_finite();
            if reached != self.back_edges[vertex as usize].is_some() {
                return false;
            }
        }

        for edge in graph.all_edges() {
            let tail = self.distances[edge.tail() as usize];
            let head = self.distances[edge.head() as usize];
            if tail + edge.latency() < head {
                return false;
            }
        }

        self.back_edges.iter().flatten().all(|edge| {
            self.distances[edge.tail() as usize] + edge.latency()
                == self.distances[edge.head() as usize]
        })
    }

    fn validate_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex as usize >= self.distances.len() {
            return Err(NetworkError::InvalidVertex {
                vertex,
                number_of_vertices: self.distances.len() as u32,
            });
        }
        Ok(())
    }
}

pub fn dijkstra_single_source(
    graph: &dyn Graph,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
) -> Result<ShortestPathTree> {
    graph.validate_vertex(source)?;
    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut distances = vec![Latency::INFINITY; number_of_vertices];
    let mut back_edges: Vec<Option<Cable>> = vec![None; number_of_vertices];

    queue.clear();
    distances[source as usize] = 0.0;
    queue.insert(source, 0.0);

    while let Some((tail, distance_tail)) = queue.pop() {
        for edge in graph.edges(tail)? {
            let alternative_distance_head = distance_tail + edge.latency();
            if alternative_distance_head < distances[edge.head() as usize] {
                distances[edge.head() as usize] = alternative_distance_head;
                back_edges[edge.head() as usize] = Some(edge.clone());
                queue.insert(edge.head(), alternative_distance_head);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distances,
        back_edges,
    })
}
