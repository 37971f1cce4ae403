use std::ops::Range;

use edge::Cable;

use crate::error::{NetworkError, Result};

pub mod edge;
pub mod graph_factory;
pub mod vec_vec_graph;

pub type Vertex = u32;
/// Travel time in nanoseconds.
pub type Latency = f64;

/// Read access to a network of directed cables over the vertices
/// `0..number_of_vertices()`.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.out_degree(vertex).unwrap_or(0))
            .sum::<u32>()
    }

    /// Outgoing cables of `tail` in insertion order.
    fn edges(
        &self,
        tail: Vertex,
    ) -> Result<Box<dyn ExactSizeIterator<Item = &Cable> + Send + '_>>;

    fn out_degree(&self, vertex: Vertex) -> Result<u32> {
        Ok(self.edges(vertex)?.len() as u32)
    }

    fn in_degree(&self, vertex: Vertex) -> Result<u32>;

    /// True iff no inserted cable uses a material other than copper.
    fn is_copper_only(&self) -> bool;

    /// Every directed cable of the graph, grouped by tail.
    fn all_edges(&self) -> Box<dyn Iterator<Item = &Cable> + '_> {
        Box::new(
            self.vertices()
                .flat_map(move |vertex| self.edges(vertex).into_iter().flatten()),
        )
    }

    fn validate_vertex(&self, vertex: Vertex) -> Result<()> {
        if vertex >= self.number_of_vertices() {
            return Err(NetworkError::InvalidVertex {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        Ok(())
    }
}
