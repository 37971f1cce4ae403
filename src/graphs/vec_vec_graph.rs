use std::fmt;

use super::{edge::Cable, Graph, Vertex};
use crate::error::Result;

/// Adjacency-list network with a fixed number of vertices. Cables are only
/// ever appended; the graph is read-only once loading has finished.
#[derive(Clone, Debug)]
pub struct VecVecGraph {
    edges: Vec<Vec<Cable>>,
    in_degrees: Vec<u32>,
    copper_only: bool,
}

impl VecVecGraph {
    pub fn new(number_of_vertices: u32) -> VecVecGraph {
        VecVecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            in_degrees: vec![0; number_of_vertices as usize],
            copper_only: true,
        }
    }

    /// Appends a directed cable. Fails if either endpoint is out of range, in
    /// which case the graph is left unchanged.
    pub fn add_edge(&mut self, edge: Cable) -> Result<()> {
        self.validate_vertex(edge.tail())?;
        self.validate_vertex(edge.head())?;

        // Only ever goes from true to false.
        if !edge.is_copper() {
            self.copper_only = false;
        }
        self.in_degrees[edge.head() as usize] += 1;
        self.edges[edge.tail() as usize].push(edge);

        Ok(())
    }

    /// Inserts a physical cable as two directed edges, one per direction.
    pub fn add_cable(&mut self, cable: Cable) -> Result<()> {
        self.validate_vertex(cable.tail())?;
        self.validate_vertex(cable.head())?;

        let reversed = cable.reversed();
        self.add_edge(cable)?;
        self.add_edge(reversed)
    }
}

impl Graph for VecVecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    fn edges(
        &self,
        tail: Vertex,
    ) -> Result<Box<dyn ExactSizeIterator<Item = &Cable> + Send + '_>> {
        self.validate_vertex(tail)?;
        Ok(Box::new(self.edges[tail as usize].iter()))
    }

    fn in_degree(&self, vertex: Vertex) -> Result<u32> {
        self.validate_vertex(vertex)?;
        Ok(self.in_degrees[vertex as usize])
    }

    fn is_copper_only(&self) -> bool {
        self.copper_only
    }
}

impl fmt::Display for VecVecGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.number_of_vertices(), self.number_of_edges())?;
        for (vertex, edges) in self.edges.iter().enumerate() {
            write!(f, "{}: ", vertex)?;
            for edge in edges {
                write!(f, "{}  ", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
