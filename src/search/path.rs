use std::fmt;

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::graphs::{edge::Cable, Latency, Vertex};

/// A route through the network as the sequence of cables from source to
/// target. The empty path leads from a vertex to itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub source: Vertex,
    pub target: Vertex,
    pub latency: Latency,
    pub edges: Vec<Cable>,
}

impl Path {
    pub fn vertices(&self) -> Vec<Vertex> {
        std::iter::once(self.source)
            .chain(self.edges.iter().map(Cable::head))
            .collect()
    }

    pub fn bandwidth(&self) -> u128 {
        total_bandwidth(&self.edges)
    }
}

/// Sum of the bandwidths of `edges`. Does not check that they form a path.
/// Widened to `u128` so any number of `u64` bandwidths fits.
pub fn total_bandwidth(edges: &[Cable]) -> u128 {
    edges.iter().map(|edge| u128::from(edge.bandwidth())).sum()
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Path", 5)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("latency", &self.latency)?;
        state.serialize_field("bandwidth", &self.bandwidth())?;
        state.serialize_field("edges", &self.edges)?;
        state.end()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The lowest latency path for {} to {} ({:.2}):",
            self.source, self.target, self.latency
        )?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        write!(f, "The total bandwidth: {}", self.bandwidth())
    }
}
