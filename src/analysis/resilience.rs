//! Whether a network survives two simultaneous cable failures.

use std::fmt;

use log::debug;
use serde_derive::Serialize;

use crate::{
    error::Result,
    graphs::{edge::Cable, Graph, Vertex},
};

/// A vertex needs at least this many cables to survive two failures.
pub const MINIMUM_SAFE_DEGREE: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureResilience {
    Survives,
    /// Losing all of `edges` at once cuts `vertex` off.
    FailurePoint { vertex: Vertex, edges: Vec<Cable> },
}

/// Reports the first vertex, by ascending index, with fewer than three
/// outgoing cables.
///
/// This is a degree check only. Passing it is necessary but not sufficient
/// for the network to be 2-edge-connected.
pub fn failure_resilience(graph: &dyn Graph) -> Result<FailureResilience> {
    for vertex in graph.vertices() {
        let edges = graph.edges(vertex)?;
        if (edges.len() as u32) < MINIMUM_SAFE_DEGREE {
            debug!("vertex {} has only {} cables", vertex, edges.len());
            return Ok(FailureResilience::FailurePoint {
                vertex,
                edges: edges.cloned().collect(),
            });
        }
    }

    Ok(FailureResilience::Survives)
}

impl fmt::Display for FailureResilience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureResilience::Survives => {
                write!(f, "The network will survive any failure of any two points")
            }
            FailureResilience::FailurePoint { edges, .. } => {
                writeln!(f, "The network will be disconnected if")?;
                for edge in edges {
                    writeln!(f, "{}", edge)?;
                }
                write!(f, "both fail")
            }
        }
    }
}
