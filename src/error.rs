use crate::graphs::{Latency, Vertex};

/// Errors raised while building a network or querying it.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("{}", vertex_out_of_range(.vertex, .number_of_vertices))]
    InvalidVertex {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    #[error("invalid edge: {0}")]
    InvalidEdge(String),

    #[error("edge {tail}->{head} has negative latency {latency}")]
    InvalidWeight {
        tail: Vertex,
        head: Vertex,
        latency: Latency,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

fn vertex_out_of_range(vertex: &Vertex, number_of_vertices: &u32) -> String {
    match *number_of_vertices {
        0 => format!("vertex {} does not exist, the graph has no vertices", vertex),
        n => format!("vertex {} is not between 0 and {}", vertex, n - 1),
    }
}
