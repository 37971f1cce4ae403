use std::cmp::Reverse;

use keyed_priority_queue::{Entry, KeyedPriorityQueue};
use ordered_float::OrderedFloat;

use crate::graphs::{Latency, Vertex};

/// A priority queue that manages vertices and their tentative latencies and
/// hands out the vertex with the smallest one first.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex, or lowers its key if it is already queued with a
    /// larger one.
    fn insert(&mut self, vertex: Vertex, distance: Latency);

    /// Removes and returns the vertex with the smallest distance, or none if
    /// the queue is empty.
    fn pop(&mut self) -> Option<(Vertex, Latency)>;
}

/// Indexed min-queue: every vertex is queued at most once and updates are
/// decrease-key operations.
pub struct VertexDistanceQueueKeyed {
    queue: KeyedPriorityQueue<Vertex, Reverse<OrderedFloat<Latency>>>,
}

impl Default for VertexDistanceQueueKeyed {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueKeyed {
    pub fn new() -> Self {
        VertexDistanceQueueKeyed {
            queue: KeyedPriorityQueue::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueKeyed {
    fn clear(&mut self) {
        self.queue = KeyedPriorityQueue::new();
    }

    fn insert(&mut self, vertex: Vertex, distance: Latency) {
        let priority = Reverse(OrderedFloat(distance));
        match self.queue.entry(vertex) {
            Entry::Vacant(entry) => {
                entry.set_priority(priority);
            }
            Entry::Occupied(mut entry) => {
                // Reversed, so greater means closer.
                if priority > *entry.get_priority() {
                    entry.set_priority(priority);
                }
            }
        };
    }

    fn pop(&mut self) -> Option<(Vertex, Latency)> {
        let (vertex, Reverse(OrderedFloat(distance))) = self.queue.pop()?;
        Some((vertex, distance))
    }
}
