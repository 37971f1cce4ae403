pub mod union_find;
pub mod vertex_distance_queue;
