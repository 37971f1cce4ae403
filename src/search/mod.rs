pub mod collections;
pub mod dijkstra;
pub mod path;
pub mod spanning_tree;
