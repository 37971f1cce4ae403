use std::path::Path;

use clap::ValueEnum;
use graphs::{graph_factory::GraphFactory, vec_vec_graph::VecVecGraph};
use utility::get_progressspinner;

pub mod analysis;
pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn reading_network(path: &Path) -> error::Result<VecVecGraph> {
    let spinner = get_progressspinner("Reading network");
    let graph = GraphFactory::from_file(path);
    spinner.finish_and_clear();
    graph
}
