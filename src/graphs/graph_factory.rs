use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::{FromStr, SplitWhitespace},
};

use log::{debug, info};

use super::{
    edge::{Cable, Material},
    vec_vec_graph::VecVecGraph,
    Graph, Vertex,
};
use crate::error::{NetworkError, Result};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<VecVecGraph> {
        let file = File::open(path)?;
        let graph = Self::from_reader(BufReader::new(file))?;
        info!(
            "read {} vertices and {} directed edges from {}",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            path.display()
        );
        Ok(graph)
    }

    /// Reads a network description: the vertex count on the first line, then
    /// one cable per line as `tail head material bandwidth length`. Every
    /// cable is inserted in both directions. Empty lines and lines starting
    /// with `#` are skipped. The first malformed line aborts reading.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<VecVecGraph> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|line| (index + 1, line)))
            .filter(|line| match line {
                Ok((_, line)) => {
                    let line = line.trim();
                    !line.is_empty() && !line.starts_with('#')
                }
                Err(_) => true,
            });

        let (line_number, header) = lines.next().transpose()?.ok_or(NetworkError::Parse {
            line: 1,
            reason: "missing vertex count".to_string(),
        })?;
        let number_of_vertices: u32 =
            header.trim().parse().map_err(|_| NetworkError::Parse {
                line: line_number,
                reason: format!("unable to parse vertex count '{}'", header.trim()),
            })?;

        let mut graph = VecVecGraph::new(number_of_vertices);
        for line in lines {
            let (line_number, line) = line?;
            let cable = parse_cable(&line).map_err(|error| match error {
                NetworkError::InvalidEdge(reason) => {
                    NetworkError::InvalidEdge(format!("line {}: {}", line_number, reason))
                }
                other => other,
            })?;
            debug!("line {}: cable {}", line_number, cable);
            graph.add_cable(cable)?;
        }

        Ok(graph)
    }
}

/// Parses `tail head material bandwidth length`.
fn parse_cable(line: &str) -> Result<Cable> {
    let mut values = line.split_whitespace();

    let tail = parse_vertex(next_value(&mut values, "tail")?)?;
    let head = parse_vertex(next_value(&mut values, "head")?)?;
    let material: Material = next_value(&mut values, "material")?.parse()?;
    let bandwidth: u64 = parse_field(next_value(&mut values, "bandwidth")?, "bandwidth")?;
    let length: f64 = parse_field(next_value(&mut values, "length")?, "length")?;

    Cable::new(tail, head, material, length, bandwidth)
}

fn next_value<'a>(values: &mut SplitWhitespace<'a>, name: &str) -> Result<&'a str> {
    values
        .next()
        .ok_or_else(|| NetworkError::InvalidEdge(format!("no {} found", name)))
}

fn parse_field<T: FromStr>(value: &str, name: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| NetworkError::InvalidEdge(format!("unable to parse {} '{}'", name, value)))
}

fn parse_vertex(value: &str) -> Result<Vertex> {
    let index: i64 = parse_field(value, "vertex index")?;
    if index < 0 {
        return Err(NetworkError::InvalidEdge(format!(
            "vertex index {} must be a nonnegative integer",
            index
        )));
    }
    Vertex::try_from(index)
        .map_err(|_| NetworkError::InvalidEdge(format!("vertex index {} is too large", index)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<VecVecGraph> {
        GraphFactory::from_reader(input.as_bytes())
    }

    #[test]
    fn reads_cables_in_both_directions() {
        let graph = read("3\n0 1 copper 100 8\n1 2 optical 10000 10\n").unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 4);
        assert!(!graph.is_copper_only());

        let edge = graph.edges(2).unwrap().next().unwrap();
        assert_eq!(edge.head(), 1);
        assert_eq!(edge.bandwidth(), 10000);
        assert_eq!(edge.length(), 10.0);
        assert_eq!(edge.material(), Material::Optical);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let graph = read("# network\n\n2\n\n# cable\n0 1 copper 1 1\n").unwrap();
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(read(""), Err(NetworkError::Parse { .. })));
        assert!(matches!(read("two\n"), Err(NetworkError::Parse { line: 1, .. })));
    }

    #[test]
    fn vertex_count_only() {
        let graph = read("4\n").unwrap();
        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!(
            read("2\n0 1 copper 100\n"),
            Err(NetworkError::InvalidEdge(reason)) if reason.contains("line 2")
        ));
        assert!(matches!(
            read("2\n0 x copper 100 8\n"),
            Err(NetworkError::InvalidEdge(_))
        ));
        assert!(matches!(
            read("2\n0 1 gold 100 8\n"),
            Err(NetworkError::InvalidEdge(_))
        ));
        assert!(matches!(
            read("2\n-1 1 copper 100 8\n"),
            Err(NetworkError::InvalidEdge(_))
        ));
        assert!(matches!(
            read("2\n0 1 copper 100 eight\n"),
            Err(NetworkError::InvalidEdge(_))
        ));
    }

    #[test]
    fn out_of_range_vertex() {
        assert!(matches!(
            read("2\n0 2 copper 100 8\n"),
            Err(NetworkError::InvalidVertex {
                vertex: 2,
                number_of_vertices: 2
            })
        ));
    }
}
