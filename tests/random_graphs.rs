use network_latency::{
    analysis::resilience::{failure_resilience, FailureResilience},
    graphs::{
        edge::{Cable, Material},
        vec_vec_graph::VecVecGraph,
        Graph,
    },
    search::{dijkstra::ShortestPathTree, spanning_tree::SpanningTree},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, max_vertices: u32, max_cables: u32) -> VecVecGraph {
    let number_of_vertices = rng.gen_range(1..=max_vertices);
    let mut graph = VecVecGraph::new(number_of_vertices);

    for _ in 0..rng.gen_range(0..=max_cables) {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let material = if rng.gen_bool(0.5) {
            Material::Copper
        } else {
            Material::Optical
        };
        let length = rng.gen_range(0..100) as f64;
        let bandwidth = rng.gen_range(0..10_000);
        let cable = Cable::new(tail, head, material, length, bandwidth).unwrap();
        graph.add_cable(cable).unwrap();
    }

    graph
}

fn bellman_ford(graph: &dyn Graph, source: u32) -> Vec<f64> {
    let mut distances = vec![f64::INFINITY; graph.number_of_vertices() as usize];
    distances[source as usize] = 0.0;

    for _ in graph.vertices() {
        for edge in graph.all_edges() {
            let alternative = distances[edge.tail() as usize] + edge.latency();
            if alternative < distances[edge.head() as usize] {
                distances[edge.head() as usize] = alternative;
            }
        }
    }

    distances
}

fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

fn find(parent: &[u32], vertex: u32) -> u32 {
    let mut root = vertex;
    while parent[root as usize] != root {
        root = parent[root as usize];
    }
    root
}

/// Cheapest total latency over all acyclic cable subsets of maximal size.
fn brute_force_spanning_latency(graph: &dyn Graph) -> (usize, f64) {
    // One direction per cable, self loops never help.
    let cables: Vec<&Cable> = graph
        .all_edges()
        .filter(|edge| edge.tail() < edge.head())
        .collect();

    let mut best = (0, 0.0);
    for subset in 0u32..(1 << cables.len()) {
        let mut parent: Vec<u32> = graph.vertices().collect();
        let mut size = 0;
        let mut latency = 0.0;
        let mut acyclic = true;
        for (index, cable) in cables.iter().enumerate() {
            if subset & (1 << index) == 0 {
                continue;
            }
            let tail = find(&parent, cable.tail());
            let head = find(&parent, cable.head());
            if tail == head {
                acyclic = false;
                break;
            }
            parent[tail as usize] = head;
            size += 1;
            latency += cable.latency();
        }

        if acyclic && (size > best.0 || (size == best.0 && latency < best.1)) {
            best = (size, latency);
        }
    }

    best
}

#[test]
fn dijkstra_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..200 {
        let graph = random_graph(&mut rng, 12, 30);
        let source = rng.gen_range(0..graph.number_of_vertices());
        let tree = ShortestPathTree::new(&graph, source).unwrap();
        let expected = bellman_ford(&graph, source);

        assert!(tree.is_optimal(&graph));
        for target in graph.vertices() {
            let distance = tree.distance_to(target).unwrap();
            assert!(approx_eq(distance, expected[target as usize]));

            let path = tree.path_to(target).unwrap();
            assert_eq!(path.is_some(), tree.has_path_to(target).unwrap());
            assert_eq!(path.is_none(), distance.is_infinite());

            if let Some(path) = path {
                let sum: f64 = path.edges.iter().map(Cable::latency).sum();
                assert_eq!(sum, distance);
                for pair in path.edges.windows(2) {
                    assert_eq!(pair[0].head(), pair[1].tail());
                }
                assert_eq!(path.vertices().first(), Some(&source));
                assert_eq!(path.vertices().last(), Some(&target));
            }
        }
    }
}

#[test]
fn kruskal_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let graph = random_graph(&mut rng, 6, 9);
        let tree = SpanningTree::new(&graph);
        let (size, latency) = brute_force_spanning_latency(&graph);

        assert_eq!(tree.edges().len(), size);
        assert!(approx_eq(tree.total_latency(), latency));
    }
}

#[test]
fn high_degree_graphs_survive() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..100 {
        let graph = random_graph(&mut rng, 8, 40);
        let minimum_degree = graph
            .vertices()
            .map(|vertex| graph.out_degree(vertex).unwrap())
            .min()
            .unwrap_or(0);

        match failure_resilience(&graph).unwrap() {
            FailureResilience::Survives => assert!(minimum_degree >= 3),
            FailureResilience::FailurePoint { vertex, edges } => {
                assert!(minimum_degree < 3);
                assert_eq!(edges.len() as u32, graph.out_degree(vertex).unwrap());
                assert!(graph
                    .vertices()
                    .take_while(|&other| other < vertex)
                    .all(|other| graph.out_degree(other).unwrap() >= 3));
            }
        }
    }
}
