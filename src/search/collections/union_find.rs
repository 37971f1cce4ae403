use crate::graphs::Vertex;

/// Disjoint sets over `0..n` with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
    number_of_sets: u32,
}

impl UnionFind {
    pub fn new(number_of_vertices: u32) -> Self {
        UnionFind {
            parent: (0..number_of_vertices).collect(),
            rank: vec![0; number_of_vertices as usize],
            number_of_sets: number_of_vertices,
        }
    }

    pub fn find(&mut self, vertex: Vertex) -> Vertex {
        let mut root = vertex;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = vertex;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        root
    }

    /// Merges the sets of `a` and `b`. Returns false if they already were one.
    pub fn union(&mut self, a: Vertex, b: Vertex) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a as usize].cmp(&self.rank[root_b as usize]) {
            std::cmp::Ordering::Less => self.parent[root_a as usize] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b as usize] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b as usize] = root_a;
                self.rank[root_a as usize] += 1;
            }
        }
        self.number_of_sets -= 1;

        true
    }

    pub fn number_of_sets(&self) -> u32 {
        self.number_of_sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions() {
        let mut sets = UnionFind::new(5);
        assert_eq!(sets.number_of_sets(), 5);

        assert!(sets.union(0, 1));
        assert!(sets.union(3, 4));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.find(0), sets.find(1));
        assert_ne!(sets.find(1), sets.find(3));

        assert!(sets.union(1, 4));
        assert_eq!(sets.find(0), sets.find(3));
        assert_eq!(sets.number_of_sets(), 2);
    }
}
