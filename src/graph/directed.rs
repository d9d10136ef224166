use crate::graph::traits::{Graph, MutableGraph};

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl MutableGraph for DirectedGraph {
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> bool {
        // `!(weight >= 0.0)` also rejects NaN
        if !self.has_vertex(from) || !self.has_vertex(to) || !(weight >= 0.0) {
            return false;
        }

        let edges = &mut self.adjacency[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };
        let before = edges.len();
        edges.retain(|(target, _)| *target != to);
        edges.len() != before
    }
}
