use std::marker::PhantomData;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexedBinaryHeapMinPQ, MinPQ};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm over any [`MinPQ`] implementation
///
/// Each vertex is queued at most once: a shorter tentative distance found for
/// a queued vertex goes through [`MinPQ::change_priority`] rather than a
/// second entry.
#[derive(Debug)]
pub struct Dijkstra<Q = IndexedBinaryHeapMinPQ<usize>> {
    /// Stop as soon as this vertex is settled
    target: Option<usize>,

    /// Queue type marker
    _queue_marker: PhantomData<Q>,
}

impl<Q> Dijkstra<Q>
where
    Q: MinPQ<usize> + Default,
{
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            target: None,
            _queue_marker: PhantomData,
        }
    }

    /// Stop the search once `target` has been settled
    ///
    /// Distances of vertices not yet settled at that point are upper bounds.
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }
}

impl<Q> Default for Dijkstra<Q>
where
    Q: MinPQ<usize> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, G> ShortestPathAlgorithm<G> for Dijkstra<Q>
where
    Q: MinPQ<usize> + Default,
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<f64>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = Some(0.0);
        let mut queue = Q::default();
        queue.add(source, 0.0)?;

        let mut settled_count = 0usize;
        while !queue.is_empty() {
            let u = queue.remove_min()?;
            settled[u] = true;
            settled_count += 1;
            if self.target == Some(u) {
                break;
            }
            let Some(dist_u) = distances[u] else {
                continue;
            };

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let new_dist = dist_u + weight;
                match distances[v] {
                    None => queue.add(v, new_dist)?,
                    Some(current) if new_dist < current => queue.change_priority(&v, new_dist)?,
                    Some(_) => continue,
                }
                distances[v] = Some(new_dist);
                predecessors[v] = Some(u);
            }
        }

        log::debug!("Dijkstra from {} settled {} of {} vertices", source, settled_count, n);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::UnsortedArrayMinPQ;
    use crate::graph::{DirectedGraph, MutableGraph};

    fn diamond() -> DirectedGraph {
        let mut graph = DirectedGraph::with_capacity(4);
        graph.add_edge(0, 1, 4.0);
        graph.add_edge(0, 2, 1.0);
        graph.add_edge(2, 1, 2.0);
        graph.add_edge(1, 3, 1.0);
        graph
    }

    #[test]
    fn test_decrease_key_path() {
        let graph = diamond();
        let dijkstra: Dijkstra = Dijkstra::new();
        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(result.distances, vec![Some(0.0), Some(3.0), Some(1.0), Some(4.0)]);
        assert_eq!(result.get_path(3), Some(vec![0, 2, 1, 3]));
    }

    #[test]
    fn test_queue_implementations_agree() {
        let graph = diamond();
        let heap = Dijkstra::<IndexedBinaryHeapMinPQ<usize>>::new()
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        let baseline = Dijkstra::<UnsortedArrayMinPQ<usize>>::new()
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(heap.distances, baseline.distances);
    }

    #[test]
    fn test_missing_source() {
        let graph = diamond();
        let dijkstra: Dijkstra = Dijkstra::new();
        assert_eq!(
            dijkstra.compute_shortest_paths(&graph, 10),
            Err(Error::SourceNotFound)
        );
    }
}
