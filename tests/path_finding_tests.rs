use minpq::algorithm::traits::ShortestPathAlgorithm;
use minpq::graph::DirectedGraph;
use minpq::graph::{Graph, MutableGraph};
use minpq::{Dijkstra, IndexedBinaryHeapMinPQ, UnsortedArrayMinPQ};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test helper function to create a grid graph, skipping blocked cells
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(width * height);

    // Connect adjacent vertices (including diagonals)
    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            let vertex = y * width + x;

            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !blocked.contains(&(nx, ny)) {
                        graph.add_edge(vertex, ny * width + nx, cost);
                    }
                }
            }
        }
    }

    graph
}

// Path continuity, endpoints and length agreement with the reported distance
fn assert_valid_path(graph: &DirectedGraph, path: &[usize], source: usize, target: usize, distance: f64) {
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");

    let mut total = 0.0;
    for pair in path.windows(2) {
        let weight = graph.get_edge_weight(pair[0], pair[1]);
        assert!(weight.is_some(), "Path should only use existing edges");
        total += weight.unwrap_or_default();
    }
    assert!((total - distance).abs() < 1e-9, "Path length {} != distance {}", total, distance);
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);
    let (source, target) = (0, 99);

    let dijkstra: Dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

    // Straight diagonal across the grid
    let distance = result.distances[target].unwrap();
    assert!((distance - 9.0 * 1.4).abs() < 1e-9);

    let path = result.get_path(target).unwrap();
    assert_eq!(path.len(), 10);
    assert_valid_path(&graph, &path, source, target, distance);
}

#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 5, open only at the bottom two rows
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let (source, target) = (0, 9);

    for result in [
        Dijkstra::<IndexedBinaryHeapMinPQ<usize>>::new().compute_shortest_paths(&graph, source),
        Dijkstra::<UnsortedArrayMinPQ<usize>>::new().compute_shortest_paths(&graph, source),
    ] {
        let result = result.unwrap();
        let distance = result.distances[target].expect("a path around the wall");
        let path = result.get_path(target).unwrap();
        assert_valid_path(&graph, &path, source, target, distance);
        assert!(path.iter().all(|&v| !wall.contains(&(v % 10, v / 10))));
    }
}

#[test]
fn test_unreachable_vertex() {
    let mut graph = create_test_grid(3, 3, &[]);
    let island = graph.add_vertex();

    let dijkstra: Dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances[island], None);
    assert_eq!(result.get_path(island), None);
    assert_eq!(result.get_path(0), Some(vec![0]));
}

#[test]
fn test_early_stop_at_target() {
    let graph = create_test_grid(20, 20, &[]);
    let full = Dijkstra::<IndexedBinaryHeapMinPQ<usize>>::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();
    let early = Dijkstra::<IndexedBinaryHeapMinPQ<usize>>::new()
        .with_target(21)
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(early.distances[21], full.distances[21]);
    assert_eq!(early.get_path(21), full.get_path(21));
    // The far corner is never reached before the target settles
    assert_eq!(early.distances[399], None);
}

#[test]
fn test_random_graphs_agree_across_queues() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let n = rng.gen_range(2..80);
        let mut graph = DirectedGraph::with_capacity(n);
        for _ in 0..n * 3 {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            graph.add_edge(u, v, rng.gen_range(0..20) as f64);
        }

        let heap = Dijkstra::<IndexedBinaryHeapMinPQ<usize>>::new()
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        let baseline = Dijkstra::<UnsortedArrayMinPQ<usize>>::new()
            .compute_shortest_paths(&graph, 0)
            .unwrap();

        assert_eq!(heap.distances, baseline.distances);
        assert_eq!(graph.vertex_count(), heap.distances.len());
        for target in 0..n {
            if let Some(distance) = heap.distances[target] {
                let path = heap.get_path(target).unwrap();
                assert_valid_path(&graph, &path, 0, target, distance);
            }
        }
    }
}
