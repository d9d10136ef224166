use std::env;
use std::time::{Duration, Instant};

use minpq::algorithm::ShortestPathAlgorithm;
use minpq::graph::{DirectedGraph, MutableGraph};
use minpq::{Dijkstra, IndexedBinaryHeapMinPQ, MinPQ, UnsortedArrayMinPQ};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Function to generate a random directed graph with specified parameters
fn generate_random_graph(rng: &mut StdRng, num_vertices: usize, edge_factor: f64) -> DirectedGraph {
    let mut graph = DirectedGraph::with_capacity(num_vertices);

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1.0..100.0));
        }
    }

    graph
}

// Adds `size` elements, changes every priority once, then drains the queue
fn churn<Q: MinPQ<usize>>(queue: &mut Q, priorities: &[f64], changes: &[f64]) -> minpq::Result<Duration> {
    let start = Instant::now();
    for (element, &priority) in priorities.iter().enumerate() {
        queue.add(element, priority)?;
    }
    for (element, &priority) in changes.iter().enumerate() {
        queue.change_priority(&element, priority)?;
    }
    while !queue.is_empty() {
        queue.remove_min()?;
    }
    Ok(start.elapsed())
}

fn benchmark_dijkstra<A>(name: &str, algorithm: &A, graph: &DirectedGraph) -> minpq::Result<Duration>
where
    A: ShortestPathAlgorithm<DirectedGraph>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, 0)?;
    let duration = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    println!("  - {}: {} reachable vertices in {:?}", name, reachable, duration);
    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Queue sizes to test, overridable from the command line
    let args: Vec<String> = env::args().skip(1).collect();
    let sizes: Vec<usize> = if args.is_empty() {
        vec![1_000, 5_000, 20_000]
    } else {
        args.iter().map(|a| a.parse()).collect::<Result<Vec<usize>, _>>()?
    };

    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: UnsortedArrayMinPQ vs IndexedBinaryHeapMinPQ");
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &sizes {
        let priorities: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..1_000.0)).collect();
        let changes: Vec<f64> = (0..size).map(|_| rng.gen_range(0.0..1_000.0)).collect();

        println!("\nQueue churn with {} elements...", size);
        let unsorted = churn(&mut UnsortedArrayMinPQ::<usize>::with_capacity(size), &priorities, &changes)?;
        let heap = churn(&mut IndexedBinaryHeapMinPQ::<usize>::with_capacity(size), &priorities, &changes)?;
        println!("  - UnsortedArrayMinPQ: {:?}", unsorted);
        println!("  - IndexedBinaryHeapMinPQ: {:?}", heap);

        println!("Dijkstra on a random graph with {} vertices...", size);
        let graph = generate_random_graph(&mut rng, size, 4.0);
        let dijkstra_unsorted = benchmark_dijkstra(
            "UnsortedArrayMinPQ",
            &Dijkstra::<UnsortedArrayMinPQ<usize>>::new(),
            &graph,
        )?;
        let dijkstra_heap = benchmark_dijkstra(
            "IndexedBinaryHeapMinPQ",
            &Dijkstra::<IndexedBinaryHeapMinPQ<usize>>::new(),
            &graph,
        )?;

        results.push((size, unsorted, heap, dijkstra_unsorted, dijkstra_heap));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<18} | {:<18}",
        "Elements", "Unsorted (ms)", "Heap (ms)", "Dijkstra-Uns (ms)", "Dijkstra-Heap (ms)"
    );
    println!("-----------------------------------------------------");
    for (size, unsorted, heap, dijkstra_unsorted, dijkstra_heap) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<18} | {:<18}",
            size,
            unsorted.as_millis(),
            heap.as_millis(),
            dijkstra_unsorted.as_millis(),
            dijkstra_heap.as_millis()
        );
    }

    Ok(())
}
