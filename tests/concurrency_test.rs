use densegraph::{Edge, GraphRegistry};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_concurrent_creates_get_unique_handles() {
    let registry = GraphRegistry::default();

    let ids: Vec<u64> = thread::scope(|s| {
        let workers: Vec<_> = (0..8)
            .map(|_| s.spawn(|| (0..25).map(|_| registry.create(4).unwrap()).collect::<Vec<_>>()))
            .collect();
        workers.into_iter().flat_map(|w| w.join().unwrap()).collect()
    });

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 200);
    assert_eq!(registry.len(), 200);
    assert_eq!(*ids.iter().max().unwrap(), 200);
}

#[test]
fn test_readers_and_writers_interleave() {
    let registry = GraphRegistry::default();
    let size = 32;
    let ring = registry.create(size).unwrap();
    let ring_edges: Vec<Edge> = (0..size).map(|u| Edge::unit(u, (u + 1) % size)).collect();
    registry.batch_set(ring, &ring_edges, true).unwrap();

    let scratch = registry.create(size).unwrap();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..10 {
                    let stats = registry.degree_stats(ring, false).unwrap();
                    assert_eq!((stats.min, stats.max), (2, 2));
                    let dist = registry.shortest_path(ring, 0, false).unwrap();
                    assert_eq!(dist[16], 16);
                }
            });
        }

        // Writer on an unrelated graph serializes with the readers above
        s.spawn(|| {
            for u in 1..size {
                registry.set(scratch, Edge::new(0, u, u as u16), false).unwrap();
            }
        });
    });

    assert_eq!(registry.get_from(scratch, 0).unwrap().len(), (size - 1) as usize);
}

#[test]
fn test_destroy_during_queries_is_all_or_nothing() {
    let registry = GraphRegistry::default();
    let id = registry.create(16).unwrap();
    let edges: Vec<Edge> = (1..16).map(|v| Edge::unit(0, v)).collect();
    registry.batch_set(id, &edges, true).unwrap();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..50 {
                    // Either the whole graph is visible or it is gone
                    match registry.betweenness_centrality(id, false) {
                        Ok(bc) => assert_eq!(bc[0], 105.0),
                        Err(e) => assert_eq!(e.kind(), densegraph::ErrorKind::OutOfRange),
                    }
                }
            });
        }
        s.spawn(|| {
            assert!(registry.destroy(id));
        });
    });

    assert!(!registry.exists(id));
}
