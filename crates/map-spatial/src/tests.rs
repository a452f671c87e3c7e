//! Unit tests for map-spatial.
//!
//! All tests use hand-crafted or seeded random graphs so they run without any
//! ingestion source.

#[cfg(test)]
mod helpers {
    use map_core::{EARTH_RADIUS_MILES, NodeId, WayId};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{SpatialGraph, SpatialGraphBuilder};

    /// Degrees of longitude per mile along the equator.
    pub fn deg_per_mile() -> f64 {
        180.0 / (EARTH_RADIUS_MILES * std::f64::consts::PI)
    }

    /// A–B–C–D on the equator with edges of 1, 2 and 3 miles.
    pub fn line_graph() -> (SpatialGraph, [NodeId; 4]) {
        let k = deg_per_mile();
        let ids = [NodeId(1), NodeId(2), NodeId(3), NodeId(4)];
        let mut b = SpatialGraphBuilder::new();
        for (id, miles) in ids.iter().zip([0.0, 1.0, 3.0, 6.0]) {
            b.add_node(*id, miles * k, 0.0).unwrap();
        }
        for pair in ids.windows(2) {
            b.add_adjacency(pair[0], pair[1]).unwrap();
        }
        (b.build(), ids)
    }

    /// An L-shaped route: east along Main St, then north up Oak Ave.
    ///
    /// ```text
    ///                 5
    ///                 |  Oak Ave (way 200)
    ///                 4
    ///                 |
    ///   1 ---- 2 ---- 3          Main St (way 100)
    /// ```
    pub fn l_shaped_streets() -> SpatialGraph {
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.00, 0.00).unwrap();
        b.add_node(NodeId(2), 0.01, 0.00).unwrap();
        b.add_node(NodeId(3), 0.02, 0.00).unwrap();
        b.add_node(NodeId(4), 0.02, 0.01).unwrap();
        b.add_node(NodeId(5), 0.02, 0.02).unwrap();
        b.add_way(WayId(100), Some("Main St".into()), Some("residential".into()), None).unwrap();
        b.add_way(WayId(200), Some("Oak Ave".into()), None, Some("25 mph".into())).unwrap();
        for n in [1, 2, 3] {
            b.associate_node_with_way(NodeId(n), WayId(100)).unwrap();
        }
        for n in [3, 4, 5] {
            b.associate_node_with_way(NodeId(n), WayId(200)).unwrap();
        }
        for (a, c) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
            b.add_adjacency(NodeId(a), NodeId(c)).unwrap();
        }
        b.build()
    }

    /// `n` random nodes in a ~0.1° box, each linked to a few random others.
    pub fn random_graph(seed: u64, n: i64) -> SpatialGraph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut b = SpatialGraphBuilder::new();
        for id in 0..n {
            let lon = rng.gen_range(-122.30..-122.20);
            let lat = rng.gen_range(37.80..37.90);
            b.add_node(NodeId(id), lon, lat).unwrap();
        }
        for id in 0..n {
            for _ in 0..2 {
                let other = rng.gen_range(0..n);
                b.add_adjacency(NodeId(id), NodeId(other)).unwrap();
            }
        }
        b.build()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use map_core::{NodeId, WayId};

    use crate::{SpatialError, SpatialGraphBuilder};

    #[test]
    fn empty_build() {
        let g = SpatialGraphBuilder::new().build();
        assert_eq!(g.node_count(), 0);
        assert!(g.is_empty());
        assert!(g.nearest_node(map_core::GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn adjacency_is_undirected_and_deduplicated() {
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.0, 0.0).unwrap();
        b.add_node(NodeId(2), 0.0, 1.0).unwrap();
        b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
        b.add_adjacency(NodeId(2), NodeId(1)).unwrap();
        let g = b.build();
        assert_eq!(g.neighbors(NodeId(1)).unwrap(), &[NodeId(2)]);
        assert_eq!(g.neighbors(NodeId(2)).unwrap(), &[NodeId(1)]);
    }

    #[test]
    fn clean_removes_isolated_nodes() {
        let mut b = SpatialGraphBuilder::new();
        for id in 1..=4 {
            b.add_node(NodeId(id), id as f64, 0.0).unwrap();
        }
        b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
        b.add_adjacency(NodeId(3), NodeId(3)).unwrap(); // self-loop, ignored
        let g = b.build();

        let vertices: Vec<_> = g.vertices().collect();
        assert_eq!(vertices, vec![NodeId(1), NodeId(2)]);
        assert!(!g.contains(NodeId(3)));
        for v in g.vertices() {
            assert!(!g.neighbors(v).unwrap().is_empty());
        }
        // Restartable.
        assert_eq!(g.vertices().count(), 2);
        // Isolated node 4 sits right on the query point but is not indexed.
        assert_eq!(g.nearest_node(map_core::GeoPoint::new(4.0, 0.0)), Some(NodeId(2)));
    }

    #[test]
    fn clean_prunes_way_members() {
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.0, 0.0).unwrap();
        b.add_node(NodeId(2), 0.0, 1.0).unwrap();
        b.add_node(NodeId(3), 0.0, 2.0).unwrap();
        b.add_way(WayId(9), Some("Spur".into()), None, None).unwrap();
        for n in 1..=3 {
            b.associate_node_with_way(NodeId(n), WayId(9)).unwrap();
        }
        b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
        let g = b.build();
        assert_eq!(g.way(WayId(9)).unwrap().nodes, vec![NodeId(1), NodeId(2)]);
        assert_eq!(g.way_name(WayId(9)), Some("Spur"));
        assert_eq!(g.way_count(), 1);
    }

    #[test]
    fn bad_records_leave_builder_untouched() {
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.0, 0.0).unwrap();

        assert!(matches!(
            b.add_node(NodeId(1), 5.0, 5.0),
            Err(SpatialError::DuplicateNode(NodeId(1)))
        ));
        assert!(matches!(
            b.add_adjacency(NodeId(1), NodeId(99)),
            Err(SpatialError::NodeNotFound(NodeId(99)))
        ));
        assert!(matches!(
            b.associate_node_with_way(NodeId(1), WayId(5)),
            Err(SpatialError::WayNotFound(WayId(5)))
        ));
        b.add_way(WayId(5), None, None, None).unwrap();
        assert!(matches!(
            b.add_way(WayId(5), None, None, None),
            Err(SpatialError::DuplicateWay(WayId(5)))
        ));
        assert_eq!(b.node_count(), 1);

        // Node 1 never got a neighbor from the failed call.
        let g = b.build();
        assert!(g.is_empty());
    }

    #[test]
    fn unknown_node_queries_fail() {
        let (g, _) = super::helpers::line_graph();
        assert!(matches!(g.neighbors(NodeId(42)), Err(SpatialError::NodeNotFound(_))));
        assert!(g.distance(NodeId(1), NodeId(42)).is_err());
        assert!(g.bearing(NodeId(42), NodeId(1)).is_err());
    }

    #[test]
    fn common_way_prefers_first_listed_on_source() {
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.0, 0.0).unwrap();
        b.add_node(NodeId(2), 0.0, 1.0).unwrap();
        b.add_way(WayId(10), Some("First".into()), None, None).unwrap();
        b.add_way(WayId(20), Some("Second".into()), None, None).unwrap();
        b.associate_node_with_way(NodeId(1), WayId(10)).unwrap();
        b.associate_node_with_way(NodeId(1), WayId(20)).unwrap();
        b.associate_node_with_way(NodeId(2), WayId(20)).unwrap();
        b.associate_node_with_way(NodeId(2), WayId(10)).unwrap();
        b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
        let g = b.build();
        assert_eq!(g.common_way(NodeId(1), NodeId(2)).unwrap(), Some(WayId(10)));
        assert_eq!(g.common_way(NodeId(2), NodeId(1)).unwrap(), Some(WayId(20)));
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use crate::tests::helpers::random_graph;

    #[test]
    fn distance_symmetric_and_zero_on_self() {
        let g = random_graph(7, 60);
        let ids: Vec<_> = g.vertices().collect();
        for &v in &ids {
            assert_eq!(g.distance(v, v).unwrap(), 0.0);
            for &w in ids.iter().take(20) {
                assert_eq!(g.distance(v, w).unwrap(), g.distance(w, v).unwrap());
            }
        }
    }

    #[test]
    fn bearing_points_back_the_other_way() {
        let g = random_graph(8, 40);
        let ids: Vec<_> = g.vertices().collect();
        for pair in ids.windows(2) {
            let fwd = g.bearing(pair[0], pair[1]).unwrap();
            let back = g.bearing(pair[1], pair[0]).unwrap();
            assert!((-180.0..=180.0).contains(&fwd));
            let diff = (fwd - back).abs();
            assert!((diff - 180.0).abs() < 0.1, "fwd {fwd} back {back}");
        }
    }
}

// ── KD-tree ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kdtree {
    use map_core::{GeoPoint, NodeId};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::KdTree;

    fn brute_force(points: &[(NodeId, GeoPoint)], q: GeoPoint) -> f64 {
        points
            .iter()
            .map(|(_, p)| p.planar_distance_2(q))
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn empty_tree_returns_none() {
        assert!(KdTree::new().nearest(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn exact_hit() {
        let tree: KdTree = [
            (NodeId(1), GeoPoint::new(0.0, 0.0)),
            (NodeId(2), GeoPoint::new(1.0, 1.0)),
            (NodeId(3), GeoPoint::new(-1.0, 2.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.nearest(GeoPoint::new(1.0, 1.0)), Some(NodeId(2)));
        assert_eq!(tree.nearest(GeoPoint::new(-0.9, 1.8)), Some(NodeId(3)));
        assert_eq!(tree.nearest(GeoPoint::new(0.1, -5.0)), Some(NodeId(1)));
    }

    #[test]
    fn matches_brute_force_on_random_points() {
        let mut rng = SmallRng::seed_from_u64(42);
        let points: Vec<(NodeId, GeoPoint)> = (0..1_000)
            .map(|i| {
                let p = GeoPoint::new(rng.gen_range(-122.30..-122.20), rng.gen_range(37.80..37.90));
                (NodeId(i), p)
            })
            .collect();
        let tree: KdTree = points.iter().copied().collect();

        for _ in 0..500 {
            let q = GeoPoint::new(rng.gen_range(-122.35..-122.15), rng.gen_range(37.75..37.95));
            let got = tree.nearest(q).unwrap();
            let got_point = points.iter().find(|(id, _)| *id == got).unwrap().1;
            assert_eq!(got_point.planar_distance_2(q), brute_force(&points, q));
        }
    }

    #[test]
    fn sorted_insertion_is_stack_safe() {
        // Monotone input degenerates the tree into a chain.
        let points: Vec<(NodeId, GeoPoint)> = (0..5_000)
            .map(|i| (NodeId(i), GeoPoint::new(i as f64 * 1e-4, i as f64 * 1e-4)))
            .collect();
        let tree: KdTree = points.iter().copied().collect();
        assert_eq!(tree.nearest(GeoPoint::new(0.49991, 0.49991)), Some(NodeId(4_999)));
        assert_eq!(tree.nearest(GeoPoint::new(-1.0, -1.0)), Some(NodeId(0)));
    }

    #[test]
    fn duplicate_coordinates_resolve_to_one_of_them() {
        let tree: KdTree = [
            (NodeId(1), GeoPoint::new(0.5, 0.5)),
            (NodeId(2), GeoPoint::new(0.5, 0.5)),
        ]
        .into_iter()
        .collect();
        let got = tree.nearest(GeoPoint::new(0.5, 0.5)).unwrap();
        assert!(got == NodeId(1) || got == NodeId(2));
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use map_core::{NodeId, SearchLimits};

    use crate::tests::helpers::{line_graph, random_graph};
    use crate::{AStarRouter, DijkstraRouter, Router, SpatialError, SpatialGraphBuilder};

    #[test]
    fn line_graph_shortest_path() {
        let (g, [a, b, c, d]) = line_graph();
        let route = AStarRouter::default().route(&g, a, d).unwrap();
        assert_eq!(route.nodes, vec![a, b, c, d]);
        assert!((route.total_miles - 6.0).abs() < 1e-9, "got {}", route.total_miles);
    }

    #[test]
    fn trivial_same_node() {
        let (g, [a, ..]) = line_graph();
        let route = AStarRouter::default().route(&g, a, a).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.nodes, vec![a]);
        assert_eq!(route.total_miles, 0.0);
    }

    #[test]
    fn disjoint_components_are_unreachable() {
        let mut b = SpatialGraphBuilder::new();
        for id in 1..=4 {
            b.add_node(NodeId(id), id as f64 * 0.01, 0.0).unwrap();
        }
        b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
        b.add_adjacency(NodeId(3), NodeId(4)).unwrap();
        let g = b.build();

        let result = AStarRouter::default().route(&g, NodeId(1), NodeId(4));
        assert!(matches!(
            result,
            Err(SpatialError::NoRoute { from: NodeId(1), to: NodeId(4) })
        ));
        assert!(DijkstraRouter::default().route(&g, NodeId(3), NodeId(2)).is_err());
    }

    #[test]
    fn unknown_endpoint() {
        let (g, [a, ..]) = line_graph();
        assert!(matches!(
            AStarRouter::default().route(&g, a, NodeId(77)),
            Err(SpatialError::NodeNotFound(NodeId(77)))
        ));
        assert!(matches!(
            AStarRouter::default().route(&g, NodeId(77), a),
            Err(SpatialError::NodeNotFound(NodeId(77)))
        ));
    }

    #[test]
    fn prefers_shorter_detour() {
        // Square 1-2-3-4 plus a long spur: 1→3 must go around the short side.
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.00, 0.00).unwrap();
        b.add_node(NodeId(2), 0.01, 0.00).unwrap();
        b.add_node(NodeId(3), 0.01, 0.01).unwrap();
        b.add_node(NodeId(4), -0.05, 0.05).unwrap();
        for (x, y) in [(1, 2), (2, 3), (1, 4), (4, 3)] {
            b.add_adjacency(NodeId(x), NodeId(y)).unwrap();
        }
        let g = b.build();
        let route = AStarRouter::default().route(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(route.nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn astar_matches_dijkstra() {
        for seed in 0..5 {
            let g = random_graph(seed, 150);
            let ids: Vec<_> = g.vertices().collect();
            for i in (0..ids.len()).step_by(7) {
                for j in (0..ids.len()).step_by(11) {
                    let a = AStarRouter::default().route(&g, ids[i], ids[j]);
                    let d = DijkstraRouter::default().route(&g, ids[i], ids[j]);
                    match (a, d) {
                        (Ok(a), Ok(d)) => {
                            assert!(
                                (a.total_miles - d.total_miles).abs() < 1e-9,
                                "seed {seed}: A* {} vs Dijkstra {}",
                                a.total_miles,
                                d.total_miles
                            );
                            assert_eq!(a.nodes.first(), Some(&ids[i]));
                            assert_eq!(a.nodes.last(), Some(&ids[j]));
                        }
                        (Err(SpatialError::NoRoute { .. }), Err(SpatialError::NoRoute { .. })) => {}
                        (a, d) => panic!("seed {seed}: disagreement {a:?} vs {d:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn route_edges_are_real_and_sum_to_total() {
        let g = random_graph(99, 120);
        let ids: Vec<_> = g.vertices().collect();
        let (from, to) = (ids[0], ids[ids.len() - 1]);
        if let Ok(route) = AStarRouter::default().route(&g, from, to) {
            let mut sum = 0.0;
            for pair in route.nodes.windows(2) {
                assert!(g.neighbors(pair[0]).unwrap().contains(&pair[1]));
                sum += g.distance(pair[0], pair[1]).unwrap();
            }
            assert_eq!(sum, route.total_miles);
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let g = random_graph(3, 200);
        let ids: Vec<_> = g.vertices().collect();
        let first = AStarRouter::default().route(&g, ids[5], ids[150]);
        for _ in 0..5 {
            let again = AStarRouter::default().route(&g, ids[5], ids[150]);
            assert_eq!(format!("{first:?}"), format!("{again:?}"));
        }
    }

    #[test]
    fn search_limit_bounds_work() {
        let (g, [a, .., d]) = line_graph();
        let router = AStarRouter::new(SearchLimits::with_max_settled(1));
        assert!(matches!(
            router.route(&g, a, d),
            Err(SpatialError::SearchLimitExceeded { settled: 1, .. })
        ));
        let router = AStarRouter::new(SearchLimits::with_max_settled(10));
        assert!(router.route(&g, a, d).is_ok());
    }

    #[test]
    fn concurrent_queries_share_one_graph() {
        let g = random_graph(11, 200);
        let ids: Vec<_> = g.vertices().collect();
        let expected: Vec<_> = (0..8)
            .map(|k| AStarRouter::default().route(&g, ids[k], ids[ids.len() - 1 - k]).ok())
            .collect();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|k| {
                    let g = &g;
                    let ids = &ids;
                    s.spawn(move || {
                        AStarRouter::default().route(g, ids[k], ids[ids.len() - 1 - k]).ok()
                    })
                })
                .collect();
            for (k, h) in handles.into_iter().enumerate() {
                assert_eq!(h.join().unwrap(), expected[k]);
            }
        });
    }
}

// ── Directions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod directions {
    use map_core::{NodeId, WayId};

    use crate::tests::helpers::{l_shaped_streets, line_graph};
    use crate::{
        AStarRouter, Direction, DirectionParseError, NavigationDirection, Router,
        SpatialGraphBuilder, UNKNOWN_ROAD, route_directions,
    };

    #[test]
    fn turn_onto_new_street() {
        let g = l_shaped_streets();
        let route = AStarRouter::default().route(&g, NodeId(1), NodeId(5)).unwrap();
        assert_eq!(route.nodes, (1..=5).map(NodeId).collect::<Vec<_>>());

        let dirs = route_directions(&g, &route.nodes).unwrap();
        assert_eq!(dirs.len(), 2);

        assert_eq!(dirs[0].direction, Direction::Start);
        assert_eq!(dirs[0].way, "Main St");
        let main = g.distance(NodeId(1), NodeId(2)).unwrap() + g.distance(NodeId(2), NodeId(3)).unwrap();
        assert!((dirs[0].distance - main).abs() < 1e-12);

        // Heading east, then north: a left turn.
        assert_eq!(dirs[1].direction, Direction::Left);
        assert_eq!(dirs[1].way, "Oak Ave");

        let total: f64 = dirs.iter().map(|d| d.distance).sum();
        assert!((total - route.total_miles).abs() < 1e-9);
    }

    #[test]
    fn reverse_route_turns_right() {
        let g = l_shaped_streets();
        let nodes: Vec<_> = (1..=5).rev().map(NodeId).collect();
        let dirs = route_directions(&g, &nodes).unwrap();
        assert_eq!(dirs[0].way, "Oak Ave");
        // Heading south, then west: a right turn.
        assert_eq!(dirs[1].direction, Direction::Right);
        assert_eq!(dirs[1].way, "Main St");
    }

    #[test]
    fn unnamed_edges_are_unknown_road() {
        let (g, ids) = line_graph();
        let dirs = route_directions(&g, &ids).unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].direction, Direction::Start);
        assert_eq!(dirs[0].way, UNKNOWN_ROAD);
        assert!((dirs[0].distance - 6.0).abs() < 1e-9);
    }

    #[test]
    fn unnamed_way_counts_as_unknown() {
        let mut b = SpatialGraphBuilder::new();
        b.add_node(NodeId(1), 0.0, 0.0).unwrap();
        b.add_node(NodeId(2), 0.0, 0.01).unwrap();
        b.add_way(WayId(1), None, Some("service".into()), None).unwrap();
        b.associate_node_with_way(NodeId(1), WayId(1)).unwrap();
        b.associate_node_with_way(NodeId(2), WayId(1)).unwrap();
        b.add_adjacency(NodeId(1), NodeId(2)).unwrap();
        let g = b.build();
        let dirs = route_directions(&g, &[NodeId(1), NodeId(2)]).unwrap();
        assert_eq!(dirs[0].way, UNKNOWN_ROAD);
    }

    #[test]
    fn short_routes_have_no_directions() {
        let (g, [a, ..]) = line_graph();
        assert!(route_directions(&g, &[]).unwrap().is_empty());
        assert!(route_directions(&g, &[a]).unwrap().is_empty());
        assert!(route_directions(&g, &[a, NodeId(404)]).is_err());
    }

    #[test]
    fn bearing_classification_table() {
        let cases = [
            (0.0, -150.0, Direction::SharpLeft),
            (0.0, -100.0, Direction::Left),
            (0.0, -30.0, Direction::SlightLeft),
            (0.0, -15.0, Direction::Straight),
            (0.0, 14.9, Direction::Straight),
            (0.0, 15.0, Direction::SlightRight),
            (0.0, 30.0, Direction::Right),
            (0.0, 99.9, Direction::Right),
            (0.0, 100.0, Direction::SharpRight),
            // Wrap-around: 170 → -170 is a 20° right turn.
            (170.0, -170.0, Direction::SlightRight),
            (-170.0, 170.0, Direction::SlightLeft),
            // Exactly opposite normalizes to +180.
            (0.0, -180.0, Direction::SharpRight),
            (90.0, -90.0, Direction::SharpRight),
        ];
        for (prev, cur, want) in cases {
            assert_eq!(Direction::from_bearings(prev, cur), want, "{prev} → {cur}");
        }
    }

    #[test]
    fn render_format() {
        let d = NavigationDirection::new(Direction::Left, "Bancroft Way", 0.25);
        assert_eq!(d.to_string(), "Turn left on Bancroft Way and continue for 0.250 miles.");
    }

    #[test]
    fn parse_roundtrip_of_generated_directions() {
        let g = l_shaped_streets();
        let nodes: Vec<_> = (1..=5).map(NodeId).collect();
        for d in route_directions(&g, &nodes).unwrap() {
            let parsed = NavigationDirection::parse(&d.to_string()).unwrap();
            assert_eq!(parsed.direction, d.direction);
            assert_eq!(parsed.way, d.way);
            assert_eq!(format!("{:.3}", parsed.distance), format!("{:.3}", d.distance));
        }
    }

    #[test]
    fn parse_every_label() {
        for dir in Direction::ALL {
            let text = format!("{} on Telegraph Ave and continue for 1.500 miles.", dir.label());
            let parsed: NavigationDirection = text.parse().unwrap();
            assert_eq!(parsed, NavigationDirection::new(dir, "Telegraph Ave", 1.5));
        }
    }

    #[test]
    fn parse_way_containing_on() {
        let parsed =
            NavigationDirection::parse("Start on Stratford on Avon Rd and continue for 0.100 miles.")
                .unwrap();
        assert_eq!(parsed.way, "Stratford on Avon Rd");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(NavigationDirection::parse(""), None);
        assert_eq!(NavigationDirection::parse("Start on Main St"), None);
        assert_eq!(
            "Turn around on Main St and continue for 1.000 miles.".parse::<NavigationDirection>(),
            Err(DirectionParseError::UnknownDirection("Turn around".into()))
        );
        assert_eq!(
            "Start on Main St and continue for abc miles.".parse::<NavigationDirection>(),
            Err(DirectionParseError::InvalidDistance("abc".into()))
        );
        assert_eq!(
            "Start on Main St and continue for 1.2.3 miles.".parse::<NavigationDirection>(),
            Err(DirectionParseError::InvalidDistance("1.2.3".into()))
        );
        assert_eq!(
            "Start on Main St and continue for -1.000 miles.".parse::<NavigationDirection>(),
            Err(DirectionParseError::InvalidDistance("-1.000".into()))
        );
        assert_eq!(
            "Start Main St and continue for 1.000 miles.".parse::<NavigationDirection>(),
            Err(DirectionParseError::Malformed)
        );
    }
}
