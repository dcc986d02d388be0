use gridseek_core::Point;
use gridseek_paths::{GridSearch, HybridSearch, SearchError, Strategy};
use gridseek_world::{CellLayout, MapConfig, MapText, RayCaster, random_walkable, render};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

const ROOMS: &str = "
S.....#.....
......#.....
......#.....
............
......#....G
";

#[rstest]
#[case::astar(Strategy::AStar)]
#[case::astar_sight(Strategy::AStarWithSight)]
#[case::bfs_sight(Strategy::BfsWithSight)]
fn every_strategy_reaches_goal(#[case] strategy: Strategy) {
    let map: MapText = ROOMS.parse().unwrap();
    let (s, g) = (map.start().unwrap(), map.goal().unwrap());
    let mut hs = HybridSearch::new(map.grid(), RayCaster::new(map.grid()));
    let path = hs.run(strategy, s, g).unwrap();
    assert_eq!(path.start(), Some(s));
    assert_eq!(path.goal(), Some(g));
    for p in path.points() {
        assert!(map.grid().is_walkable(p), "{p} is blocked");
    }
    for (a, b) in path.hops() {
        assert!(hs.oracle().first_obstacle(a, b).is_none(), "hop {a} -> {b} crosses a wall");
    }
}

#[test]
fn sight_shortcuts_open_room() {
    let map: MapText = ROOMS.parse().unwrap();
    let (s, g) = (map.start().unwrap(), map.goal().unwrap());
    let plain = GridSearch::new(map.grid()).search(s, g).unwrap();
    let mut hs = HybridSearch::new(map.grid(), RayCaster::new(map.grid()));
    let hybrid = hs.search(s, g).unwrap();
    assert!(hybrid.len() < plain.len());
    assert_eq!(hybrid.hops().count(), 1);
    assert!(hs.stats().sight_checks >= 1);
}

#[test]
fn wall_without_gap_has_no_path() {
    let map = MapText::parse("S.#..\n..#.G\n..#..").unwrap();
    let (s, g) = (map.start().unwrap(), map.goal().unwrap());
    let mut hs = HybridSearch::new(map.grid(), RayCaster::new(map.grid()));
    for strategy in Strategy::ALL {
        assert_eq!(hs.run(strategy, s, g), Err(SearchError::NoPathFound));
    }
}

#[test]
fn spaced_layout_allows_diagonal_hop() {
    let map = MapText::parse("S#.\n#..\n..G").unwrap();
    let (s, g) = (map.start().unwrap(), map.goal().unwrap());
    let layout = CellLayout {
        offset_x: 2.0,
        offset_y: 2.0,
        ..CellLayout::default()
    };
    let rc = RayCaster::with_layout(map.grid(), layout).unwrap();
    let mut hs = HybridSearch::new(map.grid(), rc);
    // The start is walled in on the grid but can see the goal between the
    // spaced obstacles.
    let path = hs.search(s, g).unwrap();
    assert_eq!(path.clone().into_points(), vec![s, g]);
    assert_eq!(path.cost(), 4);
}

#[test]
fn seeded_maps_search_consistently() {
    let config = MapConfig {
        width: 24,
        height: 16,
        block_probability: 25,
        seed: Some(7),
    };
    let grid = config.generate().unwrap();
    assert_eq!(grid, config.generate().unwrap());

    let mut rng = StdRng::seed_from_u64(99);
    let mut hs = HybridSearch::new(&grid, RayCaster::new(&grid));
    for _ in 0..20 {
        let s = random_walkable(&grid, &mut rng).unwrap();
        let g = random_walkable(&grid, &mut rng).unwrap();
        let plain = hs.run(Strategy::AStar, s, g);
        let sight = hs.run(Strategy::AStarWithSight, s, g);
        let bfs = hs.run(Strategy::BfsWithSight, s, g);
        // Sight hops never make an unreachable goal reachable: a hop needs
        // a clear line, and a clear line on unit cells implies a 4-connected
        // corridor of walkable cells.
        assert_eq!(plain.is_ok(), sight.is_ok(), "{s} -> {g}\n{}", render(&grid, None));
        assert_eq!(plain.is_ok(), bfs.is_ok());
        if let Ok(path) = sight {
            assert_eq!(path.goal(), Some(g));
        }
    }
}

#[test]
fn endpoint_errors_surface_through_world_types() {
    let map = MapText::parse("S#\n.G").unwrap();
    let mut hs = HybridSearch::new(map.grid(), RayCaster::new(map.grid()));
    assert_eq!(
        hs.run(Strategy::BfsWithSight, Point::new(0, 0), Point::new(1, 0)),
        Err(SearchError::BlockedEndpoint {
            pos: Point::new(1, 0)
        })
    );
    assert!(matches!(
        hs.run(Strategy::AStarWithSight, Point::new(0, 0), Point::new(2, 0)),
        Err(SearchError::OutOfRange { .. })
    ));
}
