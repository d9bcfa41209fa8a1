//! Unit and property tests for empire-path.
//!
//! All tests run against hand-built or generated `GridWorld`s.

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use empire_core::{MapSize, TileIndex};
    use empire_world::{GridWorld, GridWorldBuilder, World};

    use crate::{Pathfinder, SearchStatus};

    /// Flat map with water wherever `water[i]` is set, except at the two
    /// endpoints.
    pub fn world_with_water(
        width:  u32,
        height: u32,
        water:  &[bool],
        keep:   [TileIndex; 2],
    ) -> GridWorld {
        let map = MapSize::new(width, height);
        let mut b = GridWorldBuilder::new(width, height);
        for t in map.tiles() {
            if water[t.index()] && !keep.contains(&t) {
                let (x, y) = map.coords(t);
                b = b.water(x, y);
            }
        }
        b.build().unwrap()
    }

    /// Shortest step count from `from` to `to` through buildable-or-road
    /// tiles, by plain BFS.
    pub fn bfs_distance(world: &GridWorld, from: TileIndex, to: TileIndex) -> Option<u32> {
        let map = world.map_size();
        let mut dist = vec![u32::MAX; map.tile_count()];
        let mut queue = VecDeque::new();
        dist[from.index()] = 0;
        queue.push_back(from);
        while let Some(t) = queue.pop_front() {
            if t == to {
                return Some(dist[t.index()]);
            }
            for n in map.neighbors(t) {
                let passable = world.is_buildable(n) || world.has_road(n);
                if passable && dist[n.index()] == u32::MAX {
                    dist[n.index()] = dist[t.index()] + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    /// Drive a search to completion, one `advance(budget)` at a time.
    pub fn run_to_end(world: &GridWorld, pf: &mut Pathfinder, budget: u32) -> SearchStatus {
        loop {
            let status = pf.advance(world, budget);
            if status.is_terminal() {
                return status;
            }
        }
    }
}

// ── Nodes & candidates ────────────────────────────────────────────────────────

#[cfg(test)]
mod node {
    use std::collections::BinaryHeap;

    use empire_core::TileIndex;

    use crate::node::{Candidate, SearchNode};

    #[test]
    fn fresh_node_accepts_any_path() {
        let mut n = SearchNode::new(TileIndex(5), 3);
        assert_eq!(n.f, None);
        assert!(n.relax(TileIndex(4), 7));
        assert_eq!((n.g, n.f, n.predecessor), (8, Some(11), TileIndex(4)));
    }

    #[test]
    fn relax_only_improves() {
        let mut n = SearchNode::new(TileIndex(5), 3);
        n.relax(TileIndex(4), 7);
        assert!(!n.relax(TileIndex(6), 7), "equal cost keeps the first predecessor");
        assert!(!n.relax(TileIndex(6), 9));
        assert!(n.relax(TileIndex(6), 2));
        assert_eq!((n.g, n.predecessor), (3, TileIndex(6)));
    }

    #[test]
    fn source_has_no_predecessor() {
        let n = SearchNode::source(TileIndex(0), 9);
        assert!(!n.has_predecessor());
        assert_eq!(n.f, Some(9));
    }

    #[test]
    fn heap_pops_lowest_f_then_lowest_h() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate { f: 10, h: 2, tile: TileIndex(1) });
        heap.push(Candidate { f: 8,  h: 5, tile: TileIndex(2) });
        heap.push(Candidate { f: 8,  h: 1, tile: TileIndex(3) });
        heap.push(Candidate { f: 12, h: 0, tile: TileIndex(4) });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|c| c.tile.0).collect();
        assert_eq!(order, vec![3, 2, 1, 4]);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use empire_core::TileIndex;
    use empire_world::{GridWorldBuilder, Slope, World};

    use crate::{Pathfinder, SearchStatus};

    use super::helpers::run_to_end;

    #[test]
    fn open_grid_straight_line_in_one_call() {
        let world = GridWorldBuilder::new(10, 10).build().unwrap();
        let map = world.map_size();
        let (from, to) = (map.tile_index(0, 0), map.tile_index(9, 0));

        let mut pf = Pathfinder::new(map, from, to);
        assert_eq!(pf.advance(&world, 100), SearchStatus::Found);

        let route: Vec<_> = pf.route().unwrap().collect();
        assert_eq!(route.len(), 10);
        assert_eq!(route.first(), Some(&to));
        assert_eq!(route.last(), Some(&from));
        assert!(route.iter().all(|&t| map.coords(t).1 == 0), "route must stay on row 0");
    }

    #[test]
    fn walled_in_destination_is_unreachable() {
        let world = GridWorldBuilder::new(10, 10)
            .water(4, 5)
            .water(6, 5)
            .water(5, 4)
            .water(5, 6)
            .build()
            .unwrap();
        let map = world.map_size();
        let mut pf = Pathfinder::new(map, map.tile_index(0, 0), map.tile_index(5, 5));

        assert_eq!(run_to_end(&world, &mut pf, 100), SearchStatus::Unreachable);
        assert!(pf.route().is_none());
        assert!(!pf.is_finalized(map.tile_index(5, 5)));
        // Every other land tile was explored before giving up.
        assert_eq!(pf.nodes_expanded(), 100 - 5);
    }

    #[test]
    fn unreachable_is_permanent() {
        let world = GridWorldBuilder::new(3, 1).water(1, 0).build().unwrap();
        let map = world.map_size();
        let mut pf = Pathfinder::new(map, TileIndex(0), TileIndex(2));
        assert_eq!(pf.advance(&world, 10), SearchStatus::Unreachable);
        let expanded = pf.nodes_expanded();
        for _ in 0..5 {
            assert_eq!(pf.advance(&world, 10), SearchStatus::Unreachable);
        }
        assert_eq!(pf.nodes_expanded(), expanded);
        assert!(pf.into_route().is_none());
    }

    #[test]
    fn found_is_permanent() {
        let world = GridWorldBuilder::new(4, 1).build().unwrap();
        let mut pf = Pathfinder::new(world.map_size(), TileIndex(0), TileIndex(3));
        assert_eq!(pf.advance(&world, 100), SearchStatus::Found);
        let expanded = pf.nodes_expanded();
        assert_eq!(pf.advance(&world, 100), SearchStatus::Found);
        assert_eq!(pf.nodes_expanded(), expanded);
    }

    #[test]
    fn source_equal_to_destination() {
        let world = GridWorldBuilder::new(3, 3).build().unwrap();
        let mut pf = Pathfinder::new(world.map_size(), TileIndex(4), TileIndex(4));
        assert_eq!(pf.advance(&world, 1), SearchStatus::Found);
        assert_eq!(pf.route().unwrap().collect::<Vec<_>>(), vec![TileIndex(4)]);
    }

    #[test]
    fn zero_budget_does_nothing() {
        let world = GridWorldBuilder::new(3, 3).build().unwrap();
        let mut pf = Pathfinder::new(world.map_size(), TileIndex(0), TileIndex(8));
        assert_eq!(pf.advance(&world, 0), SearchStatus::InProgress);
        assert_eq!(pf.nodes_expanded(), 0);
    }

    #[test]
    fn budget_caps_work_per_call() {
        let world = GridWorldBuilder::new(20, 20).build().unwrap();
        let map = world.map_size();
        let mut pf = Pathfinder::new(map, map.tile_index(0, 0), map.tile_index(19, 19));
        let mut calls = 0;
        while pf.advance(&world, 3) == SearchStatus::InProgress {
            calls += 1;
            assert!(pf.nodes_expanded() <= 3 * calls);
        }
        assert_eq!(pf.route().unwrap().count(), 39);
    }

    #[test]
    fn inclined_tile_only_passes_along_its_axis() {
        // Column x = 2 is water except one inclined gap at (2, 1).
        let build = |slope| {
            GridWorldBuilder::new(5, 3)
                .water(2, 0)
                .water(2, 2)
                .slope(2, 1, slope)
                .build()
                .unwrap()
        };

        let across = build(Slope::InclinedX);
        let map = across.map_size();
        let (from, to) = (map.tile_index(0, 1), map.tile_index(4, 1));
        let mut pf = Pathfinder::new(map, from, to);
        assert_eq!(run_to_end(&across, &mut pf, 100), SearchStatus::Found);
        assert_eq!(pf.route().unwrap().count(), 5);

        let against = build(Slope::InclinedY);
        let mut pf = Pathfinder::new(map, from, to);
        assert_eq!(run_to_end(&against, &mut pf, 100), SearchStatus::Unreachable);
    }

    #[test]
    fn steep_tiles_are_avoided() {
        let world = GridWorldBuilder::new(5, 3).slope(2, 1, Slope::Steep).build().unwrap();
        let map = world.map_size();
        let mut pf = Pathfinder::new(map, map.tile_index(0, 1), map.tile_index(4, 1));
        assert_eq!(run_to_end(&world, &mut pf, 100), SearchStatus::Found);
        assert!(!pf.route().unwrap().any(|t| t == map.tile_index(2, 1)));
        assert_eq!(pf.route().unwrap().count(), 7);
    }

    #[test]
    fn existing_roads_are_traversable() {
        // A wall of houses with a single road gap.
        let world = GridWorldBuilder::new(5, 3)
            .house(2, 0, 10)
            .road(2, 1)
            .house(2, 2, 10)
            .build()
            .unwrap();
        let map = world.map_size();
        let mut pf = Pathfinder::new(map, map.tile_index(0, 0), map.tile_index(4, 2));
        assert_eq!(run_to_end(&world, &mut pf, 100), SearchStatus::Found);
        assert!(pf.route().unwrap().any(|t| t == map.tile_index(2, 1)));
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use empire_core::{MapSize, TileIndex};
    use empire_world::{GridWorldBuilder, World};

    use crate::{Pathfinder, Route, SearchStatus};

    #[test]
    fn route_is_rewalkable_and_owned() {
        let world = GridWorldBuilder::new(6, 6).build().unwrap();
        let map = world.map_size();
        let mut pf = Pathfinder::new(map, map.tile_index(1, 1), map.tile_index(4, 5));
        assert_eq!(pf.advance(&world, 1_000), SearchStatus::Found);

        let first: Vec<_> = pf.route().unwrap().collect();
        let second: Vec<_> = pf.route().unwrap().collect();
        assert_eq!(first, second);

        let route = pf.into_route().unwrap();
        assert_eq!(route.iter().collect::<Vec<_>>(), first);
        assert_eq!(route.len(), first.len());
        assert_eq!(route.source(), map.tile_index(1, 1));
        assert_eq!(route.destination(), map.tile_index(4, 5));
    }

    #[test]
    fn step_follows_traversal_order() {
        let tiles = [TileIndex(0), TileIndex(1), TileIndex(2)];
        let route = Route::from_tiles(MapSize::new(3, 1), &tiles).unwrap();
        assert_eq!(route.step(TileIndex(2)), Some(TileIndex(1)));
        assert_eq!(route.step(TileIndex(1)), Some(TileIndex(0)));
        assert_eq!(route.step(TileIndex(0)), None);
        assert_eq!(route.step(TileIndex(9)), None);
        assert_eq!((&route).into_iter().count(), 3);
    }

    #[test]
    fn from_tiles_rejects_empty() {
        assert!(Route::from_tiles(MapSize::new(3, 3), &[]).is_none());
    }

    #[test]
    fn from_tiles_rejects_revisited_tile() {
        let map = MapSize::new(3, 1);
        let (a, b) = (map.tile_index(0, 0), map.tile_index(1, 0));
        assert!(Route::from_tiles(map, &[a, b, a]).is_none());
    }

    #[test]
    fn from_tiles_rejects_gaps_and_off_map_tiles() {
        let map = MapSize::new(3, 3);
        let gap = [map.tile_index(0, 0), map.tile_index(2, 0)];
        assert!(Route::from_tiles(map, &gap).is_none());
        let diagonal = [map.tile_index(0, 0), map.tile_index(1, 1)];
        assert!(Route::from_tiles(map, &diagonal).is_none());
        assert!(Route::from_tiles(map, &[TileIndex(9)]).is_none());
    }

    #[test]
    fn from_tiles_walk_is_finite() {
        let map = MapSize::new(4, 4);
        let tiles = [
            map.tile_index(0, 0),
            map.tile_index(1, 0),
            map.tile_index(1, 1),
            map.tile_index(0, 1),
        ];
        let route = Route::from_tiles(map, &tiles).unwrap();
        let walked: Vec<_> = route.iter().take(10).collect();
        assert_eq!(walked.len(), route.len());
        assert_eq!(walked, tiles.iter().rev().copied().collect::<Vec<_>>());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use empire_core::{MapSize, TileIndex};
    use empire_world::World;
    use proptest::prelude::*;

    use crate::{Pathfinder, SearchStatus};

    use super::helpers::{bfs_distance, run_to_end, world_with_water};

    /// `(width, height, water mask, source, destination)`.
    fn arb_grid() -> impl Strategy<Value = (u32, u32, Vec<bool>, TileIndex, TileIndex)> {
        (2u32..10, 2u32..10).prop_flat_map(|(w, h)| {
            let n = w * h;
            (
                Just(w),
                Just(h),
                prop::collection::vec(prop::bool::weighted(0.3), n as usize),
                (0..n).prop_map(TileIndex),
                (0..n).prop_map(TileIndex),
            )
        })
    }

    proptest! {
        /// A found route is as short as the BFS optimum, contiguous, and runs
        /// destination → source.
        #[test]
        fn matches_bfs_oracle((w, h, water, from, to) in arb_grid()) {
            let world = world_with_water(w, h, &water, [from, to]);
            let mut pf = Pathfinder::new(world.map_size(), from, to);
            let status = pf.advance(&world, u32::MAX);

            match bfs_distance(&world, from, to) {
                Some(d) => {
                    prop_assert_eq!(status, SearchStatus::Found);
                    let route: Vec<_> = pf.route().unwrap().collect();
                    prop_assert_eq!(route.len() as u32, d + 1);
                    prop_assert_eq!(route[0], to);
                    prop_assert_eq!(*route.last().unwrap(), from);
                    let map = MapSize::new(w, h);
                    for pair in route.windows(2) {
                        prop_assert!(map.are_adjacent(pair[0], pair[1]));
                    }
                }
                None => prop_assert_eq!(status, SearchStatus::Unreachable),
            }
        }

        /// Splitting the budget across calls changes nothing about the result.
        #[test]
        fn resumption_is_lossless(
            (w, h, water, from, to) in arb_grid(),
            budget in 1u32..7,
        ) {
            let world = world_with_water(w, h, &water, [from, to]);

            let mut whole = Pathfinder::new(world.map_size(), from, to);
            let whole_status = whole.advance(&world, u32::MAX);

            let mut sliced = Pathfinder::new(world.map_size(), from, to);
            let mut last = sliced.nodes_expanded();
            let sliced_status = loop {
                let status = sliced.advance(&world, budget);
                prop_assert!(sliced.nodes_expanded() - last <= budget as u64);
                last = sliced.nodes_expanded();
                if status.is_terminal() {
                    break status;
                }
            };

            prop_assert_eq!(whole_status, sliced_status);
            prop_assert_eq!(whole.nodes_expanded(), sliced.nodes_expanded());
            let a: Option<Vec<_>> = whole.route().map(Iterator::collect);
            let b: Option<Vec<_>> = sliced.route().map(Iterator::collect);
            prop_assert_eq!(a, b);
        }

        /// Each expansion finalizes a distinct tile, and nothing finalized is
        /// ever a candidate again.
        #[test]
        fn no_tile_finalized_twice((w, h, water, from, to) in arb_grid()) {
            let world = world_with_water(w, h, &water, [from, to]);
            let map = world.map_size();
            let mut pf = Pathfinder::new(map, from, to);
            run_to_end(&world, &mut pf, 1);

            let finalized = map.tiles().filter(|&t| pf.is_finalized(t)).count() as u64;
            prop_assert_eq!(finalized, pf.nodes_expanded());
            prop_assert!(pf.nodes_expanded() <= map.tile_count() as u64);
        }
    }
}
