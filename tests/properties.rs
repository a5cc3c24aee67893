//! Property-based tests for dealing, shuffling and path search.

use std::collections::HashMap;

use itertools::Itertools;
use proptest::prelude::*;

use lianliankan::{pathfinder, Board, BoardConfig, PathFinder, Position, Step};

fn dealt(rows: usize, cols: usize, types: usize, seed: u64) -> Board {
    let mut board = Board::with_seed(BoardConfig::try_new(rows, cols, types).unwrap(), seed);
    board.initialize();
    board
}

/// Deal a board, then knock out the active tiles picked by `removals` (indices wrap around).
fn dealt_and_thinned(rows: usize, cols: usize, types: usize, seed: u64, removals: &[usize]) -> Board {
    let mut board = dealt(rows, cols, types, seed);
    for index in removals {
        let active = board.active_positions();
        if active.is_empty() {
            break;
        }
        board.remove_tile(active[index % active.len()]);
    }
    board
}

fn type_counts(board: &Board) -> HashMap<usize, usize> {
    board.active_positions().iter()
        .filter_map(|p| board.tile(*p))
        .map(|tile| tile.tile_type().get())
        .counts()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every deal pairs up every type and fills all but at most one playable cell.
    #[test]
    fn prop_deal_is_paired(rows in 1usize..10, cols in 1usize..10, types in 1usize..30, seed in any::<u64>()) {
        let board = dealt(rows, cols, types, seed);
        let counts = type_counts(&board);

        prop_assert_eq!(board.active_count(), rows * cols / 2 * 2);
        prop_assert!(counts.values().all(|count| count % 2 == 0));
        prop_assert!(counts.keys().all(|tile_type| *tile_type <= types));
    }

    /// The border ring is passable and never holds a tile.
    #[test]
    fn prop_border_is_passable(rows in 1usize..10, cols in 1usize..10, types in 1usize..30, seed in any::<u64>()) {
        let board = dealt(rows, cols, types, seed);
        let (physical_rows, physical_cols) = board.physical_dims();
        prop_assert_eq!((physical_rows, physical_cols), (rows + 2, cols + 2));

        for row in 0..physical_rows {
            for col in [0, physical_cols - 1] {
                prop_assert!(board.is_empty(Position(row, col)));
                prop_assert!(board.tile(Position(row, col)).is_none());
            }
        }
        for col in 0..physical_cols {
            for row in [0, physical_rows - 1] {
                prop_assert!(board.is_empty(Position(row, col)));
            }
        }
    }

    /// Shuffling only permutes types over the cells already occupied.
    #[test]
    fn prop_shuffle_keeps_positions(
        rows in 1usize..9,
        cols in 1usize..9,
        types in 1usize..20,
        seed in any::<u64>(),
        removals in proptest::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut board = dealt_and_thinned(rows, cols, types, seed, &removals);
        let positions = board.active_positions();
        let counts = type_counts(&board);

        board.shuffle();
        prop_assert_eq!(board.active_positions(), positions);
        prop_assert_eq!(type_counts(&board), counts);
    }

    /// Any path found is a legal line: from start to end in unit steps, through passable cells only, with at most two bends.
    #[test]
    fn prop_paths_are_legal(
        rows in 1usize..8,
        cols in 1usize..8,
        types in 1usize..6,
        seed in any::<u64>(),
        removals in proptest::collection::vec(any::<usize>(), 0..24),
    ) {
        let board = dealt_and_thinned(rows, cols, types, seed, &removals);

        for (a, b) in board.same_type_pairs() {
            let Some(path) = pathfinder::search(&board, a, b) else {
                prop_assert!(!board.can_connect(a, b));
                continue;
            };

            prop_assert!(board.can_connect(a, b));
            prop_assert_eq!(path.start(), a);
            prop_assert_eq!(path.end(), b);
            prop_assert!(path.bends() <= 2);
            prop_assert!(path.crossed().iter().all(|p| board.is_empty(*p)));
            prop_assert!(path.positions().iter().tuple_windows().all(|(x, y)| Step::between_adjacent(*x, *y).is_some()));
            prop_assert_eq!(path.positions().iter().unique().count(), path.len());
        }
    }

    /// Straight lines win whenever nothing sits between two tiles in a row or column.
    #[test]
    fn prop_clear_lines_are_straight(
        rows in 1usize..8,
        cols in 1usize..8,
        types in 1usize..4,
        seed in any::<u64>(),
        removals in proptest::collection::vec(any::<usize>(), 0..24),
    ) {
        let board = dealt_and_thinned(rows, cols, types, seed, &removals);

        for (a, b) in board.same_type_pairs().filter(|(a, b)| a.is_aligned_with(*b)) {
            let between_clear = Step::toward(a, b)
                .map(|step| std::iter::successors(Some(step.attempt_from(a)), |p| Some(step.attempt_from(*p)))
                    .take_while(|p| *p != b)
                    .all(|p| board.is_empty(p)))
                .unwrap_or(false);

            if between_clear {
                let path = pathfinder::search(&board, a, b).unwrap();
                prop_assert_eq!(path.bends(), 0);
                prop_assert_eq!(path.len(), a.row().abs_diff(b.row()) + a.col().abs_diff(b.col()) + 1);
            }
        }
    }

    /// The cached finder agrees with the uncached search in both directions, even as tiles disappear.
    #[test]
    fn prop_cache_agrees_with_search(
        rows in 1usize..7,
        cols in 1usize..7,
        types in 1usize..4,
        seed in any::<u64>(),
        removals in proptest::collection::vec(any::<usize>(), 1..12),
    ) {
        let mut board = dealt(rows, cols, types, seed);
        let mut finder = PathFinder::new();

        for index in removals {
            for (a, b) in board.active_positions().into_iter().tuple_combinations() {
                let expected = pathfinder::search(&board, a, b);
                prop_assert_eq!(finder.find_path(&board, a, b), expected.clone());
                prop_assert_eq!(finder.find_path(&board, b, a), expected.map(|path| path.reversed()));
            }

            let active = board.active_positions();
            if active.is_empty() {
                break;
            }
            board.remove_tile(active[index % active.len()]);
        }
    }
}
