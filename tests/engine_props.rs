//! Property tests for the board engine invariants.

use blockfall::{BoardError, Game, Piece, PieceKind, MAX_DIM, MIN_DIM};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn valid_dimensions_always_build(h in MIN_DIM..=MAX_DIM, w in MIN_DIM..=MAX_DIM) {
        let game = Game::new(h, w).unwrap();
        prop_assert_eq!(game.height(), h);
        prop_assert_eq!(game.width(), w);
        prop_assert_eq!(game.score(), 0);
        prop_assert_eq!(game.lines_cleared(), 0);
    }

    #[test]
    fn oversized_dimensions_never_build(h in 0usize..200, w in 51usize..200) {
        prop_assert_eq!(
            Game::new(h, w).err(),
            Some(BoardError::Configuration { height: h, width: w })
        );
        prop_assert_eq!(
            Game::new(w, h).err(),
            Some(BoardError::Configuration { height: w, width: h })
        );
    }

    #[test]
    fn rotating_four_times_is_identity(kind in any_kind(), turns in 0usize..4) {
        let mut piece = Piece::new(kind, 0, 0);
        for _ in 0..turns {
            piece.rotate();
        }
        let start = piece.shape;
        for _ in 0..4 {
            piece.rotate();
        }
        prop_assert_eq!(piece.shape, start);
    }

    #[test]
    fn validity_is_stable_and_cellwise(
        seed in any::<u64>(),
        kind in any_kind(),
        x in -5i32..25,
        y in -5i32..25,
        blocks in prop::collection::vec((0i32..20, 0i32..20), 0..30),
    ) {
        let mut game = Game::with_seed(20, 20, seed).unwrap();
        for (bx, by) in blocks {
            game.board_mut().set(bx, by, 2).unwrap();
        }
        *game.piece_mut() = Piece::new(kind, x, y);

        let expected = game
            .piece()
            .cells()
            .all(|(cx, cy)| (0..20).contains(&cx) && (0..20).contains(&cy) && !game.board().is_occupied(cx, cy));
        let first = game.in_bounds();
        prop_assert_eq!(first, expected);
        for _ in 0..3 {
            prop_assert_eq!(game.in_bounds(), first);
            prop_assert_eq!(game.has_hit_pile(), !first);
        }
    }

    #[test]
    fn drops_keep_the_board_consistent(seed in any::<u64>(), drops in 1usize..40) {
        let mut game = Game::with_seed(12, 8, seed).unwrap();
        let mut last_score = 0;
        let mut last_lines = 0;
        for _ in 0..drops {
            if game.is_game_over() {
                break;
            }
            game.hard_drop();
            prop_assert!(game.score() >= last_score);
            prop_assert!(game.lines_cleared() >= last_lines);
            last_score = game.score();
            last_lines = game.lines_cleared();
            for y in 0..game.height() {
                prop_assert!(!game.board().is_row_full(y));
            }
            prop_assert!(game.board().rows().flatten().all(|&c| c <= 7));
        }
    }
}
