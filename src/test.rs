#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Piece};
    use crate::search::{Searcher, WIN_SCORE};
    use crate::{evaluation, lines, StandardBoard, HEIGHT, WIDTH};

    /// Reference search without pruning, used to check that alpha-beta
    /// cuts nodes but never changes the chosen column or the root value
    fn plain_minimax<const W: usize, const H: usize>(
        engine: Piece,
        board: &Board<W, H>,
        depth: u32,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        if lines::has_four_in_a_row(board, engine) {
            return (None, WIN_SCORE);
        }
        if lines::has_four_in_a_row(board, engine.opponent()) {
            return (None, -WIN_SCORE);
        }
        let columns = board.playable_columns();
        if columns.is_empty() {
            return (None, 0);
        }
        if depth == 0 {
            return (None, evaluation::score_board(board, engine));
        }

        let piece = if maximizing { engine } else { engine.opponent() };
        let mut best_column = columns[0];
        let mut best_value = if maximizing { i64::MIN } else { i64::MAX };
        for &column in &columns {
            let mut child = *board;
            let row = child.landing_row(column).unwrap();
            child.place(row, column, piece);
            let (_, value) = plain_minimax(engine, &child, depth - 1, !maximizing);
            let better = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if better {
                best_value = value;
                best_column = column;
            }
        }
        (Some(best_column), best_value)
    }

    /// Fills the given columns bottom to top with an alternating block
    /// pattern that never produces four-in-a-row
    fn fill_columns(board: &mut StandardBoard, columns: &[usize]) {
        const EVEN: [Piece; 6] = [
            Piece::PlayerOne,
            Piece::PlayerOne,
            Piece::PlayerTwo,
            Piece::PlayerTwo,
            Piece::PlayerOne,
            Piece::PlayerOne,
        ];
        for &column in columns {
            for k in 0..HEIGHT {
                let piece = if column % 2 == 0 {
                    EVEN[k]
                } else {
                    EVEN[k].opponent()
                };
                board.drop_piece(column, piece).unwrap();
            }
        }
    }

    #[test]
    pub fn takes_immediate_win() -> Result<()> {
        // player one holds the bottom of columns 4-6 with the right end
        // blocked: only the third column completes the alignment
        let board = StandardBoard::from_moves("475465")?;

        for depth in 1..=4 {
            let searcher = Searcher::new(Piece::PlayerOne).with_depth(depth);
            assert_eq!(searcher.choose_move(&board), 2, "failed at depth {}", depth);
        }
        Ok(())
    }

    #[test]
    pub fn blocks_vertical_threat() -> Result<()> {
        // player two has stacked three tiles in column 5 and wins next
        // turn unless player one drops there first
        let board = StandardBoard::from_moves("152515")?;

        for depth in 2..=4 {
            let searcher = Searcher::new(Piece::PlayerOne).with_depth(depth);
            assert_eq!(searcher.choose_move(&board), 4, "failed at depth {}", depth);
        }
        Ok(())
    }

    #[test]
    pub fn forced_into_single_open_column() {
        let mut board = StandardBoard::new();
        fill_columns(&mut board, &[0, 1, 2, 3, 4, 6]);
        assert_eq!(board.playable_columns(), vec![5]);

        assert_eq!(Searcher::new(Piece::PlayerOne).choose_move(&board), 5);
        assert_eq!(Searcher::new(Piece::PlayerTwo).choose_move(&board), 5);
    }

    #[test]
    pub fn empty_board_search_is_deterministic() {
        let board = StandardBoard::new();
        let searcher = Searcher::new(Piece::PlayerTwo);

        let first = searcher.choose_move(&board);
        let second = searcher.choose_move(&board);
        assert_eq!(first, second);
        assert!(first < WIDTH);
    }

    #[test]
    pub fn won_positions_score_exactly() {
        let mut board = StandardBoard::new();
        for _ in 0..4 {
            board.drop_piece(0, Piece::PlayerOne).unwrap();
        }

        // terminal values ignore the remaining depth, including zero
        for depth in [0, 1, 4] {
            let as_winner = Searcher::new(Piece::PlayerOne).with_depth(depth);
            assert_eq!(as_winner.search(&board), (None, WIN_SCORE));

            let as_loser = Searcher::new(Piece::PlayerTwo).with_depth(depth);
            assert_eq!(as_loser.search(&board), (None, -WIN_SCORE));
        }
    }

    #[test]
    pub fn full_drawn_board_scores_zero() {
        let mut board = StandardBoard::new();
        fill_columns(&mut board, &[0, 1, 2, 3, 4, 5, 6]);
        assert!(board.playable_columns().is_empty());
        assert!(!lines::has_four_in_a_row(&board, Piece::PlayerOne));
        assert!(!lines::has_four_in_a_row(&board, Piece::PlayerTwo));

        assert_eq!(Searcher::new(Piece::PlayerOne).search(&board), (None, 0));
        assert_eq!(Searcher::new(Piece::PlayerTwo).search(&board), (None, 0));
    }

    #[test]
    pub fn depth_zero_returns_the_heuristic() -> Result<()> {
        let board = StandardBoard::from_moves("44523")?;
        let searcher = Searcher::new(Piece::PlayerOne).with_depth(0);

        let expected = evaluation::score_board(&board, Piece::PlayerOne);
        assert_eq!(searcher.search(&board), (None, expected));
        Ok(())
    }

    #[test]
    pub fn pruning_never_changes_the_result() -> Result<()> {
        let positions = [
            StandardBoard::new(),
            StandardBoard::from_moves("44")?,
            StandardBoard::from_moves("44523")?,
            StandardBoard::from_moves("152515")?,
        ];

        for (i, board) in positions.iter().enumerate() {
            for depth in 1..=3 {
                let pruned = Searcher::new(Piece::PlayerOne)
                    .with_depth(depth)
                    .search(board);
                let reference = plain_minimax(Piece::PlayerOne, board, depth, true);
                assert_eq!(
                    pruned, reference,
                    "position {} diverged at depth {}",
                    i, depth
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_game_between_searchers_completes() {
        let mut board = StandardBoard::new();
        let mut current = Piece::PlayerOne;

        for _ in 0..(WIDTH * HEIGHT) {
            let column = Searcher::new(current).choose_move(&board);
            board.drop_piece(column, current).unwrap();
            if lines::has_four_in_a_row(&board, current) || board.playable_columns().is_empty() {
                return;
            }
            current = current.opponent();
        }
        panic!("game did not finish within {} moves", WIDTH * HEIGHT);
    }
}
