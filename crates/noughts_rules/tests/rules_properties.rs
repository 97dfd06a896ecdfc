//! Properties of the rules engine checked over every possible board.

use noughts_rules::{
    Board, Cell, Coord, GameStatus, Player, apply_move, create_empty_board, derive_status,
    find_winner, find_winning_line, is_draw,
};
use strum::IntoEnumIterator;

/// Every assignment of empty/X/O to the nine cells (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut rows = [[Cell::Empty; 3]; 3];
        for coord in Coord::ALL {
            rows[coord.row()][coord.col()] = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Player::X),
                _ => Cell::Occupied(Player::O),
            };
            n /= 3;
        }
        Board::from_rows(rows)
    })
}

#[test]
fn test_occupied_cells_reject_moves_and_keep_board() {
    for board in all_boards() {
        for (coord, cell) in board.cells() {
            if cell.is_empty() {
                continue;
            }
            for player in Player::iter() {
                let outcome = apply_move(&board, coord, player);
                assert!(!outcome.valid);
                assert_eq!(outcome.board, board);
            }
        }
    }
}

#[test]
fn test_empty_cells_accept_moves_and_change_only_target() {
    for board in all_boards() {
        for coord in board.empty_coords() {
            let before = board;
            let outcome = apply_move(&board, coord, Player::O);

            assert!(outcome.valid);
            assert_eq!(board, before, "input board must not change");
            for (other, cell) in outcome.board.cells() {
                if other == coord {
                    assert_eq!(cell, Cell::Occupied(Player::O));
                } else {
                    assert_eq!(cell, board.get(other));
                }
            }
        }
    }
}

#[test]
fn test_every_cell_of_empty_board_accepts_move() {
    let board = create_empty_board();
    for coord in Coord::ALL {
        for player in Player::iter() {
            let outcome = apply_move(&board, coord, player);
            assert!(outcome.valid);
            assert_eq!(outcome.board.get(coord), Cell::Occupied(player));
            assert_eq!(outcome.board.empty_coords().len(), 8);
        }
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_winner_and_line_agree() {
    for board in all_boards() {
        match (find_winner(&board), find_winning_line(&board)) {
            (None, None) => {}
            (Some(winner), Some(line)) => {
                for &coord in line.coords() {
                    assert_eq!(board.get(coord), Cell::Occupied(winner));
                }
            }
            (winner, line) => panic!("disagreement on {board}: {winner:?} vs {line:?}"),
        }
    }
}

#[test]
fn test_win_takes_precedence_over_draw() {
    for board in all_boards() {
        let status = derive_status(&board, Player::X);
        assert_eq!(status.winner(), find_winner(&board));
        if let Some(winner) = find_winner(&board) {
            assert_eq!(status, GameStatus::Win { winner });
        } else if is_draw(&board) {
            assert_eq!(status, GameStatus::Draw);
        } else {
            assert_eq!(
                status,
                GameStatus::Ongoing {
                    next_player: Player::X
                }
            );
        }
    }
}

#[test]
fn test_is_draw_iff_full() {
    for board in all_boards() {
        let full = board.cells().all(|(_, cell)| !cell.is_empty());
        assert_eq!(is_draw(&board), full);
    }
}

#[test]
fn test_full_board_with_line_is_win() {
    let board: Board = "XOX/OXO/OXX".parse().unwrap();
    assert!(is_draw(&board));
    assert_eq!(
        derive_status(&board, Player::O),
        GameStatus::Win { winner: Player::X }
    );
}
