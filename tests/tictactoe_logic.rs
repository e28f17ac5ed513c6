//! Tests for the Tic-Tac-Toe board state machine.

use serenity::model::id::UserId;
use studybot::commands::tictactoe::state::{BoardState, BoardStatus, Mark, MoveError};

fn players() -> (UserId, UserId) {
    (UserId::new(100), UserId::new(200))
}

#[test]
fn first_move_is_player_x() {
    let (a, b) = players();
    let board = BoardState::new(a, b);
    assert_eq!(board.current_player(), a);
    assert_eq!(board.current_mark(), Mark::X);
}

#[test]
fn accepted_move_flips_turn() {
    let (a, b) = players();
    let mut board = BoardState::new(a, b);
    assert_eq!(board.apply_move(a, 0, 0), Ok(BoardStatus::InProgress));
    assert_eq!(board.board[0][0], Some(Mark::X));
    assert_eq!(board.current_player(), b);
}

#[test]
fn non_active_player_cannot_move() {
    let (a, b) = players();
    let mut board = BoardState::new(a, b);
    let before = board.clone();
    assert_eq!(board.apply_move(b, 1, 1), Err(MoveError::NotYourTurn));
    assert_eq!(board.board, before.board);
    assert_eq!(board.turn, before.turn);

    // An outsider is rejected the same way.
    assert_eq!(
        board.apply_move(UserId::new(999), 1, 1),
        Err(MoveError::NotYourTurn)
    );
    assert_eq!(board.board, before.board);
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let (a, b) = players();
    let mut board = BoardState::new(a, b);
    board.apply_move(a, 0, 0).unwrap();
    let before = board.clone();
    assert_eq!(board.apply_move(b, 0, 0), Err(MoveError::CellOccupied));
    assert_eq!(board.board, before.board);
    assert_eq!(board.turn, before.turn);
}

#[test]
fn main_diagonal_win_for_player_x() {
    // A marks (0,0),(1,1),(2,2); B marks (0,1),(1,0) in alternating turns.
    let (a, b) = players();
    let mut board = BoardState::new(a, b);
    assert_eq!(board.apply_move(a, 0, 0), Ok(BoardStatus::InProgress));
    assert_eq!(board.apply_move(b, 0, 1), Ok(BoardStatus::InProgress));
    assert_eq!(board.apply_move(a, 1, 1), Ok(BoardStatus::InProgress));
    assert_eq!(board.apply_move(b, 1, 0), Ok(BoardStatus::InProgress));
    assert_eq!(board.apply_move(a, 2, 2), Ok(BoardStatus::Won(Mark::X)));
    assert_eq!(board.status, BoardStatus::Won(Mark::X));
}

#[test]
fn row_and_column_wins_detected() {
    let (a, b) = players();

    let mut board = BoardState::new(a, b);
    board.apply_move(a, 0, 0).unwrap();
    board.apply_move(b, 0, 1).unwrap();
    board.apply_move(a, 1, 0).unwrap();
    board.apply_move(b, 1, 1).unwrap();
    assert_eq!(board.apply_move(a, 2, 0), Ok(BoardStatus::Won(Mark::X)));

    // Column win for O.
    let mut board = BoardState::new(a, b);
    board.apply_move(a, 1, 0).unwrap();
    board.apply_move(b, 0, 0).unwrap();
    board.apply_move(a, 1, 1).unwrap();
    board.apply_move(b, 0, 1).unwrap();
    board.apply_move(a, 2, 2).unwrap();
    assert_eq!(board.apply_move(b, 0, 2), Ok(BoardStatus::Won(Mark::O)));
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X X O / O O X / X O X has no line of three.
    let (a, b) = players();
    let mut board = BoardState::new(a, b);
    let moves = [
        (a, 0, 0),
        (b, 2, 0),
        (a, 1, 0),
        (b, 0, 1),
        (a, 2, 1),
        (b, 1, 1),
        (a, 0, 2),
        (b, 1, 2),
    ];
    for (player, x, y) in moves {
        assert_eq!(board.apply_move(player, x, y), Ok(BoardStatus::InProgress));
    }
    assert_eq!(board.apply_move(a, 2, 2), Ok(BoardStatus::Draw));
}

#[test]
fn terminal_board_rejects_further_moves() {
    let (a, b) = players();
    let mut board = BoardState::new(a, b);
    board.apply_move(a, 0, 0).unwrap();
    board.apply_move(b, 0, 1).unwrap();
    board.apply_move(a, 1, 1).unwrap();
    board.apply_move(b, 1, 0).unwrap();
    board.apply_move(a, 2, 2).unwrap();
    assert_eq!(board.status, BoardStatus::Won(Mark::X));

    let before = board.clone();
    assert_eq!(board.apply_move(b, 2, 0), Err(MoveError::GameOver));
    assert_eq!(board.board, before.board);
    assert_eq!(board.status, BoardStatus::Won(Mark::X));
}
