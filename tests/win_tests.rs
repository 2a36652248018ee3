// Win detection tests over hand-built boards

use tictui::game::{Board, Mark, WIN_LINES};

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::O);
const E: Option<Mark> = None;

#[test]
fn every_line_is_detected_for_both_marks() {
    for line in WIN_LINES {
        for mark in [Mark::X, Mark::O] {
            let mut cells = [E; 9];
            for i in line {
                cells[i] = Some(mark);
            }
            let board = Board::from_cells(cells);
            assert_eq!(
                board.winner(),
                Some((mark, line)),
                "line {:?} with {} not detected",
                line,
                mark
            );
        }
    }
}

#[test]
fn partial_lines_are_not_wins() {
    // Two of three on a row
    let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
    assert_eq!(board.winner(), None);

    // A full line of mixed marks
    let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
    assert_eq!(board.winner(), None);
}

#[test]
fn full_board_without_line_has_no_winner() {
    // X O X / X O O / O X X
    let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
}

#[test]
fn first_listed_line_wins_the_tie_break() {
    // Unreachable by legal play: X completes both the top row and the left
    // column.  The row is listed before the column, so it is reported.
    let board = Board::from_cells([X, X, X, X, O, O, X, E, E]);
    assert_eq!(board.winner(), Some((Mark::X, [0, 1, 2])));
}

#[test]
fn diagonals_are_checked() {
    let board = Board::from_cells([O, X, X, X, O, E, E, E, O]);
    assert_eq!(board.winner(), Some((Mark::O, [0, 4, 8])));

    let board = Board::from_cells([X, E, O, E, O, X, O, E, X]);
    assert_eq!(board.winner(), Some((Mark::O, [2, 4, 6])));
}
