use crate::{Board, Cell, Mark};

/// Renders a board as a box-drawn text grid, row 0 on top, with column
/// indices underneath. Mark one is `●`, mark two is `○`.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("╭─");
    for _ in 0..board.columns() {
        result += "──";
    }
    result += "╮\n";
    for row in 0..board.rows() {
        result += "│";
        for col in 0..board.columns() {
            result += match board.get(row, col) {
                Cell::Empty => " ·",
                Cell::Taken(Mark::One) => " ●",
                Cell::Taken(Mark::Two) => " ○",
            };
        }
        result += " │\n";
    }
    result += "╰─";
    for _ in 0..board.columns() {
        result += "──";
    }
    result += "╯\n ";
    for col in 0..board.columns() {
        result += &format!(" {}", col % 10);
    }
    result
}
