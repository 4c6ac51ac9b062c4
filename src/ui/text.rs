use crate::game::Board;

/// Render the grid as plain text: one line per row with cells separated by
/// two spaces, then a blank line and the column indices.
pub fn render_grid(board: &Board) -> String {
    let mut out = String::new();

    for row in board.iter_rows() {
        for cell in row {
            out.push(cell.marker());
            out.push_str("  ");
        }
        out.push('\n');
    }
    out.push('\n');

    for col in 0..board.cols() {
        out.push_str(&col.to_string());
        out.push_str("  ");
    }
    out.push_str("\n\n");

    out
}
