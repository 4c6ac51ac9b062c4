use crate::game::{Board, Cell, GameSession, Outcome, Piece, Placement};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = session.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(
        frame,
        session.board(),
        session.last_move(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn piece_color(piece: Piece) -> Color {
    match piece {
        Piece::X => Color::Red,
        Piece::O => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let win_length = session.board().win_length();
    let (status, color) = match session.outcome() {
        Outcome::InProgress => {
            let player = session.current_player();
            (
                format!(
                    "{} to move ({})  |  {} in a row wins",
                    player.name(),
                    player.piece().marker(),
                    win_length
                ),
                piece_color(player.piece()),
            )
        }
        Outcome::Win(player) => (
            format!("Game Over  |  {} wins!", player.name()),
            piece_color(player.piece()),
        ),
        Outcome::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect {}", win_length)),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    last_move: Option<Placement>,
    selected_column: usize,
    area: Rect,
) {
    let cols = board.cols();
    let border = "═".repeat(cols * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{border}╗")));

    for (row, cells) in board.iter_rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let mut style = match cell.piece() {
                Some(piece) => Style::default().fg(piece_color(piece)),
                None => Style::default().fg(Color::DarkGray),
            };
            let symbol = match cell {
                Cell::Empty => " . ",
                Cell::X | Cell::O => " ● ",
            };
            if last_move.is_some_and(|m| m.row == row && m.col == col) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "←/→ Home/End: Select | 1-9: Jump | Enter: Drop | R: Restart | Q: Quit",
    )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
