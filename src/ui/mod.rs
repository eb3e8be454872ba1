use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use blockfall::{Game, PieceKind, CELL_W};

use blockfall::config::SIDEBAR_W;
use blockfall::game::EMPTY;

/// Display color for a kind id.
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::O => Color::Yellow,
        PieceKind::I => Color::Cyan,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::Rgb(228, 138, 64),
        PieceKind::J => Color::Blue,
    }
}

fn play_size(game: &Game) -> (u16, u16) {
    // inner cells plus walls, ceiling and floor
    ((game.width() * CELL_W + 2) as u16, (game.height() + 2) as u16)
}

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();
    let (play_w, play_h) = play_size(game);
    let min_w = play_w + SIDEBAR_W + 2;

    if area.width < min_w || area.height < play_h + 2 {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min {} x {})", min_w, play_h + 2))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKFALL"));
        frame.render_widget(msg, area);
        return;
    }

    let cabinet = Block::default()
        .title("BLOCKFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(play_w), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_h),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_w),
            Constraint::Min(0),
        ])
        .split(v_center[1]);

    draw_playfield(frame, game, h_center[1]);
    draw_sidebar(frame, game, cols[1]);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let (w, h) = (game.width(), game.height());
    let mut grid: Vec<Vec<Span>> = vec![vec![Span::raw("  "); w]; h];

    for (y, row) in game.board().rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell == EMPTY {
                continue;
            }
            if let Ok(kind) = PieceKind::from_id(cell) {
                grid[y][x] = block_span(kind);
            }
        }
    }

    // Active piece; cells above the ceiling are not drawn.
    let piece = game.piece();
    for (x, y) in piece.cells() {
        if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
            grid[y as usize][x as usize] = block_span(piece.kind);
        }
    }

    let wall = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(h + 2);
    lines.push(Line::styled(format!("┌{}┐", "─".repeat(w * CELL_W)), wall));
    for row in grid {
        let mut spans = Vec::with_capacity(w + 2);
        spans.push(Span::styled("│", wall));
        spans.extend(row);
        spans.push(Span::styled("│", wall));
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(format!("└{}┘", "═".repeat(w * CELL_W)), wall));

    frame.render_widget(Paragraph::new(lines), play_rect);
}

fn block_span(kind: PieceKind) -> Span<'static> {
    Span::styled("██", Style::default().fg(kind_color(kind)))
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    let status = if game.is_game_over() { "OVER" } else { "FALLING" };
    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nLINES\n{}\n{}",
        game.score(),
        game.lines_cleared(),
        status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new("←/→ move\n↑ rotate\n↓ soft\nspace drop\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn colors_are_distinct_per_kind() {
        let colors: Vec<Color> = PieceKind::ALL.iter().map(|&k| kind_color(k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn draws_score_into_the_sidebar() {
        let game = Game::with_seed(20, 10, 1).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal.draw(|f| draw_game(f, &game)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("SCORE"));
        assert!(text.contains("BLOCKFALL"));
    }
}
