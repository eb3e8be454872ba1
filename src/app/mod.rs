use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use blockfall::{Game, GRAVITY_MS};

use crate::ui::draw_game;

pub mod prompt;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Plays until the game ends or the player quits. The terminal is restored
/// before this returns.
pub fn run(game: &mut Game) -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), game)
}

fn run_loop(terminal: &mut Term, game: &mut Game) -> Result<(), Box<dyn Error>> {
    let gravity = Duration::from_millis(GRAVITY_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, game))?;

        if game.is_game_over() {
            info!(score = game.score(), lines = game.lines_cleared(), "game over");
            break;
        }

        let timeout = gravity.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        info!("player quit");
                        break;
                    }
                    handle_input(key.code, game);
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            game.move_down();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Left => {
            let _ = game.try_shift(-1);
        }
        KeyCode::Right => {
            let _ = game.try_shift(1);
        }
        KeyCode::Down => {
            let _ = game.move_down();
        }
        KeyCode::Up => {
            let _ = game.try_rotate();
        }
        KeyCode::Char(' ') => {
            game.hard_drop();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall::{Piece, PieceKind};

    #[test]
    fn arrow_keys_move_and_rotate_the_piece() {
        let mut game = Game::with_seed(20, 10, 3).unwrap();
        *game.piece_mut() = Piece::new(PieceKind::T, 3, 0);

        handle_input(KeyCode::Left, &mut game);
        assert_eq!(game.piece().x, 2);
        handle_input(KeyCode::Right, &mut game);
        handle_input(KeyCode::Right, &mut game);
        assert_eq!(game.piece().x, 4);
        handle_input(KeyCode::Down, &mut game);
        assert_eq!(game.piece().y, 1);

        let before = *game.shape();
        handle_input(KeyCode::Up, &mut game);
        assert_ne!(*game.shape(), before);
    }

    #[test]
    fn space_drops_and_locks() {
        let mut game = Game::with_seed(20, 10, 3).unwrap();
        *game.piece_mut() = Piece::new(PieceKind::O, 0, 0);
        handle_input(KeyCode::Char(' '), &mut game);
        assert!(!game.board().is_row_empty(19));
    }
}
