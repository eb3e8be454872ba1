use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{MAX_DIM, MIN_DIM, SHAPE_SIZE};
use crate::game::{Board, BoardError, Piece, PieceKind, Shape, random_kind};

/// The board engine: locked cells, the falling piece, and the tallies.
///
/// Driven by discrete commands; timing and input belong to the caller.
pub struct Game {
    board: Board,
    current: Piece,
    score: u64,
    lines_cleared: u64,
    rng: StdRng,
}

impl Game {
    /// Builds a `height x width` board and spawns the first piece.
    ///
    /// Each side must lie in `5..=50`; otherwise no board is built.
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        Self::with_rng(height, width, StdRng::from_entropy())
    }

    pub fn with_seed(height: usize, width: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(height, width, StdRng::seed_from_u64(seed))
    }

    fn with_rng(height: usize, width: usize, rng: StdRng) -> Result<Self, BoardError> {
        let valid = MIN_DIM..=MAX_DIM;
        if !valid.contains(&height) || !valid.contains(&width) {
            warn!(height, width, "rejected board dimensions");
            return Err(BoardError::Configuration { height, width });
        }
        let mut game = Self {
            board: Board::new(width, height),
            current: Piece::new(PieceKind::O, 0, 0),
            score: 0,
            lines_cleared: 0,
            rng,
        };
        game.generate_new_piece();
        Ok(game)
    }

    // Random kind at y = 0, column in [0, width - 4].
    pub fn generate_new_piece(&mut self) {
        let kind = random_kind(&mut self.rng);
        let max_x = (self.board.width() - SHAPE_SIZE) as i32;
        let x = self.rng.gen_range(0..=max_x);
        self.current = Piece::new(kind, x, 0);
        debug!(?kind, x, "spawned piece");
    }

    // Any set cell off the board or on a locked cell.
    fn collides(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .any(|(x, y)| self.board.get(x, y).is_none_or(|v| v != 0))
    }

    /// Whether the active piece sits fully on the board over empty cells.
    ///
    /// Callers use this after a tentative shift or rotation to decide whether
    /// to revert it.
    pub fn in_bounds(&self) -> bool {
        !self.collides(&self.current)
    }

    pub fn has_hit_pile(&self) -> bool {
        self.collides(&self.current)
    }

    /// Advances the piece one row. Returns `true` while it is still falling.
    ///
    /// On landing the piece is locked where it was, full rows are cleared and
    /// a new piece is spawned; the return value is then `false`.
    pub fn move_down(&mut self) -> bool {
        let next = self.current.shifted(0, 1);
        if !self.collides(&next) {
            self.current = next;
            return true;
        }
        self.lock_piece();
        self.clear_lines();
        self.generate_new_piece();
        false
    }

    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.move_down() {
            rows += 1;
        }
        rows
    }

    // Cells above the top edge are dropped silently; anything else that cannot
    // be written is reported. Returns the number of reported cells.
    fn lock_piece(&mut self) -> usize {
        let id = self.current.kind.id();
        let mut rejected = 0;
        for (x, y) in self.current.cells() {
            if y < 0 {
                continue;
            }
            if let Err(err) = self.board.set(x, y, id) {
                warn!(%err, "locked cell outside the board");
                rejected += 1;
            }
        }
        debug!(kind = ?self.current.kind, x = self.current.x, y = self.current.y, "locked piece");
        rejected
    }

    /// Quarter turn clockwise with no wall kicks. Never checks the board;
    /// three more calls undo it.
    pub fn rotate(&mut self) {
        self.current.rotate();
    }

    pub fn try_rotate(&mut self) -> bool {
        let next = self.current.rotated();
        if self.collides(&next) {
            return false;
        }
        self.current = next;
        true
    }

    pub fn try_shift(&mut self, dx: i32) -> bool {
        let next = self.current.shifted(dx, 0);
        if self.collides(&next) {
            return false;
        }
        self.current = next;
        true
    }

    /// Compacts full rows and scores `cleared^2 * 100`. Returns rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.compact();
        if cleared > 0 {
            let n = u64::from(cleared);
            self.lines_cleared += n;
            self.score += n * n * 100;
            info!(cleared, score = self.score, lines = self.lines_cleared, "cleared lines");
        }
        cleared
    }

    // Spawned piece pokes above the top edge or overlaps a locked cell.
    pub fn is_game_over(&self) -> bool {
        self.current
            .cells()
            .any(|(x, y)| y < 0 || self.board.is_occupied(x, y))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for controlled setup such as seeding rows in tests.
    /// Gameplay goes through the engine operations instead.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.current
    }

    // Setup only, same caveat as board_mut.
    pub fn piece_mut(&mut self) -> &mut Piece {
        &mut self.current
    }

    pub fn kind(&self) -> PieceKind {
        self.current.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.current.shape
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }
}
