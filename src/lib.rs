pub mod config;
pub mod game;

pub use config::{Difficulty, CELL_W, GRAVITY_MS, KIND_COUNT, MAX_DIM, MIN_DIM, SHAPE_SIZE};
pub use game::{Board, BoardError, Game, Piece, PieceKind, Shape};
