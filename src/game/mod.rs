pub mod board;
pub mod error;
pub mod piece;
pub mod state;

pub use board::{Board, EMPTY};
pub use error::BoardError;
pub use piece::{random_kind, rotate_shape, Piece, PieceKind, Shape};
pub use state::Game;
