use rand::Rng;

use crate::config::SHAPE_SIZE;
use crate::game::BoardError;

// shape[y][x] == 1 marks a block.
pub type Shape = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

const O_SHAPE: Shape = [[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]];
const I_SHAPE: Shape = [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]];
const S_SHAPE: Shape = [[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]];
const Z_SHAPE: Shape = [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]];
const T_SHAPE: Shape = [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]];
const L_SHAPE: Shape = [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]];
const J_SHAPE: Shape = [[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]];

/// The seven piece kinds. The discriminant is the id written into the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    O = 1,
    I = 2,
    S = 3,
    Z = 4,
    T = 5,
    L = 6,
    J = 7,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Self, BoardError> {
        match id {
            1 => Ok(PieceKind::O),
            2 => Ok(PieceKind::I),
            3 => Ok(PieceKind::S),
            4 => Ok(PieceKind::Z),
            5 => Ok(PieceKind::T),
            6 => Ok(PieceKind::L),
            7 => Ok(PieceKind::J),
            _ => Err(BoardError::InvariantViolation(format!(
                "piece kind id {id} is outside 1..=7"
            ))),
        }
    }

    // By value, so rotating a piece never touches the template.
    pub fn template(self) -> Shape {
        match self {
            PieceKind::O => O_SHAPE,
            PieceKind::I => I_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::J => J_SHAPE,
        }
    }

    pub fn is_half_turn_symmetric(self) -> bool {
        matches!(self, PieceKind::O)
    }
}

pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

/// Quarter turn clockwise inside the 4x4 box: `(y, x)` moves to `(3 - x, y)`.
pub fn rotate_shape(shape: &Shape) -> Shape {
    let mut next = [[0; SHAPE_SIZE]; SHAPE_SIZE];
    for (y, row) in shape.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell != 0 {
                next[SHAPE_SIZE - 1 - x][y] = 1;
            }
        }
    }
    next
}

/// The active piece: kind, top-left anchor of its box, and working shape.
///
/// The anchor may sit outside the board while a move is being tried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
}

impl Piece {
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            shape: kind.template(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != 0)
                .map(move |(dx, _)| (self.x + dx as i32, self.y + dy as i32))
        })
    }

    pub fn rotate(&mut self) {
        self.shape = rotate_shape(&self.shape);
    }

    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.rotate();
        next
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }
}
