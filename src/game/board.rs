use crate::config::KIND_COUNT;
use crate::game::BoardError;

// Occupied squares hold a kind id 1..=7.
pub const EMPTY: u8 = 0;

/// The locked-cell grid. Row-major; `y` grows downwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Board {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (xu, yu) = (x as usize, y as usize);
        if xu >= self.width || yu >= self.height {
            return None;
        }
        Some(yu * self.width + xu)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    pub fn set(&mut self, x: i32, y: i32, value: u8) -> Result<(), BoardError> {
        if value > KIND_COUNT {
            return Err(BoardError::InvariantViolation(format!(
                "cell value {value} is not a kind id"
            )));
        }
        let idx = self.idx(x, y).ok_or_else(|| {
            BoardError::InvariantViolation(format!(
                "cell ({x}, {y}) is outside a {} x {} board",
                self.width, self.height
            ))
        })?;
        self.cells[idx] = value;
        Ok(())
    }

    // Seeds a whole row; used by tests and setup code.
    pub fn fill_row(&mut self, y: usize, value: u8) -> Result<(), BoardError> {
        if y >= self.height {
            return Err(BoardError::InvariantViolation(format!(
                "row {y} is outside a board of height {}",
                self.height
            )));
        }
        for x in 0..self.width {
            self.set(x as i32, y as i32, value)?;
        }
        Ok(())
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    // Both row predicates are false for rows off the board.
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|r| r.iter().all(|&c| c != EMPTY))
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).is_some_and(|r| r.iter().all(|&c| c == EMPTY))
    }

    // Single bottom-up pass; rows vacated at the top are zero-filled.
    pub(crate) fn compact(&mut self) -> u32 {
        let w = self.width;
        let mut write = self.height;
        let mut cleared = 0;
        for read in (0..self.height).rev() {
            if self.is_row_full(read) {
                cleared += 1;
                continue;
            }
            write -= 1;
            if write != read {
                self.cells.copy_within(read * w..(read + 1) * w, write * w);
            }
        }
        self.cells[..write * w].fill(EMPTY);
        cleared
    }
}
