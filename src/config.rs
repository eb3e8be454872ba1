// Shared engine and UI constants.
pub const MIN_DIM: usize = 5;
pub const MAX_DIM: usize = 50;
pub const SHAPE_SIZE: usize = 4; // every template lives in a 4x4 box
pub const KIND_COUNT: u8 = 7;
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const GRAVITY_MS: u64 = 500;
pub const SIDEBAR_W: u16 = 18;

/// Board presets offered by the difficulty prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// `(height, width)` for the preset.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (25, 15),
            Difficulty::Medium => (20, 10),
            Difficulty::Hard => (15, 7),
        }
    }

    /// Maps the first letter of a prompt answer to a preset.
    pub fn from_letter(input: &str) -> Option<Self> {
        match input.trim().chars().next()?.to_ascii_lowercase() {
            'e' => Some(Difficulty::Easy),
            'm' => Some(Difficulty::Medium),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_within_engine_bounds() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let (h, w) = d.dimensions();
            assert!((MIN_DIM..=MAX_DIM).contains(&h));
            assert!((MIN_DIM..=MAX_DIM).contains(&w));
        }
    }

    #[test]
    fn letters_are_case_insensitive_and_use_first_char() {
        assert_eq!(Difficulty::from_letter("E"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_letter("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_letter("  h\n"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_letter("x"), None);
        assert_eq!(Difficulty::from_letter(""), None);
    }
}
