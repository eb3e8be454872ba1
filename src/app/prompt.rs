use std::io::{self, BufRead, Write};

use blockfall::Difficulty;

const BANNER: &[&str] = &[
    " ___  _    ___   ___ _  _ ___ _   _    _    ",
    "| _ )| |  / _ \\ / __| |/ /| __/_\\ | |  | |   ",
    "| _ \\| |_| (_) | (__| ' < | _/ _ \\| |__| |__ ",
    "|___/|____\\___/ \\___|_|\\_\\|_/_/ \\_\\____|____|",
];

/// Asks for a difficulty letter until one is recognised.
///
/// Fails with `UnexpectedEof` if the input closes first.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Difficulty> {
    for line in BANNER {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Welcome to blockfall!")?;
    writeln!(out, "Please select your difficulty")?;

    let mut answer = String::new();
    loop {
        write!(out, "Enter game type (E for easy, M for medium, H for hard): ")?;
        out.flush()?;
        answer.clear();
        if input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no difficulty selected",
            ));
        }
        if answer.trim().is_empty() {
            writeln!(out, "Invalid input. Please enter a valid game type.")?;
            continue;
        }
        match Difficulty::from_letter(&answer) {
            Some(d) => return Ok(d),
            None => writeln!(out, "Invalid game type. Please enter E, M, or H.")?,
        }
    }
}
