//! ASCII-art logo rendering
//!
//! Text is drawn with a small built-in block font and painted with a
//! left-to-right color gradient. Rendering never fails from the caller's
//! point of view: anything the font cannot draw falls back to the original
//! text.

use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Glyph height in rows
const GLYPH_HEIGHT: usize = 5;

/// Gradient endpoints used for the banner
pub const GRADIENT_START: (u8, u8, u8) = (0xFA, 0x76, 0x9F);
pub const GRADIENT_END: (u8, u8, u8) = (0xA9, 0xE8, 0xFD);

/// Why a string could not be rendered in the block font
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoError {
    #[error("Nothing to render")]
    Empty,

    #[error("No glyph for character {0:?}")]
    UnsupportedGlyph(char),
}

/// A rendered logo, or the original text when rendering was not possible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    Art(Vec<String>),
    Plain(String),
}

impl Logo {
    /// Lines of the logo as displayed
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Logo::Art(lines) => lines.iter().map(String::as_str).collect(),
            Logo::Plain(text) => text.lines().collect(),
        }
    }

    /// Display width in columns
    pub fn width(&self) -> usize {
        self.lines()
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Generates a logo for `text`, returning the text unchanged on failure
pub fn generate_logo(text: &str) -> Logo {
    match render_block(text) {
        Ok(lines) => Logo::Art(lines),
        Err(_) => Logo::Plain(text.to_string()),
    }
}

/// Renders `text` in the block font
///
/// Lowercase letters are drawn as uppercase.
pub fn render_block(text: &str) -> Result<Vec<String>, LogoError> {
    if text.trim().is_empty() {
        return Err(LogoError::Empty);
    }

    let glyphs = text
        .chars()
        .map(|c| glyph(c.to_ascii_uppercase()).ok_or(LogoError::UnsupportedGlyph(c)))
        .collect::<Result<Vec<_>, _>>()?;

    let lines = (0..GLYPH_HEIGHT)
        .map(|row| {
            let line = glyphs
                .iter()
                .map(|g| g[row].replace('#', "█"))
                .collect::<Vec<_>>()
                .join(" ");
            line.trim_end().to_string()
        })
        .collect();

    Ok(lines)
}

/// Linear interpolation between the gradient endpoints
///
/// `position` is clamped to `0.0..=1.0`.
pub fn gradient_at(position: f32) -> (u8, u8, u8) {
    let t = position.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (
        mix(GRADIENT_START.0, GRADIENT_END.0),
        mix(GRADIENT_START.1, GRADIENT_END.1),
        mix(GRADIENT_START.2, GRADIENT_END.2),
    )
}

/// Writes one line painted across `width` columns, without a newline
pub fn write_gradient_line<W: WriteColor>(
    writer: &mut W,
    line: &str,
    width: usize,
) -> io::Result<()> {
    let span = width.saturating_sub(1).max(1) as f32;
    let mut spec = ColorSpec::new();
    for (column, ch) in line.chars().enumerate() {
        if ch == ' ' {
            write!(writer, " ")?;
            continue;
        }
        let (r, g, b) = gradient_at(column as f32 / span);
        spec.set_fg(Some(Color::Rgb(r, g, b)));
        writer.set_color(&spec)?;
        write!(writer, "{}", ch)?;
    }
    writer.reset()
}

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match c {
        'A' => [" ### ", "#   #", "#####", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#### ", "#   #", "#### "],
        'C' => [" ####", "#    ", "#    ", "#    ", " ####"],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#### ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#### ", "#    ", "#    "],
        'G' => [" ####", "#    ", "#  ##", "#   #", " ### "],
        'H' => ["#   #", "#   #", "#####", "#   #", "#   #"],
        'I' => ["###", " # ", " # ", " # ", "###"],
        'J' => ["  ###", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "###  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#### ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "# # #", "#  # ", " ## #"],
        'R' => ["#### ", "#   #", "#### ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", " ### ", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", " # # ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "   # ", "  #  ", " #   ", "#####"],
        '0' => [" ### ", "#  ##", "# # #", "##  #", " ### "],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => [" ### ", "#   #", "  ## ", " #   ", "#####"],
        '3' => ["#### ", "    #", " ### ", "    #", "#### "],
        '4' => ["#   #", "#   #", "#####", "    #", "    #"],
        '5' => ["#####", "#    ", "#### ", "    #", "#### "],
        '6' => [" ### ", "#    ", "#### ", "#   #", " ### "],
        '7' => ["#####", "    #", "   # ", "  #  ", "  #  "],
        '8' => [" ### ", "#   #", " ### ", "#   #", " ### "],
        '9' => [" ### ", "#   #", " ####", "    #", " ### "],
        '-' => ["   ", "   ", "###", "   ", "   "],
        '.' => [" ", " ", " ", " ", "#"],
        '!' => ["#", "#", "#", " ", "#"],
        ' ' => ["  ", "  ", "  ", "  ", "  "],
        _ => return None,
    };
    Some(rows)
}
