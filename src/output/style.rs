//! Small text styling helpers

use std::io;
use termcolor::{Ansi, Color, ColorSpec, HyperlinkSpec, WriteColor};

/// Formats `text` as inline code: bright white on a black background
///
/// Returns `text` unchanged when `color` is false or `text` is empty.
pub fn inline_code(text: &str, color: bool) -> String {
    if text.is_empty() || !color {
        return text.to_string();
    }

    let mut ansi = Ansi::new(Vec::new());
    match write_inline_code(&mut ansi, text) {
        Ok(()) => String::from_utf8_lossy(&ansi.into_inner()).into_owned(),
        Err(_) => text.to_string(),
    }
}

fn write_inline_code<W: WriteColor>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.set_color(
        ColorSpec::new()
            .set_fg(Some(Color::White))
            .set_bg(Some(Color::Black))
            .set_intense(true),
    )?;
    write!(writer, "{}", text)?;
    writer.reset()
}

/// Writes `label` as a terminal hyperlink to `url`
///
/// Streams without hyperlink support get `label (url)`.
pub fn write_link<W: WriteColor>(writer: &mut W, label: &str, url: &str) -> io::Result<()> {
    if !writer.supports_hyperlinks() {
        return write!(writer, "{} ({})", label, url);
    }

    writer.set_hyperlink(&HyperlinkSpec::open(url.as_bytes()))?;
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    write!(writer, "{}", label)?;
    writer.reset()?;
    writer.set_hyperlink(&HyperlinkSpec::close())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn test_inline_code_wraps_text() {
        let result = inline_code("test code", true);
        assert!(result.contains("test code"));
        assert!(result.len() > "test code".len());
        assert!(result.starts_with("\x1b["));
    }

    #[test]
    fn test_inline_code_empty() {
        assert_eq!(inline_code("", true), "");
        assert_eq!(inline_code("", false), "");
    }

    #[test]
    fn test_inline_code_without_color() {
        assert_eq!(inline_code("-V/--verbose", false), "-V/--verbose");
    }

    #[test]
    fn test_inline_code_special_and_multiline() {
        let input = "code with spaces & symbols!";
        assert!(inline_code(input, true).contains(input));

        let multiline = "line 1\nline 2\nline 3";
        assert!(inline_code(multiline, true).contains(multiline));
    }

    #[test]
    fn test_inline_code_is_deterministic() {
        assert_eq!(inline_code("same", true), inline_code("same", true));
    }

    #[test]
    fn test_link_fallback_without_hyperlinks() {
        let mut buffer = Buffer::no_color();
        write_link(&mut buffer, "GitHub", "https://example.com").unwrap();
        assert_eq!(
            String::from_utf8_lossy(buffer.as_slice()),
            "GitHub (https://example.com)"
        );
    }

    #[test]
    fn test_link_uses_osc8_when_supported() {
        let mut ansi = Ansi::new(Vec::new());
        write_link(&mut ansi, "GitHub", "https://example.com").unwrap();
        let text = String::from_utf8_lossy(&ansi.into_inner()).into_owned();
        assert!(text.contains("\x1b]8;;https://example.com"));
        assert!(text.contains("GitHub"));
    }
}
