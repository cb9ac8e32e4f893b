//! Welcome banner
//!
//! Shows the boxed logo, one sample of each log level, a link to the source
//! code and a short spinner.

use crate::config::PackageInfo;
use crate::error::AppError;
use crate::output::logger::Logger;
use crate::output::logo::{Logo, generate_logo, write_gradient_line};
use crate::output::spinner::{DEFAULT_SPINNER_DURATION, Spinner};
use crate::output::style::{inline_code, write_link};
use std::io;
use std::time::Duration;
use termcolor::{Color, ColorSpec, WriteColor};

/// Horizontal padding inside the banner box
const BOX_PADDING: usize = 2;

/// Settings for the welcome sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeSettings {
    pub spinner_duration: Duration,
}

impl Default for WelcomeSettings {
    fn default() -> Self {
        WelcomeSettings {
            spinner_duration: DEFAULT_SPINNER_DURATION,
        }
    }
}

/// Display the welcome message
pub fn display_welcome<W: WriteColor>(
    logger: &mut Logger<W>,
    package: &PackageInfo,
    settings: &WelcomeSettings,
) -> Result<(), AppError> {
    let logo = generate_logo(package.display_name);
    write_boxed(logger.stdout(), &logo)?;

    logger.info("I'm an info message.")?;
    logger.success("I'm a success message.")?;
    logger.log_colored(
        "I'm a generic log message with a custom color.",
        ColorSpec::new()
            .set_fg(Some(Color::Magenta))
            .set_intense(true),
    )?;
    logger.warn("I'm a warning message.")?;
    logger.error("I'm an error message.")?;

    let flag = inline_code("-V/--verbose", logger.supports_color());
    logger.debug(&format!(
        "I'm a debug message. I'm only shown in {} mode.\n",
        flag
    ))?;

    let out = logger.stdout();
    write!(out, "Source code on ")?;
    write_link(out, "GitHub", package.homepage)?;
    writeln!(out)?;

    Spinner::new("I'm a spinner", "Spinner done!", settings.spinner_duration).run(logger)?;
    Ok(())
}

/// Draws `logo` inside a rounded, bright magenta box
pub fn write_boxed<W: WriteColor>(writer: &mut W, logo: &Logo) -> io::Result<()> {
    let inner = logo.width();
    let mut border = ColorSpec::new();
    border.set_fg(Some(Color::Magenta)).set_intense(true);

    writer.set_color(&border)?;
    writeln!(writer, "╭{}╮", "─".repeat(inner + BOX_PADDING * 2))?;
    writer.reset()?;

    let rows = std::iter::once("")
        .chain(logo.lines())
        .chain(std::iter::once(""));

    for row in rows {
        let padded = format!("{:<width$}", row, width = inner);

        writer.set_color(&border)?;
        write!(writer, "│")?;
        writer.reset()?;

        write!(writer, "{}", " ".repeat(BOX_PADDING))?;
        match logo {
            Logo::Art(_) if !row.is_empty() => write_gradient_line(writer, &padded, inner)?,
            _ => write!(writer, "{}", padded)?,
        }
        write!(writer, "{}", " ".repeat(BOX_PADDING))?;

        writer.set_color(&border)?;
        write!(writer, "│")?;
        writer.reset()?;
        writeln!(writer)?;
    }

    writer.set_color(&border)?;
    writeln!(writer, "╰{}╯", "─".repeat(inner + BOX_PADDING * 2))?;
    writer.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PACKAGE;
    use crate::output::logger::{LogLevel, LoggerConfig};
    use termcolor::Buffer;

    fn settings() -> WelcomeSettings {
        WelcomeSettings {
            spinner_duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_default_settings_use_three_second_spinner() {
        assert_eq!(
            WelcomeSettings::default().spinner_duration,
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_welcome_prints_every_level() {
        let mut logger = Logger::buffered(LoggerConfig::default());
        display_welcome(&mut logger, &PACKAGE, &settings()).unwrap();

        let out = logger.stdout_text();
        assert!(out.contains("ℹ I'm an info message."));
        assert!(out.contains("✔ I'm a success message."));
        assert!(out.contains("I'm a generic log message with a custom color."));
        assert!(out.contains("Source code on GitHub ("));
        assert!(out.contains(PACKAGE.homepage));
        assert!(out.contains("Spinner done!"));
        assert!(!out.contains("debug message"));

        let err = logger.stderr_text();
        assert!(err.contains("⚠ I'm a warning message."));
        assert!(err.contains("✖ I'm an error message."));
    }

    #[test]
    fn test_welcome_debug_only_when_verbose() {
        let mut logger = Logger::buffered(LoggerConfig {
            level: LogLevel::Debug,
        });
        display_welcome(&mut logger, &PACKAGE, &settings()).unwrap();
        assert!(
            logger
                .stdout_text()
                .contains("I'm only shown in -V/--verbose mode.")
        );
    }

    #[test]
    fn test_boxed_logo_is_rectangular() {
        let mut buffer = Buffer::no_color();
        write_boxed(&mut buffer, &generate_logo("Hi")).unwrap();
        let text = String::from_utf8_lossy(buffer.as_slice()).into_owned();
        let lines: Vec<&str> = text.lines().collect();

        // Borders, two padding rows and five glyph rows
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[8].starts_with('╰'));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_boxed_plain_text() {
        let mut buffer = Buffer::no_color();
        write_boxed(&mut buffer, &Logo::Plain("héllo".to_string())).unwrap();
        let text = String::from_utf8_lossy(buffer.as_slice()).into_owned();
        assert!(text.contains("│  héllo  │"));
    }
}
