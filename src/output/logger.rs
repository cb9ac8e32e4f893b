//! Leveled console logger with colorization support
//!
//! The logger owns its output streams and an explicit verbosity threshold.
//! Warnings and errors go to stderr; everything else goes to stdout.

use crate::cli::args::CliOptions;
use std::io::{self, IsTerminal};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Verbosity thresholds, from least to most detailed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    Log,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Logger settings derived once from parsed options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LogLevel,
}

impl From<&CliOptions> for LoggerConfig {
    fn from(options: &CliOptions) -> Self {
        let level = if options.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        LoggerConfig { level }
    }
}

/// Which stream a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Out,
    Err,
}

/// Console logger writing to a pair of color-capable streams
pub struct Logger<W: WriteColor = StandardStream> {
    config: LoggerConfig,
    out: W,
    err: W,
    interactive: bool,
}

/// Resolves `Auto` for one stream
///
/// termcolor's `Auto` only consults `TERM` and `NO_COLOR`, so a stream that
/// is not a terminal is switched off here.
pub fn color_for(choice: ColorChoice, is_terminal: bool) -> ColorChoice {
    match choice {
        ColorChoice::Auto if !is_terminal => ColorChoice::Never,
        other => other,
    }
}

impl Logger<StandardStream> {
    /// Logger bound to the process stdout and stderr
    ///
    /// Color is decided per stream.
    pub fn stdio(config: LoggerConfig, color_choice: ColorChoice) -> Self {
        let stdout_is_terminal = io::stdout().is_terminal();
        let stderr_is_terminal = io::stderr().is_terminal();
        Logger {
            config,
            out: StandardStream::stdout(color_for(color_choice, stdout_is_terminal)),
            err: StandardStream::stderr(color_for(color_choice, stderr_is_terminal)),
            interactive: stdout_is_terminal,
        }
    }
}

impl<W: WriteColor> Logger<W> {
    /// Logger over caller-provided streams, treated as non-interactive
    pub fn with_streams(config: LoggerConfig, out: W, err: W) -> Self {
        Logger {
            config,
            out,
            err,
            interactive: false,
        }
    }
}

impl Logger<Buffer> {
    /// Logger writing uncolored text to in-memory buffers
    pub fn buffered(config: LoggerConfig) -> Self {
        Logger::with_streams(config, Buffer::no_color(), Buffer::no_color())
    }

    /// Text written to stdout so far
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(self.out.as_slice()).into_owned()
    }

    /// Text written to stderr so far
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(self.err.as_slice()).into_owned()
    }
}

impl<W: WriteColor> Logger<W> {
    pub fn level(&self) -> LogLevel {
        self.config.level
    }

    /// Replaces the verbosity threshold
    pub fn set_config(&mut self, config: LoggerConfig) {
        self.config = config;
    }

    /// Whether a message at `level` would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Silent && level <= self.config.level
    }

    /// Whether stdout is an interactive terminal
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn supports_color(&self) -> bool {
        self.out.supports_color()
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.emit(
            LogLevel::Error,
            Stream::Err,
            Some(("✖", ColorSpec::new().set_fg(Some(Color::Red)).clone())),
            message,
        )
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.emit(
            LogLevel::Warn,
            Stream::Err,
            Some(("⚠", ColorSpec::new().set_fg(Some(Color::Yellow)).clone())),
            message,
        )
    }

    /// Generic message with no prefix
    pub fn log(&mut self, message: &str) -> io::Result<()> {
        self.emit(LogLevel::Log, Stream::Out, None, message)
    }

    /// Generic message written in a single color
    pub fn log_colored(&mut self, message: &str, spec: &ColorSpec) -> io::Result<()> {
        if !self.enabled(LogLevel::Log) {
            return Ok(());
        }
        self.out.set_color(spec)?;
        write!(self.out, "{}", message)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.emit(
            LogLevel::Info,
            Stream::Out,
            Some(("ℹ", ColorSpec::new().set_fg(Some(Color::Cyan)).clone())),
            message,
        )
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.emit(
            LogLevel::Info,
            Stream::Out,
            Some(("✔", ColorSpec::new().set_fg(Some(Color::Green)).clone())),
            message,
        )
    }

    /// Informational message on stderr, used next to diagnostics
    pub fn hint(&mut self, message: &str) -> io::Result<()> {
        self.emit(
            LogLevel::Info,
            Stream::Err,
            Some(("ℹ", ColorSpec::new().set_fg(Some(Color::Cyan)).clone())),
            message,
        )
    }

    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        self.emit(
            LogLevel::Debug,
            Stream::Out,
            Some(("⚙", ColorSpec::new().set_dimmed(true).clone())),
            message,
        )
    }

    /// Writes text to stdout verbatim, regardless of the threshold
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Direct access to stdout for callers that render their own colors
    pub fn stdout(&mut self) -> &mut W {
        &mut self.out
    }

    fn emit(
        &mut self,
        level: LogLevel,
        stream: Stream,
        badge: Option<(&str, ColorSpec)>,
        message: &str,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let writer = match stream {
            Stream::Out => &mut self.out,
            Stream::Err => &mut self.err,
        };

        if let Some((symbol, spec)) = badge {
            writer.set_color(&spec)?;
            write!(writer, "{}", symbol)?;
            writer.reset()?;
            write!(writer, " ")?;
        }
        writeln!(writer, "{}", message)?;
        writer.flush()
    }
}
