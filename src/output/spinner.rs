//! Cosmetic timed spinner

use crate::output::logger::Logger;
use std::io;
use std::thread;
use std::time::{Duration, Instant};
use termcolor::{Color, ColorSpec, WriteColor};

/// Animation frames
const FRAMES: [&str; 4] = ["◒", "◐", "◓", "◑"];

/// Delay between frames
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// How long the welcome spinner runs by default
pub const DEFAULT_SPINNER_DURATION: Duration = Duration::from_secs(3);

/// A spinner that runs for a fixed time and then reports completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    start_message: String,
    stop_message: String,
    duration: Duration,
}

impl Spinner {
    pub fn new(start_message: &str, stop_message: &str, duration: Duration) -> Self {
        Spinner {
            start_message: start_message.to_string(),
            stop_message: stop_message.to_string(),
            duration,
        }
    }

    /// Runs the spinner on `logger`'s stdout
    ///
    /// Frames are only animated on an interactive terminal. Otherwise the
    /// start and stop lines are written back to back without waiting.
    pub fn run<W: WriteColor>(&self, logger: &mut Logger<W>) -> io::Result<()> {
        let interactive = logger.is_interactive();
        let out = logger.stdout();

        if !interactive {
            writeln!(out, "│ {}", self.start_message)?;
            return write_done(out, &self.stop_message);
        }

        let started = Instant::now();
        let mut frame = 0;
        while started.elapsed() < self.duration {
            write!(out, "\r{} {}", FRAMES[frame % FRAMES.len()], self.start_message)?;
            out.flush()?;
            frame += 1;
            thread::sleep(FRAME_INTERVAL.min(self.duration.saturating_sub(started.elapsed())));
        }

        // Clear the animated line before the final message
        write!(out, "\r\x1b[2K")?;
        write_done(out, &self.stop_message)
    }
}

fn write_done<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "◇")?;
    out.reset()?;
    writeln!(out, " {}", message)?;
    out.flush()
}
