//! Console output: leveled logger, logo, styling and spinner

pub mod logger;
pub mod logo;
pub mod spinner;
pub mod style;

pub use logger::{LogLevel, Logger, LoggerConfig};
pub use logo::{Logo, generate_logo};
pub use spinner::Spinner;
pub use style::inline_code;
