//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips ANSI codes when the stream
//! is not a terminal, so styles can be applied unconditionally.

use owo_colors::OwoColorize;

/// Check mark used in success lines
pub const CHECK: &str = "✓";

/// Cross used in failure lines
pub const CROSS: &str = "✗";

/// Semantic styles for CLI output
pub trait Stylize: std::fmt::Display {
    /// De-emphasized text (skips, hints)
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Step announcements
    fn info(&self) -> String {
        self.blue().to_string()
    }

    /// Bold text for labels and names
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Field labels in detail blocks
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Positive outcome
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Needs attention, not fatal
    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    /// Fatal or failed
    fn error(&self) -> String {
        self.red().to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled cross
pub fn cross() -> String {
    CROSS.error()
}
