// Adapters layer: concrete implementations of the domain ports for the terminal.

use crate::domain::ports::Alerter;

/// Prints alerts to stderr; the calculation that raised it does not continue.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAlerter;

impl Alerter for TerminalAlerter {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!("{}: {}", title, message);
        eprintln!("❌ {}: {}", title, message);
    }
}
