//! crates/murmur-sink/src/console.rs
//! Colored stdout sink for interactive sessions.
//!
//! Systems get a stable pseudo-random color chosen by hashing the system
//! name over a fixed ANSI palette, so a given system keeps its color for the
//! life of the process (and across processes, since the hash is
//! deterministic over the name).

use std::fmt::Write as _;
use std::io::{self, Write as _};

use chrono::Local;
use is_terminal::IsTerminal;
use murmur_core::hash::element_from_hash;
use murmur_core::{LogLevel, Sink};

const RESET: &str = "\x1b[0m";
const GRAY: &str = "\x1b[90m";

const SYSTEM_COLORS: [&str; 6] = [
    "\x1b[31m", // red
    "\x1b[32m", // green
    "\x1b[34m", // blue
    "\x1b[33m", // yellow
    "\x1b[36m", // cyan
    "\x1b[35m", // magenta
];

const fn level_color(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug | LogLevel::None => "\x1b[37m", // white
        LogLevel::Info => "\x1b[36m",                   // cyan
        LogLevel::Warn => "\x1b[33m",                   // yellow
        LogLevel::Error => "\x1b[31m",                  // red
    }
}

/// How much of a record gets the per-system color.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SystemColor {
    /// No system coloring.
    None,
    /// Color the `[system]` label only.
    #[default]
    LabelOnly,
    /// Color the label and the message text.
    LabelAndMessage,
}

/// Presentation options for [`ConsoleSink`].
#[derive(Clone, Copy, Debug)]
pub struct ConsoleConfig {
    /// Prefix each record with a `[YYYY-mm-dd HH:MM:SS.mmm]` local
    /// timestamp.
    pub timestamp: bool,
    /// Include the `[LEVEL]` label.
    pub level_labels: bool,
    /// Color the level label by severity (and gray the timestamp).
    pub level_colors: bool,
    /// Per-system coloring mode.
    pub system_color: SystemColor,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            timestamp: true,
            level_labels: true,
            level_colors: true,
            system_color: SystemColor::LabelOnly,
        }
    }
}

/// Sink that renders records to stdout, one line per record.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    config: ConsoleConfig,
}

impl ConsoleSink {
    /// Creates a sink with explicit presentation options.
    #[must_use]
    pub const fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// Creates a sink with default options, dropping all coloring when
    /// stdout is not a terminal.
    #[must_use]
    pub fn auto() -> Self {
        let tty = io::stdout().is_terminal();
        Self::new(ConsoleConfig {
            level_colors: tty,
            system_color: if tty {
                SystemColor::LabelOnly
            } else {
                SystemColor::None
            },
            ..ConsoleConfig::default()
        })
    }

    fn render(&self, level: LogLevel, system: &str, message: &str) -> String {
        let mut out = String::with_capacity(message.len() + 48);

        if self.config.timestamp {
            let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            if self.config.level_colors {
                let _ = write!(out, "{GRAY}[{now}]{RESET} ");
            } else {
                let _ = write!(out, "[{now}] ");
            }
        }

        if self.config.level_labels {
            if self.config.level_colors {
                let _ = write!(out, "{}[{}]{RESET} ", level_color(level), level.as_str());
            } else {
                let _ = write!(out, "[{}] ", level.as_str());
            }
        }

        let system_color = match self.config.system_color {
            SystemColor::None => None,
            SystemColor::LabelOnly | SystemColor::LabelAndMessage => {
                element_from_hash(&SYSTEM_COLORS, system).copied()
            }
        };
        match system_color {
            Some(color) => {
                let _ = write!(out, "{color}[{system}]{RESET} ");
            }
            None => {
                let _ = write!(out, "[{system}] ");
            }
        }

        match (system_color, self.config.system_color) {
            (Some(color), SystemColor::LabelAndMessage) => {
                let _ = write!(out, "{color}{message}{RESET}");
            }
            _ => out.push_str(message),
        }

        out.push('\n');
        out
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, level: LogLevel, system: &str, message: &str) -> io::Result<()> {
        let line = self.render(level, system, message);
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> ConsoleConfig {
        ConsoleConfig {
            timestamp: false,
            level_labels: true,
            level_colors: false,
            system_color: SystemColor::None,
        }
    }

    #[test]
    fn plain_rendering_has_no_escape_codes() {
        let sink = ConsoleSink::new(plain_config());
        let line = sink.render(LogLevel::Warn, "Physics", "solver fallback");
        assert_eq!(line, "[WARN] [Physics] solver fallback\n");
    }

    #[test]
    fn level_label_is_bracketed_when_colored() {
        let sink = ConsoleSink::new(ConsoleConfig {
            timestamp: false,
            level_labels: true,
            level_colors: true,
            system_color: SystemColor::None,
        });
        let line = sink.render(LogLevel::Warn, "Physics", "solver fallback");
        assert!(line.contains("[WARN]"));
    }

    #[test]
    fn auto_config_keeps_coloring_consistent() {
        let sink = ConsoleSink::auto();
        // Both coloring knobs follow the same terminal probe.
        assert_eq!(
            sink.config.level_colors,
            sink.config.system_color != SystemColor::None
        );
    }

    #[test]
    fn system_color_is_stable_per_system() {
        let sink = ConsoleSink::new(ConsoleConfig {
            timestamp: false,
            level_labels: false,
            level_colors: false,
            system_color: SystemColor::LabelOnly,
        });
        let expected = *element_from_hash(&SYSTEM_COLORS, "Physics").expect("non-empty palette");
        let first = sink.render(LogLevel::Info, "Physics", "a");
        let second = sink.render(LogLevel::Info, "Physics", "b");

        assert!(first.starts_with(expected));
        assert!(second.starts_with(expected));
    }

    #[test]
    fn label_and_message_mode_colors_the_message() {
        let sink = ConsoleSink::new(ConsoleConfig {
            timestamp: false,
            level_labels: false,
            level_colors: false,
            system_color: SystemColor::LabelAndMessage,
        });
        let line = sink.render(LogLevel::Info, "Physics", "payload");
        // Label and message share one palette entry, so the color code
        // appears twice.
        let color = *element_from_hash(&SYSTEM_COLORS, "Physics").expect("non-empty palette");
        assert_eq!(line.matches(color).count(), 2);
    }

    #[test]
    fn timestamp_prefix_is_bracketed() {
        let sink = ConsoleSink::new(ConsoleConfig {
            timestamp: true,
            level_labels: false,
            level_colors: false,
            system_color: SystemColor::None,
        });
        let line = sink.render(LogLevel::Info, "Core", "ready");
        assert!(line.starts_with('['));
        assert!(line.contains("] [Core] ready"));
    }
}
