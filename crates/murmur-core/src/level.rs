//! crates/murmur-core/src/level.rs
//! Severity levels and emission modes for the logging facade.

/// Severity threshold and message level, ordered by ascending verbosity.
///
/// A message at level `L` is emitted for a system iff `L` is less than or
/// equal to the system's effective threshold. `None` as a threshold therefore
/// silences a system entirely, while `Debug` admits everything.
///
/// # Examples
///
/// ```
/// use murmur_core::LogLevel;
///
/// assert!(LogLevel::Error < LogLevel::Warn);
/// assert!(LogLevel::Warn <= LogLevel::Warn);
/// assert!(LogLevel::Debug > LogLevel::Info);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// Threshold that silences a system; never used as a message level.
    None = 0,
    /// Error conditions.
    Error = 1,
    /// Warnings. The default threshold.
    Warn = 2,
    /// Informational messages.
    Info = 3,
    /// Detailed diagnostics.
    Debug = 4,
}

impl LogLevel {
    /// Uppercase label used by sinks when rendering a record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

/// Controls whether a message is forwarded unconditionally or only on its
/// first occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogMode {
    /// Forward every enabled message.
    Always,
    /// Forward an enabled message only if the exact (system, message) pair
    /// has not been emitted in this mode before.
    Once,
}
