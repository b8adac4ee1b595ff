//! crates/murmur-sink/src/memory.rs
//! In-memory sink for tests and record inspection.

use std::io;
use std::sync::{Arc, Mutex};

use murmur_core::{LogLevel, Sink};

/// One record as received by a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkRecord {
    /// Severity the message was logged at.
    pub level: LogLevel,
    /// System tag of the message.
    pub system: String,
    /// Fully formatted message text.
    pub message: String,
}

/// Sink that stores every record in memory.
///
/// Clones share the same buffer, so a test can keep a handle for assertions
/// after moving a clone into the facade:
///
/// ```
/// use murmur_core::{LogLevel, Sink};
/// use murmur_sink::MemorySink;
///
/// let sink = MemorySink::new();
/// let mut writer = sink.clone();
/// writer.write(LogLevel::Error, "Core", "boom")?;
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.records()[0].message, "boom");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<SinkRecord>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far, in arrival order.
    #[must_use]
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records
            .lock()
            .expect("record buffer mutex poisoned")
            .clone()
    }

    /// Number of records received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .expect("record buffer mutex poisoned")
            .len()
    }

    /// Whether no records have been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every stored record.
    pub fn clear(&self) {
        self.records
            .lock()
            .expect("record buffer mutex poisoned")
            .clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, level: LogLevel, system: &str, message: &str) -> io::Result<()> {
        self.records
            .lock()
            .expect("record buffer mutex poisoned")
            .push(SinkRecord {
                level,
                system: system.to_owned(),
                message: message.to_owned(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer
            .write(LogLevel::Warn, "Physics", "first")
            .expect("write succeeds");
        writer
            .write(LogLevel::Error, "IO", "second")
            .expect("write succeeds");

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].system, "Physics");
        assert_eq!(records[1].level, LogLevel::Error);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer
            .write(LogLevel::Info, "Core", "ready")
            .expect("write succeeds");

        sink.clear();
        assert!(sink.is_empty());
    }
}
