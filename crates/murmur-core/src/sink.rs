//! crates/murmur-core/src/sink.rs
//! The output contract between the decision core and presentation backends.

use std::io;

use crate::level::LogLevel;

/// Terminal consumer of a filtered, formatted log record.
///
/// The facade calls [`write`](Self::write) synchronously on the logging
/// thread, with no buffering, and only for messages that already passed level
/// filtering and once-mode deduplication. Implementations own final
/// presentation entirely; the core never inspects sink internals.
///
/// Implementations must not call back into the logging facade from `write`,
/// and should reserve errors for genuine I/O failures - those propagate
/// unretried to the original logging call site.
pub trait Sink {
    /// Writes one formatted record.
    fn write(&mut self, level: LogLevel, system: &str, message: &str) -> io::Result<()>;
}

/// Sink that discards every record.
///
/// Useful as a placeholder in tests and benchmarks that only exercise the
/// filtering protocol.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&mut self, _level: LogLevel, _system: &str, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NullSink, Sink};
    use crate::level::LogLevel;

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.write(LogLevel::Error, "Core", "boom")
            .expect("null sink never fails");
    }
}
