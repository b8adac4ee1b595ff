//! crates/murmur-sink/src/writer.rs
//! Streaming sink over an arbitrary writer.

use std::io::{self, Write};

use murmur_core::{LogLevel, Sink};

/// Controls whether a [`WriterSink`] appends a trailing newline per record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered record.
    WithNewline,
    /// Emit the rendered record without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

/// Sink that renders `[LEVEL] [system] message` lines into an
/// [`io::Write`] target.
///
/// # Examples
///
/// Collect records into a `Vec<u8>`:
///
/// ```
/// use murmur_core::{LogLevel, Sink};
/// use murmur_sink::WriterSink;
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write(LogLevel::Warn, "Physics", "solver fallback")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[WARN] [Physics] solver fallback\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct WriterSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write,
{
    fn write(&mut self, level: LogLevel, system: &str, message: &str) -> io::Result<()> {
        write!(self.writer, "[{}] [{system}] {message}", level.as_str())?;
        if self.line_mode.append_newline() {
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_newlines_by_default() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(LogLevel::Warn, "Physics", "vanished")
            .expect("write succeeds");
        sink.write(LogLevel::Error, "IO", "partial")
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[WARN] [Physics] vanished"));
        assert_eq!(lines.next(), Some("[ERROR] [IO] partial"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn without_newline_preserves_output() {
        let mut sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write(LogLevel::Info, "Core", "ready")
            .expect("write succeeds");

        assert_eq!(sink.into_inner(), b"[INFO] [Core] ready".to_vec());
    }
}
