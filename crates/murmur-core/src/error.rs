//! crates/murmur-core/src/error.rs
//! Error type surfaced by the logging facade.

use std::io;

/// Error produced by facade operations.
///
/// The decision core itself only ever originates [`Error::EmptySystemName`];
/// malformed format strings are deliberately not errors so that a logging
/// call can never crash the host application. Sink write failures pass
/// through unchanged as [`Error::Sink`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A settings or registry operation was keyed by an empty system name.
    #[error("system name must not be empty")]
    EmptySystemName,
    /// The sink failed while writing an already-filtered message.
    #[error("sink write failed: {0}")]
    Sink(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn empty_system_name_display() {
        assert_eq!(
            Error::EmptySystemName.to_string(),
            "system name must not be empty"
        );
    }

    #[test]
    fn sink_error_preserves_source() {
        let inner = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let error = Error::from(inner);
        assert!(error.to_string().contains("pipe closed"));
        assert!(error.source().is_some());
    }
}
