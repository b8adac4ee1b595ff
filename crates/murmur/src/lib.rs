#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `murmur` is a lightweight, allocation-conscious logging facade for
//! interactive applications: per-system log messages filtered by severity
//! threshold, with optional once-mode deduplication and pluggable output
//! sinks. The facade pays for formatting only when a message will actually
//! reach the sink, so diagnostic calls left in hot paths cost a threshold
//! lookup when disabled.
//!
//! # Design
//!
//! A [`Murmur`] registry owns one decision engine composed of
//! [`LevelSettings`] (default threshold plus per-system overrides, with
//! synchronous change notification), a once-mode [`OnceRegistry`], and one
//! boxed [`Sink`](murmur_core::Sink). Callers log through cached handles:
//! the unbound [`Logger`] names a system per call, a [`SystemLogger`] binds
//! one at lookup. Handle lookups are idempotent - the same name always
//! returns the same handle.
//!
//! All dispatch is synchronous on the calling thread; there is no queuing or
//! background flushing. Shared state is mutex-guarded so one facade can be
//! used from several threads.
//!
//! # Errors
//!
//! An empty system name fails any settings or registry operation with
//! [`Error::EmptySystemName`](murmur_core::Error::EmptySystemName) at the
//! call site. Formatting problems are never errors; sink I/O failures
//! propagate unretried.
//!
//! # Examples
//!
//! ```
//! use murmur::{log_args, Murmur};
//! use murmur_core::{LogLevel, NullSink};
//!
//! let murmur = Murmur::new(NullSink);
//! murmur.with_settings(|settings| {
//!     settings.set_system_level("Physics", LogLevel::Debug)
//! })?;
//!
//! let physics = murmur.system_logger("Physics")?;
//! physics.debug("step took {0} ms", log_args![16])?;
//! physics.warn_once("solver fallback engaged", &[])?;
//! # Ok::<(), murmur_core::Error>(())
//! ```

mod engine;
mod macros;

pub mod facade;
pub mod handle;
pub mod once;
pub mod settings;

#[cfg(feature = "tracing")]
pub mod bridge;

pub use facade::Murmur;
pub use handle::{Logger, SystemLogger};
pub use once::OnceRegistry;
pub use settings::{LevelSettings, SettingsSnapshot};

pub use murmur_core::{Error, LogLevel, LogMode};
