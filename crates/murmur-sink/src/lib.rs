#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `murmur-sink` provides the stock output backends for the murmur logging
//! facade: a colored [`ConsoleSink`] for interactive sessions, a generic
//! [`WriterSink`] over any [`std::io::Write`] implementor, and a
//! [`MemorySink`] that records emitted records for inspection in tests.
//!
//! Sinks receive records that already passed level filtering and once-mode
//! deduplication; their only job is presentation. None of them call back
//! into the facade.

pub mod console;
pub mod memory;
pub mod writer;

pub use console::{ConsoleConfig, ConsoleSink, SystemColor};
pub use memory::{MemorySink, SinkRecord};
pub use writer::{LineMode, WriterSink};
