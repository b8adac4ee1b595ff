#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `murmur-core` holds the leaf primitives shared by the murmur logging
//! workspace: the ordered [`LogLevel`] enum and its [`LogMode`] companion, the
//! [`Error`] type surfaced by the facade, the FNV-1a hashing helpers used for
//! once-mode deduplication and stable per-system color selection, the
//! positional [`format_positional`] renderer, and the [`Sink`] trait that
//! output backends implement.
//!
//! # Design
//!
//! Everything here is allocation-conscious: level checks and hashing never
//! allocate, and message formatting is only performed by callers that have
//! already decided a message will be emitted. The crate has no knowledge of
//! settings, registries, or sinks beyond the [`Sink`] contract itself; those
//! live in the `murmur` and `murmur-sink` crates.
//!
//! # Errors
//!
//! [`Error::EmptySystemName`] is the only error originating in the core
//! protocol: every operation keyed by a system name rejects the empty string.
//! [`Error::Sink`] wraps [`std::io::Error`] values propagated unchanged from a
//! misbehaving sink.

pub mod error;
pub mod format;
pub mod hash;
pub mod level;
pub mod sink;

pub use error::Error;
pub use format::format_positional;
pub use hash::{element_from_hash, fnv1a_32, fnv1a_32_seeded};
pub use level::{LogLevel, LogMode};
pub use sink::{NullSink, Sink};
