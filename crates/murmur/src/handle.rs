//! crates/murmur/src/handle.rs
//! Caller-facing logging handles.
//!
//! Both handle flavors are thin facades over the shared [`LoggerCore`]: an
//! unbound [`Logger`] takes the system name per call, a [`SystemLogger`] is
//! bound to one system at construction. Handles are cheap to clone; clones
//! obtained from the same registry lookup compare equal, which is how the
//! registry's same-key-same-handle guarantee is observable.

use std::fmt::Display;
use std::sync::Arc;

use murmur_core::{Error, LogLevel, LogMode};

use crate::engine::LoggerCore;

/// Handle that logs to any system, named per call.
///
/// Each severity comes in two flavors: the plain method forwards every
/// enabled message, the `_once` variant suppresses repeats of an identical
/// (system, message) pair. `args` feed the positional `{0}`, `{1}`, ...
/// placeholders in `format`; pass an empty slice (or use
/// [`log_args!`](crate::log_args)) for pre-rendered messages.
#[derive(Clone, Debug)]
pub struct Logger {
    core: Arc<LoggerCore>,
}

impl Logger {
    pub(crate) fn new(core: Arc<LoggerCore>) -> Self {
        Self { core }
    }

    /// Logs at [`LogLevel::Debug`].
    pub fn debug(&self, system: &str, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Debug, LogMode::Always, system, format, args)
    }

    /// Logs at [`LogLevel::Debug`], suppressing repeats.
    pub fn debug_once(
        &self,
        system: &str,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Debug, LogMode::Once, system, format, args)
    }

    /// Logs at [`LogLevel::Info`].
    pub fn info(&self, system: &str, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Info, LogMode::Always, system, format, args)
    }

    /// Logs at [`LogLevel::Info`], suppressing repeats.
    pub fn info_once(
        &self,
        system: &str,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Info, LogMode::Once, system, format, args)
    }

    /// Logs at [`LogLevel::Warn`].
    pub fn warn(&self, system: &str, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Warn, LogMode::Always, system, format, args)
    }

    /// Logs at [`LogLevel::Warn`], suppressing repeats.
    pub fn warn_once(
        &self,
        system: &str,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Warn, LogMode::Once, system, format, args)
    }

    /// Logs at [`LogLevel::Error`].
    pub fn error(&self, system: &str, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Error, LogMode::Always, system, format, args)
    }

    /// Logs at [`LogLevel::Error`], suppressing repeats.
    pub fn error_once(
        &self,
        system: &str,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Error, LogMode::Once, system, format, args)
    }
}

impl PartialEq for Logger {
    /// Handle identity: two unbound handles are equal iff they share a core.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl Eq for Logger {}

/// Handle bound to one system at construction.
///
/// The bound name is validated non-empty by the registry, so logging through
/// a `SystemLogger` cannot fail with [`Error::EmptySystemName`]; only sink
/// failures surface.
#[derive(Clone, Debug)]
pub struct SystemLogger {
    core: Arc<LoggerCore>,
    system: Arc<str>,
}

impl SystemLogger {
    pub(crate) fn new(core: Arc<LoggerCore>, system: Arc<str>) -> Self {
        Self { core, system }
    }

    /// The system name this handle is bound to.
    #[must_use]
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Logs at [`LogLevel::Debug`].
    pub fn debug(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Debug, LogMode::Always, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Debug`], suppressing repeats.
    pub fn debug_once(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Debug, LogMode::Once, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Info`].
    pub fn info(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Info, LogMode::Always, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Info`], suppressing repeats.
    pub fn info_once(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Info, LogMode::Once, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Warn`].
    pub fn warn(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Warn, LogMode::Always, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Warn`], suppressing repeats.
    pub fn warn_once(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Warn, LogMode::Once, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Error`].
    pub fn error(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Error, LogMode::Always, &self.system, format, args)
    }

    /// Logs at [`LogLevel::Error`], suppressing repeats.
    pub fn error_once(&self, format: &str, args: &[&dyn Display]) -> Result<(), Error> {
        self.core
            .write_if_enabled(LogLevel::Error, LogMode::Once, &self.system, format, args)
    }
}

impl PartialEq for SystemLogger {
    /// Handle identity: bound handles are equal iff they came from the same
    /// registry slot (shared core and shared name allocation).
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core) && Arc::ptr_eq(&self.system, &other.system)
    }
}

impl Eq for SystemLogger {}
