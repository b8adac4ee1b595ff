//! crates/murmur/src/engine.rs
//! The decision engine: gatekeeper between a log call and the sink.
//!
//! [`LoggerCore`] consults [`LevelSettings`] before any formatting happens,
//! so suppressed calls cost a threshold lookup and nothing else. Enabled
//! messages are formatted, optionally gated through the [`OnceRegistry`], and
//! forwarded to the sink synchronously on the calling thread with no
//! buffering.
//!
//! The original host environment was single-threaded; sharing one engine
//! across threads is made safe here by wrapping each piece of mutable state
//! in a mutex. None of the locks are held across a call into another piece,
//! and sinks are barred from re-entering the facade, so lock ordering is
//! trivial.

use std::fmt::Display;
use std::sync::Mutex;

use murmur_core::{format_positional, Error, LogLevel, LogMode, Sink};

use crate::once::OnceRegistry;
use crate::settings::LevelSettings;

pub(crate) struct LoggerCore {
    settings: Mutex<LevelSettings>,
    once: Mutex<OnceRegistry>,
    sink: Mutex<Box<dyn Sink + Send>>,
}

impl LoggerCore {
    pub(crate) fn new(sink: Box<dyn Sink + Send>) -> Self {
        Self {
            settings: Mutex::new(LevelSettings::new()),
            once: Mutex::new(OnceRegistry::new()),
            sink: Mutex::new(sink),
        }
    }

    /// Runs the full decision protocol for one log call.
    ///
    /// An empty system name fails with [`Error::EmptySystemName`] before any
    /// other work. Disabled calls return without touching `args`; enabled
    /// calls format, pass the once gate when applicable, and write to the
    /// sink. Sink failures propagate to the caller unretried.
    pub(crate) fn write_if_enabled(
        &self,
        level: LogLevel,
        mode: LogMode,
        system: &str,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), Error> {
        let enabled = {
            let settings = self.settings.lock().expect("settings mutex poisoned");
            level <= settings.get_system_level(system)?
        };
        if !enabled {
            return Ok(());
        }

        let message = format_positional(format, args);

        if mode == LogMode::Once {
            let mut once = self.once.lock().expect("once registry mutex poisoned");
            if !once.try_mark(system, &message) {
                return Ok(());
            }
        }

        let mut sink = self.sink.lock().expect("sink mutex poisoned");
        sink.write(level, system, &message)?;
        Ok(())
    }

    /// Scoped access to the shared settings.
    pub(crate) fn with_settings<R>(&self, f: impl FnOnce(&mut LevelSettings) -> R) -> R {
        let mut settings = self.settings.lock().expect("settings mutex poisoned");
        f(&mut settings)
    }

    /// Forgets every once-mode suppression mark.
    pub(crate) fn clear_once(&self) {
        self.once
            .lock()
            .expect("once registry mutex poisoned")
            .clear();
    }
}

impl std::fmt::Debug for LoggerCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerCore").finish_non_exhaustive()
    }
}
