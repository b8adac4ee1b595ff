//! crates/murmur/src/facade.rs
//! The registry: owns one decision engine and caches handles per system.
//!
//! There is deliberately no global instance anywhere in this workspace. An
//! application composes exactly one [`Murmur`] per sink at its outermost
//! composition point and passes handles (or facade clones - cloning shares
//! everything) down to its subsystems.

use std::sync::{Arc, Mutex};

use murmur_core::{Error, Sink};
use rustc_hash::FxHashMap;

use crate::engine::LoggerCore;
use crate::handle::{Logger, SystemLogger};
use crate::settings::LevelSettings;

/// A logging facade: one decision engine, one settings store, one sink, and
/// a cache of handles.
///
/// Handle lookups are idempotent: the same system name always yields the
/// same handle (observable through the handles' `PartialEq`) for the life of
/// the registry. The unbound handle occupies the empty-name slot of the
/// cache and is created eagerly.
///
/// # Examples
///
/// ```
/// use murmur::Murmur;
/// use murmur_core::{LogLevel, NullSink};
///
/// let murmur = Murmur::new(NullSink);
/// murmur.with_settings(|settings| {
///     settings.set_system_level("Physics", LogLevel::Debug)
/// })?;
///
/// let physics = murmur.system_logger("Physics")?;
/// physics.debug("solver ready", &[])?;
/// # Ok::<(), murmur_core::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Murmur {
    core: Arc<LoggerCore>,
    unbound: Logger,
    bound: Arc<Mutex<FxHashMap<String, SystemLogger>>>,
}

impl Murmur {
    /// Creates a facade that forwards filtered messages to `sink`.
    pub fn new(sink: impl Sink + Send + 'static) -> Self {
        let core = Arc::new(LoggerCore::new(Box::new(sink)));
        let unbound = Logger::new(Arc::clone(&core));
        Self {
            core,
            unbound,
            bound: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Returns the cached unbound handle.
    #[must_use]
    pub fn logger(&self) -> Logger {
        self.unbound.clone()
    }

    /// Returns the cached handle bound to `system`, creating it on first
    /// lookup.
    ///
    /// Fails with [`Error::EmptySystemName`] for an empty name.
    pub fn system_logger(&self, system: &str) -> Result<SystemLogger, Error> {
        if system.is_empty() {
            return Err(Error::EmptySystemName);
        }
        let mut bound = self.bound.lock().expect("handle cache mutex poisoned");
        if let Some(handle) = bound.get(system) {
            return Ok(handle.clone());
        }
        let handle = SystemLogger::new(Arc::clone(&self.core), Arc::from(system));
        bound.insert(system.to_owned(), handle.clone());
        Ok(handle)
    }

    /// Scoped access to the shared [`LevelSettings`].
    ///
    /// The settings lock is held for the duration of the closure; observers
    /// registered via [`LevelSettings::on_updated`] run inside it.
    pub fn with_settings<R>(&self, f: impl FnOnce(&mut LevelSettings) -> R) -> R {
        self.core.with_settings(f)
    }

    /// Forgets every once-mode suppression mark, so previously suppressed
    /// pairs may be emitted again.
    pub fn clear_once(&self) {
        self.core.clear_once();
    }
}
