//! crates/murmur/src/settings.rs
//! Level thresholds: the single source of truth for filtering decisions.
//!
//! [`LevelSettings`] holds the default threshold plus per-system overrides and
//! notifies registered observers synchronously on every change. Observers run
//! in registration order on the mutating call stack, before the mutator
//! returns; there is no async dispatch. Presentation layers (editor panels,
//! persistence helpers) subscribe here - the core never subscribes to its own
//! notifications.

use std::collections::BTreeMap;
use std::fmt;

use murmur_core::{Error, LogLevel};
use rustc_hash::FxHashMap;

type UpdateCallback = Box<dyn FnMut() + Send>;

/// Default threshold and per-system overrides for one logging facade.
///
/// The effective level of a system is its override when present, falling back
/// to the default. Every operation keyed by a system name rejects the empty
/// string with [`Error::EmptySystemName`].
pub struct LevelSettings {
    default_level: LogLevel,
    system_levels: FxHashMap<String, LogLevel>,
    observers: Vec<UpdateCallback>,
}

impl LevelSettings {
    /// Creates settings with the default threshold of [`LogLevel::Warn`] and
    /// no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_level: LogLevel::Warn,
            system_levels: FxHashMap::default(),
            observers: Vec::new(),
        }
    }

    /// Returns the current default threshold.
    #[must_use]
    pub const fn default_level(&self) -> LogLevel {
        self.default_level
    }

    /// Replaces the default threshold. Always notifies.
    pub fn set_default_level(&mut self, level: LogLevel) {
        self.default_level = level;
        self.notify();
    }

    /// Sets or overwrites the override for `system`. Always notifies.
    pub fn set_system_level(&mut self, system: &str, level: LogLevel) -> Result<(), Error> {
        ensure_system(system)?;
        self.system_levels.insert(system.to_owned(), level);
        self.notify();
        Ok(())
    }

    /// Removes the override for `system` if present.
    ///
    /// Notifies only when an override was actually removed; clearing an
    /// absent key is a silent no-op.
    pub fn clear_system_level(&mut self, system: &str) -> Result<(), Error> {
        ensure_system(system)?;
        if self.system_levels.remove(system).is_some() {
            self.notify();
        }
        Ok(())
    }

    /// Removes every override.
    ///
    /// Always notifies, even when no overrides existed. Keeping the
    /// notification unconditional keeps call sites simple; persistence
    /// round-trips rely on it.
    pub fn clear_system_levels(&mut self) {
        self.system_levels.clear();
        self.notify();
    }

    /// Returns the effective threshold for `system`: its override when
    /// present, the default otherwise.
    pub fn get_system_level(&self, system: &str) -> Result<LogLevel, Error> {
        ensure_system(system)?;
        Ok(self
            .system_levels
            .get(system)
            .copied()
            .unwrap_or(self.default_level))
    }

    /// Returns the override for `system`, or `None` when the system falls
    /// back to the default.
    pub fn try_get_system_level(&self, system: &str) -> Result<Option<LogLevel>, Error> {
        ensure_system(system)?;
        Ok(self.system_levels.get(system).copied())
    }

    /// Read-only view of the current overrides.
    #[must_use]
    pub const fn system_levels(&self) -> &FxHashMap<String, LogLevel> {
        &self.system_levels
    }

    /// Registers an observer invoked synchronously after every change.
    ///
    /// Observers run in registration order and are dropped with the
    /// settings; there is no explicit unsubscribe.
    pub fn on_updated(&mut self, callback: impl FnMut() + Send + 'static) {
        self.observers.push(Box::new(callback));
    }

    /// Captures the current state for persistence by external collaborators.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            default_level: self.default_level,
            system_levels: self
                .system_levels
                .iter()
                .map(|(system, level)| (system.clone(), *level))
                .collect(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// Applies the documented restore order - default level, then clear all
    /// overrides, then set each entry - so observers see the same
    /// notification sequence a manual restore would produce.
    pub fn apply_snapshot(&mut self, snapshot: &SettingsSnapshot) -> Result<(), Error> {
        self.set_default_level(snapshot.default_level);
        self.clear_system_levels();
        for (system, level) in &snapshot.system_levels {
            self.set_system_level(system, *level)?;
        }
        Ok(())
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LevelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSettings")
            .field("default_level", &self.default_level)
            .field("system_levels", &self.system_levels)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Serializable snapshot of a [`LevelSettings`] instance.
///
/// The override map is ordered so serialized snapshots are stable across
/// runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsSnapshot {
    /// Default threshold at capture time.
    pub default_level: LogLevel,
    /// Per-system overrides at capture time.
    pub system_levels: BTreeMap<String, LogLevel>,
}

fn ensure_system(system: &str) -> Result<(), Error> {
    if system.is_empty() {
        return Err(Error::EmptySystemName);
    }
    Ok(())
}
