//! crates/murmur/src/bridge.rs
//! Bridge between the tracing ecosystem and the murmur facade.
//!
//! [`MurmurLayer`] is a `tracing-subscriber` layer that routes tracing events
//! into a [`Murmur`] facade: the event target names the system (its last
//! `::` segment), the tracing level maps onto [`LogLevel`], and the event's
//! `message` field becomes the log message. Host code can keep writing
//! standard `tracing` macros while per-system thresholds decide what reaches
//! the sink.
//!
//! # Usage
//!
//! ```rust,ignore
//! use murmur::{bridge::init_tracing, Murmur};
//! use murmur_sink::ConsoleSink;
//!
//! let murmur = Murmur::new(ConsoleSink::auto());
//! init_tracing(murmur.clone());
//!
//! tracing::info!(target: "game::physics", "solver ready");
//! ```

use murmur_core::LogLevel;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::facade::Murmur;

/// Tracing layer that forwards events into a [`Murmur`] facade.
///
/// The layer never panics and never propagates facade errors: a logging
/// bridge must not take down the host, so events that cannot be routed are
/// dropped silently.
#[derive(Clone, Debug)]
pub struct MurmurLayer {
    murmur: Murmur,
}

impl MurmurLayer {
    /// Creates a layer routing into `murmur`.
    #[must_use]
    pub const fn new(murmur: Murmur) -> Self {
        Self { murmur }
    }

    /// Maps a tracing target to a system name: the last `::` segment.
    ///
    /// `"game::physics"` becomes `"physics"`, a bare `"physics"` stays as
    /// is. Events with an empty target have no system and are dropped.
    fn target_to_system(target: &str) -> Option<&str> {
        let system = target.rsplit("::").next().unwrap_or(target);
        if system.is_empty() {
            None
        } else {
            Some(system)
        }
    }

    /// Maps a tracing level onto the facade's severity scale.
    const fn map_level(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            // TRACE has no murmur equivalent; fold it into Debug.
            _ => LogLevel::Debug,
        }
    }
}

impl<S> Layer<S> for MurmurLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(system) = Self::target_to_system(metadata.target()) else {
            return;
        };
        let level = Self::map_level(metadata.level());

        // Check the threshold before visiting the event so disabled systems
        // never pay for message extraction.
        let enabled = self
            .murmur
            .with_settings(|settings| settings.get_system_level(system).map(|t| level <= t))
            .unwrap_or(false);
        if !enabled {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let logger = self.murmur.logger();
        let _ = match level {
            LogLevel::Error => logger.error(system, &message, &[]),
            LogLevel::Warn => logger.warn(system, &message, &[]),
            LogLevel::Info => logger.info(system, &message, &[]),
            _ => logger.debug(system, &message, &[]),
        };
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that routes events into `murmur`.
///
/// Intended for the application's composition point; libraries should accept
/// a [`MurmurLayer`] and compose it themselves instead.
pub fn init_tracing(murmur: Murmur) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(MurmurLayer::new(murmur))
        .init();
}
