#![deny(unsafe_code)]

//! Demonstration composition point for the murmur logging facade.
//!
//! Wires a colored console sink into one [`Murmur`] registry, adjusts
//! per-system thresholds, and exercises formatting and once-mode
//! suppression. This binary is the only place in the workspace that composes
//! a facade; libraries receive handles instead.

use std::process::ExitCode;

use murmur::{log_args, LogLevel, Murmur};
use murmur_sink::ConsoleSink;

/// System names as explicit constants: statically checked, no reflection,
/// and no runtime garbage from repeated string construction.
mod systems {
    pub const GENERAL: &str = "General";
    pub const PHYSICS: &str = "Physics";
    pub const AI: &str = "AI";
    pub const RENDERING: &str = "Rendering";
}

fn run() -> Result<(), murmur::Error> {
    let murmur = Murmur::new(ConsoleSink::auto());

    // Default threshold is Warn: only the warn and error calls below emit.
    let log = murmur.logger();
    log.debug(systems::GENERAL, "debug is suppressed by default", &[])?;
    log.info(systems::GENERAL, "info is suppressed by default", &[])?;
    log.warn(systems::GENERAL, "warnings pass the default threshold", &[])?;
    log.error(systems::GENERAL, "errors always pass", &[])?;

    // Opening up one system leaves the others untouched.
    murmur.with_settings(|settings| settings.set_system_level(systems::PHYSICS, LogLevel::Debug))?;
    let physics = murmur.system_logger(systems::PHYSICS)?;
    physics.debug("step took {0} ms across {1} bodies", log_args![16, 412])?;
    log.debug(systems::AI, "still suppressed: AI keeps the default", &[])?;

    // Once mode: three identical calls, one line of output.
    for _ in 0..3 {
        physics.warn_once("solver fallback engaged", &[])?;
    }

    // Formatting only happens for enabled messages.
    murmur.with_settings(|settings| settings.set_system_level(systems::RENDERING, LogLevel::Info))?;
    let rendering = murmur.system_logger(systems::RENDERING)?;
    rendering.info("frame {0} rendered in {1} ms", log_args![1024, 6.8])?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("murmur-demo: {error}");
            ExitCode::FAILURE
        }
    }
}
