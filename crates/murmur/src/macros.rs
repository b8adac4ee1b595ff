//! crates/murmur/src/macros.rs
//! Convenience macro for building positional argument slices.

/// Builds the `&[&dyn Display]` argument slice for a logging call.
///
/// Collapses what would otherwise be per-arity method overloads into one
/// variadic call surface:
///
/// ```
/// use murmur::{log_args, Murmur};
/// use murmur_core::NullSink;
///
/// let murmur = Murmur::new(NullSink);
/// let logger = murmur.logger();
/// logger.warn("Sys", "Player {0} has {1} health", log_args!["John", 42])?;
/// # Ok::<(), murmur_core::Error>(())
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),*][..]
    };
}
