//! Logging setup for hosts embedding the library.
//!
//! The library itself only emits `tracing` events; hosts that do not have
//! their own subscriber can call [`init_logging`] to get console output
//! filtered by the `RUST_LOG` environment variable.

use tracing_subscriber::EnvFilter;

/// Initialize a console `tracing` subscriber.
///
/// Filter defaults to `info` when `RUST_LOG` is unset. Safe to call more
/// than once: a second call (or a host-installed subscriber) simply wins,
/// and this becomes a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_reentrant() {
        // Both calls must succeed without panicking
        init_logging();
        init_logging();
    }
}
