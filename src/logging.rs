//! Tracing/logging initialization
//!
//! Logs go to stderr so they never interleave with menu output on stdout.
//! The default level is `warn`; set `RUST_LOG` (e.g. `RUST_LOG=shopledger=debug`)
//! to see ledger mutations and saves.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only when a global subscriber is already installed
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::warn!("still logging after a second init");
    }
}
