//! Telemetry helpers for applications embedding `candle-layout`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! helpers below or install their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is unset: layout-pass summaries only.
pub const DEFAULT_FILTER: &str = "candle_layout=info";

/// Initializes a compact `tracing` subscriber honoring `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback directive, e.g.
/// `"candle_layout=trace"` to see every collapsed bar.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
