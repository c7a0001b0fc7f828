//! Log output for the chart math.
//!
//! Projection, dataset acceptance and scale fallbacks report through
//! `tracing` (`trace!` per frame, `debug!` for widened ranges, `warn!` for
//! rejected data). Nothing is printed until a subscriber exists.

/// Prints chart events to stderr, one compact line each.
///
/// The level comes from `RUST_LOG` and falls back to `info`, which hides the
/// per-frame `trace!` noise. Only available with the `telemetry` feature;
/// otherwise, or when the host already owns the global subscriber, this is a
/// no-op returning `false`.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
