use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. `BOOKING_LOG` overrides the
/// default `booking_core=info` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env("BOOKING_LOG")
            .unwrap_or_else(|_| EnvFilter::new("booking_core=info"));

        fmt().with_env_filter(filter).init();
    });
}
