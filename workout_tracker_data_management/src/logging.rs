use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the fmt subscriber, filtered by `RUST_LOG` and defaulting to trace for the workout crates.
/// Safe to call more than once, later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_tracker_data_management=trace,workout_tracker_app=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
