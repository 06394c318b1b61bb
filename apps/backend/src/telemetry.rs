use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global JSON subscriber. RUST_LOG overrides the default
/// filter; SQL-layer noise is capped at warn.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sea_orm=warn,sqlx=warn"));

    let fmt_layer = fmt::layer().with_target(false).with_ansi(false).json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
