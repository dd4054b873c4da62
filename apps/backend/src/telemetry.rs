use db_bootstrap::RuntimeEnv;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// JSON logs everywhere except development, which gets compact human-readable lines.
pub fn init_tracing(env: RuntimeEnv) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if env.is_development() {
        registry.with(fmt_layer.compact()).init();
    } else {
        registry.with(fmt_layer.with_ansi(false).json()).init();
    }
}
