use backend::{build_state, check_database};
use db_bootstrap::load_runtime_env;
use tracing::{error, info};

mod telemetry;

#[tokio::main]
async fn main() {
    let env = load_runtime_env();
    telemetry::init_tracing(env);

    let builder = match build_state().with_env_config(env) {
        Ok(builder) => builder,
        Err(e) => {
            error!(error = %e, "failed to load database config");
            std::process::exit(1);
        }
    };

    let state = match builder.build() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to bootstrap database handles");
            std::process::exit(1);
        }
    };

    if let Err(e) = check_database(&state).await {
        error!(error = %e, "database readiness check failed");
        std::process::exit(1);
    }

    info!("backend started; waiting for shutdown signal");
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::process::exit(1);
    }
    info!("shutting down");
}
