use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Readiness check through both handles.
///
/// The pool is lazy, so this is where the first real connection is made;
/// bad credentials or an unreachable endpoint show up here.
pub async fn check_database(state: &AppState) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(state.sql()).await?;
    debug!("sql handle answered");

    state.db().ping().await?;
    debug!(backend = ?state.db().get_database_backend(), "orm handle answered");

    info!(env = %state.handles().env(), "database ready");
    Ok(())
}
