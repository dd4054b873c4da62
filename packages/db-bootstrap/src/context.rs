use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sqlx::PgPool;

use crate::config::driver::DriverSettings;
use crate::config::env::RuntimeEnv;

/// The two database handles shared by the whole application.
///
/// `db` always wraps the same pool as `sql`. Cloning is cheap; both handles
/// are reference-counted.
#[derive(Debug, Clone)]
pub struct DbHandles {
    env: RuntimeEnv,
    driver: DriverSettings,
    sql: PgPool,
    db: DatabaseConnection,
}

impl DbHandles {
    pub(crate) fn new(
        env: RuntimeEnv,
        driver: DriverSettings,
        sql: PgPool,
        db: DatabaseConnection,
    ) -> Self {
        Self {
            env,
            driver,
            sql,
            db,
        }
    }

    /// Raw SQL execution handle
    pub fn sql(&self) -> &PgPool {
        &self.sql
    }

    /// ORM handle built on top of [`Self::sql`]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn env(&self) -> RuntimeEnv {
        self.env
    }

    /// Driver settings the pool was built with
    pub fn driver(&self) -> &DriverSettings {
        &self.driver
    }

    /// True when the ORM handle sits on the very same pool as the raw handle.
    pub fn shares_pool(&self) -> bool {
        same_pool(&self.sql, self.db.get_postgres_connection_pool())
    }

    /// True when both sets of handles were produced by the same initialization.
    pub fn same_pool_as(&self, other: &DbHandles) -> bool {
        same_pool(&self.sql, &other.sql)
    }
}

// Clones of a pool share one connect-options Arc; separately built pools never do.
fn same_pool(a: &PgPool, b: &PgPool) -> bool {
    Arc::ptr_eq(&a.connect_options(), &b.connect_options())
}
