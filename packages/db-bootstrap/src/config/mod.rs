//! Environment-derived configuration: runtime mode, driver settings and the
//! assembled [`db::DbConfig`].

pub mod db;
pub mod driver;
pub mod env;
