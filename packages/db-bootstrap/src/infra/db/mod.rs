pub mod core;

pub use core::{build_connect_options, connect_sql, initialize, wrap_orm};
