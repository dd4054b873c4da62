pub mod error;
pub mod health;
pub mod infra;
pub mod state;

pub use error::AppError;
pub use health::check_database;
pub use infra::state::build_state;
pub use state::app_state::AppState;
