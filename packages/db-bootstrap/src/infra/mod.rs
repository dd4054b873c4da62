//! Infrastructure layer - driver wiring for the database handles.

pub mod db;
