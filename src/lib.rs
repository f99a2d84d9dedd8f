pub mod common;
pub mod models;
