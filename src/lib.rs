pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod providers;
pub mod routes;
pub mod state;
pub mod types;

pub use axum;
pub use reqwest;
