//! Server construction and middleware wiring for both HTTP processes.
//!
//! Each process gets a `build_*_app` function returning a fully wired
//! [`actix_web::App`] (used directly by tests) and a `create_*_server`
//! function that binds it to a socket.

mod fetch_log_client;
mod query_service;

pub use fetch_log_client::{build_client_app, create_client_server};
pub use query_service::{
    build_query_service_app, create_query_service_server, shutdown_query_service,
};
