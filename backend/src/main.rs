//! Query Service entry-point: serves stored user records over HTTP.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::info;

use user_records::domain::UserRecordsService;
use user_records::inbound::http::health::HealthState;
use user_records::inbound::http::state::QueryServiceState;
use user_records::outbound::persistence::DieselUserRepository;
use user_records::server::{create_query_service_server, shutdown_query_service};
use user_records::settings::{DatabaseSettings, QueryServiceSettings};
use user_records::telemetry::init_tracing;

const BINARY: &str = "records-server";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let server_settings = QueryServiceSettings::load_for(BINARY).map_err(io::Error::other)?;
    server_settings.validate().map_err(io::Error::other)?;
    let database_settings = DatabaseSettings::load_for(BINARY).map_err(io::Error::other)?;
    database_settings.validate().map_err(io::Error::other)?;
    let bind_addr = server_settings.bind_addr().map_err(io::Error::other)?;

    let repository = Arc::new(
        DieselUserRepository::connect(&database_settings)
            .await
            .map_err(|error| io::Error::other(format!("open user repository: {error}")))?,
    );
    let users = Arc::new(UserRecordsService::new(Arc::clone(&repository)));

    let health_state = web::Data::new(HealthState::new());
    let server = create_query_service_server(
        health_state.clone(),
        QueryServiceState::new(users),
        bind_addr,
    )?;
    let served = server.await;
    let result = shutdown_query_service(&health_state, repository.as_ref(), served).await;
    info!("query service stopped");
    result
}
