//! Fetch-and-log client entry-point: relays Query Service lookups and appends
//! every fetched record to a local JSON-lines log.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::info;

use user_records::domain::FetchAndLogService;
use user_records::inbound::http::health::HealthState;
use user_records::inbound::http::landing::StaticAssets;
use user_records::inbound::http::state::ClientState;
use user_records::outbound::query_service::HttpUsersSource;
use user_records::outbound::user_log::JsonLinesUserLog;
use user_records::server::create_client_server;
use user_records::settings::ClientSettings;
use user_records::telemetry::init_tracing;

const BINARY: &str = "records-client";

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = ClientSettings::load_for(BINARY).map_err(io::Error::other)?;
    settings.validate().map_err(io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let base_url = settings.query_service_url().map_err(io::Error::other)?;
    let timeout = settings.request_timeout().map_err(io::Error::other)?;

    info!(
        query_service = %base_url,
        log_path = %settings.log_path().display(),
        "starting fetch-and-log client"
    );
    let source = HttpUsersSource::new(base_url, timeout)
        .map_err(|error| io::Error::other(format!("build HTTP client: {error}")))?;
    let log = JsonLinesUserLog::new(settings.log_path());
    let relay = Arc::new(FetchAndLogService::new(Arc::new(source), Arc::new(log)));
    let assets = Arc::new(StaticAssets::open(settings.static_dir()));

    let health_state = web::Data::new(HealthState::new());
    let server = create_client_server(
        health_state.clone(),
        ClientState::new(relay, assets),
        bind_addr,
    )?;
    let result = server.await;
    health_state.mark_draining();
    info!("fetch-and-log client stopped");
    result
}
