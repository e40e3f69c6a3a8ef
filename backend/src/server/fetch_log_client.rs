//! Fetch-and-log client application and listener.

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::http::fetch_log::{get_users, get_users_by_age};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::landing::{index, static_file};
use crate::inbound::http::state::ClientState;
use crate::middleware::Trace;

/// Wire the client routes, landing page, probes, and tracing middleware.
pub fn build_client_app(
    health_state: web::Data<HealthState>,
    state: web::Data<ClientState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(state)
        .wrap(Trace)
        .service(index)
        .service(static_file)
        .service(get_users)
        .service(get_users_by_age)
        .service(ready)
        .service(live)
}

/// Construct the client HTTP server.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_client_server(
    health_state: web::Data<HealthState>,
    state: ClientState,
    bind_addr: SocketAddr,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        build_client_app(server_health_state.clone(), state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "fetch-and-log client listening");
    Ok(server)
}
