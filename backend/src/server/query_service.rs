//! Query Service application and listener.

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::QueryServiceDoc;
use crate::domain::ports::UserRepository;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::QueryServiceState;
use crate::inbound::http::users::{list_users, list_users_from_age};
use crate::middleware::Trace;

/// Wire the Query Service routes, probes, and tracing middleware.
pub fn build_query_service_app(
    health_state: web::Data<HealthState>,
    state: web::Data<QueryServiceState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(state)
        .wrap(Trace)
        .service(list_users)
        .service(list_users_from_age)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", QueryServiceDoc::openapi()),
    );

    app
}

/// Construct the Query Service HTTP server.
///
/// Readiness flips to ready once the socket is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_query_service_server(
    health_state: web::Data<HealthState>,
    state: QueryServiceState,
    bind_addr: SocketAddr,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        build_query_service_app(server_health_state.clone(), state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "query service listening");
    Ok(server)
}

/// Drain probes and close the record store once the server has stopped.
///
/// A serving error takes precedence; otherwise a failed close becomes the
/// process error so the exit status reflects it.
///
/// # Errors
///
/// Returns the serving error, or the close failure wrapped in
/// [`std::io::Error`].
pub async fn shutdown_query_service(
    health_state: &HealthState,
    repository: &dyn UserRepository,
    served: std::io::Result<()>,
) -> std::io::Result<()> {
    health_state.mark_draining();
    let closed = repository.close().await;
    match (served, closed) {
        (Err(error), Err(close_error)) => {
            warn!(error = %close_error, "closing user repository failed");
            Err(error)
        }
        (Err(error), Ok(())) => Err(error),
        (Ok(()), Err(close_error)) => Err(std::io::Error::other(format!(
            "close user repository: {close_error}"
        ))),
        (Ok(()), Ok(())) => Ok(()),
    }
}
