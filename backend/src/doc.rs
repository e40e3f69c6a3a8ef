//! OpenAPI documentation for the Query Service.
//!
//! [`QueryServiceDoc`] registers the two user lookups, the health probes, and
//! the [`User`](crate::domain::User) schema. Swagger UI serves it in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::User;

/// OpenAPI document for the Query Service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User records Query Service",
        description = "Read-only access to stored user records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_users_from_age,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User)),
    tags(
        (name = "users", description = "User record lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct QueryServiceDoc;
