//! Fetch-and-log client HTTP handlers.
//!
//! ```text
//! GET /getUsers?value=10
//! GET /getUsers/age?value=30
//! ```

use actix_web::{HttpRequest, get, web};
use tracing::info;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::ClientState;
use crate::inbound::http::users::first_query_value;

/// Fetch users from the Query Service with an optional limit, log them, and
/// return them.
#[get("/getUsers")]
pub async fn get_users(
    state: web::Data<ClientState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<User>>> {
    let value = first_query_value(&req, "value");
    info!(limit = value.as_deref(), "fetching users");
    let users = state.relay.relay_users(value).await?;
    info!(count = users.len(), "users fetched and logged");
    Ok(web::Json(users))
}

/// Fetch users at or above an age from the Query Service, log them, and
/// return them.
#[get("/getUsers/age")]
pub async fn get_users_by_age(
    state: web::Data<ClientState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<User>>> {
    let value = first_query_value(&req, "value");
    info!(age = value.as_deref(), "fetching users by age");
    let users = state.relay.relay_users_from_age(value).await?;
    info!(count = users.len(), "users fetched and logged");
    Ok(web::Json(users))
}
