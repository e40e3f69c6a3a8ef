//! Query Service HTTP handlers.
//!
//! ```text
//! GET /users?limit=10
//! GET /users/{age}
//! ```

use actix_web::{HttpRequest, get, web};
use tracing::debug;

use crate::domain::{AgeThreshold, User, UserSelection};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::QueryServiceState;

/// First value of a query-string parameter, if present.
///
/// Reading the raw query keeps malformed values from failing extraction; the
/// domain policies decide what they mean.
pub(crate) fn first_query_value(req: &HttpRequest, name: &str) -> Option<String> {
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// List users, optionally capped by `limit`.
///
/// A missing, non-numeric, zero, or negative `limit` returns every record.
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("limit" = Option<String>, Query, description = "Maximum number of records; ignored unless a positive integer")
    ),
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<QueryServiceState>,
    req: HttpRequest,
) -> ApiResult<web::Json<Vec<User>>> {
    let raw_limit = first_query_value(&req, "limit");
    let selection = UserSelection::from_limit_param(raw_limit.as_deref());
    debug!(limit = raw_limit.as_deref(), ?selection, "listing users");
    let users = state.users.list_users(selection).await?;
    Ok(web::Json(users))
}

/// List users whose age is at least the path threshold.
#[utoipa::path(
    get,
    path = "/users/{age}",
    params(
        ("age" = String, Path, description = "Inclusive minimum age; must be an integer greater than 10")
    ),
    responses(
        (status = 200, description = "Users at or above the age", body = [User]),
        (status = 400, description = "Invalid age parameter", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "listUsersFromAge"
)]
#[get("/users/{age}")]
pub async fn list_users_from_age(
    state: web::Data<QueryServiceState>,
    age: web::Path<String>,
) -> ApiResult<web::Json<Vec<User>>> {
    let threshold = AgeThreshold::parse(age.as_str())?;
    debug!(age = threshold.get(), "listing users by age");
    let users = state.users.list_users_from_age(threshold).await?;
    Ok(web::Json(users))
}
