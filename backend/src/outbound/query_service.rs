//! Reqwest-backed adapter for the Query Service.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into domain users. Parameters are
//! forwarded untouched so the Query Service stays the single validator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UsersSource, UsersSourceError};

const USERS_SEGMENT: &str = "users";
const LIMIT_PARAM: &str = "limit";

/// [`UsersSource`] that performs HTTP GET requests against one base URL.
pub struct HttpUsersSource {
    client: Client,
    base: Url,
}

impl HttpUsersSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn users_url(&self, age: Option<&str>) -> Result<Url, UsersSourceError> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                UsersSourceError::transport(format!("{} cannot be used as a base URL", self.base))
            })?;
            segments.pop_if_empty().push(USERS_SEGMENT);
            if let Some(age) = age {
                segments.push(age);
            }
        }
        Ok(url)
    }

    async fn get_users(
        &self,
        url: Url,
        limit: Option<String>,
    ) -> Result<Vec<User>, UsersSourceError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(limit) = limit {
            request = request.query(&[(LIMIT_PARAM, limit)]);
        }

        debug!(%url, "requesting users from query service");
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_users(body.as_ref())
    }
}

#[async_trait]
impl UsersSource for HttpUsersSource {
    async fn fetch_users(&self, limit: Option<String>) -> Result<Vec<User>, UsersSourceError> {
        let url = self.users_url(None)?;
        self.get_users(url, limit).await
    }

    async fn fetch_users_from_age(&self, age: String) -> Result<Vec<User>, UsersSourceError> {
        let url = self.users_url(Some(&age))?;
        self.get_users(url, None).await
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UsersSourceError> {
    serde_json::from_slice(body).map_err(|err| UsersSourceError::decode(err.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> UsersSourceError {
    UsersSourceError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UsersSourceError {
    UsersSourceError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Non-network coverage; request round trips live in `tests/`.

    use super::*;
    use rstest::rstest;

    fn source(base: &str) -> HttpUsersSource {
        HttpUsersSource::new(
            Url::parse(base).expect("valid URL"),
            Duration::from_secs(1),
        )
        .expect("client builds")
    }

    #[rstest]
    #[case("http://localhost:8082", None, "http://localhost:8082/users")]
    #[case("http://localhost:8082/", None, "http://localhost:8082/users")]
    #[case("http://query:8082/api/", Some("12"), "http://query:8082/api/users/12")]
    #[case("http://localhost:8082", Some("abc"), "http://localhost:8082/users/abc")]
    #[case("http://localhost:8082", Some(""), "http://localhost:8082/users/")]
    fn builds_users_urls(#[case] base: &str, #[case] age: Option<&str>, #[case] expected: &str) {
        let url = source(base).users_url(age).expect("URL builds");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn age_segments_are_percent_encoded() {
        let url = source("http://localhost:8082")
            .users_url(Some("1/2"))
            .expect("URL builds");
        assert_eq!(url.as_str(), "http://localhost:8082/users/1%2F2");
    }

    #[rstest]
    fn status_errors_keep_code_and_body() {
        let error = map_status_error(StatusCode::BAD_REQUEST, b"Invalid age parameter\n");
        assert_eq!(error, UsersSourceError::status(400, "Invalid age parameter"));
    }

    #[rstest]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let UsersSourceError::Status { body, .. } =
            map_status_error(StatusCode::INTERNAL_SERVER_ERROR, body.as_bytes())
        else {
            panic!("expected a status error");
        };
        assert!(body.ends_with("..."));
        assert_eq!(body.chars().count(), 163);
    }

    #[rstest]
    fn parses_user_arrays() {
        let body = br#"[{"id":1,"name":"Name 1","lastName":"Lastname 10","age":15,"placeOfBirth":"Kazan","salary":50000}]"#;
        let users = parse_users(body).expect("JSON decodes");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].age, 15);
        assert_eq!(users[0].place_of_birth, "Kazan");
    }

    #[rstest]
    #[case(b"null".as_slice())]
    #[case(b"{\"id\":1}".as_slice())]
    #[case(b"not json".as_slice())]
    fn rejects_non_array_bodies(#[case] body: &[u8]) {
        let error = parse_users(body).expect_err("decode fails");
        assert!(matches!(error, UsersSourceError::Decode { .. }));
    }
}
