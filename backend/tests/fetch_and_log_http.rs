//! Client behaviour against a live Query Service on an ephemeral port.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

mod support;

use std::path::{Path, PathBuf};

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::web;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use url::Url;
use user_records::domain::User;
use user_records::inbound::http::health::HealthState;
use user_records::server::build_client_app;

use support::{RunningQueryService, client_state, repository_with_ages, unreachable_base};

struct LogFile {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFile {
    fn lines(&self) -> Vec<User> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw
                .lines()
                .map(|line| serde_json::from_str(line).expect("each line is a user"))
                .collect(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => panic!("log unreadable: {err}"),
        }
    }
}

#[fixture]
fn log_file() -> LogFile {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("users.json");
    LogFile { _dir: dir, path }
}

async fn get(base: Url, log_path: &Path, uri: &str) -> (StatusCode, Vec<u8>) {
    let app = actix_test::init_service(build_client_app(
        web::Data::new(HealthState::new()),
        client_state(base, log_path),
    ))
    .await;
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;
    let status = res.status();
    let body = actix_test::read_body(res).await.to_vec();
    (status, body)
}

#[rstest]
#[case("/getUsers", 3)]
#[case("/getUsers?value=2", 2)]
#[case("/getUsers?value=abc", 3)]
#[actix_web::test]
async fn fetched_users_are_returned_and_logged(
    log_file: LogFile,
    #[case] uri: &str,
    #[case] expected: usize,
) {
    let service = RunningQueryService::spawn(repository_with_ages(&[15, 11, 40]));
    let (status, body) = get(service.base(), &log_file.path, uri).await;

    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_slice(&body).expect("JSON array");
    assert_eq!(users.len(), expected);
    assert_eq!(log_file.lines(), users);
}

#[rstest]
#[actix_web::test]
async fn age_lookups_are_relayed(log_file: LogFile) {
    let service = RunningQueryService::spawn(repository_with_ages(&[15, 11, 40, 9]));
    let (status, body) = get(service.base(), &log_file.path, "/getUsers/age?value=12").await;

    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_slice(&body).expect("JSON array");
    let ages: Vec<_> = users.iter().map(|user| user.age).collect();
    assert_eq!(ages, vec![15, 40]);
    assert_eq!(log_file.lines(), users);
}

#[rstest]
#[actix_web::test]
async fn successive_requests_append(log_file: LogFile) {
    let service = RunningQueryService::spawn(repository_with_ages(&[15, 11, 40]));
    let (first, _) = get(service.base(), &log_file.path, "/getUsers?value=1").await;
    let (second, _) = get(service.base(), &log_file.path, "/getUsers/age?value=20").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    let ages: Vec<_> = log_file.lines().iter().map(|user| user.age).collect();
    assert_eq!(ages, vec![15, 40]);
}

#[rstest]
#[case("/getUsers/age?value=5", "status 400")]
#[case("/getUsers/age?value=abc", "Invalid age parameter")]
#[case("/getUsers/age", "status 404")]
#[actix_web::test]
async fn downstream_rejections_become_internal_errors(
    log_file: LogFile,
    #[case] uri: &str,
    #[case] expected: &str,
) {
    let service = RunningQueryService::spawn(repository_with_ages(&[15]));
    let (status, body) = get(service.base(), &log_file.path, uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).expect("utf8 body");
    assert!(text.contains(expected), "unexpected body: {text}");
    assert!(log_file.lines().is_empty());
}

#[rstest]
#[actix_web::test]
async fn unreachable_query_service_is_an_internal_error(log_file: LogFile) {
    let (status, body) = get(unreachable_base(), &log_file.path, "/getUsers").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let text = String::from_utf8(body).expect("utf8 body");
    assert!(text.starts_with("query service request failed"), "unexpected body: {text}");
    assert!(log_file.lines().is_empty());
}

#[rstest]
#[actix_web::test]
async fn landing_page_links_both_lookups(log_file: LogFile) {
    let (status, body) = get(unreachable_base(), &log_file.path, "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf8 body");
    assert!(html.contains("/getUsers"));
    assert!(html.contains("/getUsers/age"));
}
