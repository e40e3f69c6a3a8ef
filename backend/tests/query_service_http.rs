//! End-to-end Query Service behaviour over the in-memory repository.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

// The client-side helpers are exercised by the other suites.
#[expect(dead_code, reason = "shared helpers for the client suites")]
mod support;

use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use actix_web::web;
use rstest::rstest;
use user_records::domain::User;
use user_records::domain::ports::UserRepository;
use user_records::inbound::http::health::HealthState;
use user_records::middleware::TRACE_ID_HEADER;
use user_records::server::build_query_service_app;

use support::{query_service_state, repository_with_ages};

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    trace_id: Option<String>,
    body: Vec<u8>,
}

impl Reply {
    fn users(&self) -> Vec<User> {
        serde_json::from_slice(&self.body).expect("JSON array of users")
    }

    fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("utf8 body")
    }
}

async fn get(ages: &[i32], uri: &str) -> Reply {
    let repository = repository_with_ages(ages);
    let app = actix_test::init_service(build_query_service_app(
        web::Data::new(HealthState::new()),
        query_service_state(repository),
    ))
    .await;
    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;

    let header_value = |name: &str| {
        res.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let status = res.status();
    let content_type = header_value(header::CONTENT_TYPE.as_str());
    let trace_id = header_value(TRACE_ID_HEADER);
    let body = actix_test::read_body(res).await.to_vec();
    Reply {
        status,
        content_type,
        trace_id,
        body,
    }
}

#[rstest]
#[case("/users", 3)]
#[case("/users?limit=2", 2)]
#[case("/users?limit=1", 1)]
#[case("/users?limit=10", 3)]
#[case("/users?limit=abc", 3)]
#[case("/users?limit=0", 3)]
#[case("/users?limit=-4", 3)]
#[case("/users?limit=", 3)]
#[case("/users?limit=2&limit=1", 2)]
#[actix_web::test]
async fn limit_selects_records(#[case] uri: &str, #[case] expected: usize) {
    let reply = get(&[15, 11, 40], uri).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    assert_eq!(reply.users().len(), expected);
}

#[rstest]
#[actix_web::test]
async fn records_serialise_with_camel_case_fields() {
    let reply = get(&[33], "/users").await;
    let json: serde_json::Value = serde_json::from_slice(&reply.body).expect("JSON");
    assert_eq!(
        json,
        serde_json::json!([{
            "id": 1,
            "name": "Name 33",
            "lastName": "Lastname 330",
            "age": 33,
            "placeOfBirth": "Kaluga",
            "salary": 100_000
        }])
    );
}

#[rstest]
#[case("/users/12", vec![15, 40])]
#[case("/users/11", vec![15, 11, 40])]
#[case("/users/15", vec![15, 40])]
#[case("/users/20", vec![40])]
#[case("/users/41", vec![])]
#[case("/users/3000000000", vec![])]
#[actix_web::test]
async fn age_filter_is_inclusive(#[case] uri: &str, #[case] expected: Vec<i32>) {
    let reply = get(&[15, 11, 40, 9], uri).await;
    assert_eq!(reply.status, StatusCode::OK);
    let ages: Vec<_> = reply.users().iter().map(|user| user.age).collect();
    assert_eq!(ages, expected);
}

#[rstest]
#[actix_web::test]
async fn empty_results_are_an_empty_array() {
    let reply = get(&[15], "/users/20").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.text(), "[]");
}

#[rstest]
#[case("/users/5")]
#[case("/users/10")]
#[case("/users/-3")]
#[case("/users/abc")]
#[case("/users/12.5")]
#[actix_web::test]
async fn invalid_ages_are_rejected(#[case] uri: &str) {
    let reply = get(&[15], uri).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply.content_type.as_deref(),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(reply.text(), "Invalid age parameter");
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id() {
    let reply = get(&[15], "/users").await;
    let trace_id = reply.trace_id.expect("trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
}

#[rstest]
#[case("/users")]
#[case("/users?limit=1")]
#[case("/users/30")]
#[actix_web::test]
async fn store_failures_are_internal_errors(#[case] uri: &str) {
    let repository = repository_with_ages(&[15]);
    repository.close().await.expect("close succeeds");
    let app = actix_test::init_service(build_query_service_app(
        web::Data::new(HealthState::new()),
        query_service_state(repository),
    ))
    .await;

    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = actix_test::read_body(res).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert!(
        text.starts_with("Error fetching records"),
        "unexpected body: {text}"
    );
    assert!(text.contains("repository is closed"));
}

#[rstest]
#[case("/health/live", StatusCode::OK)]
#[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
#[actix_web::test]
async fn probes_report_process_state(#[case] uri: &str, #[case] expected: StatusCode) {
    let reply = get(&[], uri).await;
    assert_eq!(reply.status, expected);
}
