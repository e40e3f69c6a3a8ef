//! Shared fixtures for the user records integration suites.

use std::net::TcpListener;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use url::Url;
use user_records::domain::{FetchAndLogService, NewUser, UserRecordsService};
use user_records::inbound::http::health::HealthState;
use user_records::inbound::http::landing::StaticAssets;
use user_records::inbound::http::state::{ClientState, QueryServiceState};
use user_records::outbound::memory::InMemoryUserRepository;
use user_records::outbound::query_service::HttpUsersSource;
use user_records::outbound::user_log::JsonLinesUserLog;
use user_records::server::build_query_service_app;

/// A user with derived names and the given age.
pub(crate) fn new_user(age: i32) -> NewUser {
    NewUser {
        name: format!("Name {age}"),
        last_name: format!("Lastname {}", age * 10),
        age,
        place_of_birth: "Kaluga".to_owned(),
        salary: 100_000,
    }
}

/// Repository holding one user per age, ids assigned in order.
pub(crate) fn repository_with_ages(ages: &[i32]) -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::with_users(
        ages.iter().copied().map(new_user),
    ))
}

/// Query Service state over the given repository.
pub(crate) fn query_service_state(
    repository: Arc<InMemoryUserRepository>,
) -> web::Data<QueryServiceState> {
    web::Data::new(QueryServiceState::new(Arc::new(UserRecordsService::new(
        repository,
    ))))
}

/// Client state relaying to `base` and logging to `log_path`.
pub(crate) fn client_state(base: Url, log_path: &Path) -> web::Data<ClientState> {
    let source =
        HttpUsersSource::new(base, Duration::from_secs(5)).expect("reqwest client builds");
    let relay = FetchAndLogService::new(
        Arc::new(source),
        Arc::new(JsonLinesUserLog::new(log_path)),
    );
    web::Data::new(ClientState::new(
        Arc::new(relay),
        Arc::new(StaticAssets::default()),
    ))
}

/// A Query Service listening on an ephemeral local port.
///
/// The server runs on its own thread and actix system; dropping the value
/// asks it to stop.
pub(crate) struct RunningQueryService {
    base: Url,
    handle: ServerHandle,
}

impl RunningQueryService {
    pub(crate) fn spawn(repository: Arc<InMemoryUserRepository>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local address");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                let health = web::Data::new(HealthState::new());
                let state = query_service_state(repository);
                let server = HttpServer::new(move || {
                    build_query_service_app(health.clone(), state.clone())
                })
                .workers(1)
                .listen(listener)
                .expect("listen on bound socket")
                .run();
                tx.send(server.handle()).expect("report server handle");
                server.await
            })
        });

        let handle = rx.recv().expect("server handle");
        let base = Url::parse(&format!("http://{addr}")).expect("valid base URL");
        Self { base, handle }
    }

    /// Base URL of the running service.
    pub(crate) fn base(&self) -> Url {
        self.base.clone()
    }
}

impl Drop for RunningQueryService {
    fn drop(&mut self) {
        drop(self.handle.stop(false));
    }
}

/// A base URL nothing listens on.
pub(crate) fn unreachable_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("valid base URL")
}
