//! User records library: the Query Service, the fetch-and-log client, and
//! the seeder share this crate's domain, adapters, and server wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
pub mod telemetry;

pub use middleware::Trace;
