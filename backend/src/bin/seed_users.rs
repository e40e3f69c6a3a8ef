//! Populate the `users` table with synthetic records.
//!
//! Inserts run one at a time and stop at the first failure, leaving earlier
//! rows in place.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use synthetic_users::{DEFAULT_USER_COUNT, GeneratorConfig, SyntheticUsers};
use tokio::runtime::Builder;
use tracing::{info, warn};

use user_records::domain::ports::UserRepository;
use user_records::domain::{NewUser, UserSeeder};
use user_records::outbound::persistence::DieselUserRepository;
use user_records::settings::DatabaseSettings;
use user_records::telemetry::init_tracing;

const BINARY: &str = "seed-users";

/// `seed-users` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-users",
    about = "Insert synthetic user records into the users table",
    version
)]
struct CliArgs {
    /// Number of users to insert.
    #[arg(long, value_name = "n", default_value_t = DEFAULT_USER_COUNT)]
    count: usize,
    /// Seed for a reproducible run; drawn from entropy when omitted.
    #[arg(long, value_name = "u64")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let args = CliArgs::parse();

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let settings = DatabaseSettings::load_for(BINARY)?;
    settings.validate()?;

    let config = GeneratorConfig::default().with_count(args.count);
    let users = match args.seed {
        Some(seed) => SyntheticUsers::from_seed(&config, seed)?,
        None => SyntheticUsers::from_entropy(&config)?,
    };
    info!(count = args.count, seed = users.seed(), "seeding users");

    let repository = Arc::new(
        DieselUserRepository::connect(&settings)
            .await
            .wrap_err("open user repository")?,
    );
    let seeder = UserSeeder::new(Arc::clone(&repository));
    let outcome = seeder.seed(users.map(NewUser::from)).await;

    let closed = repository.close().await;
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(error) => {
            if let Err(close_error) = closed {
                warn!(error = %close_error, "closing user repository failed");
            }
            return Err(error).wrap_err("seeding stopped");
        }
    };
    closed.wrap_err("close user repository")?;
    info!(inserted = outcome.inserted, "seeding finished");
    Ok(())
}
