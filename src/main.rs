use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use countrymgr::{
    config::Config,
    controller::Controller,
    persist::{CountryStore, sqlite::SqliteCountryStore},
};

fn main() -> Result<()> {
    let config = Config::load().context("loading configuration")?;
    init_tracing(&config.log_filter)?;

    let store = SqliteCountryStore::open(&config.database_path).with_context(|| {
        format!(
            "opening country database at {}",
            config.database_path.display()
        )
    })?;

    let stdin = io::stdin();
    let mut controller = Controller::new(store, stdin.lock(), io::stdout().lock());
    let session = controller.run();

    let (store, _, _) = controller.into_parts();
    let closed = store.close();
    session.context("writing to the console")?;
    closed.context("closing country database")?;
    info!("session finished");
    Ok(())
}

fn init_tracing(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter '{filter}'"))?;
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(io::stderr)
        .compact()
        .init();
    Ok(())
}
