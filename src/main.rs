use crate::config::Config;
use crate::db::connection::{init_db, seed_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, Site};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod prefetch;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::from_env()?;

    // 1️⃣ One pool for the whole process
    let db = Database::open(&cfg.db)?;

    // 2️⃣ Optional schema / demo data
    if let Some(schema) = &cfg.db.schema_path {
        init_db(&db, schema)?;
    }
    if let Some(seed) = &cfg.db.seed_path {
        seed_db(&db, seed)?;
    }

    let site = Site {
        logo_url: cfg.logo_url.clone(),
    };

    // 3️⃣ Serve
    info!(addr = %cfg.bind_addr, workers = cfg.max_workers, "starting server");
    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let pool = db.clone();
    let result = server.serve(move |req, _info| match handle(req, &pool, &site) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    db.shutdown();
    info!("server shut down cleanly");
    Ok(())
}
