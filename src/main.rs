//! Stockroom - Order Management Backend
//!
//! Entry point. Loads config, initializes logging, connects to PostgreSQL,
//! bootstraps the schema and starts the HTTP gateway.

use std::sync::Arc;
use std::time::Duration;

use stockroom::config::AppConfig;
use stockroom::db::Database;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = stockroom::logging::init_logging(&config);

    tracing::info!("Starting Stockroom backend in {} mode", env);

    let port = get_port_override().unwrap_or(config.gateway.port);

    let db = match Database::connect(
        &config.postgres_url,
        config.database.max_connections,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .await
    {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to connect to PostgreSQL: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db.init_schema().await {
        eprintln!("❌ FATAL: Failed to initialize database schema: {}", e);
        std::process::exit(1);
    }

    stockroom::gateway::run_server(&config.gateway.host, port, Arc::new(db)).await;
}
