use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod surface;
mod utils;

use config::Config;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "wavecard=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    debug!("Loaded configuration: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = commands::handle_args(&config, &args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Done");
}
