use std::sync::Arc;

mod config;
mod data;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path without extension
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    let level = cfg.log_level()?;
    logger::init(&cfg, level)?;

    // One thread is enough: connections are served strictly one at a time
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Tables are complete before the first connection can arrive
    let data = data::MockData::seeded();
    let listener = server::create_listener(addr)?;

    logger::log_server_start(&addr, &cfg, &data);
    let state = Arc::new(config::AppState::new(&cfg, data));

    server::start_server_loop(listener, state).await;
    Ok(())
}
