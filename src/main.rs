use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::watch;

use assetd::assets::{index_directory, AssetTable};
use assetd::cli::Cli;
use assetd::config::{AppState, Config};
use assetd::error::StartupError;
use assetd::http::mime::MagicSniffer;
use assetd::{logger, server};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), StartupError> {
    let cfg = Config::load(cli)?;

    if cli.print_config {
        print!("{}", cfg.to_toml()?);
        return Ok(());
    }

    logger::init(&cfg).map_err(StartupError::Logger)?;

    // Index before the runtime exists; nothing is served from a partial table
    let assets = index_directory(&cli.directory, &MagicSniffer)?;
    logger::log_indexed_routes(&cli.directory, &assets);

    // Create the Tokio runtime, sized by server.workers when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers.filter(|&n| n > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(serve(cfg, assets))
}

async fn serve(cfg: Config, assets: AssetTable) -> Result<(), StartupError> {
    let addr = cfg.socket_addr().map_err(StartupError::Address)?;
    let listener =
        server::create_listener(addr).map_err(|source| StartupError::Bind { addr, source })?;

    let state = Arc::new(AppState::new(cfg, assets));
    logger::log_server_start(&listener.local_addr()?, &state.config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    server::spawn_signal_handler(shutdown_tx)?;

    server::run(listener, state, shutdown_rx).await;
    logger::log_shutdown_complete();
    Ok(())
}
