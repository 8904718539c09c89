use std::{io, process::ExitCode};

use clap::{Parser, error::ErrorKind};
use stock_watchlist::{
    app::{Cli, Command, commands},
    config::{API_KEY_VAR, Config},
    logging::init_tracing,
    server,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_tracing(cli.command.default_log_level());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if cli.command.requires_api_key() && !config.has_api_key() {
        eprintln!("Please set the {} environment variable.", API_KEY_VAR);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Serve { listen } => {
            let config = match listen {
                Some(addr) => config.with_listen_addr(addr),
                None => config,
            };
            server::serve(&config).await
        }
        command => commands::run(command, &config, &mut io::stdout().lock()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
