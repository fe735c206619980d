use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loc_shelf::modules::cataloguing_pro;
use loc_shelf::{config, server, services};

const USAGE: &str = "Usage: loc-shelf input.csv column_name [output.csv]\n       loc-shelf --serve";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loc_shelf=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    cataloguing_pro::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--serve") {
        tracing::info!("Starting in server mode...");
        return match server::run_server(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Server stopped: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let (input, column) = match (args.first(), args.get(1)) {
        (Some(input), Some(column)) => (PathBuf::from(input), column.as_str()),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    let output = PathBuf::from(args.get(2).unwrap_or(&config.output_path));

    match services::sort_csv_file(&input, column, &output, &config.normalized_column) {
        Ok(summary) => {
            tracing::info!(
                "Sorted {} rows ({} unshelved)",
                summary.rows,
                summary.unshelved
            );
            println!("Sorted file written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to sort {}: {}", input.display(), e);
            ExitCode::FAILURE
        }
    }
}
