use gudang_tui::{error::AppResult, initialize_logging, App, AppError};
use std::{env, process};
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command line arguments first (before logging to avoid noise)
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) || args.contains(&"-V".to_string()) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_help();
        process::exit(0);
    }

    initialize_logging().map_err(|e| AppError::application(e.to_string()))?;

    info!("Gudang TUI starting");

    let app = App::new().await?;
    app.run().await?;

    info!("Gudang TUI terminated gracefully");
    Ok(())
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS]", env!("CARGO_PKG_NAME"));
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message and exit");
    println!("    -V, --version    Print version information and exit");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG         Set logging level (debug, info, warn, error)");
    println!();
    println!("CONFIGURATION:");
    println!("    ./gudang.toml or ~/.config/gudang-tui/config.toml");
    println!("    backend.base_url defaults to http://localhost:3700");
}
