//! Focus Timer CLI - a focus-session timer with long-break cadence
//!
//! This tool helps you stay focused with alternating work and break
//! intervals:
//! - 25 minutes of focus
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 sessions

use anyhow::Result;
use clap::{CommandFactory, Parser};

use focus_timer::cli::{Cli, Commands, Display, IpcClient};
use focus_timer::daemon;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Toggle) => {
            let client = IpcClient::new();
            let response = client.toggle().await?;
            Display::show_toggle(&response);
        }
        Some(Commands::Reset) => {
            let client = IpcClient::new();
            let response = client.reset().await?;
            Display::show_reset(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new();
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Config(args)) => {
            let client = IpcClient::new();
            let response = client.config(&args).await?;
            Display::show_config(&response);
        }
        Some(Commands::Sound) => {
            let client = IpcClient::new();
            let response = client.sound().await?;
            Display::show_sound(&response);
        }
        Some(Commands::TestSound { cue }) => {
            let client = IpcClient::new();
            let response = client.test_sound(cue.into()).await?;
            Display::show_sound(&response);
        }
        Some(Commands::Daemon) => {
            daemon::run(&daemon::ipc::default_socket_path()).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
