//! Navigator Library
//!
//! A browser navigation history simulator: a `NavigationSession` core
//! (site map plus back/forward stacks) and the line-oriented shell that
//! drives it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{OutputFormat, OutputFormatter};
pub use repl::Repl;
pub use session::{HistorySnapshot, NavigationSession};

// =============================================================================
// Main Entry Point
// =============================================================================

/// Initialize logging to stderr
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Apply command line overrides on top of the loaded configuration
///
/// JSON, quiet and `-c` runs never print a prompt or banner.
pub fn effective_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    if cli.no_banner {
        config.show_banner = false;
    }

    if cli.output != OutputFormat::Human || !cli.commands.is_empty() {
        config.prompt.clear();
        config.show_banner = false;
    }
    config
}

/// Run the shell with parsed arguments
pub fn run(cli: Cli, config: Config) -> Result<()> {
    // 1. Resolve configuration
    let config = effective_config(&cli, config);

    // 2. Wire the loop to the terminal
    let formatter = OutputFormatter::new(cli.output);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), formatter, &config);

    // 3. Scripted commands or interactive loop
    let executed = if cli.commands.is_empty() {
        repl.run()?
    } else {
        repl.run_script(&cli.commands)?
    };

    tracing::debug!(
        executed,
        pages = repl.session().page_count(),
        "session finished"
    );
    Ok(())
}

/// Execute the shell and handle errors
pub fn execute() -> i32 {
    // 1. Parse CLI arguments and load configuration
    let cli = cli::parse();
    let config = config::load_config();
    init_logging(&config);

    // 2. Call run()
    match run(cli, config) {
        Ok(()) => 0,
        Err(e) => {
            // 3. Handle errors, print to stderr
            eprintln!("Error: {}", e);

            // 4. Return appropriate exit code
            e.exit_code()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
