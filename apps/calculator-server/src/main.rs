use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_bootstrap::{AppConfig, CliOverrides};
use calculator::CalculatorModule;
use calculator_sdk::{CalculatorClientV1 as _, Operation};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator Server - arithmetic utility over HTTP and the command line
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - arithmetic utility over HTTP and the command line")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Evaluate one operation and print the result line
    Eval {
        /// Operation name or symbol (add, -, sqrt, %, ...)
        operation: String,
        /// First operand
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Second operand, ignored by unary operations
        #[arg(allow_hyphen_values = true)]
        rhs: Option<String>,
    },
    /// Report whether an integer is prime
    Prime {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CALC__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    calc_bootstrap::init_logging(&config.logging);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_json_pretty()?);
        return Ok(ExitCode::SUCCESS);
    }

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await.map(|()| ExitCode::SUCCESS),
        Commands::Check => check_config(&config).map(|()| ExitCode::SUCCESS),
        Commands::Eval { operation, lhs, rhs } => {
            eval_once(&config, &operation, &lhs, rhs.as_deref().unwrap_or(""))
        }
        Commands::Prime { n } => check_prime(&config, n).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.server.socket_addr()?;
    CalculatorModule::from_app_config(config)?;
    println!("Configuration is valid");
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn eval_once(config: &AppConfig, operation: &str, lhs: &str, rhs: &str) -> Result<ExitCode> {
    let operation: Operation = operation.parse()?;
    let module = CalculatorModule::from_app_config(config)?;

    let outcome = module.perform(operation, lhs, rhs);
    println!("{}", module.render(&outcome));

    Ok(if outcome.is_value() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn check_prime(config: &AppConfig, n: i64) -> Result<ExitCode> {
    let module = CalculatorModule::from_app_config(config)?;
    let is_prime = module.client().is_prime(n).await?;

    if is_prime {
        println!("{n} is prime");
    } else {
        println!("{n} is not prime");
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_server(config: &AppConfig) -> Result<()> {
    tracing::info!("Calculator Server starting");

    let addr = config.server.socket_addr()?;
    let module = CalculatorModule::from_app_config(config)?;
    let router = module.router();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = calc_bootstrap::wait_for_shutdown().await {
                tracing::error!(error = %e, "signal handler failed; shutting down");
            }
        })
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
