// src/main.rs - Desktop entry point

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

use reon::config::{AppConfig, ConfigManager};
use reon::error::{Error, Result};
use reon::guard;
use reon::{logging, platform, ui, SessionManager};

#[derive(Parser)]
#[command(
    name = "reon",
    version = reon::VERSION,
    about = "Reon.ai marketing dashboard for the desktop",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard window
    Run,
    /// Print the persisted session state
    Status,
    /// Sign out and clear the persisted session
    Reset,
    /// Validate configuration
    ValidateConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.command {
        Some(Commands::ValidateConfig { config }) => config.clone().or_else(|| cli.config.clone()),
        _ => cli.config.clone(),
    };

    // Dioxus desktop owns its own runtime, so config loading gets a short-lived one
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::config(format!("Failed to start runtime: {}", e)))?;
    let manager = runtime.block_on(ConfigManager::load(config_path.as_deref()))?;

    if let Some(Commands::ValidateConfig { .. }) = &cli.command {
        let errors = runtime.block_on(manager.validate())?;
        return validate_config(errors);
    }

    let mut config = runtime.block_on(manager.get_config());
    let config_metadata = manager.get_metadata();
    drop(runtime);

    if cli.debug {
        config.logging.level = "debug".to_string();
    } else if cli.verbose {
        config.logging.level = "info".to_string();
    }
    logging::init(&config.logging)?;

    match cli.command {
        Some(Commands::Status) => show_status(&config, &config_metadata),
        Some(Commands::Reset) => reset_session(&config),
        Some(Commands::Run) | None => {
            launch_window(config);
            Ok(())
        }
        Some(Commands::ValidateConfig { .. }) => Ok(()),
    }
}

fn launch_window(config: AppConfig) {
    tracing::info!("Starting {} v{}", config.app.name, reon::VERSION);

    let window = WindowBuilder::new()
        .with_title(config.app.name.clone())
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(1280.0, 820.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(ui::App);
}

fn show_status(config: &AppConfig, config_metadata: &serde_json::Value) -> Result<()> {
    let session = SessionManager::from_config(config);
    let state = session.restore();
    let snapshot = session.snapshot();
    let decision = guard::evaluate(state);

    println!("Reon.ai Status");
    println!("==============");
    println!("Version: {}", reon::VERSION);
    println!("Platform: {}", platform::platform_name());
    println!("Config layers: {}", config_layers(config_metadata));
    println!("Storage: {}", session.storage_backend());
    println!("Session: {}", state);
    if let Some(user) = &snapshot.user {
        println!("User: {} <{}>", user.name, user.email);
    }
    if let Some(workspace) = &snapshot.workspace {
        println!("Workspace: {} ({} plan)", workspace.name, workspace.plan);
    }
    if state.is_authenticated() {
        println!("Onboarding step: {}", session.onboarding_step());
    }
    match decision.redirect_path() {
        Some(path) => println!("Dashboard: redirects to {}", path),
        None => println!("Dashboard: accessible"),
    }
    Ok(())
}

fn config_layers(metadata: &serde_json::Value) -> String {
    metadata["layer_info"]
        .as_array()
        .map(|layers| {
            layers
                .iter()
                .map(|l| {
                    let name = l["name"].as_str().unwrap_or("?");
                    let source = l["source_type"].as_str().unwrap_or("?");
                    format!("{} ({})", name, source)
                })
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn reset_session(config: &AppConfig) -> Result<()> {
    let session = SessionManager::from_config(config);
    let before = session.restore();
    session.logout();

    println!("✅ Session cleared (was {})", before);
    Ok(())
}

fn validate_config(errors: Vec<reon::config::ValidationError>) -> Result<()> {
    if errors.is_empty() {
        println!("✅ Configuration is valid");
        println!("   Version: {}", reon::VERSION);
        return Ok(());
    }

    println!("❌ Configuration has {} problem(s):", errors.len());
    for error in &errors {
        println!("   - {}", error);
    }
    process::exit(2);
}
