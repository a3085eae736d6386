//! Catador CLI - wine cultivar inference server
//!
//! # Commands
//!
//! - `serve` - Start the inference server
//! - `predict` - Submit a test input file to a running server
//! - `info` - Show version info

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::warn;

use catador::{
    api::{create_router, AppState},
    artifact::{WineModel, DEFAULT_ARTIFACT_PATH},
    client::PredictionClient,
    error::{CatadorError, Result},
    wine::{TestInput, CLASS_LABELS},
};

/// Catador - wine cultivar inference service
///
/// Serves a tree-ensemble wine classifier over a small REST API.
#[derive(Parser)]
#[command(name = "catador")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the inference server
    ///
    /// Examples:
    ///   catador serve --demo
    ///   catador serve --model model/wine_model.ctd --port 8000
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Path to the .ctd model artifact
        #[arg(short, long, default_value = DEFAULT_ARTIFACT_PATH)]
        model: PathBuf,

        /// Write the built-in demo model to a temp file and serve it
        #[arg(long)]
        demo: bool,
    },
    /// Submit a test input file to a running server
    ///
    /// The file carries one sample under the "input_test" key:
    ///   {"input_test": {"alcohol": 13.2, ..., "proline": 1050}}
    Predict {
        /// Path to the test input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Server to talk to
        #[arg(short, long, default_value = "http://127.0.0.1:8000")]
        url: String,
    },
    /// Show version info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            model,
            demo,
        } => {
            let artifact_path = if demo {
                write_demo_artifact()?
            } else {
                model
            };
            serve(&host, port, artifact_path).await?;
        }
        Commands::Predict { input, url } => {
            predict(&input, &url)?;
        }
        Commands::Info => {
            println!("Catador v{}", catador::VERSION);
            println!("Wine cultivar inference service");
            println!();
            println!("Features:");
            println!("  - Tree-ensemble classifier over the 13-feature wine schema");
            println!("  - .ctd model artifacts, validated on every load");
            println!("  - REST API with health, prediction, and Prometheus metrics");
            println!("  - Terminal dashboard (catador-dashboard)");
        }
    }

    Ok(())
}

/// Write the built-in demo model next to the other temp files
fn write_demo_artifact() -> Result<PathBuf> {
    let path = std::env::temp_dir().join("catador-demo.ctd");
    WineModel::demo().save(&path)?;
    println!("Demo artifact written to {}", path.display());
    Ok(path)
}

/// Run the inference server until interrupted
async fn serve(host: &str, port: u16, artifact_path: PathBuf) -> Result<()> {
    println!("Starting Catador inference server...");

    if !artifact_path.is_file() {
        // not fatal: the artifact is read per request, so it can
        // appear on disk later; until then predictions answer 500
        warn!(
            "model artifact {} not found, predictions will fail until it exists",
            artifact_path.display()
        );
        eprintln!(
            "Warning: model artifact {} not found",
            artifact_path.display()
        );
    }

    println!("Serving artifact: {}", artifact_path.display());

    let state = AppState::new(artifact_path);
    let app = create_router(state);

    let addr: SocketAddr =
        format!("{host}:{port}")
            .parse()
            .map_err(|e| CatadorError::Config {
                reason: format!("invalid address {host}:{port}: {e}"),
            })?;

    println!("Server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /         - Health check");
    println!("  POST /predict  - Classify one wine sample");
    println!("  GET  /metrics  - Prometheus metrics");
    println!();
    println!("Example:");
    println!("  curl http://{addr}/");
    println!();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CatadorError::Config {
            reason: format!("failed to bind {addr}: {e}"),
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| CatadorError::Config {
            reason: format!("server error: {e}"),
        })?;

    Ok(())
}

/// Load a test input file and ask a running server for its class
fn predict(input: &Path, url: &str) -> Result<()> {
    let test_input = TestInput::from_path(input)?;
    let client = PredictionClient::new(url);

    println!("Submitting {} to {}", input.display(), client.base_url());
    let class = client.predict(&test_input.input_test)?;
    let label = CLASS_LABELS
        .get(class as usize)
        .copied()
        .unwrap_or("unknown class");

    println!("Predicted wine class: {label} (class id {class})");
    Ok(())
}
