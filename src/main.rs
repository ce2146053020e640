//! `srs-pipeline`: HTTP service that generates and validates SRS documents.
//!
//! Configuration comes from the environment (a `.env` file is loaded when
//! present); `--host` and `--port` pick the listen address.

use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;

use clap::Parser;

use srs_pipeline::api::{start_server, ApiContext};
use srs_pipeline::config::{LlmProvider, ServiceConfig, APP_VERSION};
use srs_pipeline::llm::OllamaClient;

/// Timeout for the startup model check against a local Ollama.
const OLLAMA_PREFLIGHT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser)]
#[command(name = "srs-pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SRS generation and validation service", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "SRS_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "SRS_PORT", default_value_t = 8000)]
    port: u16,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    srs_pipeline::init_tracing();

    tracing::info!("SRS pipeline starting v{}", APP_VERSION);

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Blocking HTTP clients must be dropped outside the runtime, so main
    // keeps the last handle.
    let llm = match config.build_client() {
        Ok(llm) => llm,
        Err(e) => {
            tracing::error!(error = %e, "Cannot create LLM client");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        provider = config.provider_name(),
        model = %config.model,
        timeout_secs = config.timeout_secs,
        "LLM backend configured"
    );

    if let LlmProvider::Ollama { host } = &config.provider {
        check_ollama_model(host, &config.model);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start async runtime");
            return ExitCode::FAILURE;
        }
    };

    let ctx = ApiContext::new(llm.clone(), &config.model);
    let addr = SocketAddr::new(cli.host, cli.port);
    let outcome = runtime.block_on(serve(ctx, addr));
    drop(runtime);
    drop(llm);

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

/// Warn early when the configured model is not installed. Not fatal: the
/// instance may come up after the service.
fn check_ollama_model(host: &str, model: &str) {
    let available = OllamaClient::new(host, OLLAMA_PREFLIGHT_TIMEOUT_SECS)
        .and_then(|client| client.is_model_available(model));
    match available {
        Ok(true) => tracing::info!(model, "Ollama model available"),
        Ok(false) => tracing::warn!(model, "Ollama model not installed, run `ollama pull {model}`"),
        Err(e) => tracing::warn!(host, error = %e, "Cannot reach Ollama, continuing"),
    }
}

async fn serve(ctx: ApiContext, addr: SocketAddr) -> Result<(), String> {
    let server = start_server(ctx, addr).await?;
    tracing::info!(addr = %server.addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Cannot listen for Ctrl-C, shutting down");
    }

    server.stop().await;
    Ok(())
}
