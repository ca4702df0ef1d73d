use clap::Parser;
use sre_mcp_relay::agent::AppState;
use sre_mcp_relay::config::{Args, RelayConfig};
use sre_mcp_relay::error::RelayError;
use sre_mcp_relay::router::create_app_router;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), RelayError> {
    let args = Args::parse();
    init_tracing(args.log_json);

    // Initialize application state
    let config = RelayConfig::from(&args);
    let state = AppState::new(config)?.shared();

    // Build application router with all routes and middleware
    let app = create_app_router(state.clone());

    let addr = args.listen_addr();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        agent_service = %state.config.agent_service_url,
        "Starting SRE agent MCP relay"
    );
    info!("MCP endpoint: http://{}/mcp", addr);
    info!("SSE endpoint: http://{}/sse", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("MCP relay stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down MCP relay...");
}
