use std::sync::Arc;

use fit_meal_planner::api::{routes::create_routes, AppState};
use fit_meal_planner::config::AppConfig;
use fit_meal_planner::services::{
    build_agent_card, publish_agent_card, OpenAiCompletionClient, PlanService,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    if !config.upstream.is_key_configured() {
        warn!("OPENAI_API_KEY environment variable not set! Plans will fall back to the sample response.");
    }

    let card = build_agent_card(&config.task_endpoint_url());
    let published = publish_agent_card(&config.well_known_dir, &card).await?;
    info!("Wrote capability descriptor to {}", published.path.display());

    let client = OpenAiCompletionClient::new(config.upstream.clone())?;
    let plan_service = PlanService::new(Arc::new(client));
    let state = AppState::new(&config, plan_service, published.content);

    // Create the application routes
    let app = create_routes(state);

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("FitMealPlanner starting on http://{} ({})", address, config.environment);
    info!("Agent card available at http://{}/.well-known/agent.json", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
