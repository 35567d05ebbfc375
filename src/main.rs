use std::sync::Arc;

use llm_gateway::config::GatewayConfig;
use llm_gateway::extract::{CaseExtractor, MockExtractor};
use llm_gateway::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = GatewayConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let extractor: Arc<dyn CaseExtractor> = Arc::new(MockExtractor::new());

    eprintln!("LLM Gateway v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", extractor.backend_name());
    eprintln!("   Health: http://{}/health", config.bind_addr());
    eprintln!(
        "   Extract: http://{}/api/v1/extract_email_info\n",
        config.bind_addr()
    );

    server::run(&config, extractor).await?;

    Ok(())
}
