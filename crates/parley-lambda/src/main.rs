use tracing_subscriber::EnvFilter;

use parley_lambda::config::Config;
use parley_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    tracing::info!(model_api_url = %config.model_api_url, "starting parley");

    let app = parley_lambda::app(AppState::new(&config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
