use animal_rescue::config::Config;
use animal_rescue::rescue::seed;
use animal_rescue::router::create_app_router;
use animal_rescue::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    // Load the seed dataset
    let animals = match &config.seed_file {
        Some(path) => {
            log::info!("Loading seed dataset from {}", path.display());
            seed::load_animals(path).await?
        }
        None => seed::default_animals()?,
    };

    // Initialize application state
    let state = Arc::new(AppState::from_animals(animals, config.pickup_location.clone())?);

    // Build application router with all routes and middleware
    let app = create_app_router(state, &config.allowed_origins);

    log::info!("Server running on http://{}", config.addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
