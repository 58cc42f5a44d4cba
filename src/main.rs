use std::sync::Arc;

use shiftdesk::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router, service::notification::LogNotifier,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;

    let state = AppState::new(db, Arc::new(LogNotifier), config.login_url.clone());
    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
