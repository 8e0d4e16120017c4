mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    config::Config, error::AppError, router, scheduler::maintenance, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    // Logger was already set when this fails, nothing else to do.
    let _ = dioxus_logger::init(Level::INFO);

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (session, session_store) = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let cors = startup::setup_cors(&config)?;
    let image_store = startup::setup_image_store(&config)?;
    let mailer = startup::setup_mailer(&config)?;

    maintenance::start_scheduler(db.clone(), session_store, &config.maintenance_cron).await?;

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        startup::oauth_provider(&config),
        config.app_url.clone(),
        image_store,
        mailer,
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
