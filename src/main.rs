use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use notes_core::{NoteService, NotesConfig, open_store};

/// Main entry point for the notes service
///
/// Starts the REST server on port 3000 (configurable via NOTES_REST_ADDR).
///
/// # Environment Variables
/// - `NOTES_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MONGODB_URI`: MongoDB connection string (default: "mongodb://localhost:27017/notes-app")
/// - `NOTES_STORE`: `mongodb` or `memory` (default: "mongodb")
/// - `NOTES_SEED_ON_LIST`: seed an empty collection on every list request (default: true)
///
/// The database is not contacted until the first request that needs it.
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes_run=info".parse()?)
                .add_directive("notes_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = NotesConfig::from_env()?;
    let rest_addr = std::env::var("NOTES_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!(
        "++ Starting notes REST on {} (store: {}, seed on list: {})",
        rest_addr,
        cfg.store_backend(),
        cfg.seed_on_list()
    );

    let state = AppState {
        note_service: NoteService::new(open_store(&cfg)),
        seed_on_list: cfg.seed_on_list(),
    };
    let app = api_rest::router(state);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
