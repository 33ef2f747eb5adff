//! Server assembly and startup.

use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_sessions::{cookie::Key, ExpiredDeletion, SessionStore};

use crate::{
    config::Config,
    data::session::ShopSessionStore,
    error::Error,
    model::app::AppState,
    pipeline::{self, assets::StaticAssets},
    router,
};

/// How often expired sessions are deleted from the database.
pub const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the upload directory if it doesn't exist yet
pub async fn prepare_upload_dir(config: &Config) -> Result<(), Error> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    Ok(())
}

/// Spawn the background task deleting expired sessions every [`SESSION_CLEANUP_INTERVAL`]
pub fn start_session_cleanup(store: ShopSessionStore) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);

        loop {
            interval.tick().await;

            if let Err(e) = store.delete_expired().await {
                tracing::error!("Failed to delete expired sessions: {}", e);
            }
        }
    })
}

/// Build the router with the request pipeline applied
pub fn build_app<S>(state: AppState, assets: StaticAssets, store: S, key: Key) -> Router
where
    S: SessionStore + Clone,
{
    let routes = router::routes().with_state(state.clone());

    pipeline::apply(routes, state, assets, store, key)
}

/// Connect to the database, start background tasks and serve until shutdown
pub async fn run(config: Config) -> Result<(), Error> {
    let key = config.session_key()?;
    let db = connect_to_database(&config).await?;
    prepare_upload_dir(&config).await?;

    let store = ShopSessionStore::new(db.clone());
    let cleanup = start_session_cleanup(store.clone());

    let state = AppState::from((db, config.upload_dir.clone()));
    let assets = StaticAssets::new(&config.public_dir, &config.upload_dir);
    let app = build_app(state, assets, store, key);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Starting server on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cleanup.abort();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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

    tracing::info!("Shutdown signal received");
}
