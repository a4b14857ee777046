use aula_api::config::Config;
use aula_api::state::AppState;
use aula_records::EntityKind;
use aula_store::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let store = FileStore::new(&config.data_dir);

    if config.init_collections {
        for kind in EntityKind::ALL {
            match store.ensure_collection(kind.collection()) {
                Ok(true) => info!(collection = kind.collection(), "created empty collection"),
                Ok(false) => {}
                Err(e) => {
                    eprintln!("failed to initialize {kind}: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    let app = aula_api::app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&config.api_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("failed to bind {}: {e}", config.api_addr);
            std::process::exit(1);
        });

    info!(
        addr = %config.api_addr,
        data_dir = %config.data_dir.display(),
        "aula-api listening"
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("server error: {e}");
        std::process::exit(1);
    }
    info!("shutdown complete");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("shutdown signal received");
}
