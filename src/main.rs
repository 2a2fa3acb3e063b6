//! ActivityHub Notifier: client-side notification engine shell
//!
//! Wires configuration, logging, the REST client, the notification store,
//! the toast queue and the automatic notification engine, then runs until
//! a shutdown signal arrives.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use activityhub_client::BackendClient;
use activityhub_core::config::AppConfig;
use activityhub_core::error::AppError;
use activityhub_core::traits::NoopNavigator;
use activityhub_notify::{
    AutoNotificationEngine, EngineSources, NotificationStore, ToastPreference, ToastQueue,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("ACTIVITYHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Notifier error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ActivityHub notifier v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Backend client ───────────────────────────────────
    let client = Arc::new(
        BackendClient::new(&config.backend)
            .map_err(|e| AppError::configuration(format!("HTTP client init failed: {}", e)))?,
    );
    tracing::info!("Backend: {}", config.backend.base_url);

    // ── Step 2: Store, toast queue, preference ───────────────────
    let store = Arc::new(NotificationStore::new(client.clone()));
    let toasts = ToastQueue::new(config.toasts.clone());
    let preference = ToastPreference::new(config.toasts.show_on_screen);

    // ── Step 3: UI-side subscribers ──────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let observers = spawn_observers(&store, &toasts, shutdown_rx);

    // ── Step 4: Initial sync ─────────────────────────────────────
    store.fetch_all().await;
    tracing::info!(
        "Notifications loaded: {} ({} unread)",
        store.current_list().len(),
        store.current_unread_count()
    );

    // ── Step 5: Automatic notification engine ────────────────────
    let engine = Arc::new(AutoNotificationEngine::new(
        EngineSources {
            activities: client.clone(),
            participation: client.clone(),
            evidence: client,
        },
        Arc::clone(&store),
        toasts.clone(),
        preference,
        Arc::new(NoopNavigator),
        config.engine.clone(),
    ));
    engine.start();

    // ── Step 6: Run until shutdown ───────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received");

    engine.stop();
    toasts.clear();
    let _ = shutdown_tx.send(true);
    for handle in observers {
        let _ = handle.await;
    }

    tracing::info!("ActivityHub notifier shut down");
    Ok(())
}

/// Log every list, unread-count and toast snapshot, standing in for the UI
fn spawn_observers(
    store: &NotificationStore,
    toasts: &ToastQueue,
    shutdown: watch::Receiver<bool>,
) -> Vec<tokio::task::JoinHandle<()>> {
    let mut list_rx = store.subscribe_list();
    let mut unread_rx = store.subscribe_unread_count();
    let mut toast_rx = toasts.subscribe();

    let mut list_shutdown = shutdown.clone();
    let list_task = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = list_shutdown.changed() => break,
                changed = list_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let len = list_rx.borrow_and_update().len();
                    tracing::debug!("Notification list updated: {} entries", len);
                }
                changed = unread_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let unread = *unread_rx.borrow_and_update();
                    tracing::info!("Unread notifications: {}", unread);
                }
            }
        }
    });

    let mut toast_shutdown = shutdown;
    let toast_task = tokio::spawn(async move {
        let mut shown = std::collections::HashSet::new();
        loop {
            tokio::select! {
                _ = toast_shutdown.changed() => break,
                changed = toast_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = toast_rx.borrow_and_update().clone();
                    for toast in snapshot.iter().filter(|t| t.visible) {
                        if shown.insert(toast.id.clone()) {
                            tracing::info!(
                                "[toast:{}] {}{}",
                                toast.kind,
                                toast.title.as_deref().map(|t| format!("{t}: ")).unwrap_or_default(),
                                toast.message
                            );
                        }
                    }
                    shown.retain(|id| snapshot.iter().any(|t| &t.id == id));
                }
            }
        }
    });

    vec![list_task, toast_task]
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}
