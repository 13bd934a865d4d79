/// Resolves once the process receives Ctrl+C or SIGTERM, so it can be handed
/// to `axum::serve(..).with_graceful_shutdown`.
///
/// # Panics
///
/// Panics if a signal handler cannot be installed.
pub async fn shutdown_signal(service_name: &str) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "Ctrl+C",
        () = terminate => "SIGTERM",
    };

    tracing::info!(service = service_name, signal, "Shutdown signal received, draining connections");
}
