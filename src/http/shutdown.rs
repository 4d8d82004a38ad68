//! Graceful shutdown and signal handling.
//!
//! Handles:
//! - SIGTERM/SIGINT: Graceful shutdown with connection draining
//! - SIGHUP: Certificate reload (manual TLS mode only)

use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

/// Resolves when Ctrl+C or SIGTERM is received.
///
/// A signal whose handler cannot be installed never resolves; the failure is
/// logged and the other signal still works.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    }
}

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received the server stops accepting new connections
/// and waits up to `grace` for in-flight ones before closing them.
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(async move {
        let signal = shutdown_signal().await;
        tracing::info!(signal, "Received shutdown signal, initiating graceful shutdown");

        handle.graceful_shutdown(Some(grace));
        tracing::info!(
            grace_seconds = grace.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}

/// Setup SIGHUP handler for certificate reload (manual TLS mode).
///
/// On SIGHUP the certificate and key are re-read from disk. If loading fails
/// the previous certificate stays in use.
#[cfg(unix)]
pub fn setup_reload_handler(tls_config: RustlsConfig, cert_path: String, key_path: String) {
    tokio::spawn(async move {
        let mut sighup =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup()) {
                Ok(sighup) => sighup,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGHUP handler, certificate reload disabled");
                    return;
                }
            };

        while sighup.recv().await.is_some() {
            tracing::info!("Received SIGHUP, reloading TLS certificates");
            // Already logged; the previous certificate stays active
            let _ = reload_certificates(&tls_config, &cert_path, &key_path).await;
        }
    });
}

/// Re-read the certificate and key into `tls_config`.
///
/// On failure the error is logged and returned; `tls_config` keeps serving
/// the previously loaded certificate.
pub async fn reload_certificates(
    tls_config: &RustlsConfig,
    cert_path: &str,
    key_path: &str,
) -> std::io::Result<()> {
    match tls_config.reload_from_pem_file(cert_path, key_path).await {
        Ok(()) => {
            tracing::info!(cert = %cert_path, key = %key_path, "TLS certificates reloaded");
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                cert = %cert_path,
                key = %key_path,
                "Failed to reload TLS certificates, keeping previous ones"
            );
            Err(e)
        }
    }
}

/// No-op reload handler for non-Unix platforms.
#[cfg(not(unix))]
pub fn setup_reload_handler(_tls_config: RustlsConfig, _cert_path: String, _key_path: String) {
    tracing::warn!("Certificate hot-reload via SIGHUP not supported on this platform");
}
