//! Coinflow is the web frontend for the Coinflow personal budgeting service.
//!
//! This library provides an HTTP server that directly serves HTML pages. All
//! domain data (expenses, budgets, and savings goals) lives behind an external
//! JSON API; this crate fetches it per request, aggregates it into an overview
//! dashboard, and offers quick-add forms for creating new records. It keeps no
//! state of its own beyond the API client's connection pool.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod budget;
mod dashboard;
mod endpoints;
mod error;
mod expense;
mod goal;
mod hero;
mod home;
mod html;
mod not_found;
mod routing;
mod state;
#[cfg(test)]
mod test_utils;

pub use api::{ApiClient, Resource};
pub use error::Error;
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
