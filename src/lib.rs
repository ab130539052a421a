//! Categorizer is a microservice that assigns a spending category to a
//! financial transaction based on its title and amount.
//!
//! This library provides a REST API with a single categorization endpoint
//! backed by a pure, keyword-based classifier. The service keeps no state:
//! every request is classified independently and nothing is persisted.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod category;
mod endpoints;
mod logging;
mod routing;

pub use category::{Category, CategorizeData, CategoryData, categorize};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be parsed as a transaction to categorize.
    ///
    /// Callers should pass in the rejection text from the JSON extractor so
    /// the client can see which field was missing or mistyped.
    #[error("could not parse the request body: {0}")]
    MalformedInput(String),
}

/// The JSON body of an error response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorData {
    /// A description of what was wrong with the request.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MalformedInput(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorData { error: details }),
            )
                .into_response(),
        }
    }
}
