//! Defines the route handler for paths that match nothing.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Fallback handler for unknown paths.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "This page doesn't exist.",
            "Head back to the homepage and try again from there.",
        ),
    )
        .into_response()
}
