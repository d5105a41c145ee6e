//! Defines the app level error type and conversions to rendered HTML pages and alerts.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, api::Resource, html::error_view};

/// The errors that may occur in the application.
///
/// Every variant names the resource collection the failing request was for,
/// so failures can be reported per resource on the dashboard.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The budget API could not be reached at the transport level.
    #[error("could not reach the budget API for {resource}: {details}")]
    ApiUnreachable {
        /// The collection the request was for.
        resource: Resource,
        /// The underlying transport error, stringified for logging.
        details: String,
    },

    /// The budget API answered with a non-success status code.
    #[error("the budget API returned HTTP {status} for {resource}")]
    ApiStatus {
        /// The collection the request was for.
        resource: Resource,
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The budget API answered with a body that was not the expected JSON.
    #[error("could not decode the {resource} response from the budget API: {details}")]
    MalformedResponse {
        /// The collection the request was for.
        resource: Resource,
        /// The underlying decode error, stringified for logging.
        details: String,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("request to the budget API failed: {self}");

        (
            StatusCode::BAD_GATEWAY,
            error_view(
                "Bad Gateway",
                "502",
                "The budget service is unavailable.",
                "Check that the backend is running and reachable, then refresh the page.",
            ),
        )
            .into_response()
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert fragment.
    ///
    /// Used by htmx endpoints whose error responses are swapped into the
    /// page-level alert container instead of replacing the whole page.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match &self {
            Error::ApiUnreachable { resource, .. } => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Couldn't reach the budget service".to_owned(),
                    details: format!(
                        "The request for {resource} never got a response. \
                        Check that the backend is running, then try again."
                    ),
                },
            ),
            Error::ApiStatus { resource, status } => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "The budget service reported an error".to_owned(),
                    details: format!(
                        "The request for {resource} was answered with HTTP {status}. \
                        Try again, and check the backend logs if the problem persists."
                    ),
                },
            ),
            Error::MalformedResponse { resource, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Unexpected response from the budget service".to_owned(),
                    details: format!(
                        "The {resource} response could not be read. \
                        The backend may be a different version than this app expects."
                    ),
                },
            ),
        };

        tracing::error!("request to the budget API failed: {self}");

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{api::Resource, test_utils::parse_html_fragment};

    use super::Error;

    #[tokio::test]
    async fn unreachable_error_becomes_bad_gateway_alert() {
        let error = Error::ApiUnreachable {
            resource: Resource::Expenses,
            details: "connection refused".to_owned(),
        };

        let response = error.into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = parse_html_fragment(response).await;
        let text = html.html();
        assert!(
            text.contains("Couldn't reach the budget service"),
            "alert should name the failure, got: {text}"
        );
        assert!(
            text.contains("expenses"),
            "alert should name the resource, got: {text}"
        );
    }

    #[tokio::test]
    async fn malformed_response_becomes_internal_error_alert() {
        let error = Error::MalformedResponse {
            resource: Resource::Goals,
            details: "expected value at line 1".to_owned(),
        };

        let response = error.into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_display_names_resource_and_status() {
        let error = Error::ApiStatus {
            resource: Resource::Budgets,
            status: 503,
        };

        assert_eq!(
            error.to_string(),
            "the budget API returned HTTP 503 for budgets"
        );
    }
}
