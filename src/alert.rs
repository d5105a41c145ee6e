//! Alert fragments for showing success and error messages to users.
//!
//! Alerts render into the fixed `#alert-container` element that the base
//! layout places on every page. Error responses from htmx endpoints are
//! directed there via `hx-target-error`, and success toasts arrive as
//! out-of-band swaps alongside the main response.

use maud::{Markup, html};

const SUCCESS_STYLE: &str = "rounded-lg border border-emerald-400/40 \
    bg-emerald-950/90 px-4 py-3 text-emerald-100 shadow-lg backdrop-blur";

const ERROR_STYLE: &str = "rounded-lg border border-red-400/40 \
    bg-red-950/90 px-4 py-3 text-red-100 shadow-lg backdrop-blur";

/// A user-facing alert message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Confirmation of a completed action.
    Success {
        /// Short headline, e.g. "Expense added".
        message: String,
        /// Supporting detail; may be empty.
        details: String,
    },
    /// A failed action, with enough detail for the user to act on.
    Error {
        /// Short headline, e.g. "Couldn't reach the budget service".
        message: String,
        /// Supporting detail; may be empty.
        details: String,
    },
}

impl Alert {
    /// Create a success alert without details.
    pub fn success(message: &str) -> Self {
        Alert::Success {
            message: message.to_owned(),
            details: String::new(),
        }
    }

    /// Render the alert as a fragment for the alert container.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_STYLE, message, details),
            Alert::Error { message, details } => (ERROR_STYLE, message, details),
        };

        html! {
            div class=(style) role="alert" {
                p class="font-semibold" { (message) }

                @if !details.is_empty() {
                    p class="mt-1 text-sm opacity-90" { (details) }
                }
            }
        }
    }

    /// Render the alert wrapped for an htmx out-of-band swap into the alert
    /// container, for responses whose main body goes elsewhere.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML" {
                (self.into_html())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Alert;

    #[test]
    fn error_alert_renders_message_and_details() {
        let alert = Alert::Error {
            message: "Something broke".to_owned(),
            details: "It was the network.".to_owned(),
        };

        let html = alert.into_html().into_string();

        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Something broke"));
        assert!(html.contains("It was the network."));
    }

    #[test]
    fn success_alert_without_details_has_single_paragraph() {
        let html = Alert::success("Expense added").into_html().into_string();

        assert!(html.contains("Expense added"));
        assert_eq!(html.matches("<p").count(), 1);
    }

    #[test]
    fn oob_wrapper_targets_alert_container() {
        let html = Alert::success("Budget saved").into_oob_html().into_string();

        assert!(html.contains("id=\"alert-container\""));
        assert!(html.contains("hx-swap-oob=\"innerHTML\""));
    }
}
