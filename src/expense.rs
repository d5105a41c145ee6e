//! The expense resource: domain model, quick-add form, and create endpoint.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxResponseTrigger;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    alert::Alert,
    api::ApiClient,
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, QUICK_ADD_CARD_STYLE, submit_button},
};

/// An expense as stored by the budget API.
///
/// The backend may omit fields on older records, so everything defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    /// The amount spent in dollars. A missing amount counts as zero.
    #[serde(default)]
    pub amount: f64,
    /// The spending category, if one was recorded.
    #[serde(default)]
    pub category: Option<String>,
    /// Where the money was spent.
    #[serde(default)]
    pub merchant: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

/// A new expense to create on the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    /// The amount spent in dollars.
    pub amount: f64,
    /// The spending category; may be blank.
    pub category: String,
    /// Where the money was spent.
    pub merchant: String,
    /// Free-form note.
    pub note: String,
}

/// The form data for the expense quick-add form.
///
/// Numeric fields arrive as text; a blank input parses as `None` and the
/// endpoint coerces it to zero.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The amount spent in dollars.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The spending category.
    #[serde(default)]
    pub category: String,
    /// Where the money was spent.
    #[serde(default)]
    pub merchant: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The client for the budget API.
    pub api: ApiClient,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Handle an expense quick-add submission.
///
/// On success the response is a fresh, blank form plus a success toast, and
/// carries the `data-updated` trigger that makes the dashboard re-fetch.
/// Failures render an alert into the page-level alert container; the form is
/// left as the user filled it so they can retry.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let record = NewExpense {
        amount: form.amount.unwrap_or(0.0),
        category: form.category,
        merchant: form.merchant,
        note: form.note,
    };

    match state.api.create_expense(&record).await {
        Ok(_) => {
            let body = html! {
                (quick_add_expense_form())
                (Alert::success("Expense added").into_oob_html())
            };

            (HxResponseTrigger::normal(["data-updated"]), body).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Render the expense quick-add form.
///
/// The form swaps itself for the server's response, so a successful
/// submission resets every field to blank.
pub fn quick_add_expense_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_EXPENSE)
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            hx-target-error="#alert-container"
            class=(QUICK_ADD_CARD_STYLE)
        {
            div class="grid sm:grid-cols-2 gap-4"
            {
                div
                {
                    label for="expense-amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        id="expense-amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="expense-category" class=(FORM_LABEL_STYLE) { "Category" }

                    input
                        id="expense-category"
                        name="category"
                        type="text"
                        placeholder="Groceries, Rent"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="expense-merchant" class=(FORM_LABEL_STYLE) { "Merchant" }

                    input
                        id="expense-merchant"
                        name="merchant"
                        type="text"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="expense-note" class=(FORM_LABEL_STYLE) { "Note" }

                    input
                        id="expense-note"
                        name="note"
                        type="text"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div class="mt-4"
            {
                (submit_button("Add Expense", "Adding..."))
            }
        }
    }
}
