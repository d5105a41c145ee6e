//! The budget resource: domain model, quick-add form, and create endpoint.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
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

/// A monthly spending budget as stored by the budget API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Budget {
    /// The category the budget applies to.
    #[serde(default)]
    pub category: String,
    /// The budgeted amount in dollars.
    #[serde(default)]
    pub amount: f64,
    /// The month the budget applies to, in `YYYY-MM` form.
    #[serde(default)]
    pub month: String,
}

/// A new budget to create on the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBudget {
    /// The category the budget applies to.
    pub category: String,
    /// The budgeted amount in dollars.
    pub amount: f64,
    /// The month the budget applies to, in `YYYY-MM` form.
    pub month: String,
}

/// The form data for the budget quick-add form.
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    /// The category the budget applies to.
    #[serde(default)]
    pub category: String,
    /// The budgeted amount; blank parses as `None` and is coerced to zero.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The month the budget applies to.
    #[serde(default)]
    pub month: String,
}

/// The state needed for creating a budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetState {
    /// The client for the budget API.
    pub api: ApiClient,
}

impl FromRef<AppState> for CreateBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Handle a budget quick-add submission.
pub async fn create_budget_endpoint(
    State(state): State<CreateBudgetState>,
    Form(form): Form<BudgetForm>,
) -> Response {
    let record = NewBudget {
        category: form.category,
        amount: form.amount.unwrap_or(0.0),
        month: form.month,
    };

    match state.api.create_budget(&record).await {
        Ok(_) => {
            let body = html! {
                (quick_add_budget_form())
                (Alert::success("Budget saved").into_oob_html())
            };

            (HxResponseTrigger::normal(["data-updated"]), body).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Render the budget quick-add form.
pub fn quick_add_budget_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_BUDGET)
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            hx-target-error="#alert-container"
            class=(QUICK_ADD_CARD_STYLE)
        {
            div class="grid sm:grid-cols-3 gap-4"
            {
                div
                {
                    label for="budget-category" class=(FORM_LABEL_STYLE) { "Category" }

                    input
                        id="budget-category"
                        name="category"
                        type="text"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="budget-amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        id="budget-amount"
                        name="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="budget-month" class=(FORM_LABEL_STYLE) { "Month" }

                    input
                        id="budget-month"
                        name="month"
                        type="text"
                        placeholder="YYYY-MM"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div class="mt-4"
            {
                (submit_button("Save Budget", "Saving..."))
            }
        }
    }
}
