//! The savings goal resource: domain model, quick-add form, and create endpoint.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxResponseTrigger;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState,
    alert::Alert,
    api::ApiClient,
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, QUICK_ADD_CARD_STYLE, submit_button},
};

/// A savings goal as stored by the budget API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Goal {
    /// What the user is saving for.
    #[serde(default)]
    pub name: String,
    /// The amount to reach, in dollars.
    #[serde(default)]
    pub target_amount: f64,
    /// The amount saved so far, in dollars.
    #[serde(default)]
    pub current_amount: f64,
    /// When the user wants to reach the goal, if they set a date.
    #[serde(default)]
    pub deadline: Option<Date>,
}

/// A new savings goal to create on the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    /// What the user is saving for.
    pub name: String,
    /// The amount to reach, in dollars.
    pub target_amount: f64,
    /// The amount saved so far, in dollars.
    pub current_amount: f64,
    /// When the user wants to reach the goal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,
}

/// The form data for the goal quick-add form.
///
/// Blank numeric inputs parse as `None` and are coerced to zero; a blank
/// deadline stays unset.
#[derive(Debug, Deserialize)]
pub struct GoalForm {
    /// What the user is saving for.
    #[serde(default)]
    pub name: String,
    /// The amount to reach.
    #[serde(default)]
    pub target_amount: Option<f64>,
    /// The amount saved so far.
    #[serde(default)]
    pub current_amount: Option<f64>,
    /// When the user wants to reach the goal.
    #[serde(default)]
    pub deadline: Option<Date>,
}

/// The state needed for creating a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalState {
    /// The client for the budget API.
    pub api: ApiClient,
}

impl FromRef<AppState> for CreateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Handle a goal quick-add submission.
pub async fn create_goal_endpoint(
    State(state): State<CreateGoalState>,
    Form(form): Form<GoalForm>,
) -> Response {
    let record = NewGoal {
        name: form.name,
        target_amount: form.target_amount.unwrap_or(0.0),
        current_amount: form.current_amount.unwrap_or(0.0),
        deadline: form.deadline,
    };

    match state.api.create_goal(&record).await {
        Ok(_) => {
            let body = html! {
                (quick_add_goal_form())
                (Alert::success("Goal created").into_oob_html())
            };

            (HxResponseTrigger::normal(["data-updated"]), body).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// Render the goal quick-add form.
pub fn quick_add_goal_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_GOAL)
            hx-target="this"
            hx-swap="outerHTML"
            hx-disabled-elt="find button[type='submit']"
            hx-target-error="#alert-container"
            class=(QUICK_ADD_CARD_STYLE)
        {
            div class="grid sm:grid-cols-4 gap-4"
            {
                div
                {
                    label for="goal-name" class=(FORM_LABEL_STYLE) { "Name" }

                    input
                        id="goal-name"
                        name="name"
                        type="text"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="goal-target" class=(FORM_LABEL_STYLE) { "Target" }

                    input
                        id="goal-target"
                        name="target_amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="goal-current" class=(FORM_LABEL_STYLE) { "Current" }

                    input
                        id="goal-current"
                        name="current_amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="goal-deadline" class=(FORM_LABEL_STYLE) { "Deadline" }

                    input
                        id="goal-deadline"
                        name="deadline"
                        type="date"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div class="mt-4"
            {
                (submit_button("Create Goal", "Creating..."))
            }
        }
    }
}



#[cfg(test)]
mod create_goal_endpoint_tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        api::ApiClient,
        test_utils::{get_header, spawn_stub_backend},
    };

    use super::{CreateGoalState, GoalForm, create_goal_endpoint};

    #[tokio::test]
    async fn posts_goal_with_coerced_amounts() {
        let backend = spawn_stub_backend(
            json!({"items": []}),
            json!({"items": []}),
            json!({"items": []}),
        )
        .await;
        let state = CreateGoalState {
            api: ApiClient::new(&backend.base_url),
        };

        let form = GoalForm {
            name: "Emergency fund".to_owned(),
            target_amount: Some(1000.0),
            current_amount: None,
            deadline: Some(date!(2026 - 12 - 31)),
        };
        let response = create_goal_endpoint(State(state), Form(form)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_header(&response, "hx-trigger"), "data-updated");

        let received = backend.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["name"], json!("Emergency fund"));
        assert_eq!(received[0]["target_amount"], json!(1000.0));
        assert_eq!(received[0]["current_amount"], json!(0.0));
        assert_eq!(received[0]["deadline"], json!("2026-12-31"));
    }

    #[tokio::test]
    async fn unset_deadline_is_omitted_from_the_request_body() {
        let backend = spawn_stub_backend(
            json!({"items": []}),
            json!({"items": []}),
            json!({"items": []}),
        )
        .await;
        let state = CreateGoalState {
            api: ApiClient::new(&backend.base_url),
        };

        let form = GoalForm {
            name: "Trip".to_owned(),
            target_amount: None,
            current_amount: None,
            deadline: None,
        };
        create_goal_endpoint(State(state), Form(form)).await;

        let received = backend.received.lock().unwrap();
        assert!(received[0].get("deadline").is_none());
    }
}
