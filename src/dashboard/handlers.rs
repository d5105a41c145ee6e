//! Dashboard route handler and view assembly.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    api::ApiClient,
    dashboard::{
        aggregation::Summary,
        cards::stat_cards_view,
        fetch::{FailedResource, load_summary},
        progress::{category_breakdown_view, goal_progress_view},
    },
    endpoints,
};

/// The state needed for displaying the dashboard fragment.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the budget API.
    pub api: ApiClient,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render the overview fragment that htmx swaps into the dashboard section.
///
/// The three collections are fetched concurrently and the summary is only
/// computed once all of them arrive. If any fetch fails the partial data is
/// discarded and the fragment names each resource that could not be loaded.
pub async fn get_dashboard_partial(State(state): State<DashboardState>) -> Response {
    match load_summary(&state.api).await {
        Ok(summary) => dashboard_view(&summary).into_response(),
        Err(failures) => dashboard_error_view(&failures).into_response(),
    }
}

fn dashboard_view(summary: &Summary) -> Markup {
    html! {
        (stat_cards_view(summary))

        div class="mt-12 grid lg:grid-cols-2 gap-8" {
            (category_breakdown_view(summary))
            (goal_progress_view(&summary.goals))
        }
    }
}

fn dashboard_error_view(failures: &[FailedResource]) -> Markup {
    html! {
        div class="bg-red-950/40 border border-red-400/30 rounded-xl p-6 text-red-100" {
            h3 class="text-lg font-semibold" { "Couldn't load your overview" }

            ul class="mt-3 space-y-1 text-sm list-disc list-inside" {
                @for failure in failures {
                    li { (failure.error) }
                }
            }

            button
                hx-get=(endpoints::DASHBOARD)
                hx-target="#dashboard-content"
                hx-swap="innerHTML"
                class="mt-4 px-4 py-2 rounded-lg bg-red-400/20 border border-red-400/40
                    font-semibold hover:bg-red-400/30 transition"
            {
                "Retry"
            }
        }
    }
}
