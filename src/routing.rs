//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    budget::create_budget_endpoint,
    dashboard::get_dashboard_partial,
    endpoints,
    expense::create_expense_endpoint,
    goal::create_goal_endpoint,
    home::get_home_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::DASHBOARD, get(get_dashboard_partial))
        .route(endpoints::POST_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::POST_BUDGET, post(create_budget_endpoint))
        .route(endpoints::POST_GOAL, post(create_goal_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::AppState;

    use super::build_router;

    #[test]
    fn router_builds_with_every_route() {
        let state = AppState::new("http://localhost:8000");

        // Route registration panics on malformed paths, so building the
        // router is itself the assertion.
        let _router = build_router(state);
    }
}
