//! Concurrent loading of the three resource collections.
//!
//! The three list calls are issued together and joined. The summary is
//! all-or-nothing: if any collection fails to load, the partial results are
//! discarded and every failure is reported against its resource so the view
//! can say exactly which parts of the backend are unhealthy.

use crate::{
    Error,
    api::{ApiClient, Resource},
    dashboard::aggregation::{Summary, summarize},
};

/// A resource that failed to load, with the reason.
#[derive(Debug)]
pub(super) struct FailedResource {
    /// The collection that could not be loaded.
    pub resource: Resource,
    /// Why it could not be loaded.
    pub error: Error,
}

/// Fetch all three collections concurrently and aggregate them.
///
/// Returns the failures, one per failed resource, if any fetch failed.
pub(super) async fn load_summary(api: &ApiClient) -> Result<Summary, Vec<FailedResource>> {
    let (expenses, budgets, goals) = tokio::join!(
        api.list_expenses(),
        api.list_budgets(),
        api.list_goals(),
    );

    let mut failures = Vec::new();

    let expenses = note_failure(expenses, Resource::Expenses, &mut failures);
    let budgets = note_failure(budgets, Resource::Budgets, &mut failures);
    let goals = note_failure(goals, Resource::Goals, &mut failures);

    match (expenses, budgets, goals) {
        (Some(expenses), Some(budgets), Some(goals)) => Ok(summarize(&expenses, budgets, goals)),
        _ => Err(failures),
    }
}

fn note_failure<T>(
    result: Result<T, Error>,
    resource: Resource,
    failures: &mut Vec<FailedResource>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::error!("could not load {resource}: {error}");
            failures.push(FailedResource { resource, error });
            None
        }
    }
}
