//! Dashboard module
//!
//! Provides the overview fragment showing summary stat tiles, the per-category
//! spending breakdown, and goal progress. The fragment is fetched by htmx on
//! page load and again whenever a quick-add form fires the refresh signal.

mod aggregation;
mod cards;
mod fetch;
mod handlers;
mod progress;

pub use handlers::{DashboardState, get_dashboard_partial};
