//! The route paths served by this app.

/// The landing page with the hero, dashboard, and quick-add forms.
pub const ROOT: &str = "/";
/// The dashboard overview fragment fetched by htmx.
pub const DASHBOARD: &str = "/dashboard";
/// The endpoint the expense quick-add form posts to.
pub const POST_EXPENSE: &str = "/quick-add/expense";
/// The endpoint the budget quick-add form posts to.
pub const POST_BUDGET: &str = "/quick-add/budget";
/// The endpoint the goal quick-add form posts to.
pub const POST_GOAL: &str = "/quick-add/goal";
