//! Proportional bars for the category breakdown and goal progress panels.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, Summary},
    goal::Goal,
    html::{EMPTY_STATE_STYLE, PANEL_STYLE, format_currency},
};

const CATEGORY_BAR_FILL: &str = "h-full bg-gradient-to-r from-emerald-400 to-cyan-400";
const GOAL_BAR_FILL: &str = "h-full bg-gradient-to-r from-fuchsia-400 to-rose-400";

/// Width of a category's bar as a percentage of total spend.
///
/// A zero total is treated as one so empty data renders empty bars rather
/// than dividing by zero.
pub(super) fn category_share(amount: f64, total: f64) -> f64 {
    let denominator = if total == 0.0 { 1.0 } else { total };

    ((amount / denominator) * 100.0).clamp(0.0, 100.0)
}

/// Width of a goal's bar as a percentage of its target.
///
/// A zero target is treated as one; progress never renders past 100%.
pub(super) fn goal_completion(current: f64, target: f64) -> f64 {
    let denominator = if target == 0.0 { 1.0 } else { target };

    ((current / denominator) * 100.0).clamp(0.0, 100.0)
}

/// Renders the "Spending by Category" panel.
pub(super) fn category_breakdown_view(summary: &Summary) -> Markup {
    html! {
        div class=(PANEL_STYLE) {
            h3 class="font-semibold text-white/90" { "Spending by Category" }

            div class="mt-6 space-y-4" {
                @for entry in &summary.by_category {
                    (category_row(entry, summary.total))
                }

                @if summary.by_category.is_empty() {
                    p class=(EMPTY_STATE_STYLE) { "No expenses yet. Add one below." }
                }
            }
        }
    }
}

fn category_row(entry: &CategoryTotal, total: f64) -> Markup {
    html! {
        div class="flex items-center gap-4 text-white/80" {
            div class="w-28 truncate" title=(entry.category) { (entry.category) }

            (proportional_bar(category_share(entry.amount, total), CATEGORY_BAR_FILL))

            div class="w-24 text-right" { (format_currency(entry.amount)) }
        }
    }
}

/// Renders the "Goals Progress" panel.
pub(super) fn goal_progress_view(goals: &[Goal]) -> Markup {
    html! {
        div class=(PANEL_STYLE) {
            h3 class="font-semibold text-white/90" { "Goals Progress" }

            div class="mt-6 space-y-4" {
                @for goal in goals {
                    (goal_row(goal))
                }

                @if goals.is_empty() {
                    p class=(EMPTY_STATE_STYLE) { "No goals yet. Create one below." }
                }
            }
        }
    }
}

fn goal_row(goal: &Goal) -> Markup {
    html! {
        div class="space-y-2" {
            div class="flex justify-between text-white/80" {
                span {
                    (goal.name)

                    @if let Some(deadline) = goal.deadline {
                        span class="ml-2 text-sm text-white/50" { "by " (deadline) }
                    }
                }

                span {
                    (format_currency(goal.current_amount))
                    " / "
                    (format_currency(goal.target_amount))
                }
            }

            (proportional_bar(
                goal_completion(goal.current_amount, goal.target_amount),
                GOAL_BAR_FILL,
            ))
        }
    }
}

/// Renders a horizontal bar filled to `percentage` of its width.
fn proportional_bar(percentage: f64, fill_style: &str) -> Markup {
    let clamped = percentage.clamp(0.0, 100.0);

    // Ensure minimum 3% width so rounded corners are visible
    let display_percentage = if clamped > 0.0 && clamped < 3.0 {
        3.0
    } else {
        clamped
    };

    html! {
        div
            class="flex-1 h-3 bg-white/10 rounded-full overflow-hidden"
            role="progressbar"
            aria-valuenow=(format!("{clamped:.0}"))
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if clamped > 0.0 {
                div
                    class=(fill_style)
                    style=(format!("width: {display_percentage:.1}%"))
                {}
            }
        }
    }
}
