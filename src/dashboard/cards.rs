//! Stat tiles summarising the overview numbers.

use maud::{Markup, html};

use crate::{dashboard::aggregation::Summary, html::format_currency};

const STAT_CARD_STYLE: &str = "bg-white/5 border border-white/10 rounded-xl p-5";

/// Renders the four stat tiles: total spent, category count, budget count,
/// and goal count.
pub(super) fn stat_cards_view(summary: &Summary) -> Markup {
    html! {
        div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6" {
            (stat_card("Total Spent", &format_currency(summary.total)))
            (stat_card("Categories", &summary.by_category.len().to_string()))
            (stat_card("Budgets", &summary.budgets.len().to_string()))
            (stat_card("Goals", &summary.goals.len().to_string()))
        }
    }
}

fn stat_card(title: &str, value: &str) -> Markup {
    html! {
        div class=(STAT_CARD_STYLE) {
            div class="text-white/80 font-medium" { (title) }
            div class="mt-3 text-2xl font-bold text-white" { (value) }
        }
    }
}
