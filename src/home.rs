//! The composition page: hero, dashboard shell, quick-add forms, and footer.

use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    budget::quick_add_budget_form,
    endpoints,
    expense::quick_add_expense_form,
    goal::quick_add_goal_form,
    hero::hero_view,
    html::base,
};

/// Display the Coinflow landing page.
pub async fn get_home_page() -> Markup {
    home_view(OffsetDateTime::now_utc().year())
}

fn home_view(year: i32) -> Markup {
    let content = html! {
        (hero_view())

        section
            id="dashboard"
            class="relative py-16 bg-gradient-to-b from-zinc-900 to-black text-white"
        {
            div class="max-w-6xl mx-auto px-6" {
                h2 class="text-3xl font-bold" { "Overview" }

                // Fetched once on load, and again whenever a quick-add form
                // fires the data-updated trigger.
                div
                    id="dashboard-content"
                    hx-get=(endpoints::DASHBOARD)
                    hx-trigger="load, data-updated from:body"
                    hx-swap="innerHTML"
                    class="mt-8"
                {
                    p class="text-white/60" { "Loading your overview..." }
                }
            }
        }

        section
            id="quick-add"
            class="relative py-16 bg-gradient-to-b from-black to-zinc-950"
        {
            div class="max-w-6xl mx-auto px-6" {
                h2 class="text-white text-3xl font-bold" { "Quick Add" }

                div class="grid lg:grid-cols-3 gap-6 mt-8" {
                    (quick_add_expense_form())
                    (quick_add_budget_form())
                    (quick_add_goal_form())
                }
            }
        }

        footer class="py-10 text-center text-white/60 bg-black" {
            p { "© " (year) " Coinflow — Smart budgeting with style" }
        }
    };

    base("Home", &content)
}
