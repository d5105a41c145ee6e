//! The marketing hero section at the top of the landing page.

use maud::{Markup, html};

/// Render the hero banner.
///
/// The backdrop is layered gradients, so the page carries no external embeds.
pub fn hero_view() -> Markup {
    html! {
        section class="relative h-[70vh] w-full overflow-hidden bg-black" {
            div class="absolute inset-0 bg-gradient-to-br from-emerald-500/30 via-black to-fuchsia-500/20" {}
            div class="absolute inset-0 bg-gradient-to-b from-black/40 via-black/20 to-black/70 pointer-events-none" {}

            div class="relative z-10 h-full max-w-6xl mx-auto px-6 flex items-center" {
                div class="text-white" {
                    h1 class="text-4xl sm:text-6xl font-extrabold tracking-tight" { "Coinflow" }

                    p class="mt-4 text-lg sm:text-xl text-white/85 max-w-2xl" {
                        "Smart budgeting and expense tracking with a futuristic vibe. \
                        Visualize, plan, and reach your financial goals."
                    }

                    div class="mt-8 flex gap-4" {
                        a
                            href="#dashboard"
                            class="px-5 py-3 rounded-lg bg-white text-black font-semibold
                                shadow-lg hover:shadow-xl transition"
                        {
                            "Open Dashboard"
                        }

                        a
                            href="#quick-add"
                            class="px-5 py-3 rounded-lg bg-white/10 backdrop-blur border
                                border-white/20 text-white hover:bg-white/20 transition"
                        {
                            "Set a Goal"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::hero_view;

    #[test]
    fn renders_title_and_anchors() {
        let html = hero_view().into_string();

        assert!(html.contains("Coinflow"));
        assert!(html.contains("href=\"#dashboard\""));
        assert!(html.contains("href=\"#quick-add\""));
    }
}
