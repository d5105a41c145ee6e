//! The base page layout, shared style constants, and small view helpers.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm text-white/70";
pub const FORM_TEXT_INPUT_STYLE: &str = "w-full px-3 py-2 rounded-lg bg-white/10 \
    border border-white/10 text-white placeholder-white/40 \
    focus:outline-none focus:ring-2 focus:ring-white/30";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 rounded-lg bg-emerald-400 \
    text-black font-semibold hover:bg-emerald-300 transition \
    disabled:opacity-60 disabled:cursor-wait";

// Card and panel styles
pub const QUICK_ADD_CARD_STYLE: &str =
    "bg-white/5 border border-white/10 rounded-xl p-5 text-white";
pub const PANEL_STYLE: &str = "bg-white/5 border border-white/10 rounded-xl p-6";
pub const EMPTY_STATE_STYLE: &str = "text-white/60";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Coinflow" }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator {
                        display: inline;
                    }

                    .htmx-request .quick-add-label {
                        display: none;
                    }
                    "#
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-black"
            {
                (content)

                // Alert container for hx-target-error and out-of-band swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A submit button whose label switches to `busy_label` while the form's
/// htmx request is in flight.
pub fn submit_button(label: &str, busy_label: &str) -> Markup {
    html! {
        button type="submit" class=(BUTTON_PRIMARY_STYLE)
        {
            span class="quick-add-label" { (label) }
            span class="htmx-indicator" { (busy_label) }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-black min-h-screen"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-emerald-400"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-white/80"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-black bg-emerald-400
                            hover:bg-emerald-300 font-semibold rounded-lg text-sm
                            px-5 py-2.5 text-center my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &content)
}

pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

#[cfg(test)]
mod format_currency_tests {
    use super::format_currency;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_currency(12.34), "$12.34");
        assert_eq!(format_currency(12.3), "$12.30");
        assert_eq!(format_currency(80.0), "$80.00");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn separates_thousands() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
    }
}

#[cfg(test)]
mod base_layout_tests {
    use maud::html;

    use super::base;

    #[test]
    fn page_has_alert_container_and_htmx() {
        let page = base("Home", &html! { p { "hi" } }).into_string();

        assert!(page.contains("id=\"alert-container\""));
        assert!(page.contains("htmx.org"));
        assert!(page.contains("hx-ext=\"response-targets\""));
        assert!(page.contains("<title>Home - Coinflow</title>"));
    }
}
