use super::layout::document;
use maud::{Markup, html};

pub fn render_not_found_page() -> Markup {
    message_page(
        "Page not found",
        "404",
        "This article does not exist or is no longer published.",
    )
}

pub fn render_error_page() -> Markup {
    message_page(
        "Something went wrong",
        "500",
        "The page could not be loaded right now. Please try again later.",
    )
}

fn message_page(title: &str, code: &str, detail: &str) -> Markup {
    let content = html! {
        main class="max-w-3xl p-5 mx-auto text-center" {
            p class="text-6xl font-serif" { (code) }
            h1 class="mt-5 text-3xl" { (title) }
            p class="mt-3 text-gray-500" { (detail) }
            a class="inline-block mt-10 text-green-600" href="/" { "Back to all articles" }
        }
    };
    document(title, &content)
}
