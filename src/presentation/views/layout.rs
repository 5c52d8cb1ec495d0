use maud::{DOCTYPE, Markup, html};

pub const SITE_TITLE: &str = "Medium Blog";
const LOGO_URL: &str = "https://links.papareact.com/yvf";

/// Full HTML document around `content`, with the site header.
pub fn document(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/favicon.ico";
            }
            body {
                (site_header())
                (content)
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header class="flex justify-between p-5 mx-auto max-w-7xl" {
            div class="flex" {
                a href="/" {
                    img class="object-contain cursor-pointer w-44" src=(LOGO_URL) alt="logo";
                }
                div class="items-center hidden space-x-5 md:inline-flex" {
                    h3 { "About" }
                    h3 { "Contact" }
                    h3 class="px-4 py-1 text-white bg-green-600 rounded-full cursor-pointer" { "Follow" }
                }
            }
            div class="flex items-center space-x-5 text-green-600" {
                h3 { "Sign In" }
                h3 class="px-4 py-1 border border-green-600 rounded-full cursor-pointer" { "Get started" }
            }
        }
    }
}
