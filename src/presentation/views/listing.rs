use super::layout::{SITE_TITLE, document};
use crate::application::{dto::ArticleSummaryDto, ports::ImageUrlBuilderPort};
use maud::{Markup, html};

const CARD_IMAGE_WIDTH: u32 = 600;
const AVATAR_WIDTH: u32 = 112;
const HERO_IMAGE: &str = "https://accountabilitylab.org/wp-content/uploads/2020/03/Medium-logo.png";

/// Home page: hero banner plus one card per article, in the given order.
pub fn render_index_page(articles: &[ArticleSummaryDto], images: &ImageUrlBuilderPort) -> Markup {
    let content = html! {
        div class="mx-auto max-w-7xl" {
            (hero())
            div class="posts grid grid-cols-1 gap-3 p-2 sm:grid-cols-2 lg:grid-cols-3 md:gap-6 md:p-6" {
                @for article in articles {
                    (card(article, images))
                }
            }
        }
    };
    document(SITE_TITLE, &content)
}

fn hero() -> Markup {
    html! {
        div class="flex items-center justify-between py-10 bg-yellow-400 border-black border-y lg:py-0" {
            div class="px-10 space-y-5" {
                h1 class="max-w-xl font-serif text-6xl" {
                    span class="underline decoration-black decoration-4" { "Medium" }
                    " is a place to write, read, and connect"
                }
                h2 {
                    "It's easy and free to post your thinking on any topic and connect with millions of readers."
                }
            }
            img class="hidden h-32 md:inline-flex lg:h-full" src=(HERO_IMAGE) alt="logo";
        }
    }
}

fn card(article: &ArticleSummaryDto, images: &ImageUrlBuilderPort) -> Markup {
    let main_image = article
        .main_image
        .as_ref()
        .and_then(|image| images.url(image, Some(CARD_IMAGE_WIDTH)));
    let author_name = article.author.as_ref().map(|author| author.name.as_str());
    let avatar = article
        .author
        .as_ref()
        .and_then(|author| author.image.as_ref())
        .and_then(|image| images.url(image, Some(AVATAR_WIDTH)));

    html! {
        a.post-card href=(article.href()) {
            div class="overflow-hidden border rounded-lg cursor-pointer group" {
                @if let Some(src) = main_image {
                    img class="object-cover w-full transition-transform duration-200 ease-in-out h-60 group-hover:scale-105"
                        src=(src) alt=(article.title);
                }
                div class="flex justify-between p-5" {
                    div {
                        p class="text-lg font-bold" { (article.title) }
                        p class="text-xs" {
                            @if let Some(description) = &article.description { (description) }
                            @if let Some(name) = author_name { " by " (name) }
                        }
                    }
                    @if let Some(src) = avatar {
                        div class="w-1/4" {
                            img class="float-right rounded-full w-14 h-14" src=(src) alt=(author_name.unwrap_or_default());
                        }
                    }
                }
            }
        }
    }
}
