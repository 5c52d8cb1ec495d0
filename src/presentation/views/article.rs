use super::{
    comment_form::render_comment_form,
    layout::document,
    portable_text::{NodeKind, NodeProps, PortableTextRenderer, Serializers},
};
use crate::application::{
    dto::{ArticleDetailDto, CommentDto},
    forms::CommentForm,
    ports::ImageUrlBuilderPort,
};
use maud::{Markup, html};

const HERO_WIDTH: u32 = 1600;
const AVATAR_WIDTH: u32 = 80;

fn heading_one(props: NodeProps<'_>) -> Markup {
    html! { h1 class="my-5 text-2xl font-bold" { (props.children) } }
}

fn heading_two(props: NodeProps<'_>) -> Markup {
    html! { h2 class="my-5 text-xl font-bold" { (props.children) } }
}

fn list_item(props: NodeProps<'_>) -> Markup {
    html! { li class="ml-4 list-disc" { (props.children) } }
}

fn link(props: NodeProps<'_>) -> Markup {
    html! {
        span class="block text-center" {
            a class="px-4 py-2 font-bold text-white bg-yellow-500 rounded shadow cursor-pointer hover:bg-yellow-400 focus:shadow-outline focus:outline-none"
                href=[props.href] { (props.children) }
        }
    }
}

/// Overrides used for article bodies.
pub const fn article_serializers() -> Serializers {
    Serializers::new()
        .with(NodeKind::H1, heading_one)
        .with(NodeKind::H2, heading_two)
        .with(NodeKind::ListItem, list_item)
        .with(NodeKind::Link, link)
}

/// Full detail page: header image, title block, rendered body, the comment
/// form in its current state and the approved comments.
pub fn render_article_page(
    article: &ArticleDetailDto,
    form: &CommentForm,
    images: &ImageUrlBuilderPort,
) -> Markup {
    let serializers = article_serializers();
    let body = PortableTextRenderer::new(&serializers, images).render(&article.body);
    let main_image = article
        .main_image
        .as_ref()
        .and_then(|image| images.url(image, Some(HERO_WIDTH)));
    let author_name = article.author.as_ref().map(|author| author.name.as_str());
    let avatar = article
        .author
        .as_ref()
        .and_then(|author| author.image.as_ref())
        .and_then(|image| images.url(image, Some(AVATAR_WIDTH)));
    let published_at = article.created_at.format("%B %-d, %Y, %H:%M UTC").to_string();
    let action = format!("/post/{}", article.slug);

    let content = html! {
        main {
            @if let Some(src) = main_image {
                img class="object-cover w-full h-60" src=(src) alt=(article.title);
            }
            article class="max-w-3xl p-5 mx-auto" {
                h1 class="mt-10 mb-3 text-3xl" { (article.title) }
                @if let Some(description) = &article.description {
                    h2 class="text-xl font-light text-gray-500" { (description) }
                }
                div class="flex items-center space-x-2" {
                    @if let Some(src) = avatar {
                        img class="w-10 h-10 rounded-full" src=(src) alt=(author_name.unwrap_or_default());
                    }
                    p class="text-sm font-extralight" {
                        "Blog post by "
                        span class="text-green-600" { (author_name.unwrap_or("Unknown author")) }
                        " - Published at "
                        time datetime=(article.created_at.to_rfc3339()) { (published_at) }
                    }
                }
                div class="article-body mt-10" { (body) }
            }

            hr class="max-w-lg mx-auto my-5 border border-yellow-500";

            (render_comment_form(form, &action))

            @if !article.comments.is_empty() {
                (comments(&article.comments))
            }
        }
    };

    document(&article.title, &content)
}

fn comments(comments: &[CommentDto]) -> Markup {
    html! {
        div class="comments flex flex-col max-w-2xl p-10 mx-auto my-10 space-y-2 shadow shadow-yellow-500" {
            h3 class="text-4xl" { "Comments" }
            hr class="pb-2";
            @for comment in comments {
                div.comment id={ "comment-" (comment.id) } {
                    p {
                        span class="text-yellow-500" { (comment.name) ": " }
                        span { (comment.comment) }
                    }
                }
            }
        }
    }
}
