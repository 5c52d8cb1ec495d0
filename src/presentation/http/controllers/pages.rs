// src/presentation/http/controllers/pages.rs
use crate::application::{
    forms::{CommentForm, CommentFormValues, FormState},
    queries::articles::GetArticleBySlugQuery,
};
use crate::presentation::http::{caching, state::HttpState};
use crate::presentation::views;
use axum::{
    Extension, Form,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{Html, Response},
};

/// `GET /`. A failed listing query renders an empty grid.
pub async fn index(Extension(state): Extension<HttpState>) -> Html<String> {
    let articles = match state.services.article_queries.list_articles().await {
        Ok(articles) => articles,
        Err(err) => {
            tracing::warn!(error = %err, "article listing unavailable, rendering empty grid");
            Vec::new()
        }
    };

    Html(views::render_index_page(&articles, state.images.as_ref()).into_string())
}

/// `GET /post/{slug}`, served from the static page cache.
pub async fn show_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    match state.pages.get(&slug).await {
        Ok(Some(served)) => caching::page_response(&headers, &served, state.pages.policy()),
        Ok(None) => not_found_response(),
        Err(err) if err.is_not_found() => not_found_response(),
        Err(err) => {
            tracing::error!(slug = %slug, error = %err, "article page could not be rendered");
            error_response()
        }
    }
}

/// `POST /post/{slug}`: the server-rendered comment form. The page is
/// rendered fresh for this request only; the cache is not touched.
pub async fn submit_comment_form(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Form(values): Form<CommentFormValues>,
) -> Response {
    let article = match state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug: slug.clone() })
        .await
    {
        Ok(article) => article,
        Err(err) if err.is_not_found() => return not_found_response(),
        Err(err) => {
            tracing::error!(slug = %slug, error = %err, "article lookup for comment failed");
            return error_response();
        }
    };

    let mut form = CommentForm::with_values(article.id.clone(), values);
    let submitter = state.services.comment_submitter();
    let outcome = form.submit(submitter.as_ref()).await;

    let status = match outcome {
        FormState::Submitted => StatusCode::OK,
        FormState::Editing if !form.errors().is_empty() => StatusCode::UNPROCESSABLE_ENTITY,
        FormState::Editing | FormState::Submitting => StatusCode::OK,
    };
    let markup = views::render_article_page(&article, &form, state.images.as_ref());
    caching::uncached(status, markup.into_string())
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    not_found_response()
}

fn not_found_response() -> Response {
    caching::uncached(
        StatusCode::NOT_FOUND,
        views::render_not_found_page().into_string(),
    )
}

fn error_response() -> Response {
    caching::uncached(
        StatusCode::INTERNAL_SERVER_ERROR,
        views::render_error_page().into_string(),
    )
}
