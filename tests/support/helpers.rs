// tests/support/helpers.rs
use super::mocks;
use axum::body;
use axum::http::StatusCode;
use mokkan_reader::application::{
    ports::{ClockPort, ImageUrlBuilderPort},
    regeneration::{PageBuilder, RegenerationPolicy, StaticPageCache},
    services::ApplicationServices,
};
use mokkan_reader::domain::{
    article::{Article, ArticleReadRepository},
    comment::CommentWriteRepository,
};
use mokkan_reader::infrastructure::content::SanityImageUrlBuilder;
use mokkan_reader::presentation::http::{
    page_builder::ArticlePageBuilder, routes::build_router_with_rate_limiter, state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

/// テスト用アプリケーション一式。ルーターと差し替え可能な依存を保持する。
pub struct TestApp {
    pub router: axum::Router,
    pub articles: Arc<mocks::InMemoryArticleRepo>,
    pub comments: Arc<mocks::RecordingCommentRepo>,
    pub pages: Arc<StaticPageCache>,
    pub clock: Arc<mocks::SteppingClock>,
}

pub fn build_test_state(
    article_repo: Arc<dyn ArticleReadRepository>,
    comment_repo: Arc<dyn CommentWriteRepository>,
    clock: Arc<ClockPort>,
) -> HttpState {
    let services = Arc::new(ApplicationServices::new(article_repo, comment_repo));
    let images: Arc<ImageUrlBuilderPort> =
        Arc::new(SanityImageUrlBuilder::new("test", "production"));
    let builder: Arc<dyn PageBuilder> = Arc::new(ArticlePageBuilder::new(
        Arc::clone(&services.article_queries),
        Arc::clone(&images),
    ));
    let pages = Arc::new(StaticPageCache::new(
        builder,
        RegenerationPolicy::default(),
        clock,
    ));

    HttpState {
        services,
        pages,
        images,
        allowed_origins: vec!["http://localhost:3000".to_string()].into(),
    }
}

/// 記事一覧を与えてテストアプリを組み立てる
pub fn make_test_app(articles: Vec<Article>) -> TestApp {
    make_test_app_with_comments(articles, mocks::RecordingCommentRepo::default())
}

pub fn make_test_app_with_comments(
    articles: Vec<Article>,
    comments: mocks::RecordingCommentRepo,
) -> TestApp {
    let articles = Arc::new(mocks::InMemoryArticleRepo::new(articles));
    let comments = Arc::new(comments);
    let clock = Arc::new(mocks::SteppingClock::new());

    let state = build_test_state(
        Arc::clone(&articles) as Arc<dyn ArticleReadRepository>,
        Arc::clone(&comments) as Arc<dyn CommentWriteRepository>,
        Arc::clone(&clock) as Arc<ClockPort>,
    );
    let pages = Arc::clone(&state.pages);

    TestApp {
        router: build_router_with_rate_limiter(state, false),
        articles,
        comments,
        pages,
        clock,
    }
}

/// 記事なしのルーター
pub fn make_test_router() -> axum::Router {
    make_test_app(Vec::new()).router
}

/// ストア障害を返すリポジトリで組み立てたルーター
pub fn make_failing_router() -> axum::Router {
    let state = build_test_state(
        Arc::new(mocks::FailingArticleRepo),
        Arc::new(mocks::RecordingCommentRepo::failing()),
        Arc::new(mocks::SteppingClock::new()),
    );
    build_router_with_rate_limiter(state, false)
}

/// レスポンスボディを文字列として読み出す
pub async fn read_body(resp: axum::response::Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(
        err_field, expected_error,
        "unexpected error field: {}",
        err_field
    );
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
