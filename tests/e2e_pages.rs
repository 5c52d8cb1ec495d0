// tests/e2e_pages.rs
use axum::body::Body;
use axum::http::{
    Request, StatusCode,
    header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH},
};
use mokkan_reader::application::forms::ACKNOWLEDGEMENT_TITLE;
use mokkan_reader::presentation::http::caching::PAGE_CACHE_HEADER;
use tower::util::ServiceExt as _;

mod support;
use support::{ArticleBuilder, RecordingCommentRepo, comment};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

const VALID_FORM: &str =
    "_id=post-1&name=Ada&email=ada%40example.com&comment=This+was+a+genuinely+useful+read.";

/// トップページが記事ごとに 1 枚のカードを出し、詳細ページへリンクすることを確認する
#[tokio::test]
async fn index_renders_one_card_per_article() {
    let app = support::make_test_app(vec![
        ArticleBuilder::new().id("a").slug("first").title("First").build(),
        ArticleBuilder::new().id("b").slug("second").title("Second").build(),
        ArticleBuilder::new().id("c").slug("third").title("Third").build(),
    ]);

    let resp = app.router.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = support::read_body(resp).await;
    assert_eq!(html.matches(r#"class="post-card""#).count(), 3);
    for slug in ["first", "second", "third"] {
        assert!(html.contains(&format!(r#"href="/post/{slug}""#)));
    }
}

/// 記事一覧の取得に失敗しても空のグリッドで 200 を返すことを確認する
#[tokio::test]
async fn index_renders_empty_grid_when_store_fails() {
    let app = support::make_failing_router();

    let resp = app.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = support::read_body(resp).await;
    assert!(html.contains(r#"class="posts grid"#));
    assert!(!html.contains("post-card"));
}

/// 存在しないスラグで 404 を返し、キャッシュに何も残さないことを確認する
#[tokio::test]
async fn unknown_slug_returns_not_found() {
    let app = support::make_test_app(vec![ArticleBuilder::new().build()]);

    let resp = app.router.oneshot(get("/post/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.headers().get(CACHE_CONTROL).unwrap(), "no-store");

    let html = support::read_body(resp).await;
    assert!(html.contains("Page not found"));
    assert!(app.pages.is_empty().await);
}

/// 詳細ページには承認済みかつ当該記事宛てのコメントだけが表示されることを確認する
#[tokio::test]
async fn article_page_shows_only_visible_comments() {
    let app = support::make_test_app(vec![
        ArticleBuilder::new()
            .id("post-1")
            .slug("hello")
            .title("Hello")
            .comments(vec![
                comment("c1", "post-1", true),
                comment("c2", "post-1", false),
                comment("c3", "post-2", true),
            ])
            .build(),
    ]);

    let resp = app.router.oneshot(get("/post/hello")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(PAGE_CACHE_HEADER).unwrap(), "MISS");

    let html = support::read_body(resp).await;
    assert!(html.contains(r#"id="comment-c1""#));
    assert!(!html.contains(r#"id="comment-c2""#));
    assert!(!html.contains(r#"id="comment-c3""#));
    assert!(html.contains("comment text from c1"));
}

/// コメントがない記事ではコメント欄を描画しないことを確認する
#[tokio::test]
async fn article_without_comments_omits_section() {
    let app = support::make_test_app(vec![ArticleBuilder::new().slug("quiet").build()]);

    let resp = app.router.oneshot(get("/post/quiet")).await.unwrap();
    let html = support::read_body(resp).await;

    assert!(html.contains(r#"class="comment-form"#));
    assert!(!html.contains(r#"class="comments"#));
}

/// 2 回目のリクエストはキャッシュから返り、If-None-Match が一致すれば 304 になることを確認する
#[tokio::test]
async fn cached_page_honours_if_none_match() {
    let app = support::make_test_app(vec![ArticleBuilder::new().slug("cached").build()]);

    let first = app.router.clone().oneshot(get("/post/cached")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let etag = first.headers().get(ETAG).unwrap().clone();
    let cache_control = first.headers().get(CACHE_CONTROL).unwrap().to_str().unwrap();
    assert_eq!(cache_control, "public, s-maxage=3600, stale-while-revalidate");

    let req = Request::builder()
        .method("GET")
        .uri("/post/cached")
        .header(IF_NONE_MATCH, etag)
        .body(Body::empty())
        .unwrap();
    let second = app.router.oneshot(req).await.unwrap();

    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(second.headers().get(PAGE_CACHE_HEADER).unwrap(), "HIT");
    assert!(support::read_body(second).await.is_empty());
    assert_eq!(app.articles.lookups(), 1);
}

/// 短すぎるコメントは 422 とエラー表示になり、書き込みが発生しないことを確認する
#[tokio::test]
async fn short_comment_is_rejected_without_write() {
    let app = support::make_test_app(vec![ArticleBuilder::new().slug("hello").build()]);

    let resp = app
        .router
        .oneshot(post_form(
            "/post/hello",
            "name=Ada&email=ada%40example.com&comment=too+short",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = support::read_body(resp).await;
    assert!(html.contains(r#"data-field="comment""#));
    assert!(html.contains("comment must be at least 20 characters"));
    assert!(html.contains(r#"value="Ada""#));
    assert!(app.comments.created().is_empty());
}

/// 妥当なコメントはちょうど 1 回書き込まれ、受付メッセージに置き換わることを確認する
#[tokio::test]
async fn valid_comment_is_written_once_and_acknowledged() {
    let app = support::make_test_app(vec![
        ArticleBuilder::new().id("post-1").slug("hello").build(),
    ]);

    let resp = app
        .router
        .oneshot(post_form("/post/hello", VALID_FORM))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CACHE_CONTROL).unwrap(), "no-store");
    let html = support::read_body(resp).await;
    assert!(html.contains(ACKNOWLEDGEMENT_TITLE));
    assert!(!html.contains(r#"class="comment-form"#));

    let created = app.comments.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].post.as_str(), "post-1");
    assert_eq!(created[0].name.as_str(), "Ada");
    assert!(app.pages.is_empty().await);
}

/// 書き込みに失敗した場合は入力値を保持したままフォームを再表示することを確認する
#[tokio::test]
async fn failed_write_redisplays_form_with_values() {
    let app = support::make_test_app_with_comments(
        vec![ArticleBuilder::new().slug("hello").build()],
        RecordingCommentRepo::failing(),
    );

    let resp = app
        .router
        .oneshot(post_form("/post/hello", VALID_FORM))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = support::read_body(resp).await;
    assert!(!html.contains(ACKNOWLEDGEMENT_TITLE));
    assert!(html.contains(r#"class="comment-form"#));
    assert!(html.contains(r#"value="ada@example.com""#));
    assert!(html.contains("This was a genuinely useful read."));
}

/// 存在しない記事へのフォーム送信は 404 を返すことを確認する
#[tokio::test]
async fn comment_form_on_unknown_article_is_not_found() {
    let app = support::make_test_app(Vec::new());

    let resp = app
        .router
        .oneshot(post_form("/post/missing", VALID_FORM))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(app.comments.created().is_empty());
}

/// 未定義のルートは 404 ページを返すことを確認する
#[tokio::test]
async fn unknown_route_falls_back_to_not_found_page() {
    let app = support::make_test_router();

    let resp = app.oneshot(get("/does/not/exist")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = support::read_body(resp).await;
    assert!(html.contains("Page not found"));
}

/// ストア障害時の詳細ページは 500 のエラーページになることを確認する
#[tokio::test]
async fn store_failure_renders_error_page() {
    let app = support::make_failing_router();

    let resp = app.oneshot(get("/post/anything")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = support::read_body(resp).await;
    assert!(html.contains("Something went wrong"));
}
