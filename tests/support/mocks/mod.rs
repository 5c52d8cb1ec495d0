// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod comment_repos;
pub mod content_client;
pub mod pages;
pub mod submitter;
pub mod time;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::{SteppingClock, fixed_now};

// 記事リポジトリ
pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo};

// コメントリポジトリ
pub use comment_repos::RecordingCommentRepo;

// コンテンツクライアント
pub use content_client::ScriptedContentClient;

// ページビルダー
pub use pages::CountingPageBuilder;

// コメント送信
pub use submitter::RecordingSubmitter;
