// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use mokkan_reader::domain::article::{
    Article, ArticleReadRepository, ArticleRef, ArticleSlug, ArticleSummary,
};
use mokkan_reader::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// メモリ上の記事を返すリポジトリ。詳細取得の回数を数える。
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    lookups: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            lookups: AtomicUsize::new(0),
        }
    }

    /// 記事を差し替える（同じスラグがあれば置換）
    pub fn upsert(&self, article: Article) {
        let mut articles = self.articles.lock().unwrap();
        match articles.iter_mut().find(|a| a.slug == article.slug) {
            Some(existing) => *existing = article,
            None => articles.push(article),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn list_summaries(&self) -> DomainResult<Vec<ArticleSummary>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .map(|a| ArticleSummary {
                id: a.id.clone(),
                title: a.title.clone(),
                slug: a.slug.clone(),
                description: a.description.clone(),
                author: a.author.clone(),
                main_image: a.main_image.clone(),
            })
            .collect())
    }

    async fn list_refs(&self) -> DomainResult<Vec<ArticleRef>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .map(|a| ArticleRef {
                id: a.id.clone(),
                slug: a.slug.clone(),
            })
            .collect())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.slug == slug)
            .cloned())
    }
}

/// 常にストア障害を返すリポジトリ
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn list_summaries(&self) -> DomainResult<Vec<ArticleSummary>> {
        Err(DomainError::Persistence("content store unavailable".into()))
    }

    async fn list_refs(&self) -> DomainResult<Vec<ArticleRef>> {
        Err(DomainError::Persistence("content store unavailable".into()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("content store unavailable".into()))
    }
}
