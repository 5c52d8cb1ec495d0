use super::policy::RegenerationPolicy;
use crate::application::{ApplicationResult, error::ApplicationError, ports::time::Clock};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Rendered HTML plus a strong validator derived from its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: Arc<str>,
    pub etag: String,
}

impl RenderedPage {
    pub fn new(html: impl Into<Arc<str>>) -> Self {
        let html = html.into();
        let etag = format!("\"{}\"", blake3::hash(html.as_bytes()).to_hex());
        Self { html, etag }
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub page: RenderedPage,
    pub computed_at: DateTime<Utc>,
    refreshing: bool,
}

impl CacheEntry {
    fn new(key: &str, page: RenderedPage, computed_at: DateTime<Utc>) -> Self {
        Self {
            key: key.to_owned(),
            page,
            computed_at,
            refreshing: false,
        }
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    /// Cached and within the regeneration window.
    Fresh,
    /// Cached but expired; a background rebuild is scheduled or running.
    Stale,
    /// Not cached before this request; rendered while the caller waited.
    Rendered,
}

#[derive(Debug, Clone)]
pub struct ServedPage {
    pub page: RenderedPage,
    pub computed_at: DateTime<Utc>,
    pub source: PageSource,
}

/// Fetches and renders the page for one slug.
#[async_trait]
pub trait PageBuilder: Send + Sync {
    /// `Ok(None)` means there is no such page.
    async fn build(&self, slug: &str) -> ApplicationResult<Option<RenderedPage>>;
}

pub struct StaticPageCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    builder: Arc<dyn PageBuilder>,
    policy: RegenerationPolicy,
    clock: Arc<dyn Clock>,
}

impl StaticPageCache {
    pub fn new(
        builder: Arc<dyn PageBuilder>,
        policy: RegenerationPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            builder,
            policy,
            clock,
        }
    }

    pub const fn policy(&self) -> RegenerationPolicy {
        self.policy
    }

    /// Serve the page for `slug`, rendering it on a miss. `Ok(None)` when no
    /// such page exists; nothing is cached in that case.
    pub async fn get(&self, slug: &str) -> ApplicationResult<Option<ServedPage>> {
        let now = self.clock.now();

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(slug) {
                if !self.policy.is_stale(entry.computed_at, now) {
                    tracing::debug!(slug, "page cache hit");
                    return Ok(Some(served(entry, PageSource::Fresh)));
                }
                if entry.refreshing {
                    return Ok(Some(served(entry, PageSource::Stale)));
                }
            }
        }

        {
            let mut entries = self.entries.write().await;
            if let Some(entry) = entries.get_mut(slug) {
                // Another request may have refreshed or claimed the entry meanwhile.
                if !self.policy.is_stale(entry.computed_at, now) {
                    return Ok(Some(served(entry, PageSource::Fresh)));
                }
                if !entry.refreshing {
                    entry.refreshing = true;
                    tracing::debug!(slug, "page is stale, scheduling rebuild");
                    self.spawn_refresh(slug.to_owned());
                }
                return Ok(Some(served(entry, PageSource::Stale)));
            }
        }

        tracing::debug!(slug, "page cache miss");
        self.render_now(slug).await
    }

    /// Render every slug up front. Failures are logged and skipped; returns
    /// the number of pages cached.
    pub async fn prerender<I>(&self, slugs: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut rendered = 0;
        for slug in slugs {
            match self.render_now(&slug).await {
                Ok(Some(_)) => rendered += 1,
                Ok(None) => tracing::warn!(slug = %slug, "listed article has no detail page"),
                Err(err) => tracing::warn!(slug = %slug, error = %err, "pre-render failed"),
            }
        }
        rendered
    }

    pub async fn entry(&self, slug: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(slug).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn render_now(&self, slug: &str) -> ApplicationResult<Option<ServedPage>> {
        let Some(page) = self.builder.build(slug).await? else {
            return Ok(None);
        };

        let computed_at = self.clock.now();
        let entry = CacheEntry::new(slug, page, computed_at);
        let served_page = served(&entry, PageSource::Rendered);
        self.entries.write().await.insert(slug.to_owned(), entry);
        Ok(Some(served_page))
    }

    fn spawn_refresh(&self, slug: String) {
        let entries = Arc::clone(&self.entries);
        let builder = Arc::clone(&self.builder);
        let clock = Arc::clone(&self.clock);

        tokio::spawn(async move {
            // The build runs in its own task so a panic surfaces as a join
            // error and the entry's refreshing flag is still cleared.
            let build_slug = slug.clone();
            let outcome = tokio::spawn(async move { builder.build(&build_slug).await })
                .await
                .unwrap_or_else(|join_err| {
                    Err(ApplicationError::infrastructure(format!(
                        "page builder aborted: {join_err}"
                    )))
                });
            let mut entries = entries.write().await;
            match outcome {
                Ok(Some(page)) => {
                    entries.insert(slug.clone(), CacheEntry::new(&slug, page, clock.now()));
                    tracing::debug!(slug = %slug, "page regenerated");
                }
                Ok(None) => {
                    entries.remove(&slug);
                    tracing::info!(slug = %slug, "article no longer exists, page evicted");
                }
                Err(err) => {
                    if let Some(entry) = entries.get_mut(&slug) {
                        entry.refreshing = false;
                    }
                    tracing::warn!(
                        slug = %slug,
                        error = %err,
                        "page regeneration failed, keeping stale copy"
                    );
                }
            }
        });
    }
}

fn served(entry: &CacheEntry, source: PageSource) -> ServedPage {
    ServedPage {
        page: entry.page.clone(),
        computed_at: entry.computed_at,
        source,
    }
}
