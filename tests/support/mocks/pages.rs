// tests/support/mocks/pages.rs
use async_trait::async_trait;
use mokkan_reader::application::{
    ApplicationResult,
    error::ApplicationError,
    regeneration::{PageBuilder, RenderedPage},
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use tokio::sync::Notify;

/// 呼び出し回数を数え、毎回異なる HTML を返すページビルダー。
/// `hold_rebuilds` を有効にすると、2 回目以降のビルドは `release` まで待機する。
#[derive(Default)]
pub struct CountingPageBuilder {
    builds: AtomicUsize,
    hold_rebuilds: AtomicBool,
    release: Notify,
    missing: Mutex<Vec<String>>,
    failing: AtomicBool,
    panicking: AtomicBool,
}

impl CountingPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn hold_rebuilds(&self) {
        self.hold_rebuilds.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    /// 以降、このスラグは存在しない扱いにする
    pub fn remove(&self, slug: &str) {
        self.missing.lock().unwrap().push(slug.to_owned());
    }

    pub fn fail_from_now(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// 以降のビルドはパニックする
    pub fn panic_from_now(&self) {
        self.panicking.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PageBuilder for CountingPageBuilder {
    async fn build(&self, slug: &str) -> ApplicationResult<Option<RenderedPage>> {
        let build = self.builds.fetch_add(1, Ordering::SeqCst) + 1;
        if build > 1 && self.hold_rebuilds.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        if self.panicking.load(Ordering::SeqCst) {
            panic!("page builder exploded while rendering {slug}");
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("content store unavailable"));
        }
        if self.missing.lock().unwrap().iter().any(|s| s == slug) {
            return Ok(None);
        }
        Ok(Some(RenderedPage::new(format!(
            "<article>{slug} build {build}</article>"
        ))))
    }
}
