use anyhow::Result;
use mokkan_reader::application::{
    ports::{ClockPort, ContentClientPort, ImageUrlBuilderPort},
    regeneration::{PageBuilder, RegenerationPolicy, StaticPageCache},
    services::ApplicationServices,
};
use mokkan_reader::config::AppConfig;
use mokkan_reader::domain::{article::ArticleReadRepository, comment::CommentWriteRepository};
use mokkan_reader::infrastructure::{
    content::{SanityHttpClient, SanityImageUrlBuilder},
    repositories::{ContentArticleRepository, ContentCommentRepository},
    time::SystemClock,
};
use mokkan_reader::presentation::http::{
    page_builder::ArticlePageBuilder, routes::build_router, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        env = config.app_env(),
        project = config.sanity_project_id(),
        dataset = config.sanity_dataset(),
        cdn = config.sanity_use_cdn(),
        "configuration loaded"
    );
    if !config.has_write_token() {
        tracing::warn!("SANITY_API_TOKEN is not set; comment submissions will fail");
    }

    let content_client: Arc<ContentClientPort> =
        Arc::new(SanityHttpClient::new(&config.sanity_config())?);
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(ContentArticleRepository::new(Arc::clone(&content_client)));
    let comment_write_repo: Arc<dyn CommentWriteRepository> =
        Arc::new(ContentCommentRepository::new(Arc::clone(&content_client)));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_read_repo),
        Arc::clone(&comment_write_repo),
    ));

    let images: Arc<ImageUrlBuilderPort> = Arc::new(SanityImageUrlBuilder::new(
        config.sanity_project_id(),
        config.sanity_dataset(),
    ));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let page_builder: Arc<dyn PageBuilder> = Arc::new(ArticlePageBuilder::new(
        Arc::clone(&services.article_queries),
        Arc::clone(&images),
    ));
    let pages = Arc::new(StaticPageCache::new(
        page_builder,
        RegenerationPolicy::new(config.regenerate_after()),
        clock,
    ));

    if config.prerender_on_start() {
        prerender(&services, &pages).await;
    }

    let state = HttpState {
        services: Arc::clone(&services),
        pages: Arc::clone(&pages),
        images,
        allowed_origins: config.allowed_origins().into(),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn prerender(services: &ApplicationServices, pages: &StaticPageCache) {
    match services.article_queries.list_slugs().await {
        Ok(slugs) => {
            let known = slugs.len();
            let rendered = pages.prerender(slugs).await;
            tracing::info!(known, rendered, "pre-rendered article pages");
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                "could not list articles; pages will render on first request"
            );
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
