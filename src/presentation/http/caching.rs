//! Response headers for statically regenerated pages.

use crate::application::regeneration::{PageSource, RegenerationPolicy, ServedPage};
use axum::{
    http::{
        HeaderMap, HeaderName, HeaderValue, StatusCode,
        header::{CACHE_CONTROL, LAST_MODIFIED},
    },
    response::{Html, IntoResponse, Response},
};
use headers::{ETag, HeaderMapExt, IfNoneMatch};
use std::time::SystemTime;

pub const PAGE_CACHE_HEADER: HeaderName = HeaderName::from_static("x-page-cache");

/// Serve a cached page with its validators. A matching `If-None-Match`
/// yields `304 Not Modified` with an empty body.
pub fn page_response(
    request_headers: &HeaderMap,
    served: &ServedPage,
    policy: RegenerationPolicy,
) -> Response {
    let etag = served.page.etag.parse::<ETag>().ok();
    let not_modified = match (request_headers.typed_get::<IfNoneMatch>(), &etag) {
        (Some(if_none_match), Some(etag)) => !if_none_match.precondition_passes(etag),
        _ => false,
    };

    let mut headers = HeaderMap::new();
    if let Some(etag) = etag {
        headers.typed_insert(etag);
    }
    let last_modified = httpdate::fmt_http_date(SystemTime::from(served.computed_at));
    if let Ok(value) = HeaderValue::from_str(&last_modified) {
        headers.insert(LAST_MODIFIED, value);
    }
    let cache_control = format!(
        "public, s-maxage={}, stale-while-revalidate",
        policy.window().as_secs()
    );
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        headers.insert(CACHE_CONTROL, value);
    }
    headers.insert(
        PAGE_CACHE_HEADER,
        HeaderValue::from_static(match served.source {
            PageSource::Fresh => "HIT",
            PageSource::Stale => "STALE",
            PageSource::Rendered => "MISS",
        }),
    );

    if not_modified {
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }
    (headers, Html(served.page.html.to_string())).into_response()
}

/// Pages that reflect a single request (form results, errors) are never cached.
pub fn uncached(status: StatusCode, html: String) -> Response {
    (
        status,
        [(CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Html(html),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::regeneration::RenderedPage;
    use axum::http::header::{ETAG, IF_NONE_MATCH};
    use chrono::{TimeZone, Utc};

    fn served() -> ServedPage {
        ServedPage {
            page: RenderedPage::new("<p>cached</p>"),
            computed_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            source: PageSource::Fresh,
        }
    }

    #[test]
    fn sets_validators_and_cache_control() {
        let served = served();
        let response = page_response(&HeaderMap::new(), &served, RegenerationPolicy::default());

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[ETAG], served.page.etag.as_str());
        assert_eq!(headers[LAST_MODIFIED], "Mon, 01 Jan 2024 00:00:00 GMT");
        assert_eq!(
            headers[CACHE_CONTROL],
            "public, s-maxage=3600, stale-while-revalidate"
        );
        assert_eq!(headers[PAGE_CACHE_HEADER], "HIT");
    }

    #[test]
    fn matching_if_none_match_is_not_modified() {
        let served = served();
        let mut request = HeaderMap::new();
        request.insert(
            IF_NONE_MATCH,
            HeaderValue::from_str(&served.page.etag).unwrap(),
        );

        let response = page_response(&request, &served, RegenerationPolicy::default());
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[test]
    fn other_etag_gets_full_page() {
        let mut request = HeaderMap::new();
        request.insert(IF_NONE_MATCH, HeaderValue::from_static("\"something-else\""));

        let response = page_response(&request, &served(), RegenerationPolicy::default());
        assert_eq!(response.status(), StatusCode::OK);
    }
}
