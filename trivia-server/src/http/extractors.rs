//! Custom Axum extractors
//!
//! Failures map onto the API's two error kinds instead of axum's default
//! 400/415 rejections, or fall back to defaults where an endpoint never fails.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use trivia_core::Pagination;

use super::error::ApiError;

/// JSON body; malformed or mistyped bodies become 422
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// JSON body that never rejects; an unreadable body becomes `T::default()`
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("request body unreadable, using defaults: {}", e);
                return Ok(Self(T::default()));
            }
        };

        let value = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::debug!("request body is not the expected JSON, using defaults: {}", e);
            T::default()
        });
        Ok(Self(value))
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
}

/// `?page=N`; absent or unparsable means page 1, never a rejection
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageParams>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.page);

        Ok(Self(Pagination::from_param(raw.as_deref())))
    }
}

/// Integer id from the path; anything else is a 404 like an unmatched route
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let uri_path = parts.uri.path().to_owned();

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("path", &uri_path))?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::not_found("path", &uri_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn page_of(uri: &str) -> u32 {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let PageQuery(page) = PageQuery::from_request_parts(&mut parts, &()).await.unwrap();
        page.page
    }

    #[tokio::test]
    async fn page_query_defaults() {
        assert_eq!(page_of("/questions").await, 1);
        assert_eq!(page_of("/questions?page=3").await, 3);
        assert_eq!(page_of("/questions?page=abc").await, 1);
        assert_eq!(page_of("/questions?page=").await, 1);
        assert_eq!(page_of("/questions?other=x").await, 1);
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Counter {
        #[serde(default)]
        n: i64,
    }

    async fn lenient(body: &'static str) -> Counter {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(axum::body::Body::from(body))
            .unwrap();
        let LenientJson(body) = LenientJson::<Counter>::from_request(req, &()).await.unwrap();
        body
    }

    #[tokio::test]
    async fn lenient_json_falls_back_to_default() {
        assert_eq!(lenient(r#"{"n": 4}"#).await, Counter { n: 4 });
        assert_eq!(lenient("{not json").await, Counter::default());
        assert_eq!(lenient("").await, Counter::default());
        assert_eq!(lenient(r#"{"n": "four"}"#).await, Counter::default());
    }
}
