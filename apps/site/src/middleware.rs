//! # ミドルウェア
//!
//! JSON API 用のキャッシュ制御を提供する。
//! 静的ページには適用しない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// API レスポンスに `Cache-Control: no-store` を付与する
///
/// ログアウトや購読結果がブラウザや中間キャッシュに残らないようにする。
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_no_cache_レスポンスにno_storeが付与される() {
        let app = Router::new()
            .route("/api/ping", get(|| async { "pong" }))
            .layer(from_fn(no_cache));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }
}
