//! # Canonical Log Line ミドルウェア
//!
//! HTTP リクエスト完了時に、パス・ステータス・レイテンシを 1 行に集約した
//! サマリログを出力する tower Layer。ヘルスチェックなど指定した接頭辞のパスは除外する。
//!
//! `TraceLayer` の内側に配置すると、スパンフィールド（method, uri, request_id）が
//! JSON ログに自動的に含まれる。
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
//! ```

use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response, StatusCode};
use tower::{Layer, Service};

/// 既定でサマリログの対象外とするパス接頭辞
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &["/health"];

/// ステータスコードの分類（ログ検索用）
fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server_error"
    } else if status.is_client_error() {
        "client_error"
    } else if status.is_redirection() {
        "redirect"
    } else {
        "success"
    }
}

fn emit<B, E: Display>(path: &str, latency_ms: u64, result: &Result<Response<B>, E>) {
    match result {
        Ok(response) => tracing::info!(
            log.r#type = "canonical",
            http.path = path,
            http.status_code = response.status().as_u16(),
            http.outcome = outcome(response.status()),
            http.latency_ms = latency_ms,
            "リクエスト完了"
        ),
        Err(err) => tracing::error!(
            log.r#type = "canonical",
            http.path = path,
            http.latency_ms = latency_ms,
            error.message = %err,
            "リクエスト処理エラー"
        ),
    }
}

/// Canonical Log Line を出力する Layer
#[derive(Clone, Copy, Debug)]
pub struct CanonicalLogLineLayer {
    skip_prefixes: &'static [&'static str],
}

impl CanonicalLogLineLayer {
    /// `skip_prefixes` で始まるパスはログを出さない
    pub fn new(skip_prefixes: &'static [&'static str]) -> Self {
        Self { skip_prefixes }
    }
}

impl Default for CanonicalLogLineLayer {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_PREFIXES)
    }
}

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService {
            inner,
            skip_prefixes: self.skip_prefixes,
        }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner:         S,
    skip_prefixes: &'static [&'static str],
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使い、次回用にクローンを残す
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let path = req.uri().path().to_string();
        if self.skip_prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return Box::pin(inner.call(req));
        }

        let start = Instant::now();
        Box::pin(async move {
            let result = inner.call(req).await;
            emit(&path, start.elapsed().as_millis() as u64, &result);
            result
        })
    }
}
