//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use canvas_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::SiteConfig,
    handler::{
        AdminState,
        SubscribeState,
        health_check,
        home,
        logout,
        not_found,
        page_routes,
        subscribe,
    },
    middleware::no_cache,
    newsletter::NewsletterSubscriber,
};

/// State の組み立てとルーター定義を行う
///
/// 購読先は外から注入する（テストではスタブに差し替える）。
pub fn build_app(config: &SiteConfig, subscriber: Arc<dyn NewsletterSubscriber>) -> Router {
    let admin_state = Arc::new(AdminState {
        secure_cookie: config.production,
    });
    let subscribe_state = Arc::new(SubscribeState { subscriber });

    // JSON API（キャッシュ禁止）
    let api = Router::new()
        .route("/api/admin/logout", post(logout))
        .with_state(admin_state)
        .route("/include/subscribe", post(subscribe))
        .with_state(subscribe_state)
        .layer(from_fn(no_cache));

    page_routes()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(api)
        .fallback(not_found)
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含め、全ログに自動注入
        // 3. CanonicalLogLineLayer: リクエスト完了時に 1 行サマリログを出力（スパン内）
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer::default())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
