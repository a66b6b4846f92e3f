//! # Canvas サイトサーバー
//!
//! HTML テンプレートから移行した静的ページと、小さな JSON API を配信する。
//!
//! ## ルート
//!
//! - `GET /`, `/intro`, `/intro-1`, `/intro-lazyload` - 静的ページ
//! - `POST /api/admin/logout` - 管理者 Cookie のクリア
//! - `POST /include/subscribe` - ニュースレター購読フォーム
//! - `GET /health` - ヘルスチェック
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SITE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SITE_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `ENV` | No | `production` で Secure Cookie を有効化 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,canvas=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p canvas-site
//!
//! ENV=production LOG_FORMAT=json SITE_PORT=8080 cargo run -p canvas-site --release
//! ```

use std::sync::Arc;

use canvas_shared::observability::{self, TracingConfig};
use canvas_site::{
    app_builder::build_app,
    config::SiteConfig,
    newsletter::{LoggingNewsletterSubscriber, NewsletterSubscriber},
};
use tokio::{net::TcpListener, signal};

/// サイトサーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動（SIGTERM / Ctrl+C で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("site");
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();
    observability::init_tracing(tracing_config);

    let config = SiteConfig::from_env()?;

    if config.production {
        tracing::info!("本番モード: Cookie に Secure 属性を付与します");
    }

    let subscriber: Arc<dyn NewsletterSubscriber> = Arc::new(LoggingNewsletterSubscriber);
    let app = build_app(&config, subscriber);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("サイトサーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("サイトサーバーを停止しました");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
///
/// シグナルハンドラの登録に失敗した場合は、そのシグナルでは停止しない。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Ctrl+C ハンドラの登録に失敗: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl+C を受信しました。停止します"),
        () = terminate => tracing::info!("SIGTERM を受信しました。停止します"),
    }
}
