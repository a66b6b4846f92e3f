//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - ハンドラは薄く保ち、購読処理の実体は [`crate::newsletter`] に委譲する
//!
//! ## ハンドラ一覧
//!
//! - `admin`: 管理者ログアウト
//! - `health`: ヘルスチェック
//! - `page`: 静的ページ（ホーム、イントロ各種、404）
//! - `subscribe`: ニュースレター購読フォーム

pub mod admin;
pub mod health;
pub mod page;
pub mod subscribe;

pub use admin::{AdminState, logout};
pub use health::health_check;
pub use page::{home, not_found, page_routes};
pub use subscribe::{SubscribeState, subscribe};
