//! # Canvas サイト共有ユーティリティ
//!
//! サイトサーバーとツール類で共通に使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - axum に依存しない純粋なデータ構造とロギング基盤のみを配置
//! - 外部クレートへの依存は feature で切り替える（`openapi`, `observability`）

pub mod api_response;
#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod event_log;
pub mod health;
pub mod observability;

pub use api_response::ApiResponse;
pub use health::HealthResponse;
