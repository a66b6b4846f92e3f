//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。
//!
//! フィールド名はドット記法（`event.category`、`error.kind`）で、
//! JSON 出力ではフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` を自動付与し、`tracing::info!` レベルで出力する。
///
/// 慣例として `event.category` / `event.action` / `event.result` を必ず指定する。
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const AUTH: &str = "auth";
        pub const NEWSLETTER: &str = "newsletter";
    }

    /// イベントアクション
    pub mod action {
        pub const LOGOUT: &str = "auth.logout";
        pub const SUBSCRIBED: &str = "newsletter.subscribed";
        pub const SUBSCRIBE_REJECTED: &str = "newsletter.subscribe_rejected";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const SESSION: &str = "session";
        pub const SUBSCRIPTION: &str = "subscription";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// リクエスト本文の解釈に失敗
        pub const REQUEST: &str = "request";
        /// 購読先などの外部連携
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    /// エラー種別
    pub mod kind {
        pub const FORM_DECODE: &str = "form_decode";
        pub const NEWSLETTER: &str = "newsletter";
    }
}

/// メールアドレスをログ出力用にマスクする
///
/// ローカル部の先頭 1 文字のみ残す（`alice@example.com` → `a***@example.com`）。
/// `@` を含まない値は全体をマスクする。
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let head: String = local.chars().take(1).collect();
            format!("{head}***@{domain}")
        }
        None => "***".to_string(),
    }
}
