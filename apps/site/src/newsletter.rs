//! # ニュースレター購読
//!
//! 購読フォームで受け付けたメールアドレスの受け渡し先を抽象化する。
//!
//! 現時点で外部の配信サービスとは連携しておらず、
//! [`LoggingNewsletterSubscriber`] が受付をログに残すだけである。

use async_trait::async_trait;
use canvas_shared::{
    event_log::{event, mask_email},
    log_business_event,
};

/// 購読処理のエラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    /// 購読先のバックエンドが処理に失敗した
    #[error("購読バックエンドでエラーが発生しました: {0}")]
    Backend(String),
}

/// ニュースレター購読トレイト
#[async_trait]
pub trait NewsletterSubscriber: Send + Sync {
    /// メールアドレスを購読リストに登録する
    ///
    /// `email` は前後の空白を除去済みで、空でないことが保証されている。
    async fn subscribe(&self, email: &str) -> Result<(), SubscribeError>;
}

/// 受付をビジネスイベントとしてログ出力するだけの実装
#[derive(Debug, Clone, Default)]
pub struct LoggingNewsletterSubscriber;

#[async_trait]
impl NewsletterSubscriber for LoggingNewsletterSubscriber {
    async fn subscribe(&self, email: &str) -> Result<(), SubscribeError> {
        log_business_event!(
            event.category = event::category::NEWSLETTER,
            event.action = event::action::SUBSCRIBED,
            event.entity_type = event::entity_type::SUBSCRIPTION,
            event.email = %mask_email(email),
            event.result = event::result::SUCCESS,
            "ニュースレター購読を受け付けました"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging実装はエラーを返さない() {
        let subscriber = LoggingNewsletterSubscriber;

        let result = subscriber.subscribe("user@example.com").await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_backendエラーのメッセージに原因が含まれる() {
        let err = SubscribeError::Backend("timeout".to_string());

        assert!(err.to_string().contains("timeout"));
    }
}
