//! # ニュースレター購読ハンドラ
//!
//! - `POST /include/subscribe` - 購読フォームの送信を受け付ける
//!
//! フォームはフッターのウィジェットから `application/x-www-form-urlencoded` または
//! `multipart/form-data` で送信される。同名フィールドが複数ある場合は先頭の値を使う。
//! 検証はメールアドレスの有無のみで、形式のチェックは行わない。

use std::sync::Arc;

use axum::{
    Form,
    Json,
    extract::{
        FromRequest,
        Multipart,
        Request,
        State,
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use canvas_shared::{
    ApiResponse,
    event_log::{error, event},
    log_business_event,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{bad_request_response, log_and_convert_subscribe_error},
    newsletter::NewsletterSubscriber,
};

/// 購読成功時のメッセージ
pub const SUBSCRIBED_MESSAGE: &str = "You have been successfully subscribed to our Email List.";

/// メールアドレス未入力時のメッセージ
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";

/// メールアドレスのフォームフィールド名
pub const EMAIL_FIELD: &str = "widget-subscribe-form-email";

/// 購読ハンドラの共有状態
pub struct SubscribeState {
    pub subscriber: Arc<dyn NewsletterSubscriber>,
}

/// 購読フォーム
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubscribeForm {
    #[serde(rename = "widget-subscribe-form-email", default)]
    pub email: Option<String>,
}

impl SubscribeForm {
    /// フィールド列から組み立てる（メールアドレスは最初に現れた値）
    pub fn from_fields(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let email = fields
            .into_iter()
            .find(|(name, _)| name == EMAIL_FIELD)
            .map(|(_, value)| value);
        Self { email }
    }

    /// 前後の空白を除いたメールアドレスを返す（空なら `None`）
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// 購読フォームを本文として解釈できなかった
#[derive(Debug, thiserror::Error)]
pub enum SubscribeFormRejection {
    #[error("フォームの解釈に失敗: {0}")]
    Form(#[from] FormRejection),
    #[error("multipart の解釈に失敗: {0}")]
    Multipart(#[from] MultipartRejection),
    #[error("multipart フィールドの読み取りに失敗: {0}")]
    MultipartField(#[from] MultipartError),
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

impl<S> FromRequest<S> for SubscribeForm
where
    S: Send + Sync,
{
    type Rejection = SubscribeFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            return Ok(Self::from_fields(fields));
        }

        let mut multipart = Multipart::from_request(req, state).await?;
        while let Some(field) = multipart.next_field().await? {
            if field.name() == Some(EMAIL_FIELD) {
                return Ok(Self {
                    email: Some(field.text().await?),
                });
            }
        }
        Ok(Self::default())
    }
}

/// POST /include/subscribe
///
/// メールアドレスが入力されていれば購読を受け付ける。
/// 本文をフォームとして解釈できない場合は 500 を返す。
#[utoipa::path(
   post,
   path = "/include/subscribe",
   tag = "newsletter",
   request_body(content(
      (SubscribeForm = "application/x-www-form-urlencoded"),
      (SubscribeForm = "multipart/form-data")
   )),
   responses(
      (status = 200, description = "購読受付", body = ApiResponse),
      (status = 400, description = "メールアドレス未入力", body = ApiResponse),
      (status = 500, description = "処理中のエラー", body = ApiResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn subscribe(
    State(state): State<Arc<SubscribeState>>,
    form: Result<SubscribeForm, SubscribeFormRejection>,
) -> Response {
    let form = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::error!(
                error.category = error::category::REQUEST,
                error.kind = error::kind::FORM_DECODE,
                "購読リクエストを受け付けられない: {}",
                rejection
            );
            return rejection.into_response();
        }
    };

    let Some(email) = form.email() else {
        log_business_event!(
            event.category = event::category::NEWSLETTER,
            event.action = event::action::SUBSCRIBE_REJECTED,
            event.entity_type = event::entity_type::SUBSCRIPTION,
            event.result = event::result::FAILURE,
            "メールアドレス未入力のため購読を拒否"
        );
        return bad_request_response(EMAIL_REQUIRED_MESSAGE);
    };

    match state.subscriber.subscribe(email).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success(SUBSCRIBED_MESSAGE))).into_response(),
        Err(e) => log_and_convert_subscribe_error("ニュースレター購読", e),
    }
}
