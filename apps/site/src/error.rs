//! # API エラーハンドリング
//!
//! JSON API のエラーレスポンス生成と、エラーのログ出力を集約する。
//!
//! エラー時も `{ "success": false, "message": ... }` の形を保ち、
//! 内部の原因はログにのみ出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use canvas_shared::{ApiResponse, event_log::error};

use crate::{handler::subscribe::SubscribeFormRejection, newsletter::SubscribeError};

/// 500 応答で返す固定メッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// 400 Bad Request
pub fn bad_request_response(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::failure(message))).into_response()
}

/// 500 Internal Server Error
///
/// メッセージは固定値（内部情報を漏らさないため）。
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

impl IntoResponse for SubscribeError {
    fn into_response(self) -> Response {
        match self {
            SubscribeError::Backend(_) => internal_error_response(),
        }
    }
}

impl IntoResponse for SubscribeFormRejection {
    fn into_response(self) -> Response {
        internal_error_response()
    }
}

/// 購読エラーをログ付きでレスポンスに変換する
pub fn log_and_convert_subscribe_error(context: &str, err: SubscribeError) -> Response {
    tracing::error!(
        error.category = error::category::EXTERNAL_SERVICE,
        error.kind = error::kind::NEWSLETTER,
        "{}で内部エラー: {}",
        context,
        err
    );
    err.into_response()
}
