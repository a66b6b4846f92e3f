//! # API レスポンスエンベロープ
//!
//! JSON API の統一レスポンス形式 `{ "success": bool, "message": String }` を提供する。

use serde::{Deserialize, Serialize};

/// JSON API の統一レスポンス型
///
/// ログアウト・購読受付など、本文を持たない API はすべてこの形で結果を返す。
/// HTTP ステータスコードの決定は呼び出し側の責務。
///
/// ## 使用例
///
/// ```
/// use canvas_shared::ApiResponse;
///
/// let response = ApiResponse::success("Logged out");
/// assert!(response.success);
/// assert_eq!(response.message, "Logged out");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    /// 成功レスポンスを作成する
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// 失敗レスポンスを作成する
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
