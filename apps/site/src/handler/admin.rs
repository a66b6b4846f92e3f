//! # 管理者ハンドラ
//!
//! - `POST /api/admin/logout` - 管理者セッション Cookie をクリアする
//!
//! セッションストアは持たないため、ログアウトは Cookie の失効のみで完結する。
//! リクエストに Cookie が付いているかどうかに関わらず常に成功を返す。

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use canvas_shared::{ApiResponse, event_log::event, log_business_event};

/// 管理者セッション Cookie 名
pub const ADMIN_SESSION_COOKIE_NAME: &str = "admin_session";

/// ログアウト成功時のメッセージ
pub const LOGOUT_MESSAGE: &str = "Logged out";

/// 管理者ハンドラの共有状態
#[derive(Debug, Clone)]
pub struct AdminState {
    /// Cookie に Secure 属性を付与するか（本番環境のみ true）
    pub secure_cookie: bool,
}

/// 管理者セッション Cookie を失効させるための Cookie を構築する
///
/// 値は空、`Max-Age=0` かつ `Expires` を Unix エポックにして、
/// 古いブラウザでも確実に削除されるようにする。
pub fn build_clear_cookie(secure: bool) -> Cookie<'static> {
    let mut builder = Cookie::build((ADMIN_SESSION_COOKIE_NAME, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .expires(time::OffsetDateTime::UNIX_EPOCH)
        .http_only(true)
        .same_site(SameSite::Lax);

    if secure {
        builder = builder.secure(true);
    }

    builder.build()
}

/// POST /api/admin/logout
///
/// 管理者セッション Cookie をクリアしてログアウトする。
#[utoipa::path(
   post,
   path = "/api/admin/logout",
   tag = "admin",
   responses(
      (status = 200, description = "ログアウト成功（Set-Cookie で Cookie を失効）", body = ApiResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn logout(State(state): State<Arc<AdminState>>, jar: CookieJar) -> impl IntoResponse {
    let had_session = jar.get(ADMIN_SESSION_COOKIE_NAME).is_some();

    log_business_event!(
        event.category = event::category::AUTH,
        event.action = event::action::LOGOUT,
        event.entity_type = event::entity_type::SESSION,
        event.had_session = had_session,
        event.result = event::result::SUCCESS,
        "管理者ログアウト"
    );

    let jar = jar.add(build_clear_cookie(state.secure_cookie));

    (jar, Json(ApiResponse::success(LOGOUT_MESSAGE)))
}
