//! # OpenAPI 仕様定義
//!
//! utoipa で JSON API の OpenAPI 仕様を Rust の型から生成する。
//! 静的ページは対象外。

use utoipa::OpenApi;

use crate::handler::{admin, health, subscribe};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Canvas Site API",
      version = "0.1.0",
      description = "Canvas サイトの JSON API"
   ),
   paths(
      health::health_check,
      admin::logout,
      subscribe::subscribe,
   ),
   components(schemas(
      canvas_shared::ApiResponse,
      subscribe::SubscribeForm,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "admin", description = "管理者"),
      (name = "newsletter", description = "ニュースレター購読"),
   )
)]
pub struct ApiDoc;
