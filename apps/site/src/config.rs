//! # サイト設定
//!
//! 環境変数からサイトサーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SITE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SITE_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `ENV` | No | `production` のとき Cookie に Secure 属性を付与する |

use std::env;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// サイトサーバーの設定
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// バインドアドレス
    pub host:       String,
    /// ポート番号
    pub port:       u16,
    /// 本番環境で動作しているか（`ENV=production`）
    pub production: bool,
}

impl SiteConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストではプロセス環境変数を書き換えずにこちらを使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let production = lookup("ENV").is_some_and(|v| v == "production");

        Ok(Self {
            host,
            port,
            production,
        })
    }
}
