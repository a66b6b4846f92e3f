//! # Canvas サイトサーバー ライブラリ
//!
//! 静的ページと小さな JSON API を提供するサイトサーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: JSON エンベロープのエラーレスポンス
//! - `handler`: HTTP ハンドラ（ページ、ログアウト、購読、ヘルスチェック）
//! - `middleware`: ミドルウェア（キャッシュ制御）
//! - `newsletter`: ニュースレター購読の抽象化
//! - `openapi`: OpenAPI 仕様定義

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod newsletter;
pub mod openapi;
