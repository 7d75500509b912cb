//! # Roblox プロキシゲートウェイ ライブラリ
//!
//! Roblox の公開 REST API を集約し、CORS の制約なく利用できる
//! 単純な JSON API として再公開するサーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI とルーター構築
//! - `client`: Roblox API クライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラ共通のエラーレスポンス変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（キャッシュ制御）
//! - `openapi`: OpenAPI 仕様定義
//! - `usecase`: 集計ロジック

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod usecase;
