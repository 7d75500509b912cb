//! # RbxProxy 共有ユーティリティ
//!
//! ゲートウェイとツール群で共通に使う型と初期化処理を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジック（集計・重複排除）は含めない
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）
//! - トレーシング関連の依存は `observability` feature に閉じ込める

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
