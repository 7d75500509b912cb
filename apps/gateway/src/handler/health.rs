//! # ヘルスチェックハンドラ
//!
//! - `/` - 稼働確認用のテキスト
//! - `/health` - Liveness Check（常に `"healthy"` を返す）

use axum::Json;
use rbxproxy_shared::HealthResponse;

/// ルートで返す稼働メッセージ
pub const ROOT_MESSAGE: &str = "✅ Roblox Proxy Server is Running!";

/// GET /
#[utoipa::path(
   get,
   path = "/",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = String, content_type = "text/plain")
   )
)]
pub async fn root() -> &'static str {
   ROOT_MESSAGE
}

/// ゲートウェイのヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
