//! # ゲートウェイのエラーハンドリング
//!
//! ハンドラが共通で使うエラーレスポンスのヘルパー関数を集約する。
//!
//! レスポンスボディは常に `{ "error": "<message>" }`。上流の生のエラー内容は
//! クライアントに返さず、ログにのみ出す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use rbxproxy_shared::ErrorResponse;

use crate::client::UpstreamError;

// --- 共通ヘルパー関数 ---

/// パスパラメータの数値 ID をパースする
///
/// 不正な場合は 400 `{ "error": "Invalid <kind> id." }` を返す。
pub fn parse_path_id(raw: &str, kind: &str) -> Result<u64, Response> {
   raw.trim()
      .parse::<u64>()
      .map_err(|_| bad_request_response(ErrorResponse::invalid_id(kind)))
}

/// 400 Bad Request レスポンスを生成する
pub fn bad_request_response(body: ErrorResponse) -> Response {
   (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// 404 Not Found レスポンスを生成する
pub fn not_found_response(message: &str) -> Response {
   (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
}

/// 500 Internal Server Error レスポンスを生成する
pub fn internal_error_response(message: &str) -> Response {
   (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ErrorResponse::new(message)),
   )
      .into_response()
}

/// 上流エラーをログ付きで 500 レスポンスに変換する
///
/// `context` はログ用、`message` はクライアントに返す固定メッセージ。
pub fn log_and_convert_upstream_error(
   context: &str,
   message: &str,
   err: UpstreamError,
) -> Response {
   tracing::error!(
      error.category = "external_service",
      error.kind = err.kind(),
      "{}で上流エラー: {}",
      context,
      err
   );
   internal_error_response(message)
}
