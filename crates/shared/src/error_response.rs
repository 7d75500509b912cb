//! # エラーレスポンス
//!
//! 全エンドポイント共通のエラーボディ `{ "error": "<message>" }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスは呼び出し側が決める（ボディには含めない）
//! - 上流 API の生のエラー内容はクライアントに返さない。詳細はログにのみ出す

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// クライアント（ブラウザ拡張・ダッシュボード）が `error` の有無だけで
/// 失敗を判定できるよう、フィールドは 1 つに限定している。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   /// 任意のメッセージでエラーレスポンスを作成する
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         error: message.into(),
      }
   }

   /// パスパラメータの ID が不正な場合
   pub fn invalid_id(kind: &str) -> Self {
      Self::new(format!("Invalid {kind} id."))
   }
}
