//! Roblox API クライアントのエラー型

use thiserror::Error;

/// 上流（Roblox API）呼び出しのエラー
///
/// ハンドラはこの分類だけを見てレスポンスを決める:
///
/// - `Unauthorized` → 非公開インベントリとして `{ "private": true }`
/// - `NotFound` → ルートによっては 404
/// - それ以外 → 500（詳細はログのみ）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
   /// 権限なし（403、またはエラー本文に "not authorized" を含む）
   #[error("上流 API で権限がありません")]
   Unauthorized,

   /// リソースが存在しない（404）
   #[error("上流 API でリソースが見つかりません")]
   NotFound,

   /// その他の非 2xx ステータス
   #[error("上流 API が予期しないステータスを返しました {status}: {body}")]
   Status { status: u16, body: String },

   /// リクエスト単位のタイムアウト
   #[error("上流 API の呼び出しがタイムアウトしました")]
   Timeout,

   /// 接続エラーなどの通信エラー
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 2xx だがボディを解釈できない
   #[error("レスポンスのデコードに失敗しました: {0}")]
   Decode(String),
}

impl UpstreamError {
   /// インベントリ非公開を示すエラーか
   pub fn is_unauthorized(&self) -> bool {
      matches!(self, UpstreamError::Unauthorized)
   }

   /// ログの `error.kind` 用の分類名
   pub fn kind(&self) -> &'static str {
      match self {
         UpstreamError::Unauthorized => "unauthorized",
         UpstreamError::NotFound => "not_found",
         UpstreamError::Status { .. } => "unexpected_status",
         UpstreamError::Timeout => "timeout",
         UpstreamError::Network(_) => "network",
         UpstreamError::Decode(_) => "decode",
      }
   }
}

impl From<reqwest::Error> for UpstreamError {
   fn from(err: reqwest::Error) -> Self {
      if err.is_timeout() {
         UpstreamError::Timeout
      } else if err.is_decode() {
         UpstreamError::Decode(err.to_string())
      } else {
         UpstreamError::Network(err.to_string())
      }
   }
}
