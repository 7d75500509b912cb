//! # バッジ API ハンドラ
//!
//! - `GET /badges/{user_id}` - 獲得バッジ数（非公開なら `{ "private": true }`）

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   response::{IntoResponse, Response},
};
use rbxproxy_shared::ErrorResponse;
use serde::Serialize;
use utoipa::ToSchema;

use super::{PrivateData, is_false};
use crate::{
   error::{log_and_convert_upstream_error, parse_path_id},
   usecase::{BadgeOutcome, BadgeUseCaseImpl},
};

/// バッジ API の State
pub struct BadgeState {
   pub usecase: BadgeUseCaseImpl,
}

/// バッジ数
#[derive(Debug, Serialize, ToSchema)]
pub struct BadgeCount {
   pub count:     u64,
   /// ページ上限で打ち切った場合のみ `true` で出力する
   #[serde(skip_serializing_if = "is_false")]
   pub truncated: bool,
}

/// バッジ API のレスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum BadgeCountData {
   Counted(BadgeCount),
   Private(PrivateData),
}

impl From<BadgeOutcome> for BadgeCountData {
   fn from(outcome: BadgeOutcome) -> Self {
      match outcome {
         BadgeOutcome::Counted { count, truncated } => {
            BadgeCountData::Counted(BadgeCount { count, truncated })
         }
         BadgeOutcome::Private => BadgeCountData::Private(PrivateData::default()),
      }
   }
}

/// GET /badges/{user_id}
#[utoipa::path(
   get,
   path = "/badges/{user_id}",
   tag = "inventory",
   params(("user_id" = u64, Path, description = "Roblox ユーザー ID")),
   responses(
      (status = 200, description = "バッジ数、または非公開", body = BadgeCountData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_badge_count(
   State(state): State<Arc<BadgeState>>,
   Path(user_id): Path<String>,
) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.count_badges(user_id).await {
      Ok(outcome) => Json(BadgeCountData::from(outcome)).into_response(),
      Err(e) => log_and_convert_upstream_error("バッジ取得", "Failed to fetch badges.", e),
   }
}
