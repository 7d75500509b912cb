//! # 限定品 API ハンドラ
//!
//! - `GET /limiteds/{user_id}` - 限定品数（通常 + UGC）

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
   usecase::{LimitedCount, LimitedsOutcome, LimitedsUseCaseImpl},
};

/// 限定品 API の State
pub struct LimitedsState {
   pub usecase: LimitedsUseCaseImpl,
}

/// 限定品数
#[derive(Debug, Serialize, ToSchema)]
pub struct LimitedCountData {
   /// `regular + ugc`
   pub count:     u64,
   /// コレクティブル一覧で数えた件数
   pub regular:   u64,
   /// アセット種別カテゴリで追加で見つかった UGC 限定品
   pub ugc:       u64,
   #[serde(skip_serializing_if = "is_false")]
   pub truncated: bool,
}

impl From<LimitedCount> for LimitedCountData {
   fn from(count: LimitedCount) -> Self {
      Self {
         count:     count.total(),
         regular:   count.regular,
         ugc:       count.ugc,
         truncated: count.truncated,
      }
   }
}

/// 限定品 API のレスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LimitedsData {
   Counted(LimitedCountData),
   Private(PrivateData),
}

impl From<LimitedsOutcome> for LimitedsData {
   fn from(outcome: LimitedsOutcome) -> Self {
      match outcome {
         LimitedsOutcome::Counted(count) => LimitedsData::Counted(count.into()),
         LimitedsOutcome::Private => LimitedsData::Private(PrivateData::default()),
      }
   }
}

/// GET /limiteds/{user_id}
#[utoipa::path(
   get,
   path = "/limiteds/{user_id}",
   tag = "inventory",
   params(("user_id" = u64, Path, description = "Roblox ユーザー ID")),
   responses(
      (status = 200, description = "限定品数、または非公開", body = LimitedsData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_limiteds(
   State(state): State<Arc<LimitedsState>>,
   Path(user_id): Path<String>,
) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.count_limiteds(user_id).await {
      Ok(outcome) => Json(LimitedsData::from(outcome)).into_response(),
      Err(e) => log_and_convert_upstream_error("限定品取得", "Failed to fetch limiteds.", e),
   }
}
