//! # ユーザー情報 API ハンドラ
//!
//! - `GET /users/{user_id}` - プロフィールと参加年

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   response::{IntoResponse, Response},
};
use rbxproxy_shared::ErrorResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
   error::{log_and_convert_upstream_error, parse_path_id},
   usecase::{UserProfile, UserUseCaseImpl},
};

/// ユーザー情報 API の State
pub struct UserState {
   pub usecase: UserUseCaseImpl,
}

/// ユーザー情報レスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
   pub id:           u64,
   pub name:         String,
   pub display_name: Option<String>,
   /// 作成日時（ISO 8601）
   pub created:      Option<String>,
   /// `created` の先頭 4 文字から求めた参加年
   pub join_year:    Option<i32>,
   pub is_banned:    Option<bool>,
}

impl From<UserProfile> for UserData {
   fn from(profile: UserProfile) -> Self {
      Self {
         id:           profile.id,
         name:         profile.name,
         display_name: profile.display_name,
         created:      profile.created,
         join_year:    profile.join_year,
         is_banned:    profile.is_banned,
      }
   }
}

/// GET /users/{user_id}
///
/// 上流の失敗は 404 を含めてすべて 500 にする。
#[utoipa::path(
   get,
   path = "/users/{user_id}",
   tag = "users",
   params(("user_id" = u64, Path, description = "Roblox ユーザー ID")),
   responses(
      (status = 200, description = "ユーザー情報", body = UserData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_user(State(state): State<Arc<UserState>>, Path(user_id): Path<String>) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.get_profile(user_id).await {
      Ok(profile) => Json(UserData::from(profile)).into_response(),
      Err(e) => log_and_convert_upstream_error("ユーザー情報取得", "Failed to fetch user info.", e),
   }
}
