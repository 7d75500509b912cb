//! # プレゼンス API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /playing/{user_id}` - プレイ中のゲーム情報
//! - `GET /canjoin/{user_id}` - 参加可否
//! - `GET /joinlinks/{user_id}` - 参加リンク（ゲーム内でなければ 404）

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   response::{IntoResponse, Response},
};
use rbxproxy_shared::ErrorResponse;
use serde::Serialize;
use utoipa::ToSchema;

use super::place::{GameData, JoinLinksData, PlaceData};
use crate::{
   error::{log_and_convert_upstream_error, not_found_response, parse_path_id},
   usecase::{JoinTarget, NowPlaying, Presence, PresenceUseCaseImpl},
};

const PRESENCE_FAILURE: &str = "Failed to fetch presence.";

/// プレゼンス API の State
pub struct PresenceState {
   pub usecase: PresenceUseCaseImpl,
}

// --- レスポンス型 ---

/// プレイ中ゲームのレスポンス
///
/// プレイ中でない場合は `playing: false` と種別のみが埋まり、他は null。
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayingData {
   pub playing:        bool,
   /// 上流のプレゼンス種別コード（0: オフライン, 1: オンライン, 2: ゲーム内, 3: Studio, 4: 非表示）
   pub presence_type:  i64,
   pub status:         String,
   pub last_location:  Option<String>,
   /// 実効プレイス ID（`placeId`、なければ `rootPlaceId`）
   pub place_id:       Option<u64>,
   pub root_place_id:  Option<u64>,
   pub universe_id:    Option<u64>,
   /// サーバーインスタンス ID
   pub game_id:        Option<String>,
   pub is_subplace:    bool,
   pub game:           Option<GameData>,
   pub place:          Option<PlaceData>,
   pub root_place:     Option<PlaceData>,
   pub join_links:     Option<JoinLinksData>,
}

impl From<NowPlaying> for PlayingData {
   fn from(now: NowPlaying) -> Self {
      let playing = now.is_playing();
      let session = now.presence.session().cloned().unwrap_or_default();
      Self {
         playing,
         presence_type: now.presence.code(),
         status: now.presence.status().to_string(),
         place_id: session.effective_place_id(),
         root_place_id: session.root_place_id,
         universe_id: now.universe_id,
         is_subplace: session.is_subplace(),
         last_location: session.last_location,
         game_id: session.game_instance_id,
         game: now.game.map(GameData::from),
         place: now.place.map(PlaceData::from),
         root_place: now.root_place.map(PlaceData::from),
         join_links: now.join_links.map(JoinLinksData::from),
      }
   }
}

/// 参加可否のレスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanJoinData {
   pub can_join:         bool,
   pub is_online:        bool,
   pub presence_type:    i64,
   pub status:           String,
   pub place_id:         Option<u64>,
   pub game_instance_id: Option<String>,
}

impl From<Presence> for CanJoinData {
   fn from(presence: Presence) -> Self {
      let session = presence.session();
      Self {
         can_join:         presence.can_join(),
         is_online:        presence.is_online(),
         presence_type:    presence.code(),
         status:           presence.status().to_string(),
         place_id:         session.and_then(|s| s.effective_place_id()),
         game_instance_id: session.and_then(|s| s.game_instance_id.clone()),
      }
   }
}

/// 参加リンクのレスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinLinksResponse {
   pub user_id:          u64,
   pub place_id:         u64,
   pub root_place_id:    Option<u64>,
   pub game_instance_id: Option<String>,
   pub deep_link:        String,
   pub web_join:         String,
   pub game_page:        String,
}

impl JoinLinksResponse {
   fn new(user_id: u64, target: JoinTarget) -> Self {
      Self {
         user_id,
         place_id: target.place_id,
         root_place_id: target.root_place_id,
         game_instance_id: target.game_instance_id,
         deep_link: target.links.deep_link,
         web_join: target.links.web_join,
         game_page: target.links.game_page,
      }
   }
}

// --- ハンドラ ---

/// GET /playing/{user_id}
///
/// プレイ中のゲーム情報を取得する
#[utoipa::path(
   get,
   path = "/playing/{user_id}",
   tag = "presence",
   params(("user_id" = u64, Path, description = "Roblox ユーザー ID")),
   responses(
      (status = 200, description = "プレイ中のゲーム情報", body = PlayingData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_now_playing(
   State(state): State<Arc<PresenceState>>,
   Path(user_id): Path<String>,
) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.now_playing(user_id).await {
      Ok(now) => Json(PlayingData::from(now)).into_response(),
      Err(e) => log_and_convert_upstream_error("プレイ中ゲーム取得", PRESENCE_FAILURE, e),
   }
}

/// GET /canjoin/{user_id}
///
/// ユーザーのゲームに参加できるかを判定する
#[utoipa::path(
   get,
   path = "/canjoin/{user_id}",
   tag = "presence",
   params(("user_id" = u64, Path, description = "Roblox ユーザー ID")),
   responses(
      (status = 200, description = "参加可否", body = CanJoinData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_can_join(
   State(state): State<Arc<PresenceState>>,
   Path(user_id): Path<String>,
) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.get_presence(user_id).await {
      Ok(presence) => Json(CanJoinData::from(presence)).into_response(),
      Err(e) => log_and_convert_upstream_error("参加可否判定", PRESENCE_FAILURE, e),
   }
}

/// GET /joinlinks/{user_id}
///
/// ユーザーがいるサーバーへの参加リンクを取得する
#[utoipa::path(
   get,
   path = "/joinlinks/{user_id}",
   tag = "presence",
   params(("user_id" = u64, Path, description = "Roblox ユーザー ID")),
   responses(
      (status = 200, description = "参加リンク", body = JoinLinksResponse),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 404, description = "ゲーム内にいない", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_join_links(
   State(state): State<Arc<PresenceState>>,
   Path(user_id): Path<String>,
) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.join_target(user_id).await {
      Ok(Some(target)) => Json(JoinLinksResponse::new(user_id, target)).into_response(),
      Ok(None) => not_found_response("User is not in a joinable game."),
      Err(e) => log_and_convert_upstream_error("参加リンク取得", PRESENCE_FAILURE, e),
   }
}
