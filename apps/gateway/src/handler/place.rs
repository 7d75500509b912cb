//! # プレイス参照 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /place/{place_id}` - プレイス詳細と所属ゲーム情報
//!
//! ゲーム / プレイス / 参加リンクのレスポンス型はプレゼンス API と共有する。

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
   client::{CreatorDto, PlaceDetailDto, UniverseGameDto},
   error::{log_and_convert_upstream_error, not_found_response, parse_path_id},
   usecase::{JoinLinks, PlaceLookup, PlaceUseCaseImpl},
};

/// プレイス API の State
pub struct PlaceState {
   pub usecase: PlaceUseCaseImpl,
}

// --- レスポンス型 ---

/// ゲームの作成者
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatorData {
   pub id:   Option<u64>,
   pub name: Option<String>,
   /// `User` / `Group`
   #[serde(rename = "type")]
   pub kind: Option<String>,
}

impl From<CreatorDto> for CreatorData {
   fn from(dto: CreatorDto) -> Self {
      Self {
         id:   dto.id,
         name: dto.name,
         kind: dto.kind,
      }
   }
}

/// ユニバース（ゲーム）情報
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
   pub universe_id:   u64,
   pub root_place_id: Option<u64>,
   pub name:          Option<String>,
   pub description:   Option<String>,
   pub creator:       Option<CreatorData>,
   /// 現在のプレイヤー数
   pub playing:       Option<u64>,
   pub visits:        Option<u64>,
   pub max_players:   Option<u32>,
   pub genre:         Option<String>,
   pub updated:       Option<String>,
}

impl From<UniverseGameDto> for GameData {
   fn from(dto: UniverseGameDto) -> Self {
      Self {
         universe_id:   dto.id,
         root_place_id: dto.root_place_id,
         name:          dto.name,
         description:   dto.description,
         creator:       dto.creator.map(CreatorData::from),
         playing:       dto.playing,
         visits:        dto.visits,
         max_players:   dto.max_players,
         genre:         dto.genre,
         updated:       dto.updated,
      }
   }
}

/// プレイス詳細
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceData {
   pub place_id:      u64,
   pub name:          Option<String>,
   pub description:   Option<String>,
   pub url:           Option<String>,
   pub builder:       Option<String>,
   pub builder_id:    Option<u64>,
   pub is_playable:   Option<bool>,
   pub universe_id:   Option<u64>,
   pub root_place_id: Option<u64>,
}

impl From<PlaceDetailDto> for PlaceData {
   fn from(dto: PlaceDetailDto) -> Self {
      Self {
         place_id:      dto.place_id,
         name:          dto.name,
         description:   dto.description,
         url:           dto.url,
         builder:       dto.builder,
         builder_id:    dto.builder_id,
         is_playable:   dto.is_playable,
         universe_id:   dto.universe_id,
         root_place_id: dto.universe_root_place_id,
      }
   }
}

/// 参加リンク
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinLinksData {
   /// `roblox://` ディープリンク
   pub deep_link: String,
   pub web_join:  String,
   pub game_page: String,
}

impl From<JoinLinks> for JoinLinksData {
   fn from(links: JoinLinks) -> Self {
      Self {
         deep_link: links.deep_link,
         web_join:  links.web_join,
         game_page: links.game_page,
      }
   }
}

/// プレイス参照レスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLookupData {
   pub place_id:      u64,
   pub name:          Option<String>,
   pub description:   Option<String>,
   pub url:           Option<String>,
   pub builder:       Option<String>,
   pub builder_id:    Option<u64>,
   pub universe_id:   Option<u64>,
   pub root_place_id: Option<u64>,
   pub is_root_place: Option<bool>,
   pub game:          Option<GameData>,
   pub join_links:    JoinLinksData,
}

impl From<PlaceLookup> for PlaceLookupData {
   fn from(lookup: PlaceLookup) -> Self {
      let is_root_place = lookup.is_root_place();
      let detail = lookup.detail;
      Self {
         place_id: detail.place_id,
         name: detail.name,
         description: detail.description,
         url: detail.url,
         builder: detail.builder,
         builder_id: detail.builder_id,
         universe_id: detail.universe_id,
         root_place_id: lookup.root_place_id,
         is_root_place,
         game: lookup.game.map(GameData::from),
         join_links: lookup.join_links.into(),
      }
   }
}

// --- ハンドラ ---

/// GET /place/{place_id}
///
/// プレイス詳細を取得する
#[utoipa::path(
   get,
   path = "/place/{place_id}",
   tag = "places",
   params(("place_id" = u64, Path, description = "プレイス ID")),
   responses(
      (status = 200, description = "プレイス詳細", body = PlaceLookupData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 404, description = "プレイスが存在しない", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_place(
   State(state): State<Arc<PlaceState>>,
   Path(place_id): Path<String>,
) -> Response {
   let place_id = match parse_path_id(&place_id, "place") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state.usecase.lookup_place(place_id).await {
      Ok(Some(lookup)) => Json(PlaceLookupData::from(lookup)).into_response(),
      Ok(None) => not_found_response("Place not found."),
      Err(e) => log_and_convert_upstream_error("プレイス参照", "Failed to fetch place.", e),
   }
}
