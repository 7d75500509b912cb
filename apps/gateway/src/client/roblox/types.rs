//! Roblox API のレスポンス / リクエスト型
//!
//! 上流はリビジョンごとにフィールドの有無や null の扱いが揺れるため、
//! 識別子以外はほぼすべて `Option` で受ける。

use serde::{Deserialize, Serialize};

// --- ページング ---

/// カーソルページングされた一覧レスポンス
///
/// `data` が欠落・null の場合、要素は空として取り出す。
/// ただし明示的な空配列とは区別する（空の最終ページ判定は空配列のみ）。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
   data:             Option<Vec<T>>,
   next_page_cursor: Option<String>,
}

impl<T> Page<T> {
   pub fn new(data: Vec<T>, next_page_cursor: Option<&str>) -> Self {
      Self {
         data:             Some(data),
         next_page_cursor: next_page_cursor.map(str::to_string),
      }
   }

   /// 次ページのカーソル（空文字はカーソルなしとみなす）
   pub fn next_cursor(&self) -> Option<&str> {
      self.next_page_cursor.as_deref().filter(|c| !c.is_empty())
   }

   /// 空の最終ページか（`data` が空配列、かつ次ページなし）
   ///
   /// `data` 自体が欠落・null のページは該当しない。
   pub fn is_empty_terminal(&self) -> bool {
      matches!(&self.data, Some(data) if data.is_empty()) && self.next_cursor().is_none()
   }

   /// 要素と次ページカーソルに分解する
   pub fn into_parts(self) -> (Vec<T>, Option<String>) {
      let next = self.next_page_cursor.filter(|c| !c.is_empty());
      (self.data.unwrap_or_default(), next)
   }
}

/// ページングなしの `{ "data": [...] }` レスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataList<T> {
   #[serde(default)]
   pub data: Vec<T>,
}

/// 上流のエラーボディ `{ "errors": [{ "code": 0, "message": "..." }] }`
///
/// 判定に使うのは `message` のみ。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamErrorBody {
   #[serde(default)]
   pub errors: Vec<UpstreamErrorEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamErrorEntry {
   #[serde(default)]
   pub message: String,
}

// --- Users API ---

/// `GET users/v1/users/{userId}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
   pub id:           u64,
   pub name:         String,
   #[serde(default)]
   pub display_name: Option<String>,
   #[serde(default)]
   pub created:      Option<String>,
   #[serde(default)]
   pub is_banned:    Option<bool>,
}

// --- Badges / Inventory API ---

/// `GET badges/v1/users/{userId}/badges` の要素
///
/// 件数しか使わないため識別子のみ受け取る。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BadgeDto {
   #[serde(default)]
   pub id: Option<u64>,
}

/// `GET inventory/v1/users/{userId}/assets/collectibles` の要素
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectibleDto {
   #[serde(default)]
   pub asset_id: Option<u64>,
   #[serde(default)]
   pub name:     Option<String>,
}

/// `GET inventory/v2/users/{userId}/inventory/{assetType}` の要素
///
/// 限定品を示すフィールドは型も配置も揺れる（文字列 ID / 数値 / bool、
/// トップレベル / `assetDetails` 配下）ため `serde_json::Value` で受ける。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
   #[serde(default)]
   pub asset_id:               Option<u64>,
   #[serde(default)]
   pub collectible_item_id:    Option<serde_json::Value>,
   #[serde(default)]
   pub collectible_product_id: Option<serde_json::Value>,
   #[serde(default)]
   pub serial_number:          Option<serde_json::Value>,
   #[serde(default)]
   pub is_limited:             Option<serde_json::Value>,
   #[serde(default)]
   pub asset_details:          Option<AssetDetailsDto>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetailsDto {
   #[serde(default)]
   pub is_limited: Option<serde_json::Value>,
}

// --- Games API ---

/// `GET games/v2/{users|groups}/{id}/games` の要素
///
/// 訪問数の合計にしか使わないため `id` の欠落も許容する。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
   #[serde(default)]
   pub id:           Option<u64>,
   #[serde(default)]
   pub name:         Option<String>,
   #[serde(default)]
   pub place_visits: Option<u64>,
}

/// `GET games/v1/games?universeIds=` の要素
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseGameDto {
   pub id:            u64,
   #[serde(default)]
   pub root_place_id: Option<u64>,
   #[serde(default)]
   pub name:          Option<String>,
   #[serde(default)]
   pub description:   Option<String>,
   #[serde(default)]
   pub creator:       Option<CreatorDto>,
   #[serde(default)]
   pub playing:       Option<u64>,
   #[serde(default)]
   pub visits:        Option<u64>,
   #[serde(default)]
   pub max_players:   Option<u32>,
   #[serde(default)]
   pub genre:         Option<String>,
   #[serde(default)]
   pub updated:       Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatorDto {
   #[serde(default)]
   pub id:   Option<u64>,
   #[serde(default)]
   pub name: Option<String>,
   #[serde(default, rename = "type")]
   pub kind: Option<String>,
}

/// `GET games/v1/games/multiget-place-details?placeIds=` の要素
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailDto {
   pub place_id:               u64,
   #[serde(default)]
   pub name:                   Option<String>,
   #[serde(default)]
   pub description:            Option<String>,
   #[serde(default)]
   pub url:                    Option<String>,
   #[serde(default)]
   pub builder:                Option<String>,
   #[serde(default)]
   pub builder_id:             Option<u64>,
   #[serde(default)]
   pub is_playable:            Option<bool>,
   #[serde(default)]
   pub universe_id:            Option<u64>,
   #[serde(default)]
   pub universe_root_place_id: Option<u64>,
}

// --- Groups API ---

/// `GET groups/v1/users/{userId}/groups/roles` の要素
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupMembershipDto {
   pub group: GroupDto,
   pub role:  GroupRoleDto,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupDto {
   pub id:   u64,
   #[serde(default)]
   pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupRoleDto {
   #[serde(default)]
   pub name: Option<String>,
   #[serde(default)]
   pub rank: u16,
}

// --- Presence API ---

/// `POST presence/v1/presence/users` のリクエストボディ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRequest {
   pub user_ids: Vec<u64>,
}

/// `POST presence/v1/presence/users` のレスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceResponse {
   #[serde(default)]
   pub user_presences: Vec<PresenceDto>,
}

/// ユーザー 1 人分のプレゼンス
///
/// `gameId` はサーバーインスタンス ID（GUID）。ユニバース ID ではない。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceDto {
   #[serde(default)]
   pub user_presence_type: i64,
   #[serde(default)]
   pub last_location:      Option<String>,
   #[serde(default)]
   pub place_id:           Option<u64>,
   #[serde(default)]
   pub root_place_id:      Option<u64>,
   #[serde(default)]
   pub game_id:            Option<String>,
   #[serde(default)]
   pub universe_id:        Option<u64>,
   #[serde(default)]
   pub user_id:            Option<u64>,
   #[serde(default)]
   pub last_online:        Option<String>,
}
