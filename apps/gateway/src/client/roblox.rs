//! # Roblox API クライアント
//!
//! ゲートウェイから Roblox 公開 REST API への通信を担当する。
//!
//! ## エンドポイント
//!
//! | ホスト | パス | 用途 |
//! |--------|------|------|
//! | users | `GET /v1/users/{id}` | プロフィール |
//! | badges | `GET /v1/users/{id}/badges` | 獲得バッジ（ページング） |
//! | inventory | `GET /v1/users/{id}/assets/collectibles` | 従来型限定品（ページング） |
//! | inventory | `GET /v2/users/{id}/inventory/{assetType}` | アセット種別ごとの所持品（ページング） |
//! | games | `GET /v2/{users,groups}/{id}/games` | 公開ゲーム一覧（ページング） |
//! | games | `GET /v1/games?universeIds=` | ユニバースのゲーム情報 |
//! | games | `GET /v1/games/multiget-place-details?placeIds=` | プレイス詳細 |
//! | groups | `GET /v1/users/{id}/groups/roles` | 所属グループとランク |
//! | presence | `POST /v1/presence/users` | オンライン状態 |
//!
//! リトライは行わない。各リクエストは 1 回だけ送り、タイムアウトは
//! `reqwest::Client` のリクエスト単位タイムアウトに任せる。

mod client_impl;
mod error;
mod game_client;
mod group_client;
mod inventory_client;
mod presence_client;
mod response;
mod types;
mod user_client;

pub use client_impl::{RobloxClient, RobloxClientImpl, RobloxEndpoints, UpstreamTimeouts};
pub use error::UpstreamError;
pub use game_client::RobloxGameClient;
pub use group_client::RobloxGroupClient;
pub use inventory_client::RobloxInventoryClient;
pub use presence_client::RobloxPresenceClient;
pub use types::{
   AssetDetailsDto,
   BadgeDto,
   CollectibleDto,
   CreatorDto,
   GameDto,
   GroupDto,
   GroupMembershipDto,
   GroupRoleDto,
   InventoryItemDto,
   Page,
   PlaceDetailDto,
   PresenceDto,
   UniverseGameDto,
   UserDto,
};
pub use user_client::RobloxUserClient;
