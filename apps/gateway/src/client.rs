//! # 外部 API クライアント
//!
//! 上流サービス（Roblox 公開 API）との通信を担当する。

pub mod roblox;

pub use roblox::{
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
   RobloxClient,
   RobloxClientImpl,
   RobloxEndpoints,
   RobloxGameClient,
   RobloxGroupClient,
   RobloxInventoryClient,
   RobloxPresenceClient,
   RobloxUserClient,
   UniverseGameDto,
   UpstreamError,
   UpstreamTimeouts,
   UserDto,
};
