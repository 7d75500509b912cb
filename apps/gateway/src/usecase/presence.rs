//! # プレゼンス / プレイ中ゲームユースケース
//!
//! ## 識別子の優先順位
//!
//! 上流のプレゼンスはリビジョンによってフィールドの埋まり方が揺れる。
//! ここでの解釈を唯一の規則とする:
//!
//! - 実効プレイス: `placeId`、なければ `rootPlaceId`
//! - ユニバース: `universeId`、なければプレイス詳細が返す `universeId`
//! - `gameId` は常にサーバーインスタンス ID（ユニバース ID ではない）
//!
//! ## プレイ中の判定
//!
//! プレゼンス種別 2（ゲーム内）と 3（Studio）のみをプレイ中とみなす。
//!
//! ## 補完
//!
//! プレイ中の場合、以下を順にベストエフォートで取得する。失敗はログのみで
//! 該当フィールドが `None` になる。
//!
//! 1. ユニバースのゲーム情報
//! 2. 実効プレイスのプレイス詳細
//! 3. サブプレイスの場合はルートプレイスのプレイス詳細

use std::sync::Arc;

use super::{best_effort, join_link::JoinLinks};
use crate::client::{
   PlaceDetailDto,
   PresenceDto,
   RobloxGameClient,
   RobloxPresenceClient,
   UniverseGameDto,
   UpstreamError,
};

const PRESENCE_OFFLINE: i64 = 0;
const PRESENCE_ONLINE: i64 = 1;
const PRESENCE_IN_GAME: i64 = 2;
const PRESENCE_IN_STUDIO: i64 = 3;
const PRESENCE_INVISIBLE: i64 = 4;

/// ゲーム / Studio 内のセッション情報
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
   pub place_id:         Option<u64>,
   pub root_place_id:    Option<u64>,
   pub universe_id:      Option<u64>,
   /// サーバーインスタンス ID
   pub game_instance_id: Option<String>,
   pub last_location:    Option<String>,
}

impl Session {
   /// 実効プレイス ID（`placeId`、なければ `rootPlaceId`）
   pub fn effective_place_id(&self) -> Option<u64> {
      self.place_id.or(self.root_place_id)
   }

   /// ルートプレイスとは別のサブプレイスにいるか
   pub fn is_subplace(&self) -> bool {
      matches!((self.place_id, self.root_place_id), (Some(place), Some(root)) if place != root)
   }
}

/// ユーザーのプレゼンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
   Offline,
   Online,
   InGame(Session),
   InStudio(Session),
   Invisible,
   /// 未知の種別コード
   Unknown(i64),
}

impl From<PresenceDto> for Presence {
   fn from(dto: PresenceDto) -> Self {
      let session = || Session {
         place_id:         dto.place_id,
         root_place_id:    dto.root_place_id,
         universe_id:      dto.universe_id,
         game_instance_id: dto.game_id.clone().filter(|id| !id.is_empty()),
         last_location:    dto.last_location.clone(),
      };

      match dto.user_presence_type {
         PRESENCE_OFFLINE => Presence::Offline,
         PRESENCE_ONLINE => Presence::Online,
         PRESENCE_IN_GAME => Presence::InGame(session()),
         PRESENCE_IN_STUDIO => Presence::InStudio(session()),
         PRESENCE_INVISIBLE => Presence::Invisible,
         code => Presence::Unknown(code),
      }
   }
}

impl Presence {
   /// 上流の種別コード
   pub fn code(&self) -> i64 {
      match self {
         Presence::Offline => PRESENCE_OFFLINE,
         Presence::Online => PRESENCE_ONLINE,
         Presence::InGame(_) => PRESENCE_IN_GAME,
         Presence::InStudio(_) => PRESENCE_IN_STUDIO,
         Presence::Invisible => PRESENCE_INVISIBLE,
         Presence::Unknown(code) => *code,
      }
   }

   /// 表示用のステータス名
   pub fn status(&self) -> &'static str {
      match self {
         Presence::Offline => "offline",
         Presence::Online => "online",
         Presence::InGame(_) => "inGame",
         Presence::InStudio(_) => "inStudio",
         Presence::Invisible => "invisible",
         Presence::Unknown(_) => "unknown",
      }
   }

   /// オンライン（Web / ゲーム / Studio のいずれか）か
   pub fn is_online(&self) -> bool {
      matches!(
         self,
         Presence::Online | Presence::InGame(_) | Presence::InStudio(_)
      )
   }

   /// プレイ中ならセッションを返す
   pub fn session(&self) -> Option<&Session> {
      match self {
         Presence::InGame(session) | Presence::InStudio(session) => Some(session),
         _ => None,
      }
   }

   /// 参加可能なゲームセッション（ゲーム内かつ実効プレイスが判明している）
   pub fn joinable_session(&self) -> Option<&Session> {
      match self {
         Presence::InGame(session) if session.effective_place_id().is_some() => Some(session),
         _ => None,
      }
   }

   pub fn can_join(&self) -> bool {
      self.joinable_session().is_some()
   }
}

/// プレイ中ゲームの情報
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
   pub presence:    Presence,
   /// 解決済みのユニバース ID
   pub universe_id: Option<u64>,
   pub game:        Option<UniverseGameDto>,
   pub place:       Option<PlaceDetailDto>,
   /// サブプレイスにいる場合のルートプレイス
   pub root_place:  Option<PlaceDetailDto>,
   pub join_links:  Option<JoinLinks>,
}

impl NowPlaying {
   fn not_playing(presence: Presence) -> Self {
      Self {
         presence,
         universe_id: None,
         game: None,
         place: None,
         root_place: None,
         join_links: None,
      }
   }

   pub fn is_playing(&self) -> bool {
      self.presence.session().is_some()
   }
}

/// 参加先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTarget {
   pub place_id:         u64,
   pub root_place_id:    Option<u64>,
   pub game_instance_id: Option<String>,
   pub links:            JoinLinks,
}

/// プレゼンスユースケース実装
pub struct PresenceUseCaseImpl {
   presence_client: Arc<dyn RobloxPresenceClient>,
   game_client:     Arc<dyn RobloxGameClient>,
}

impl PresenceUseCaseImpl {
   pub fn new(
      presence_client: Arc<dyn RobloxPresenceClient>,
      game_client: Arc<dyn RobloxGameClient>,
   ) -> Self {
      Self {
         presence_client,
         game_client,
      }
   }

   /// プレゼンスを取得する
   ///
   /// レスポンスに該当ユーザーが含まれない場合はオフライン扱い。
   #[tracing::instrument(skip_all, fields(%user_id))]
   pub async fn get_presence(&self, user_id: u64) -> Result<Presence, UpstreamError> {
      let presence = self
         .presence_client
         .get_presence(user_id)
         .await?
         .map_or(Presence::Offline, Presence::from);

      tracing::debug!(presence = presence.status(), "プレゼンスを取得しました");
      Ok(presence)
   }

   /// プレイ中のゲーム情報を取得する
   ///
   /// プレゼンス取得の失敗のみ `Err`。補完の失敗は該当フィールドが `None` になる。
   #[tracing::instrument(skip_all, fields(%user_id))]
   pub async fn now_playing(&self, user_id: u64) -> Result<NowPlaying, UpstreamError> {
      let presence = self.get_presence(user_id).await?;

      let Some(session) = presence.session().cloned() else {
         return Ok(NowPlaying::not_playing(presence));
      };

      let client = self.game_client.as_ref();

      let mut game = match session.universe_id {
         Some(universe_id) => {
            best_effort("game", client.get_game_by_universe(universe_id)).await
         }
         None => None,
      };

      let place_id = session.effective_place_id();
      let place = match place_id {
         Some(place_id) => best_effort("place", client.get_place_details(place_id)).await,
         None => None,
      };

      let root_place = match session.root_place_id {
         Some(root_place_id) if session.is_subplace() => {
            best_effort("root_place", client.get_place_details(root_place_id)).await
         }
         _ => None,
      };

      let universe_id = session
         .universe_id
         .or_else(|| place.as_ref().and_then(|p| p.universe_id));

      if game.is_none()
         && session.universe_id.is_none()
         && let Some(universe_id) = universe_id
      {
         game = best_effort("game", client.get_game_by_universe(universe_id)).await;
      }

      let join_links =
         place_id.map(|id| JoinLinks::build(id, session.game_instance_id.as_deref()));

      Ok(NowPlaying {
         presence,
         universe_id,
         game,
         place,
         root_place,
         join_links,
      })
   }

   /// 参加リンクを取得する
   ///
   /// ゲーム内でない、または実効プレイスが不明な場合は `Ok(None)`。
   #[tracing::instrument(skip_all, fields(%user_id))]
   pub async fn join_target(&self, user_id: u64) -> Result<Option<JoinTarget>, UpstreamError> {
      let presence = self.get_presence(user_id).await?;

      let Some(session) = presence.joinable_session() else {
         return Ok(None);
      };
      let Some(place_id) = session.effective_place_id() else {
         return Ok(None);
      };

      Ok(Some(JoinTarget {
         place_id,
         root_place_id: session.root_place_id,
         game_instance_id: session.game_instance_id.clone(),
         links: JoinLinks::build(place_id, session.game_instance_id.as_deref()),
      }))
   }
}
