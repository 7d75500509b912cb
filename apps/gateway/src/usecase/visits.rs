//! # 訪問数合計ユースケース
//!
//! ユーザーが作成した公開ゲームの `placeVisits` を合計する。
//! オプションで、ユーザーが所有するグループ（ランク 255）のゲームも合算する。
//!
//! グループ側はベストエフォートで、ロール一覧やグループ単位の失敗は
//! ログを出して 0 として扱う。

use std::sync::Arc;

use super::pagination::collect_pages;
use crate::client::{GameDto, GroupDto, RobloxGameClient, RobloxGroupClient, UpstreamError};

/// グループオーナーのロールランク
pub const GROUP_OWNER_RANK: u16 = 255;

/// 所有グループごとの訪問数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVisits {
   pub id:     u64,
   pub name:   Option<String>,
   pub visits: u64,
}

/// 訪問数の集計結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitSummary {
   pub total:        u64,
   /// グループ合算を要求した場合のみ `Some`
   pub owned_groups: Option<Vec<GroupVisits>>,
   pub truncated:    bool,
}

fn sum_place_visits(games: &[GameDto]) -> u64 {
   games.iter().map(|g| g.place_visits.unwrap_or(0)).sum()
}

/// 訪問数合計ユースケース実装
pub struct VisitsUseCaseImpl {
   game_client:  Arc<dyn RobloxGameClient>,
   group_client: Arc<dyn RobloxGroupClient>,
   max_pages:    usize,
}

impl VisitsUseCaseImpl {
   pub fn new(
      game_client: Arc<dyn RobloxGameClient>,
      group_client: Arc<dyn RobloxGroupClient>,
      max_pages: usize,
   ) -> Self {
      Self {
         game_client,
         group_client,
         max_pages,
      }
   }

   /// 訪問数を合計する
   ///
   /// ユーザー自身のゲーム一覧の失敗は `Err`。グループ側の失敗は合計に影響しない。
   #[tracing::instrument(skip_all, fields(%user_id, %include_groups))]
   pub async fn sum_visits(
      &self,
      user_id: u64,
      include_groups: bool,
   ) -> Result<VisitSummary, UpstreamError> {
      let client = self.game_client.as_ref();

      let games = collect_pages("user_games", self.max_pages, |cursor| {
         client.fetch_user_games_page(user_id, cursor)
      })
      .await?;

      let mut total = sum_place_visits(&games.items);
      let mut truncated = games.truncated;

      if !include_groups {
         return Ok(VisitSummary {
            total,
            owned_groups: None,
            truncated,
         });
      }

      let mut owned_groups = Vec::new();
      for group in self.owned_groups(user_id).await {
         let visits = match collect_pages("group_games", self.max_pages, |cursor| {
            client.fetch_group_games_page(group.id, cursor)
         })
         .await
         {
            Ok(collected) => {
               truncated |= collected.truncated;
               sum_place_visits(&collected.items)
            }
            Err(e) => {
               tracing::warn!(
                  error.category = "external_service",
                  error.kind = "roblox_games",
                  group_id = group.id,
                  "グループのゲーム一覧取得に失敗しました: {}",
                  e
               );
               0
            }
         };

         total += visits;
         owned_groups.push(GroupVisits {
            id: group.id,
            name: group.name,
            visits,
         });
      }

      Ok(VisitSummary {
         total,
         owned_groups: Some(owned_groups),
         truncated,
      })
   }

   /// ユーザーがオーナーのグループ一覧（取得失敗時は空）
   async fn owned_groups(&self, user_id: u64) -> Vec<GroupDto> {
      match self.group_client.list_group_memberships(user_id).await {
         Ok(memberships) => memberships
            .into_iter()
            .filter(|m| m.role.rank == GROUP_OWNER_RANK)
            .map(|m| m.group)
            .collect(),
         Err(e) => {
            tracing::warn!(
               error.category = "external_service",
               error.kind = "roblox_groups",
               "所属グループの取得に失敗しました: {}",
               e
            );
            Vec::new()
         }
      }
   }
}
