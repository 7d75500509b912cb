//! # プレイス参照ユースケース
//!
//! プレイス詳細を主として取得し、所属ユニバースのゲーム情報をベストエフォートで補う。

use std::sync::Arc;

use super::{best_effort, join_link::JoinLinks};
use crate::client::{PlaceDetailDto, RobloxGameClient, UniverseGameDto, UpstreamError};

/// プレイス参照の結果
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceLookup {
   pub detail:        PlaceDetailDto,
   pub game:          Option<UniverseGameDto>,
   /// ルートプレイス（プレイス詳細、なければゲーム情報から）
   pub root_place_id: Option<u64>,
   pub join_links:    JoinLinks,
}

impl PlaceLookup {
   /// ルートプレイスそのものか（ルートが不明なら `None`）
   pub fn is_root_place(&self) -> Option<bool> {
      self.root_place_id.map(|root| root == self.detail.place_id)
   }
}

/// プレイス参照ユースケース実装
pub struct PlaceUseCaseImpl {
   game_client: Arc<dyn RobloxGameClient>,
}

impl PlaceUseCaseImpl {
   pub fn new(game_client: Arc<dyn RobloxGameClient>) -> Self {
      Self { game_client }
   }

   /// プレイスを参照する
   ///
   /// 上流が 404 または空の一覧を返した場合は `Ok(None)`。
   #[tracing::instrument(skip_all, fields(%place_id))]
   pub async fn lookup_place(&self, place_id: u64) -> Result<Option<PlaceLookup>, UpstreamError> {
      let detail = match self.game_client.get_place_details(place_id).await {
         Ok(Some(detail)) => detail,
         Ok(None) | Err(UpstreamError::NotFound) => return Ok(None),
         Err(e) => return Err(e),
      };

      let game = match detail.universe_id {
         Some(universe_id) => {
            best_effort("game", self.game_client.get_game_by_universe(universe_id)).await
         }
         None => None,
      };

      let root_place_id = detail
         .universe_root_place_id
         .or_else(|| game.as_ref().and_then(|g| g.root_place_id));

      Ok(Some(PlaceLookup {
         join_links: JoinLinks::build(detail.place_id, None),
         detail,
         game,
         root_place_id,
      }))
   }
}
