//! Games API クライアント

use async_trait::async_trait;

use super::{
   client_impl::RobloxClientImpl,
   error::UpstreamError,
   response::{handle_response, paged_url},
   types::{DataList, GameDto, Page, PlaceDetailDto, UniverseGameDto},
};

/// ゲーム一覧 1 ページあたりの取得件数（v2 games の上限値）
const GAMES_PAGE_LIMIT: u32 = 50;

/// 公開ゲームのみ（`accessFilter=2`）
const PUBLIC_ACCESS_FILTER: u32 = 2;

/// Games API クライアントトレイト
#[async_trait]
pub trait RobloxGameClient: Send + Sync {
   /// ユーザーが作成した公開ゲーム一覧の 1 ページを取得する
   ///
   /// `GET games/v2/users/{user_id}/games?accessFilter=2&limit=50&sortOrder=Asc[&cursor=]`
   async fn fetch_user_games_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<GameDto>, UpstreamError>;

   /// グループが所有する公開ゲーム一覧の 1 ページを取得する
   ///
   /// `GET games/v2/groups/{group_id}/games?accessFilter=2&limit=50&sortOrder=Asc[&cursor=]`
   async fn fetch_group_games_page(
      &self,
      group_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<GameDto>, UpstreamError>;

   /// ユニバース ID からゲーム情報を取得する
   ///
   /// `GET games/v1/games?universeIds={universe_id}` を呼び出す。
   /// 該当なしの場合は `Ok(None)`。
   async fn get_game_by_universe(
      &self,
      universe_id: u64,
   ) -> Result<Option<UniverseGameDto>, UpstreamError>;

   /// プレイス ID からプレイス詳細を取得する
   ///
   /// `GET games/v1/games/multiget-place-details?placeIds={place_id}` を呼び出す。
   /// 該当なしの場合は `Ok(None)`。
   async fn get_place_details(
      &self,
      place_id: u64,
   ) -> Result<Option<PlaceDetailDto>, UpstreamError>;
}

impl RobloxClientImpl {
   fn games_list_url(&self, owner: &str, owner_id: u64) -> String {
      format!(
         "{}/v2/{}/{}/games?accessFilter={}&limit={}&sortOrder=Asc",
         self.endpoints.games, owner, owner_id, PUBLIC_ACCESS_FILTER, GAMES_PAGE_LIMIT
      )
   }
}

#[async_trait]
impl RobloxGameClient for RobloxClientImpl {
   async fn fetch_user_games_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<GameDto>, UpstreamError> {
      let url = paged_url(&self.games_list_url("users", user_id), cursor.as_deref());

      let response = self.client.get(&url).send().await?;
      handle_response(response).await
   }

   async fn fetch_group_games_page(
      &self,
      group_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<GameDto>, UpstreamError> {
      let url = paged_url(&self.games_list_url("groups", group_id), cursor.as_deref());

      let response = self.client.get(&url).send().await?;
      handle_response(response).await
   }

   async fn get_game_by_universe(
      &self,
      universe_id: u64,
   ) -> Result<Option<UniverseGameDto>, UpstreamError> {
      let url = format!(
         "{}/v1/games?universeIds={}",
         self.endpoints.games, universe_id
      );

      let response = self.client.get(&url).send().await?;
      let body: DataList<UniverseGameDto> = handle_response(response).await?;
      Ok(body.data.into_iter().next())
   }

   async fn get_place_details(
      &self,
      place_id: u64,
   ) -> Result<Option<PlaceDetailDto>, UpstreamError> {
      let url = format!(
         "{}/v1/games/multiget-place-details?placeIds={}",
         self.endpoints.games, place_id
      );

      let response = self.client.get(&url).send().await?;
      let body: Vec<PlaceDetailDto> = handle_response(response).await?;
      Ok(body.into_iter().next())
   }
}
