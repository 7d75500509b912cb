//! Badges / Inventory API クライアント
//!
//! いずれもカーソルページングされた一覧を 1 ページずつ返す。
//! ページの連結は `usecase::pagination` が担当する。

use async_trait::async_trait;

use super::{
   client_impl::RobloxClientImpl,
   error::UpstreamError,
   response::{handle_response, paged_url},
   types::{BadgeDto, CollectibleDto, InventoryItemDto, Page},
};

/// 1 ページあたりの取得件数（上流の上限値）
const PAGE_LIMIT: u32 = 100;

/// Badges / Inventory API クライアントトレイト
#[async_trait]
pub trait RobloxInventoryClient: Send + Sync {
   /// 獲得バッジ一覧の 1 ページを取得する
   ///
   /// `GET badges/v1/users/{user_id}/badges?limit=100[&cursor=]` を呼び出す。
   async fn fetch_badges_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<BadgeDto>, UpstreamError>;

   /// コレクティブル（従来型限定品）一覧の 1 ページを取得する
   ///
   /// `GET inventory/v1/users/{user_id}/assets/collectibles?limit=100[&cursor=]` を呼び出す。
   async fn fetch_collectibles_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<CollectibleDto>, UpstreamError>;

   /// アセット種別ごとのインベントリの 1 ページを取得する
   ///
   /// `GET inventory/v2/users/{user_id}/inventory/{asset_type}?limit=100[&cursor=]` を呼び出す。
   /// カテゴリ用の短いタイムアウトを適用する。
   async fn fetch_inventory_page(
      &self,
      user_id: u64,
      asset_type: u32,
      cursor: Option<String>,
   ) -> Result<Page<InventoryItemDto>, UpstreamError>;
}

#[async_trait]
impl RobloxInventoryClient for RobloxClientImpl {
   async fn fetch_badges_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<BadgeDto>, UpstreamError> {
      let base_url = format!(
         "{}/v1/users/{}/badges?limit={}",
         self.endpoints.badges, user_id, PAGE_LIMIT
      );
      let url = paged_url(&base_url, cursor.as_deref());

      let response = self.client.get(&url).send().await?;
      handle_response(response).await
   }

   async fn fetch_collectibles_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<CollectibleDto>, UpstreamError> {
      let base_url = format!(
         "{}/v1/users/{}/assets/collectibles?limit={}",
         self.endpoints.inventory, user_id, PAGE_LIMIT
      );
      let url = paged_url(&base_url, cursor.as_deref());

      let response = self.client.get(&url).send().await?;
      handle_response(response).await
   }

   async fn fetch_inventory_page(
      &self,
      user_id: u64,
      asset_type: u32,
      cursor: Option<String>,
   ) -> Result<Page<InventoryItemDto>, UpstreamError> {
      let base_url = format!(
         "{}/v2/users/{}/inventory/{}?limit={}",
         self.endpoints.inventory, user_id, asset_type, PAGE_LIMIT
      );
      let url = paged_url(&base_url, cursor.as_deref());

      let response = self
         .client
         .get(&url)
         .timeout(self.timeouts.category)
         .send()
         .await?;
      handle_response(response).await
   }
}
