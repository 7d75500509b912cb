//! Presence API クライアント

use async_trait::async_trait;

use super::{
   client_impl::RobloxClientImpl,
   error::UpstreamError,
   response::handle_response,
   types::{PresenceDto, PresenceRequest, PresenceResponse},
};

/// Presence API クライアントトレイト
#[async_trait]
pub trait RobloxPresenceClient: Send + Sync {
   /// ユーザーのプレゼンスを取得する
   ///
   /// `POST presence/v1/presence/users` を呼び出す（参照のみの問い合わせ）。
   /// レスポンスに該当ユーザーが含まれない場合は `Ok(None)`。
   async fn get_presence(&self, user_id: u64) -> Result<Option<PresenceDto>, UpstreamError>;
}

#[async_trait]
impl RobloxPresenceClient for RobloxClientImpl {
   async fn get_presence(&self, user_id: u64) -> Result<Option<PresenceDto>, UpstreamError> {
      let url = format!("{}/v1/presence/users", self.endpoints.presence);
      let request = PresenceRequest {
         user_ids: vec![user_id],
      };

      let response = self.client.post(&url).json(&request).send().await?;
      let body: PresenceResponse = handle_response(response).await?;

      Ok(body
         .user_presences
         .into_iter()
         .find(|p| p.user_id.is_none_or(|id| id == user_id)))
   }
}
