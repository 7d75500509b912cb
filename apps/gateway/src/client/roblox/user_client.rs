//! Users API クライアント

use async_trait::async_trait;

use super::{
   client_impl::RobloxClientImpl,
   error::UpstreamError,
   response::handle_response,
   types::UserDto,
};

/// Users API クライアントトレイト
#[async_trait]
pub trait RobloxUserClient: Send + Sync {
   /// ユーザー情報を取得する
   ///
   /// `GET users/v1/users/{user_id}` を呼び出す。
   async fn get_user(&self, user_id: u64) -> Result<UserDto, UpstreamError>;
}

#[async_trait]
impl RobloxUserClient for RobloxClientImpl {
   async fn get_user(&self, user_id: u64) -> Result<UserDto, UpstreamError> {
      let url = format!("{}/v1/users/{}", self.endpoints.users, user_id);

      let response = self.client.get(&url).send().await?;
      handle_response(response).await
   }
}
