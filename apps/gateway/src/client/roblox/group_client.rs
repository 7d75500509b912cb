//! Groups API クライアント

use async_trait::async_trait;

use super::{
   client_impl::RobloxClientImpl,
   error::UpstreamError,
   response::handle_response,
   types::{DataList, GroupMembershipDto},
};

/// Groups API クライアントトレイト
#[async_trait]
pub trait RobloxGroupClient: Send + Sync {
   /// ユーザーの所属グループとロール一覧を取得する
   ///
   /// `GET groups/v1/users/{user_id}/groups/roles` を呼び出す（ページングなし）。
   async fn list_group_memberships(
      &self,
      user_id: u64,
   ) -> Result<Vec<GroupMembershipDto>, UpstreamError>;
}

#[async_trait]
impl RobloxGroupClient for RobloxClientImpl {
   async fn list_group_memberships(
      &self,
      user_id: u64,
   ) -> Result<Vec<GroupMembershipDto>, UpstreamError> {
      let url = format!("{}/v1/users/{}/groups/roles", self.endpoints.groups, user_id);

      let response = self.client.get(&url).send().await?;
      let body: DataList<GroupMembershipDto> = handle_response(response).await?;
      Ok(body.data)
   }
}
