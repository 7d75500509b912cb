//! ユーザー情報ユースケース

use std::sync::Arc;

use crate::client::{RobloxUserClient, UpstreamError, UserDto};

/// ユーザー情報（参加年つき）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
   pub id:           u64,
   pub name:         String,
   pub display_name: Option<String>,
   pub created:      Option<String>,
   pub join_year:    Option<i32>,
   pub is_banned:    Option<bool>,
}

impl From<UserDto> for UserProfile {
   fn from(dto: UserDto) -> Self {
      let join_year = dto.created.as_deref().and_then(join_year);
      Self {
         id: dto.id,
         name: dto.name,
         display_name: dto.display_name,
         created: dto.created,
         join_year,
         is_banned: dto.is_banned,
      }
   }
}

/// 作成日時の先頭 4 文字を年として解釈する
///
/// 4 文字に満たない、または数値でない場合は `None`。
pub fn join_year(created: &str) -> Option<i32> {
   created.get(..4)?.parse().ok()
}

/// ユーザー情報ユースケース実装
pub struct UserUseCaseImpl {
   user_client: Arc<dyn RobloxUserClient>,
}

impl UserUseCaseImpl {
   pub fn new(user_client: Arc<dyn RobloxUserClient>) -> Self {
      Self { user_client }
   }

   /// ユーザー情報を取得する
   #[tracing::instrument(skip_all, fields(%user_id))]
   pub async fn get_profile(&self, user_id: u64) -> Result<UserProfile, UpstreamError> {
      let user = self.user_client.get_user(user_id).await?;
      Ok(UserProfile::from(user))
   }
}
