//! # バッジカウントユースケース
//!
//! 1 ページ目だけを先に取得して非公開判定を行い、公開なら全ページを集約する。

use std::sync::Arc;

use super::pagination::collect_pages;
use crate::client::{RobloxInventoryClient, UpstreamError};

/// バッジカウントの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeOutcome {
   Counted {
      count:     u64,
      truncated: bool,
   },
   /// 非公開（または獲得バッジなし）
   Private,
}

/// バッジカウントユースケース実装
pub struct BadgeUseCaseImpl {
   inventory_client: Arc<dyn RobloxInventoryClient>,
   max_pages:        usize,
}

impl BadgeUseCaseImpl {
   pub fn new(inventory_client: Arc<dyn RobloxInventoryClient>, max_pages: usize) -> Self {
      Self {
         inventory_client,
         max_pages,
      }
   }

   /// ユーザーの獲得バッジ数を数える
   ///
   /// 1. プレビューとして 1 ページ目を取得する。要素なし・次ページなしなら `Private`
   /// 2. 全ページを集約して件数を返す（プレビューとは別リクエスト）
   ///
   /// どの段階でも権限エラーは `Private` になる。
   #[tracing::instrument(skip_all, fields(%user_id))]
   pub async fn count_badges(&self, user_id: u64) -> Result<BadgeOutcome, UpstreamError> {
      match self.count_badges_inner(user_id).await {
         Err(e) if e.is_unauthorized() => Ok(BadgeOutcome::Private),
         other => other,
      }
   }

   async fn count_badges_inner(&self, user_id: u64) -> Result<BadgeOutcome, UpstreamError> {
      let client = self.inventory_client.as_ref();

      let preview = client.fetch_badges_page(user_id, None).await?;
      if preview.is_empty_terminal() {
         return Ok(BadgeOutcome::Private);
      }

      let badges = collect_pages("badges", self.max_pages, |cursor| {
         client.fetch_badges_page(user_id, cursor)
      })
      .await?;

      Ok(BadgeOutcome::Counted {
         count:     badges.items.len() as u64,
         truncated: badges.truncated,
      })
   }
}
