//! # ユースケース層
//!
//! 上流 API の呼び出しを組み合わせて、各エンドポイントの集計ロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: クライアントを `Arc<dyn SubTrait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは結果を HTTP レスポンスに写すだけにする
//! - **リクエスト内で完結**: 累積値や既出集合は 1 回の呼び出しの中だけで持つ
//!
//! ## モジュール構成
//!
//! - `pagination`: カーソルページングの集約
//! - `badges` / `limiteds` / `visits` / `user`: ユーザー単位の集計
//! - `presence` / `place` / `join_link`: プレゼンスとプレイス参照

pub mod badges;
pub mod join_link;
pub mod limiteds;
pub mod pagination;
pub mod place;
pub mod presence;
pub mod user;
pub mod visits;

pub use badges::{BadgeOutcome, BadgeUseCaseImpl};
pub use join_link::JoinLinks;
pub use limiteds::{
   AssetTypeProfile,
   InvalidAssetTypeProfile,
   LimitedCount,
   LimitedsOutcome,
   LimitedsSettings,
   LimitedsUseCaseImpl,
};
pub use pagination::{Collected, collect_pages};
pub use place::{PlaceLookup, PlaceUseCaseImpl};
pub use presence::{JoinTarget, NowPlaying, Presence, PresenceUseCaseImpl, Session};
pub use user::{UserProfile, UserUseCaseImpl};
pub use visits::{GroupVisits, VisitSummary, VisitsUseCaseImpl};

use crate::client::UpstreamError;

/// 補完用の上流呼び出しをベストエフォートで実行する
///
/// 失敗は warn ログを出して `None` にする。
pub(crate) async fn best_effort<T>(
   lookup: &str,
   fut: impl Future<Output = Result<Option<T>, UpstreamError>>,
) -> Option<T> {
   match fut.await {
      Ok(value) => value,
      Err(e) => {
         tracing::warn!(
            error.category = "external_service",
            error.kind = "roblox_games",
            lookup,
            "補完用の取得に失敗しました: {}",
            e
         );
         None
      }
   }
}
