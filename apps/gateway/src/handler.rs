//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、集計ロジックはユースケースに委譲
//! - パスの ID は文字列で受け、数値でなければ JSON の 400 を返す
//!
//! ## ハンドラ一覧
//!
//! - `health`: 稼働確認、ヘルスチェック
//! - `user`: ユーザー情報
//! - `badges` / `limiteds`: インベントリ集計
//! - `visits`: ゲーム訪問数
//! - `presence`: プレイ中ゲーム、参加可否、参加リンク
//! - `place`: プレイス参照

pub mod badges;
pub mod health;
pub mod limiteds;
pub mod place;
pub mod presence;
pub mod user;
pub mod visits;

pub use badges::{BadgeState, get_badge_count};
pub use health::{health_check, root};
pub use limiteds::{LimitedsState, get_limiteds};
pub use place::{PlaceState, get_place};
pub use presence::{PresenceState, get_can_join, get_join_links, get_now_playing};
pub use user::{UserState, get_user};
pub use visits::{VisitsState, get_visits};

use serde::Serialize;
use utoipa::ToSchema;

/// 非公開インベントリのレスポンス（`{ "private": true }`）
#[derive(Debug, Serialize, ToSchema)]
pub struct PrivateData {
   pub private: bool,
}

impl Default for PrivateData {
   fn default() -> Self {
      Self { private: true }
   }
}

pub(crate) fn is_false(value: &bool) -> bool {
   !*value
}
