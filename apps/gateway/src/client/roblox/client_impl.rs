//! RobloxClient スーパートレイトとクライアント実装の構造体

use std::time::Duration;

use super::{
   game_client::RobloxGameClient,
   group_client::RobloxGroupClient,
   inventory_client::RobloxInventoryClient,
   presence_client::RobloxPresenceClient,
   user_client::RobloxUserClient,
};

/// Roblox クライアントトレイト（スーパートレイト）
///
/// API ホストごとのサブトレイトを束ねる。ユースケースは必要なサブトレイトだけを
/// `Arc<dyn ...>` で受け取り、テストではサブトレイト単位でスタブを差し込む。
pub trait RobloxClient:
   RobloxUserClient
   + RobloxInventoryClient
   + RobloxGameClient
   + RobloxGroupClient
   + RobloxPresenceClient
{
}

/// ブランケット impl: 全サブトレイトを実装する型は自動的に `RobloxClient` を実装する。
impl<T> RobloxClient for T where
   T: RobloxUserClient
      + RobloxInventoryClient
      + RobloxGameClient
      + RobloxGroupClient
      + RobloxPresenceClient
{
}

/// 上流 API のベース URL 一式
///
/// テストやステージング用のモックサーバーに向けられるよう、
/// ホストごとに差し替え可能にしている。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobloxEndpoints {
   pub users:     String,
   pub badges:    String,
   pub inventory: String,
   pub games:     String,
   pub groups:    String,
   pub presence:  String,
}

impl Default for RobloxEndpoints {
   fn default() -> Self {
      Self {
         users:     "https://users.roblox.com".to_string(),
         badges:    "https://badges.roblox.com".to_string(),
         inventory: "https://inventory.roblox.com".to_string(),
         games:     "https://games.roblox.com".to_string(),
         groups:    "https://groups.roblox.com".to_string(),
         presence:  "https://presence.roblox.com".to_string(),
      }
   }
}

impl RobloxEndpoints {
   /// 末尾のスラッシュを取り除いた状態に正規化する
   pub fn normalized(self) -> Self {
      let trim = |url: String| url.trim_end_matches('/').to_string();
      Self {
         users:     trim(self.users),
         badges:    trim(self.badges),
         inventory: trim(self.inventory),
         games:     trim(self.games),
         groups:    trim(self.groups),
         presence:  trim(self.presence),
      }
   }
}

/// 上流呼び出しのタイムアウト設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
   /// 全リクエスト共通のタイムアウト
   pub default:  Duration,
   /// UGC カテゴリ別インベントリ取得のタイムアウト（カテゴリ数だけ呼ばれるため短め）
   pub category: Duration,
}

impl Default for UpstreamTimeouts {
   fn default() -> Self {
      Self {
         default:  Duration::from_secs(10),
         category: Duration::from_secs(5),
      }
   }
}

/// Roblox クライアント実装
#[derive(Clone)]
pub struct RobloxClientImpl {
   pub(super) endpoints: RobloxEndpoints,
   pub(super) client:    reqwest::Client,
   pub(super) timeouts:  UpstreamTimeouts,
}

impl RobloxClientImpl {
   /// 新しい RobloxClient を作成する
   ///
   /// # 引数
   ///
   /// - `endpoints`: 上流 API のベース URL 一式
   /// - `timeouts`: リクエスト単位のタイムアウト
   pub fn new(
      endpoints: RobloxEndpoints,
      timeouts: UpstreamTimeouts,
   ) -> Result<Self, reqwest::Error> {
      let client = reqwest::Client::builder()
         .timeout(timeouts.default)
         .user_agent(concat!("rbxproxy-gateway/", env!("CARGO_PKG_VERSION")))
         .build()?;

      Ok(Self {
         endpoints: endpoints.normalized(),
         client,
         timeouts,
      })
   }
}
