//! # 限定品カウントユースケース
//!
//! 従来型の限定品（コレクティブル）と UGC 限定品を合算する。
//!
//! ## 手順
//!
//! 1. コレクティブル一覧を集約する。件数がそのまま `regular` になり、
//!    `assetId` はすべて既出集合に入る。権限エラーなら非公開として終了する
//! 2. アセット種別プロファイルの各種別についてインベントリを集約し、
//!    限定品かつ未出の `assetId` を `ugc` として数える
//!
//! ## カテゴリの失敗
//!
//! - 権限エラー: 以降のカテゴリを打ち切る（それまでのカウントは保持）
//! - その他: ログを出してそのカテゴリだけ読み飛ばす
//!
//! カテゴリは集約単位で扱うため、失敗したカテゴリは件数にも既出集合にも寄与しない。

use std::{collections::HashSet, str::FromStr, sync::Arc};

use thiserror::Error;

use super::pagination::collect_pages;
use crate::client::{InventoryItemDto, RobloxInventoryClient, UpstreamError};

// --- アセット種別プロファイル ---

/// 帽子
const HAT: u32 = 8;
/// 髪
const HAIR: u32 = 41;
/// 顔アクセサリー
const FACE_ACCESSORY: u32 = 42;
/// 首
const NECK_ACCESSORY: u32 = 43;
/// 肩
const SHOULDER_ACCESSORY: u32 = 44;
/// 前面
const FRONT_ACCESSORY: u32 = 45;
/// 背面
const BACK_ACCESSORY: u32 = 46;
/// 腰
const WAIST_ACCESSORY: u32 = 47;

const CLASSIC_ASSET_TYPES: &[u32] = &[HAT, HAIR, FACE_ACCESSORY];

const EXTENDED_ASSET_TYPES: &[u32] = &[
   HAT,
   HAIR,
   FACE_ACCESSORY,
   NECK_ACCESSORY,
   SHOULDER_ACCESSORY,
   FRONT_ACCESSORY,
   BACK_ACCESSORY,
   WAIST_ACCESSORY,
];

/// UGC 限定品を探すアセット種別の組み合わせ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetTypeProfile {
   /// 帽子・髪・顔
   Classic,
   /// 全アクセサリー種別
   #[default]
   Extended,
   /// 明示的に指定した種別
   Custom(Vec<u32>),
}

impl AssetTypeProfile {
   pub fn asset_types(&self) -> &[u32] {
      match self {
         AssetTypeProfile::Classic => CLASSIC_ASSET_TYPES,
         AssetTypeProfile::Extended => EXTENDED_ASSET_TYPES,
         AssetTypeProfile::Custom(types) => types,
      }
   }
}

/// アセット種別プロファイルのパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("不正なアセット種別プロファイルです: '{0}'（classic / extended / カンマ区切りの数値）")]
pub struct InvalidAssetTypeProfile(String);

impl FromStr for AssetTypeProfile {
   type Err = InvalidAssetTypeProfile;

   /// `classic` / `extended` / `8,41,42` 形式の文字列をパースする
   fn from_str(s: &str) -> Result<Self, Self::Err> {
      let value = s.trim();
      match value.to_ascii_lowercase().as_str() {
         "classic" => return Ok(AssetTypeProfile::Classic),
         "extended" => return Ok(AssetTypeProfile::Extended),
         _ => {}
      }

      let types = value
         .split(',')
         .map(|t| t.trim().parse::<u32>())
         .collect::<Result<Vec<_>, _>>()
         .map_err(|_| InvalidAssetTypeProfile(s.to_string()))?;

      if types.is_empty() {
         return Err(InvalidAssetTypeProfile(s.to_string()));
      }

      Ok(AssetTypeProfile::Custom(types))
   }
}

// --- 限定品判定 ---

/// 上流の値が「存在して真」か
///
/// null / false / 空文字 / 0 は偽。
fn is_truthy(value: &serde_json::Value) -> bool {
   use serde_json::Value;

   match value {
      Value::Null => false,
      Value::Bool(b) => *b,
      Value::String(s) => !s.is_empty(),
      Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
      Value::Array(_) | Value::Object(_) => true,
   }
}

/// インベントリ要素が限定品か
///
/// 以下のいずれかが存在して真なら限定品とみなす:
/// `collectibleItemId` / `collectibleProductId` / `serialNumber` /
/// `isLimited` / `assetDetails.isLimited`
pub fn is_limited(item: &InventoryItemDto) -> bool {
   let nested = item
      .asset_details
      .as_ref()
      .and_then(|details| details.is_limited.as_ref());

   [
      item.collectible_item_id.as_ref(),
      item.collectible_product_id.as_ref(),
      item.serial_number.as_ref(),
      item.is_limited.as_ref(),
      nested,
   ]
   .into_iter()
   .flatten()
   .any(is_truthy)
}

// --- ユースケース ---

/// 限定品の件数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedCount {
   pub regular:   u64,
   pub ugc:       u64,
   /// いずれかの集約がページ上限で打ち切られたか
   pub truncated: bool,
}

impl LimitedCount {
   pub fn total(&self) -> u64 {
      self.regular + self.ugc
   }
}

/// 限定品カウントの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitedsOutcome {
   Counted(LimitedCount),
   /// インベントリが非公開
   Private,
}

/// 限定品カウントの集約設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedsSettings {
   /// コレクティブル一覧のページ上限
   pub max_pages:          usize,
   /// カテゴリごとのページ上限
   pub category_max_pages: usize,
   pub profile:            AssetTypeProfile,
}

impl Default for LimitedsSettings {
   fn default() -> Self {
      Self {
         max_pages:          50,
         category_max_pages: 10,
         profile:            AssetTypeProfile::default(),
      }
   }
}

/// 限定品カウントユースケース実装
pub struct LimitedsUseCaseImpl {
   inventory_client: Arc<dyn RobloxInventoryClient>,
   settings:         LimitedsSettings,
}

impl LimitedsUseCaseImpl {
   pub fn new(inventory_client: Arc<dyn RobloxInventoryClient>, settings: LimitedsSettings) -> Self {
      Self {
         inventory_client,
         settings,
      }
   }

   /// ユーザーの限定品を数える
   ///
   /// コレクティブル取得の権限エラーは `Private`、それ以外の失敗は `Err`。
   /// カテゴリ側の失敗は結果に影響するだけでエラーにはならない。
   #[tracing::instrument(skip_all, fields(%user_id))]
   pub async fn count_limiteds(&self, user_id: u64) -> Result<LimitedsOutcome, UpstreamError> {
      let client = self.inventory_client.as_ref();

      let collectibles = match collect_pages("collectibles", self.settings.max_pages, |cursor| {
         client.fetch_collectibles_page(user_id, cursor)
      })
      .await
      {
         Ok(collected) => collected,
         Err(e) if e.is_unauthorized() => return Ok(LimitedsOutcome::Private),
         Err(e) => return Err(e),
      };

      let mut seen: HashSet<u64> = collectibles
         .items
         .iter()
         .filter_map(|item| item.asset_id)
         .collect();
      let regular = collectibles.items.len() as u64;
      let mut truncated = collectibles.truncated;
      let mut ugc = 0;

      for &asset_type in self.settings.profile.asset_types() {
         let category = collect_pages("inventory", self.settings.category_max_pages, |cursor| {
            client.fetch_inventory_page(user_id, asset_type, cursor)
         })
         .await;

         match category {
            Ok(collected) => {
               truncated |= collected.truncated;
               for item in collected.items.iter().filter(|item| is_limited(item)) {
                  if let Some(asset_id) = item.asset_id
                     && seen.insert(asset_id)
                  {
                     ugc += 1;
                  }
               }
            }
            Err(e) if e.is_unauthorized() => {
               tracing::warn!(
                  asset_type,
                  "インベントリが非公開のため以降のカテゴリを打ち切ります"
               );
               break;
            }
            Err(e) => {
               tracing::warn!(
                  error.category = "external_service",
                  error.kind = "roblox_inventory",
                  asset_type,
                  "カテゴリの取得に失敗したため読み飛ばします: {}",
                  e
               );
            }
         }
      }

      tracing::debug!(regular, ugc, truncated, "限定品を集計しました");

      Ok(LimitedsOutcome::Counted(LimitedCount {
         regular,
         ugc,
         truncated,
      }))
   }
}
