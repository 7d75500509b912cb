//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイサーバーの設定を読み込む。
//! 必須の変数はなく、すべてデフォルト値を持つ。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|-----------|------|
//! | `GATEWAY_HOST` | `0.0.0.0` | バインドアドレス |
//! | `PORT` | `3000` | ポート番号 |
//! | `UPSTREAM_TIMEOUT_SECS` | `10` | 上流呼び出しのタイムアウト（秒） |
//! | `CATEGORY_TIMEOUT_SECS` | `5` | UGC カテゴリ取得のタイムアウト（秒） |
//! | `MAX_PAGES` | `50` | コレクティブル / バッジのページ上限 |
//! | `CATEGORY_MAX_PAGES` | `10` | UGC カテゴリごとのページ上限 |
//! | `VISITS_MAX_PAGES` | `20` | ゲーム一覧のページ上限 |
//! | `LIMITED_ASSET_TYPES` | `extended` | アセット種別プロファイル |
//! | `ROBLOX_*_URL` | 公開ホスト | 上流 API のベース URL |

use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use crate::{
   client::{RobloxEndpoints, UpstreamTimeouts},
   usecase::{AssetTypeProfile, InvalidAssetTypeProfile, LimitedsSettings},
};

/// 設定読み込みのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
   /// 値をパースできない
   #[error("{name} の値が不正です: '{value}'")]
   Invalid { name: &'static str, value: String },

   /// アセット種別プロファイルが不正
   #[error(transparent)]
   AssetTypeProfile(#[from] InvalidAssetTypeProfile),
}

/// 集約の上限設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSettings {
   /// コレクティブル / バッジのページ上限
   pub max_pages:          usize,
   /// UGC カテゴリごとのページ上限
   pub category_max_pages: usize,
   /// ゲーム一覧のページ上限
   pub visits_max_pages:   usize,
   pub asset_type_profile: AssetTypeProfile,
}

impl Default for AggregationSettings {
   fn default() -> Self {
      Self {
         max_pages:          50,
         category_max_pages: 10,
         visits_max_pages:   20,
         asset_type_profile: AssetTypeProfile::default(),
      }
   }
}

impl AggregationSettings {
   pub fn limiteds(&self) -> LimitedsSettings {
      LimitedsSettings {
         max_pages:          self.max_pages,
         category_max_pages: self.category_max_pages,
         profile:            self.asset_type_profile.clone(),
      }
   }
}

/// ゲートウェイサーバーの設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
   /// バインドアドレス
   pub host:        String,
   /// ポート番号
   pub port:        u16,
   pub endpoints:   RobloxEndpoints,
   pub timeouts:    UpstreamTimeouts,
   pub aggregation: AggregationSettings,
}

impl GatewayConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストでプロセスの環境変数に触れずに検証するための入口。
   /// 空文字は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

      let defaults = RobloxEndpoints::default();
      let endpoints = RobloxEndpoints {
         users:     get("ROBLOX_USERS_URL").unwrap_or(defaults.users),
         badges:    get("ROBLOX_BADGES_URL").unwrap_or(defaults.badges),
         inventory: get("ROBLOX_INVENTORY_URL").unwrap_or(defaults.inventory),
         games:     get("ROBLOX_GAMES_URL").unwrap_or(defaults.games),
         groups:    get("ROBLOX_GROUPS_URL").unwrap_or(defaults.groups),
         presence:  get("ROBLOX_PRESENCE_URL").unwrap_or(defaults.presence),
      };

      let timeouts = UpstreamTimeouts {
         default:  Duration::from_secs(parse_or(&get, "UPSTREAM_TIMEOUT_SECS", 10)?),
         category: Duration::from_secs(parse_or(&get, "CATEGORY_TIMEOUT_SECS", 5)?),
      };

      let aggregation = AggregationSettings {
         max_pages:          parse_or(&get, "MAX_PAGES", 50)?,
         category_max_pages: parse_or(&get, "CATEGORY_MAX_PAGES", 10)?,
         visits_max_pages:   parse_or(&get, "VISITS_MAX_PAGES", 20)?,
         asset_type_profile: match get("LIMITED_ASSET_TYPES") {
            Some(value) => value.parse()?,
            None => AssetTypeProfile::default(),
         },
      };

      Ok(Self {
         host: get("GATEWAY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
         port: parse_or(&get, "PORT", 3000)?,
         endpoints,
         timeouts,
         aggregation,
      })
   }
}

/// 値があればパースし、なければデフォルト値を返す
fn parse_or<T: FromStr>(
   get: &impl Fn(&str) -> Option<String>,
   name: &'static str,
   default: T,
) -> Result<T, ConfigError> {
   match get(name) {
      Some(value) => value
         .trim()
         .parse()
         .map_err(|_| ConfigError::Invalid { name, value }),
      None => Ok(default),
   }
}

#[cfg(test)]
mod tests {
   // テスト間で環境変数の競合を避けるため、from_lookup で検証する

   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn config_from(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      GatewayConfig::from_lookup(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_未設定のときデフォルト値になる() {
      let config = config_from(&[]).unwrap();

      assert_eq!(config.host, "0.0.0.0");
      assert_eq!(config.port, 3000);
      assert_eq!(config.endpoints, RobloxEndpoints::default());
      assert_eq!(config.timeouts, UpstreamTimeouts::default());
      assert_eq!(config.aggregation, AggregationSettings::default());
   }

   #[test]
   fn test_環境変数で上書きできる() {
      let config = config_from(&[
         ("GATEWAY_HOST", "127.0.0.1"),
         ("PORT", "8080"),
         ("UPSTREAM_TIMEOUT_SECS", "3"),
         ("MAX_PAGES", "5"),
         ("LIMITED_ASSET_TYPES", "classic"),
         ("ROBLOX_GAMES_URL", "http://localhost:9000/"),
      ])
      .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.port, 8080);
      assert_eq!(config.timeouts.default, Duration::from_secs(3));
      assert_eq!(config.timeouts.category, Duration::from_secs(5));
      assert_eq!(config.aggregation.max_pages, 5);
      assert_eq!(
         config.aggregation.asset_type_profile,
         AssetTypeProfile::Classic
      );
      assert_eq!(config.endpoints.games, "http://localhost:9000/");
   }

   #[test]
   fn test_空文字は未設定として扱う() {
      let config = config_from(&[("PORT", ""), ("LIMITED_ASSET_TYPES", " ")]).unwrap();

      assert_eq!(config.port, 3000);
      assert_eq!(
         config.aggregation.asset_type_profile,
         AssetTypeProfile::Extended
      );
   }

   #[test]
   fn test_数値でないポートはエラー() {
      let result = config_from(&[("PORT", "http")]);

      assert_eq!(
         result.unwrap_err(),
         ConfigError::Invalid {
            name:  "PORT",
            value: "http".to_string(),
         }
      );
   }

   #[test]
   fn test_不正なアセット種別プロファイルはエラー() {
      let result = config_from(&[("LIMITED_ASSET_TYPES", "hats")]);

      assert!(matches!(
         result.unwrap_err(),
         ConfigError::AssetTypeProfile(_)
      ));
   }

   #[test]
   fn test_limitedsの設定に変換する() {
      let settings = AggregationSettings {
         max_pages:          3,
         category_max_pages: 2,
         visits_max_pages:   1,
         asset_type_profile: AssetTypeProfile::Custom(vec![8]),
      }
      .limiteds();

      assert_eq!(
         settings,
         LimitedsSettings {
            max_pages:          3,
            category_max_pages: 2,
            profile:            AssetTypeProfile::Custom(vec![8]),
         }
      );
   }
}
