//! # OpenAPI 仕様定義
//!
//! utoipa を使用してゲートウェイの OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{badges, health, limiteds, place, presence, user, visits};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Roblox Proxy API",
      version = "0.1.0",
      description = "Roblox 公開 API を集約して CORS なしで利用できる形に整えるゲートウェイ"
   ),
   paths(
      // health
      health::root,
      health::health_check,
      // users
      user::get_user,
      // inventory
      badges::get_badge_count,
      limiteds::get_limiteds,
      // games
      visits::get_visits,
      // presence
      presence::get_now_playing,
      presence::get_can_join,
      presence::get_join_links,
      // places
      place::get_place,
   ),
   components(schemas(
      rbxproxy_shared::ErrorResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "users", description = "ユーザー情報"),
      (name = "inventory", description = "バッジ・限定品の集計"),
      (name = "games", description = "ゲーム訪問数"),
      (name = "presence", description = "プレゼンス・参加リンク"),
      (name = "places", description = "プレイス参照"),
   )
)]
pub struct ApiDoc;
