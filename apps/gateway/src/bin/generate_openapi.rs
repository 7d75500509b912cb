//! # OpenAPI YAML 生成ツール
//!
//! ゲートウェイの Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//! 生成後、どこからも参照されないコンポーネントスキーマを除去する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p rbxproxy-gateway > openapi/openapi.yaml
//! ```

use std::collections::HashSet;

use rbxproxy_gateway::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
   let mut openapi = ApiDoc::openapi();
   remove_unused_schemas(&mut openapi)?;
   let yaml = openapi.to_yaml()?;
   print!("{yaml}");
   Ok(())
}

/// `$ref` で参照されていないコンポーネントスキーマを除去する
///
/// untagged enum のバリアントとして登録された型のうち、
/// 実際のレスポンスから辿れないものが残らないようにする。
fn remove_unused_schemas(openapi: &mut utoipa::openapi::OpenApi) -> anyhow::Result<()> {
   // JSON 形式: "$ref":"#/components/schemas/SchemaName"
   let json = serde_json::to_string(openapi)?;

   let prefix = "#/components/schemas/";
   let used_schemas: HashSet<&str> = json
      .match_indices(prefix)
      .filter_map(|(start, _)| {
         let rest = &json[start + prefix.len()..];
         rest.find('"').map(|end| &rest[..end])
      })
      .collect();

   if let Some(components) = &mut openapi.components {
      components
         .schemas
         .retain(|name, _| used_schemas.contains(name.as_str()));
   }
   Ok(())
}
