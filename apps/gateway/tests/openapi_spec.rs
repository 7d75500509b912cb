//! # OpenAPI 仕様テスト
//!
//! utoipa から生成される OpenAPI 仕様に全ルートとスキーマが揃っていることを検証する。

use rbxproxy_gateway::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi仕様がパニックせず生成される() {
   let doc = ApiDoc::openapi();
   // パニックしなければ成功
   let _yaml = doc.to_yaml().unwrap();
}

#[test]
fn test_全パスが含まれている() {
   let doc = ApiDoc::openapi();
   let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

   assert_eq!(paths.len(), 10, "パス数が 10 であること: {paths:?}");

   assert!(paths.contains(&"/"));
   assert!(paths.contains(&"/health"));
   assert!(paths.contains(&"/users/{user_id}"));
   assert!(paths.contains(&"/badges/{user_id}"));
   assert!(paths.contains(&"/limiteds/{user_id}"));
   assert!(paths.contains(&"/visits/{user_id}"));
   assert!(paths.contains(&"/playing/{user_id}"));
   assert!(paths.contains(&"/canjoin/{user_id}"));
   assert!(paths.contains(&"/joinlinks/{user_id}"));
   assert!(paths.contains(&"/place/{place_id}"));
}

#[test]
fn test_全タグが含まれている() {
   let doc = ApiDoc::openapi();
   let tags: Vec<&str> = doc
      .tags
      .as_ref()
      .expect("tags が存在すること")
      .iter()
      .map(|t| t.name.as_str())
      .collect();

   for tag in ["health", "users", "inventory", "games", "presence", "places"] {
      assert!(tags.contains(&tag), "タグ {tag} が存在すること");
   }
}

#[test]
fn test_エラーレスポンスのスキーマが登録されている() {
   let doc = ApiDoc::openapi();
   let components = doc.components.as_ref().expect("components が存在すること");

   assert!(components.schemas.contains_key("ErrorResponse"));
}

#[test]
fn test_visitsにinclude_groupsクエリが定義されている() {
   let doc = ApiDoc::openapi();
   let json = serde_json::to_value(&doc).unwrap();

   let params = json["paths"]["/visits/{user_id}"]["get"]["parameters"]
      .as_array()
      .expect("parameters が存在すること");
   let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();

   assert!(names.contains(&"user_id"));
   assert!(names.contains(&"includeGroups"));
}
