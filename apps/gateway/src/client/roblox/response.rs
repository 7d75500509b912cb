//! Roblox API レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use super::{error::UpstreamError, types::UpstreamErrorBody};

/// Roblox API レスポンスの共通ハンドリング
///
/// 成功時はボディを `T` にデシリアライズし、
/// エラー時はステータスとボディから [`UpstreamError`] に分類する。
pub(super) async fn handle_response<T: DeserializeOwned>(
   response: reqwest::Response,
) -> Result<T, UpstreamError> {
   let status = response.status();

   if status.is_success() {
      let body = response.json::<T>().await?;
      return Ok(body);
   }

   let body = response.text().await.unwrap_or_default();
   Err(classify_failure(status, body))
}

/// 非 2xx レスポンスを分類する
///
/// 403 に加え、ステータスに関係なくエラー本文に "not authorized" を含むものも
/// 権限なしとみなす（非公開インベントリで 400 を返すエンドポイントがある）。
pub(super) fn classify_failure(status: reqwest::StatusCode, body: String) -> UpstreamError {
   if status == reqwest::StatusCode::FORBIDDEN || mentions_not_authorized(&body) {
      return UpstreamError::Unauthorized;
   }

   if status == reqwest::StatusCode::NOT_FOUND {
      return UpstreamError::NotFound;
   }

   UpstreamError::Status {
      status: status.as_u16(),
      body,
   }
}

/// エラーボディの `errors[].message` に "not authorized" が含まれるか（大文字小文字を区別しない）
fn mentions_not_authorized(body: &str) -> bool {
   serde_json::from_str::<UpstreamErrorBody>(body)
      .map(|parsed| {
         parsed
            .errors
            .iter()
            .any(|e| e.message.to_lowercase().contains("not authorized"))
      })
      .unwrap_or(false)
}

/// ベース URL にカーソルを付与する
///
/// ベース URL は必ず固定クエリ（`?limit=...`）を含むため `&` で連結する。
/// カーソルは不透明な値なので URL エンコードだけ行い、中身は解釈しない。
pub(super) fn paged_url(base_url: &str, cursor: Option<&str>) -> String {
   match cursor {
      Some(cursor) => format!("{base_url}&cursor={}", urlencoding::encode(cursor)),
      None => base_url.to_string(),
   }
}

#[cfg(test)]
mod tests {
   use rstest::rstest;
   use serde::Deserialize;

   use super::*;

   #[derive(Debug, Deserialize, PartialEq)]
   struct TestData {
      value: String,
   }

   /// テスト用の HTTP レスポンスを構築する
   fn make_response(status: u16, body: &str) -> reqwest::Response {
      let http_resp = http::Response::builder()
         .status(status)
         .header("content-type", "application/json")
         .body(body.to_string())
         .unwrap();
      reqwest::Response::from(http_resp)
   }

   #[tokio::test]
   async fn test_成功レスポンスをデシリアライズする() {
      let response = make_response(200, r#"{"value": "hello"}"#);

      let result: Result<TestData, _> = handle_response(response).await;

      assert_eq!(
         result.unwrap(),
         TestData {
            value: "hello".to_string(),
         }
      );
   }

   #[tokio::test]
   async fn test_403でunauthorizedを返す() {
      let response = make_response(403, "");

      let result: Result<TestData, _> = handle_response(response).await;

      assert_eq!(result, Err(UpstreamError::Unauthorized));
   }

   #[tokio::test]
   async fn test_エラー本文のnot_authorizedでunauthorizedを返す() {
      let response = make_response(
         400,
         r#"{"errors": [{"code": 1, "message": "User is NOT AUTHORIZED to view this inventory."}]}"#,
      );

      let result: Result<TestData, _> = handle_response(response).await;

      assert_eq!(result, Err(UpstreamError::Unauthorized));
   }

   #[tokio::test]
   async fn test_404でnot_foundを返す() {
      let response = make_response(404, r#"{"errors": [{"message": "User not found"}]}"#);

      let result: Result<TestData, _> = handle_response(response).await;

      assert_eq!(result, Err(UpstreamError::NotFound));
   }

   #[tokio::test]
   async fn test_500でstatusエラーを返す() {
      let response = make_response(500, "server error");

      let result: Result<TestData, _> = handle_response(response).await;

      assert_eq!(
         result,
         Err(UpstreamError::Status {
            status: 500,
            body:   "server error".to_string(),
         })
      );
   }

   #[tokio::test]
   async fn test_成功だが不正なjsonでdecodeエラーを返す() {
      let response = make_response(200, "not json");

      let result: Result<TestData, _> = handle_response(response).await;

      assert!(matches!(result, Err(UpstreamError::Decode(_))));
   }

   #[rstest]
   #[case(r#"{"errors": [{"message": "You are not authorized"}]}"#, true)]
   #[case(r#"{"errors": [{"message": "Too many requests"}]}"#, false)]
   #[case(r#"{"errors": []}"#, false)]
   #[case("plain text not authorized", false)]
   #[case("", false)]
   fn test_not_authorized判定(#[case] body: &str, #[case] expected: bool) {
      assert_eq!(mentions_not_authorized(body), expected);
   }

   #[test]
   fn test_paged_url_カーソルなしはベースurlのまま() {
      assert_eq!(
         paged_url("https://badges.example/v1/users/1/badges?limit=100", None),
         "https://badges.example/v1/users/1/badges?limit=100"
      );
   }

   #[test]
   fn test_paged_url_カーソルをエンコードして連結する() {
      assert_eq!(
         paged_url("https://x.example/items?limit=100", Some("abc+/=")),
         "https://x.example/items?limit=100&cursor=abc%2B%2F%3D"
      );
   }
}
