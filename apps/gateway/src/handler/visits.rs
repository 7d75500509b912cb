//! # 訪問数 API ハンドラ
//!
//! - `GET /visits/{user_id}` - ユーザーのゲームの訪問数合計
//! - `GET /visits/{user_id}?includeGroups=true` - 所有グループのゲームも合算

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State},
   response::{IntoResponse, Response},
};
use rbxproxy_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::is_false;
use crate::{
   error::{log_and_convert_upstream_error, parse_path_id},
   usecase::{GroupVisits, VisitSummary, VisitsUseCaseImpl},
};

/// 訪問数 API の State
pub struct VisitsState {
   pub usecase: VisitsUseCaseImpl,
}

/// 訪問数クエリパラメータ
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct VisitsQuery {
   /// `true` または `1` で所有グループのゲームも合算する
   pub include_groups: Option<String>,
}

impl VisitsQuery {
   pub fn include_groups(&self) -> bool {
      self
         .include_groups
         .as_deref()
         .map(str::trim)
         .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
   }
}

/// 所有グループごとの訪問数
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupVisitsData {
   pub id:     u64,
   pub name:   Option<String>,
   pub visits: u64,
}

impl From<GroupVisits> for GroupVisitsData {
   fn from(group: GroupVisits) -> Self {
      Self {
         id:     group.id,
         name:   group.name,
         visits: group.visits,
      }
   }
}

/// 訪問数レスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitsData {
   pub total:        u64,
   /// `includeGroups` を指定した場合のみ出力する
   #[serde(skip_serializing_if = "Option::is_none")]
   pub owned_groups: Option<Vec<GroupVisitsData>>,
   #[serde(skip_serializing_if = "is_false")]
   pub truncated:    bool,
}

impl From<VisitSummary> for VisitsData {
   fn from(summary: VisitSummary) -> Self {
      Self {
         total:        summary.total,
         owned_groups: summary
            .owned_groups
            .map(|groups| groups.into_iter().map(GroupVisitsData::from).collect()),
         truncated:    summary.truncated,
      }
   }
}

/// GET /visits/{user_id}
#[utoipa::path(
   get,
   path = "/visits/{user_id}",
   tag = "games",
   params(
      ("user_id" = u64, Path, description = "Roblox ユーザー ID"),
      VisitsQuery
   ),
   responses(
      (status = 200, description = "訪問数合計", body = VisitsData),
      (status = 400, description = "ID が不正", body = ErrorResponse),
      (status = 500, description = "上流 API エラー", body = ErrorResponse)
   )
)]
pub async fn get_visits(
   State(state): State<Arc<VisitsState>>,
   Path(user_id): Path<String>,
   Query(query): Query<VisitsQuery>,
) -> Response {
   let user_id = match parse_path_id(&user_id, "user") {
      Ok(id) => id,
      Err(response) => return response,
   };

   match state
      .usecase
      .sum_visits(user_id, query.include_groups())
      .await
   {
      Ok(summary) => Json(VisitsData::from(summary)).into_response(),
      Err(e) => log_and_convert_upstream_error("訪問数取得", "Failed to fetch visit count.", e),
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use serde_json::json;

   use super::*;

   #[rstest]
   #[case(None, false)]
   #[case(Some("true"), true)]
   #[case(Some("TRUE"), true)]
   #[case(Some("1"), true)]
   #[case(Some("false"), false)]
   #[case(Some("yes"), false)]
   #[case(Some(""), false)]
   fn test_include_groupsの解釈(#[case] raw: Option<&str>, #[case] expected: bool) {
      let query = VisitsQuery {
         include_groups: raw.map(str::to_string),
      };

      assert_eq!(query.include_groups(), expected);
   }

   #[test]
   fn test_グループ未指定ではowned_groupsを出力しない() {
      let data = VisitsData::from(VisitSummary {
         total:        35,
         owned_groups: None,
         truncated:    false,
      });

      assert_eq!(serde_json::to_value(data).unwrap(), json!({ "total": 35 }));
   }

   #[test]
   fn test_グループ指定ではowned_groupsを出力する() {
      let data = VisitsData::from(VisitSummary {
         total:        120,
         owned_groups: Some(vec![GroupVisits {
            id:     7,
            name:   Some("Studio".to_string()),
            visits: 100,
         }]),
         truncated:    false,
      });

      assert_eq!(
         serde_json::to_value(data).unwrap(),
         json!({
            "total": 120,
            "ownedGroups": [{ "id": 7, "name": "Studio", "visits": 100 }]
         })
      );
   }
}
