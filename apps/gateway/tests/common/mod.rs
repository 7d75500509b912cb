//! # 統合テスト共通のスタブクライアント
//!
//! 全サブトレイトを実装し、フィールドで上流の応答を差し替える。
//! ページング応答はカーソル `"1"`, `"2"`, ... をページ番号として扱う。

#![allow(dead_code)]

use std::{
   collections::HashMap,
   sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{Router, body::Body};
use http::{Request, Response};
use rbxproxy_gateway::{
   app_builder::build_app,
   client::{
      BadgeDto,
      CollectibleDto,
      GameDto,
      GroupMembershipDto,
      InventoryItemDto,
      Page,
      PlaceDetailDto,
      PresenceDto,
      RobloxGameClient,
      RobloxGroupClient,
      RobloxInventoryClient,
      RobloxPresenceClient,
      RobloxUserClient,
      UniverseGameDto,
      UpstreamError,
      UserDto,
   },
   config::AggregationSettings,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

pub type PageResult<T> = Result<Page<T>, UpstreamError>;

#[derive(Default)]
pub struct StubRobloxClient {
   pub user:         Option<Result<UserDto, UpstreamError>>,
   pub badges:       Vec<PageResult<BadgeDto>>,
   pub collectibles: Vec<PageResult<CollectibleDto>>,
   pub inventory:    HashMap<u32, Vec<PageResult<InventoryItemDto>>>,
   pub user_games:   Vec<PageResult<GameDto>>,
   pub group_games:  HashMap<u64, Vec<PageResult<GameDto>>>,
   pub memberships:  Option<Result<Vec<GroupMembershipDto>, UpstreamError>>,
   pub games:        HashMap<u64, UniverseGameDto>,
   pub places:       HashMap<u64, PlaceDetailDto>,
   pub place_error:  Option<UpstreamError>,
   pub presence:     Option<Result<Option<PresenceDto>, UpstreamError>>,
   /// 呼び出されたメソッドの記録
   pub calls:        Mutex<Vec<String>>,
}

impl StubRobloxClient {
   pub fn calls(&self) -> Vec<String> {
      self.calls.lock().unwrap().clone()
   }

   fn record(&self, call: String) {
      self.calls.lock().unwrap().push(call);
   }
}

/// JSON から上流 DTO を作る
pub fn dto<T: DeserializeOwned>(value: Value) -> T {
   serde_json::from_value(value).unwrap()
}

/// 要素のチャンク列を、カーソルで連結されたページ列にする
pub fn pages<T>(chunks: Vec<Vec<T>>) -> Vec<PageResult<T>> {
   let last = chunks.len().saturating_sub(1);
   chunks
      .into_iter()
      .enumerate()
      .map(|(i, items)| {
         let next = (i < last).then(|| (i + 1).to_string());
         Ok(Page::new(items, next.as_deref()))
      })
      .collect()
}

fn page_at<T: Clone>(pages: &[PageResult<T>], cursor: Option<String>) -> PageResult<T> {
   let index = cursor.map_or(0, |c| c.parse::<usize>().unwrap());
   pages
      .get(index)
      .cloned()
      .unwrap_or_else(|| Ok(Page::new(Vec::new(), None)))
}

#[async_trait]
impl RobloxUserClient for StubRobloxClient {
   async fn get_user(&self, user_id: u64) -> Result<UserDto, UpstreamError> {
      self.record(format!("get_user:{user_id}"));
      self.user.clone().unwrap_or(Err(UpstreamError::NotFound))
   }
}

#[async_trait]
impl RobloxInventoryClient for StubRobloxClient {
   async fn fetch_badges_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<BadgeDto>, UpstreamError> {
      self.record(format!("badges:{user_id}"));
      page_at(&self.badges, cursor)
   }

   async fn fetch_collectibles_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<CollectibleDto>, UpstreamError> {
      self.record(format!("collectibles:{user_id}"));
      page_at(&self.collectibles, cursor)
   }

   async fn fetch_inventory_page(
      &self,
      user_id: u64,
      asset_type: u32,
      cursor: Option<String>,
   ) -> Result<Page<InventoryItemDto>, UpstreamError> {
      self.record(format!("inventory:{user_id}:{asset_type}"));
      match self.inventory.get(&asset_type) {
         Some(category) => page_at(category, cursor),
         None => Ok(Page::new(Vec::new(), None)),
      }
   }
}

#[async_trait]
impl RobloxGameClient for StubRobloxClient {
   async fn fetch_user_games_page(
      &self,
      user_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<GameDto>, UpstreamError> {
      self.record(format!("user_games:{user_id}"));
      page_at(&self.user_games, cursor)
   }

   async fn fetch_group_games_page(
      &self,
      group_id: u64,
      cursor: Option<String>,
   ) -> Result<Page<GameDto>, UpstreamError> {
      self.record(format!("group_games:{group_id}"));
      match self.group_games.get(&group_id) {
         Some(group) => page_at(group, cursor),
         None => Ok(Page::new(Vec::new(), None)),
      }
   }

   async fn get_game_by_universe(
      &self,
      universe_id: u64,
   ) -> Result<Option<UniverseGameDto>, UpstreamError> {
      self.record(format!("game:{universe_id}"));
      Ok(self.games.get(&universe_id).cloned())
   }

   async fn get_place_details(
      &self,
      place_id: u64,
   ) -> Result<Option<PlaceDetailDto>, UpstreamError> {
      self.record(format!("place:{place_id}"));
      if let Some(e) = &self.place_error {
         return Err(e.clone());
      }
      Ok(self.places.get(&place_id).cloned())
   }
}

#[async_trait]
impl RobloxGroupClient for StubRobloxClient {
   async fn list_group_memberships(
      &self,
      user_id: u64,
   ) -> Result<Vec<GroupMembershipDto>, UpstreamError> {
      self.record(format!("memberships:{user_id}"));
      self.memberships.clone().unwrap_or(Ok(Vec::new()))
   }
}

#[async_trait]
impl RobloxPresenceClient for StubRobloxClient {
   async fn get_presence(&self, user_id: u64) -> Result<Option<PresenceDto>, UpstreamError> {
      self.record(format!("presence:{user_id}"));
      self.presence.clone().unwrap_or(Ok(None))
   }
}

/// スタブクライアントでルーターを構築する
pub fn app(client: Arc<StubRobloxClient>) -> Router {
   build_app(client, &AggregationSettings::default())
}

/// GET リクエストを送る
pub async fn get(app: Router, uri: &str) -> Response<Body> {
   app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
      .await
      .unwrap()
}

/// レスポンスボディを JSON として読む
pub async fn body_json(response: Response<Body>) -> Value {
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   serde_json::from_slice(&bytes).unwrap()
}
