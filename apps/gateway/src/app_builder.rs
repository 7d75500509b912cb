//! # ゲートウェイアプリケーション構築
//!
//! DI（クライアント・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! 統合テストからスタブクライアントで同じルーターを組み立てられるよう、
//! ライブラリ側に置いている。

use std::sync::Arc;

use axum::{Router, http::Method, middleware::from_fn, routing::get};
use rbxproxy_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   cors::{Any, CorsLayer},
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   client::RobloxClient,
   config::AggregationSettings,
   handler::{
      BadgeState,
      LimitedsState,
      PlaceState,
      PresenceState,
      UserState,
      VisitsState,
      get_badge_count,
      get_can_join,
      get_join_links,
      get_limiteds,
      get_now_playing,
      get_place,
      get_user,
      get_visits,
      health_check,
      root,
   },
   middleware::no_cache,
   usecase::{
      BadgeUseCaseImpl,
      LimitedsUseCaseImpl,
      PlaceUseCaseImpl,
      PresenceUseCaseImpl,
      UserUseCaseImpl,
      VisitsUseCaseImpl,
   },
};

/// DI コンテナの構築とルーター定義を行う
///
/// クライアントは具象型で受け取り、各ユースケースが必要とする
/// サブトレイトのトレイトオブジェクトへ coerce して注入する。
pub fn build_app<C>(client: Arc<C>, settings: &AggregationSettings) -> Router
where
   C: RobloxClient + 'static,
{
   let user_state = Arc::new(UserState {
      usecase: UserUseCaseImpl::new(client.clone()),
   });

   let badge_state = Arc::new(BadgeState {
      usecase: BadgeUseCaseImpl::new(client.clone(), settings.max_pages),
   });

   let limiteds_state = Arc::new(LimitedsState {
      usecase: LimitedsUseCaseImpl::new(client.clone(), settings.limiteds()),
   });

   // 訪問数はゲーム一覧とグループのロール一覧の両方が必要
   let visits_state = Arc::new(VisitsState {
      usecase: VisitsUseCaseImpl::new(client.clone(), client.clone(), settings.visits_max_pages),
   });

   let presence_state = Arc::new(PresenceState {
      usecase: PresenceUseCaseImpl::new(client.clone(), client.clone()),
   });

   let place_state = Arc::new(PlaceState {
      usecase: PlaceUseCaseImpl::new(client),
   });

   let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods([Method::GET, Method::OPTIONS]);

   // レイヤー順序: 下に書いたものが外側
   // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
   // 2. TraceLayer: スパンに request_id を含める
   // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
   // 4. CorsLayer: プリフライトはここで応答する
   // 5. no_cache: ハンドラのレスポンスに Cache-Control: no-store を付与
   Router::new()
      .route("/", get(root))
      .route("/health", get(health_check))
      .route("/users/{user_id}", get(get_user))
      .with_state(user_state)
      .route("/badges/{user_id}", get(get_badge_count))
      .with_state(badge_state)
      .route("/limiteds/{user_id}", get(get_limiteds))
      .with_state(limiteds_state)
      .route("/visits/{user_id}", get(get_visits))
      .with_state(visits_state)
      // プレゼンス API
      .route("/playing/{user_id}", get(get_now_playing))
      .route("/canjoin/{user_id}", get(get_can_join))
      .route("/joinlinks/{user_id}", get(get_join_links))
      .with_state(presence_state)
      .route("/place/{place_id}", get(get_place))
      .with_state(place_state)
      .layer(from_fn(no_cache))
      .layer(cors)
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
