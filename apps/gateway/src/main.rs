//! # Roblox プロキシゲートウェイ サーバー
//!
//! ブラウザから直接呼べない Roblox 公開 API を代理で呼び出し、
//! 集計済みの JSON を返す。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Client     │────▶│   Gateway    │────▶│ *.roblox.com     │
//! │  (Browser)   │     │  port: 3000  │     │ users / badges / │
//! └──────────────┘     └──────────────┘     │ inventory / ...  │
//!                                           └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! すべて任意。一覧は [`rbxproxy_gateway::config`] を参照。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p rbxproxy-gateway
//!
//! PORT=8080 LIMITED_ASSET_TYPES=classic cargo run -p rbxproxy-gateway --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use rbxproxy_gateway::{app_builder::build_app, client::RobloxClientImpl, config::GatewayConfig};
use rbxproxy_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動（Ctrl+C / SIGTERM で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("gateway");
   rbxproxy_shared::observability::init_tracing(tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = "gateway").entered();

   let config = GatewayConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "ゲートウェイを起動します: {}:{}",
      config.host,
      config.port
   );

   let client = RobloxClientImpl::new(config.endpoints.clone(), config.timeouts)
      .context("HTTP クライアントの初期化に失敗しました")?;

   let app = build_app(Arc::new(client), &config.aggregation);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("ゲートウェイが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("ゲートウェイを停止しました");
   Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!("Ctrl+C ハンドラの登録に失敗しました: {}", e);
         std::future::pending::<()>().await;
      }
      tracing::info!("Ctrl+C を受信しました。停止します");
   };

   #[cfg(unix)]
   let terminate = async {
      use tokio::signal::unix::{SignalKind, signal};

      match signal(SignalKind::terminate()) {
         Ok(mut sigterm) => {
            sigterm.recv().await;
            tracing::info!("SIGTERM を受信しました。停止します");
         }
         Err(e) => {
            tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      () = ctrl_c => {},
      () = terminate => {},
   }
}
