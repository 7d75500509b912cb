//! # ミドルウェア
//!
//! - `cache_control`: 全レスポンスへの `Cache-Control: no-store` 付与

pub mod cache_control;

pub use cache_control::no_cache;
