//! # カーソルページングの集約
//!
//! 上流のカーソルページング一覧を、カーソルが尽きるかページ上限に
//! 達するまで 1 ページずつ取得して連結する。
//!
//! - 1 反復で送るリクエストはちょうど 1 回
//! - 上限到達で打ち切った場合は `truncated = true` を返し、warn ログを出す
//! - 途中の失敗は集約全体の失敗になる（部分結果は返さない）
//! - リトライはしない

use crate::client::{Page, UpstreamError};

/// 集約結果
#[derive(Debug, Clone, PartialEq)]
pub struct Collected<T> {
   /// ページ順に連結した要素
   pub items:     Vec<T>,
   /// 取得したページ数
   pub pages:     usize,
   /// ページ上限で打ち切ったか
   pub truncated: bool,
}

/// カーソルページングの一覧をすべて取得して連結する
///
/// `fetch` には前ページの次カーソル（初回は `None`）が渡される。
/// `max_pages` が 0 の場合は 1 とみなす。
///
/// # 引数
///
/// - `resource`: ログ用のリソース名
/// - `max_pages`: 取得するページ数の上限
/// - `fetch`: 1 ページを取得する関数
pub async fn collect_pages<T, F, Fut>(
   resource: &str,
   max_pages: usize,
   mut fetch: F,
) -> Result<Collected<T>, UpstreamError>
where
   F: FnMut(Option<String>) -> Fut,
   Fut: Future<Output = Result<Page<T>, UpstreamError>>,
{
   let ceiling = max_pages.max(1);
   let mut items = Vec::new();
   let mut cursor: Option<String> = None;
   let mut pages = 0;

   loop {
      let page = fetch(cursor.take()).await?;
      pages += 1;

      let (mut data, next) = page.into_parts();
      items.append(&mut data);

      match next {
         None => {
            return Ok(Collected {
               items,
               pages,
               truncated: false,
            });
         }
         Some(_) if pages >= ceiling => {
            tracing::warn!(
               resource,
               pages,
               items = items.len(),
               "ページ上限に達したため集約を打ち切りました"
            );
            return Ok(Collected {
               items,
               pages,
               truncated: true,
            });
         }
         Some(next) => cursor = Some(next),
      }
   }
}

#[cfg(test)]
mod tests {
   use std::sync::{Arc, Mutex};

   use pretty_assertions::assert_eq;

   use super::*;

   /// 事前に用意したページを順に返し、受け取ったカーソルを記録するスタブ
   struct StubPager {
      pages:   Mutex<Vec<Result<Page<u32>, UpstreamError>>>,
      cursors: Arc<Mutex<Vec<Option<String>>>>,
   }

   impl StubPager {
      fn new(mut pages: Vec<Result<Page<u32>, UpstreamError>>) -> Self {
         pages.reverse();
         Self {
            pages:   Mutex::new(pages),
            cursors: Arc::new(Mutex::new(Vec::new())),
         }
      }

      async fn fetch(&self, cursor: Option<String>) -> Result<Page<u32>, UpstreamError> {
         self.cursors.lock().unwrap().push(cursor);
         self.pages
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(Page::new(vec![], None)))
      }

      fn recorded_cursors(&self) -> Vec<Option<String>> {
         self.cursors.lock().unwrap().clone()
      }
   }

   /// 常に次カーソルを返し続ける無限ページ
   fn endless(cursor: Option<String>) -> std::future::Ready<Result<Page<u32>, UpstreamError>> {
      let n = cursor.map_or(0, |c| c.parse::<u32>().unwrap());
      std::future::ready(Ok(Page::new(vec![n], Some(&(n + 1).to_string()))))
   }

   #[tokio::test]
   async fn test_collect_pagesでページ順に連結する() {
      let pager = StubPager::new(vec![
         Ok(Page::new(vec![1, 2], Some("c1"))),
         Ok(Page::new(vec![3], Some("c2"))),
         Ok(Page::new(vec![4, 5], None)),
      ]);

      let collected = collect_pages("test", 50, |cursor| pager.fetch(cursor))
         .await
         .unwrap();

      assert_eq!(
         collected,
         Collected {
            items:     vec![1, 2, 3, 4, 5],
            pages:     3,
            truncated: false,
         }
      );
      assert_eq!(
         pager.recorded_cursors(),
         vec![None, Some("c1".to_string()), Some("c2".to_string())]
      );
   }

   #[tokio::test]
   async fn test_collect_pagesで空の単一ページは空の結果になる() {
      let pager = StubPager::new(vec![Ok(Page::new(vec![], None))]);

      let collected = collect_pages("test", 50, |cursor| pager.fetch(cursor))
         .await
         .unwrap();

      assert!(collected.items.is_empty());
      assert_eq!(collected.pages, 1);
      assert!(!collected.truncated);
   }

   #[tokio::test]
   async fn test_collect_pagesで上限到達時は打ち切りを示す() {
      let collected = collect_pages("test", 3, endless).await.unwrap();

      assert_eq!(collected.items, vec![0, 1, 2]);
      assert_eq!(collected.pages, 3);
      assert!(collected.truncated);
   }

   #[tokio::test]
   async fn test_collect_pagesで上限0は1ページとして扱う() {
      let collected = collect_pages("test", 0, endless).await.unwrap();

      assert_eq!(collected.items, vec![0]);
      assert_eq!(collected.pages, 1);
      assert!(collected.truncated);
   }

   #[tokio::test]
   async fn test_collect_pagesで上限ちょうどで最終ページなら打ち切りではない() {
      let pager = StubPager::new(vec![
         Ok(Page::new(vec![1], Some("c1"))),
         Ok(Page::new(vec![2], None)),
      ]);

      let collected = collect_pages("test", 2, |cursor| pager.fetch(cursor))
         .await
         .unwrap();

      assert_eq!(collected.items, vec![1, 2]);
      assert!(!collected.truncated);
   }

   #[tokio::test]
   async fn test_collect_pagesで途中の失敗は全体の失敗になる() {
      let pager = StubPager::new(vec![
         Ok(Page::new(vec![1, 2], Some("c1"))),
         Err(UpstreamError::Status {
            status: 500,
            body:   "boom".to_string(),
         }),
         Ok(Page::new(vec![3], None)),
      ]);

      let result = collect_pages("test", 50, |cursor| pager.fetch(cursor)).await;

      assert_eq!(
         result,
         Err(UpstreamError::Status {
            status: 500,
            body:   "boom".to_string(),
         })
      );
      assert_eq!(pager.recorded_cursors().len(), 2);
   }
}
